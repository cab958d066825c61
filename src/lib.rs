//! Symtab - scoped symbol table for a small compiler front end
//!
//! Records every declared identifier of a translation unit: the scope it
//! was declared in, its type tag, the memory location assigned by the code
//! generator and every line that references it.

pub mod config;
pub mod sema;

// Re-export commonly used types
pub use config::{ConfigError, ListingConfig, SymtabConfig};
pub use sema::{ExpType, Location, NOT_FOUND, Session, SymbolTable};
