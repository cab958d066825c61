//! Semantic Analysis support
//!
//! This module holds the state the analysis, code generation and listing
//! passes share during one compiler run:
//! - Scoped symbol table (declarations, locations, reference lines)
//! - Type tags attached to symbols
//! - Listing of the table contents

pub mod listing;
pub mod table;
pub mod types;

use std::fmt;
use std::io;
use std::path::Path;

use crate::config::{ConfigError, SymtabConfig};

pub use listing::Listing;
pub use table::{GLOBAL_SCOPE, Location, NOT_FOUND, Scope, ScopeId, SymbolRecord, SymbolTable};
pub use types::ExpType;

/// Context of a single compiler run.
///
/// Owns the one symbol table of the run together with the configuration it
/// was created from. Passes borrow the table from here.
#[derive(Debug, Clone)]
pub struct Session<T = ExpType> {
    config: SymtabConfig,
    table: SymbolTable<T>,
}

impl<T> Session<T> {
    /// Build a session from `config` as given, without validating it
    pub fn new(config: SymtabConfig) -> Self {
        let table = SymbolTable::with_global_scope(config.global_scope.clone());
        Self { config, table }
    }

    /// Build a session after checking `config`
    pub fn try_new(config: SymtabConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(Self::new(SymtabConfig::load(path)?))
    }

    pub fn config(&self) -> &SymtabConfig {
        &self.config
    }

    pub fn global_scope(&self) -> &str {
        self.table.global_scope()
    }

    pub fn table(&self) -> &SymbolTable<T> {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut SymbolTable<T> {
        &mut self.table
    }

    pub fn into_table(self) -> SymbolTable<T> {
        self.table
    }
}

impl<T: fmt::Display> Session<T> {
    /// Write the listing using the configured layout
    pub fn dump<W: io::Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        self.table.dump_with(sink, &self.config.listing)
    }
}

impl<T> Default for Session<T> {
    fn default() -> Self {
        Self::new(SymtabConfig::load_or_default())
    }
}
