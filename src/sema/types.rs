//! Semantic Types
//!
//! Type tags attached to symbols by the type checker. The symbol table
//! stores them verbatim and only needs to print them.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpType {
    /// Functions without a return value
    Void,
    Integer,
    Boolean,
    /// `int x[]` declarations and array parameters
    IntegerArray,
}

impl ExpType {
    /// Format the type the way it is spelled in source
    pub fn display_name(&self) -> &'static str {
        match self {
            ExpType::Void => "void",
            ExpType::Integer => "int",
            ExpType::Boolean => "bool",
            ExpType::IntegerArray => "int[]",
        }
    }
}

impl fmt::Display for ExpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.display_name())
    }
}
