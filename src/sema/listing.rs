//! Symbol table listing
//!
//! Renders every scope and record for the compiler's listing file.

use std::fmt;
use std::io;

use super::table::{Scope, SymbolTable};
use crate::config::ListingConfig;

/// Width of the location column
const LOCATION_WIDTH: usize = 8;

/// Display adaptor over a symbol table.
///
/// Scopes appear in creation order and records in first-insertion order,
/// so the same sequence of inserts always produces the same text.
pub struct Listing<'a, T> {
    table: &'a SymbolTable<T>,
    config: &'a ListingConfig,
}

impl<T: fmt::Display> Listing<'_, T> {
    fn write_scope(&self, f: &mut fmt::Formatter<'_>, scope: &Scope<T>) -> fmt::Result {
        match scope.parent() {
            Some(parent) => writeln!(f, "Scope: {} (parent: {})", scope.name(), parent)?,
            None => writeln!(f, "Scope: {}", scope.name())?,
        }

        if self.config.header {
            self.write_row(f, "Variable Name", "Type", "Location", "Line Numbers")?;
            self.write_row(f, "-------------", "----", "--------", "------------")?;
        }

        for (name, record) in scope.symbols() {
            let lines = record
                .lines()
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            self.write_row(
                f,
                name,
                &record.ty().to_string(),
                &record.location().to_string(),
                &lines,
            )?;
        }
        Ok(())
    }

    fn write_row(
        &self,
        f: &mut fmt::Formatter<'_>,
        name: &str,
        ty: &str,
        location: &str,
        lines: &str,
    ) -> fmt::Result {
        writeln!(
            f,
            "{:<name_width$} {:<type_width$} {:<location_width$} {}",
            name,
            ty,
            location,
            lines,
            name_width = self.config.name_width,
            type_width = self.config.type_width,
            location_width = LOCATION_WIDTH,
        )
    }
}

impl<T: fmt::Display> fmt::Display for Listing<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, scope) in self.table.scopes().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            self.write_scope(f, scope)?;
        }
        Ok(())
    }
}

impl<T: fmt::Display> SymbolTable<T> {
    pub fn listing<'a>(&'a self, config: &'a ListingConfig) -> Listing<'a, T> {
        Listing { table: self, config }
    }

    /// Write the listing with the default layout
    pub fn dump<W: io::Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        self.dump_with(sink, &ListingConfig::default())
    }

    pub fn dump_with<W: io::Write + ?Sized>(&self, sink: &mut W, config: &ListingConfig) -> io::Result<()> {
        write!(sink, "{}", self.listing(config))
    }
}
