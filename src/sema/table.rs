//! Symbol Table
//!
//! Registry of named scopes. Each scope owns the records of the identifiers
//! declared in it; lookups walk upward through the parent chain.

use indexmap::IndexMap;
use indexmap::map::Entry;
use rustc_hash::FxBuildHasher;

use super::types::ExpType;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Memory location handed out by the code generator
pub type Location = i32;

/// Returned by the lookups when no scope in the chain holds the name
pub const NOT_FOUND: Location = -1;

/// Name of the root scope unless configured otherwise
pub const GLOBAL_SCOPE: &str = "global";

/// Creation index of a scope within its table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(usize);

impl ScopeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SymbolRecord<T = ExpType> {
    ty: T,
    location: Location,
    lines: Vec<u32>,
}

impl<T> SymbolRecord<T> {
    fn new(ty: T, location: Location, lineno: u32) -> Self {
        Self {
            ty,
            location,
            lines: vec![lineno],
        }
    }

    pub fn ty(&self) -> &T {
        &self.ty
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// Every line the name was inserted at, in call order
    pub fn lines(&self) -> &[u32] {
        &self.lines
    }

    /// Line of the insertion that created the record
    pub fn declared_at(&self) -> u32 {
        self.lines[0]
    }
}

#[derive(Debug, Clone)]
pub struct Scope<T = ExpType> {
    name: String,
    id: ScopeId,
    parent: Option<String>,
    /// False while the parent is only the implied global scope
    parent_declared: bool,
    symbols: FxIndexMap<String, SymbolRecord<T>>,
}

impl<T> Scope<T> {
    fn new(name: String, id: ScopeId, parent: Option<String>) -> Self {
        Self {
            name,
            id,
            parent,
            parent_declared: false,
            symbols: FxIndexMap::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> ScopeId {
        self.id
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn get(&self, name: &str) -> Option<&SymbolRecord<T>> {
        self.symbols.get(name)
    }

    /// Records in first-insertion order
    pub fn symbols(&self) -> impl Iterator<Item = (&str, &SymbolRecord<T>)> {
        self.symbols.iter().map(|(name, record)| (name.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Scoped symbol table for one compiler run.
///
/// Scopes are addressed by name and created on first use. A scope created
/// implicitly hangs off the global scope; [`SymbolTable::declare_scope`]
/// gives it a different parent.
#[derive(Debug, Clone)]
pub struct SymbolTable<T = ExpType> {
    global: String,
    scopes: FxIndexMap<String, Scope<T>>,
}

impl<T> SymbolTable<T> {
    pub fn new() -> Self {
        Self::with_global_scope(GLOBAL_SCOPE)
    }

    pub fn with_global_scope(global: impl Into<String>) -> Self {
        Self {
            global: global.into(),
            scopes: FxIndexMap::default(),
        }
    }

    pub fn global_scope(&self) -> &str {
        &self.global
    }

    /// Resolve the table for `name`, creating it under the global scope
    fn scope_entry(&mut self, name: &str) -> &mut Scope<T> {
        let next_id = ScopeId(self.scopes.len());
        let global = &self.global;
        self.scopes.entry(name.to_string()).or_insert_with(|| {
            let parent = (name != global.as_str()).then(|| global.clone());
            log::debug!("created scope '{}' (parent: {:?})", name, parent);
            Scope::new(name.to_string(), next_id, parent)
        })
    }

    /// Register `name` as a child of `parent`.
    ///
    /// Re-declaring an existing scope reuses its table. An implied parent is
    /// replaced; an explicitly declared one is kept. The global scope never
    /// gets a parent. `parent` itself is not created.
    pub fn declare_scope(&mut self, name: &str, parent: &str) -> ScopeId {
        let is_global = name == self.global;
        let scope = self.scope_entry(name);
        if is_global {
            log::debug!("ignoring parent '{}' for the global scope", parent);
        } else if !scope.parent_declared {
            scope.parent = Some(parent.to_string());
            scope.parent_declared = true;
        } else if scope.parent.as_deref() != Some(parent) {
            log::warn!(
                "scope '{}' already declared with parent {:?}, ignoring parent '{}'",
                scope.name,
                scope.parent,
                parent
            );
        }
        scope.id
    }

    /// Record a reference to `name` in `scope`.
    ///
    /// The first insertion creates the record with `ty` and `loc`; later ones
    /// only append `lineno`.
    pub fn insert(&mut self, scope: &str, name: &str, ty: T, lineno: u32, loc: Location) {
        debug_assert!(loc >= 0, "location {} collides with the not-found sentinel", loc);
        debug_assert!(lineno >= 1, "line numbers start at 1");

        let scope = self.scope_entry(scope);
        match scope.symbols.entry(name.to_string()) {
            Entry::Occupied(mut entry) => {
                log::trace!("{}::{} referenced at line {}", scope.name, name, lineno);
                entry.get_mut().lines.push(lineno);
            }
            Entry::Vacant(entry) => {
                log::debug!(
                    "{}::{} declared at line {} (location {})",
                    scope.name,
                    name,
                    lineno,
                    loc
                );
                entry.insert(SymbolRecord::new(ty, loc, lineno));
            }
        }
    }

    /// Scopes visible from `scope`, innermost first
    pub fn ancestors<'a>(&'a self, scope: &str) -> Ancestors<'a, T> {
        Ancestors {
            table: self,
            next: self.scopes.get(scope),
            remaining: self.scopes.len(),
        }
    }

    /// Find `name` from `scope`, reporting which scope declared it
    pub fn resolve_with_scope(&self, scope: &str, name: &str) -> Option<(&Scope<T>, &SymbolRecord<T>)> {
        let found = self
            .ancestors(scope)
            .find_map(|s| s.get(name).map(|record| (s, record)));
        if found.is_none() {
            log::trace!("'{}' is not visible from scope '{}'", name, scope);
        }
        found
    }

    pub fn resolve(&self, scope: &str, name: &str) -> Option<&SymbolRecord<T>> {
        self.resolve_with_scope(scope, name).map(|(_, record)| record)
    }

    /// Find `name` in `scope` only
    pub fn resolve_local(&self, scope: &str, name: &str) -> Option<&SymbolRecord<T>> {
        self.scopes.get(scope)?.get(name)
    }

    /// Location of `name` as seen from `scope`, or [`NOT_FOUND`]
    pub fn lookup(&self, scope: &str, name: &str) -> Location {
        self.resolve(scope, name).map_or(NOT_FOUND, SymbolRecord::location)
    }

    /// Location of `name` in `scope` itself, or [`NOT_FOUND`]
    pub fn lookup_excluding_parent(&self, scope: &str, name: &str) -> Location {
        self.resolve_local(scope, name)
            .map_or(NOT_FOUND, SymbolRecord::location)
    }

    pub fn scope(&self, name: &str) -> Option<&Scope<T>> {
        self.scopes.get(name)
    }

    /// Scope the walk continues in after `parent`.
    ///
    /// A parent that was never registered holds no names but still hangs off
    /// the global scope, so the walk moves on to global.
    fn parent_scope(&self, parent: &str) -> Option<&Scope<T>> {
        match self.scopes.get(parent) {
            Some(scope) => Some(scope),
            None if parent != self.global => self.scopes.get(&self.global),
            None => None,
        }
    }

    pub fn contains_scope(&self, name: &str) -> bool {
        self.scopes.contains_key(name)
    }

    /// Scopes in creation order
    pub fn scopes(&self) -> impl Iterator<Item = &Scope<T>> {
        self.scopes.values()
    }

    /// Number of scopes
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Number of records across all scopes
    pub fn symbol_count(&self) -> usize {
        self.scopes.values().map(Scope::len).sum()
    }
}

impl<T> Default for SymbolTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a scope and its registered parents.
///
/// Unregistered parents are skipped in favour of the global scope. The walk
/// visits at most as many scopes as the table holds, so cyclic declarations
/// terminate.
pub struct Ancestors<'a, T> {
    table: &'a SymbolTable<T>,
    next: Option<&'a Scope<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Ancestors<'a, T> {
    type Item = &'a Scope<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let scope = self.next.take()?;
        self.remaining -= 1;
        let table = self.table;
        self.next = scope.parent().and_then(|parent| table.parent_scope(parent));
        Some(scope)
    }
}
