//! Route-to-middleware lookup table.
//!
//! Compilation leaves each route's parsed middlewares partitioned by phase
//! and keyed by the route identifier. The resulting [`MiddlewareTable`] is
//! built once at startup, treated as read-only afterwards, and consulted by
//! the dispatcher on every request.

use crate::middleware::{Middleware, Phase};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use talaria_core::RouteIdentifier;
use tracing::debug;

/// One route's declared middlewares, split into before/after lists.
///
/// Declaration order is preserved within each phase; that order is the
/// execution order at dispatch time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiddlewarePartition {
    /// Middlewares running prior to the handler action.
    before: Vec<Middleware>,
    /// Middlewares running after the handler action.
    after: Vec<Middleware>,
}

impl MiddlewarePartition {
    /// Creates an empty partition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Partitions parsed middlewares by phase, preserving declaration order.
    #[must_use]
    pub fn from_middlewares(middlewares: impl IntoIterator<Item = Middleware>) -> Self {
        let mut partition = Self::new();
        for middleware in middlewares {
            match middleware.phase() {
                Phase::Before => partition.before.push(middleware),
                Phase::After => partition.after.push(middleware),
            }
        }
        partition
    }

    /// Returns the before-phase middlewares in declaration order.
    #[must_use]
    pub fn before(&self) -> &[Middleware] {
        &self.before
    }

    /// Returns the after-phase middlewares in declaration order.
    #[must_use]
    pub fn after(&self) -> &[Middleware] {
        &self.after
    }

    /// Returns the middlewares for the given phase.
    #[must_use]
    pub fn phase(&self, phase: Phase) -> &[Middleware] {
        match phase {
            Phase::Before => &self.before,
            Phase::After => &self.after,
        }
    }

    /// Returns the total number of middlewares across both phases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.before.len() + self.after.len()
    }

    /// Returns `true` when neither phase has middlewares.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.before.is_empty() && self.after.is_empty()
    }
}

/// Identifier-keyed middleware lookup table.
///
/// Entries keep insertion order, so dumping the table for inspection shows
/// routes in declaration order. Re-inserting an identifier keeps the newest
/// partition: two declarations compiling to the same (handler, action) pair
/// are one endpoint as far as dispatch is concerned.
///
/// # Example
///
/// ```
/// use talaria_core::RouteIdentifier;
/// use talaria_middleware::{Middleware, MiddlewarePartition, MiddlewareTable};
///
/// let id = RouteIdentifier::for_handler("Api::UsersController", "index");
/// let partition = MiddlewarePartition::from_middlewares([Middleware::new("auth")]);
///
/// let table: MiddlewareTable = [(id.clone(), partition)].into_iter().collect();
/// assert_eq!(table.get(&id).map(|p| p.before().len()), Some(1));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MiddlewareTable {
    entries: IndexMap<RouteIdentifier, MiddlewarePartition>,
}

impl MiddlewareTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a partition under `identifier`, keeping the newest entry on
    /// collision.
    pub fn insert(&mut self, identifier: RouteIdentifier, partition: MiddlewarePartition) {
        if self.entries.contains_key(&identifier) {
            debug!(
                identifier = %identifier,
                "route identifier registered twice, keeping the newest middleware partition"
            );
        }
        self.entries.insert(identifier, partition);
    }

    /// Returns the partition registered for `identifier`, if any.
    #[must_use]
    pub fn get(&self, identifier: &RouteIdentifier) -> Option<&MiddlewarePartition> {
        self.entries.get(identifier)
    }

    /// Returns `true` when a partition is registered for `identifier`.
    #[must_use]
    pub fn contains(&self, identifier: &RouteIdentifier) -> bool {
        self.entries.contains_key(identifier)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&RouteIdentifier, &MiddlewarePartition)> {
        self.entries.iter()
    }

    /// Returns the number of registered identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(RouteIdentifier, MiddlewarePartition)> for MiddlewareTable {
    fn from_iter<I: IntoIterator<Item = (RouteIdentifier, MiddlewarePartition)>>(
        iter: I,
    ) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl Extend<(RouteIdentifier, MiddlewarePartition)> for MiddlewareTable {
    fn extend<I: IntoIterator<Item = (RouteIdentifier, MiddlewarePartition)>>(
        &mut self,
        iter: I,
    ) {
        for (identifier, partition) in iter {
            self.insert(identifier, partition);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_partition() -> MiddlewarePartition {
        MiddlewarePartition::from_middlewares([
            Middleware::new("auth"),
            Middleware::new("audit").with_phase(Phase::After),
            Middleware::new("throttle").with_parameters(["10", "60"]),
        ])
    }

    #[test]
    fn test_partition_splits_by_phase_preserving_order() {
        let partition = create_test_partition();

        let before: Vec<&str> = partition.before().iter().map(Middleware::key).collect();
        assert_eq!(before, ["auth", "throttle"]);

        let after: Vec<&str> = partition.after().iter().map(Middleware::key).collect();
        assert_eq!(after, ["audit"]);

        assert_eq!(partition.len(), 3);
        assert!(!partition.is_empty());
    }

    #[test]
    fn test_partition_phase_accessor() {
        let partition = create_test_partition();
        assert_eq!(partition.phase(Phase::Before).len(), 2);
        assert_eq!(partition.phase(Phase::After).len(), 1);
    }

    #[test]
    fn test_empty_partition() {
        let partition = MiddlewarePartition::new();
        assert!(partition.is_empty());
        assert_eq!(partition.len(), 0);
        assert!(partition.before().is_empty());
        assert!(partition.after().is_empty());
    }

    #[test]
    fn test_table_insert_and_get() {
        let mut table = MiddlewareTable::new();
        assert!(table.is_empty());

        let id = RouteIdentifier::for_handler("UsersController", "index");
        table.insert(id.clone(), create_test_partition());

        assert_eq!(table.len(), 1);
        assert!(table.contains(&id));
        assert_eq!(table.get(&id).map(MiddlewarePartition::len), Some(3));

        let other = RouteIdentifier::for_handler("UsersController", "show");
        assert!(table.get(&other).is_none());
    }

    #[test]
    fn test_table_keeps_newest_on_collision() {
        let id = RouteIdentifier::for_handler("UsersController", "index");

        let mut table = MiddlewareTable::new();
        table.insert(id.clone(), create_test_partition());
        table.insert(
            id.clone(),
            MiddlewarePartition::from_middlewares([Middleware::new("acl")]),
        );

        assert_eq!(table.len(), 1);
        let partition = table.get(&id).expect("registered");
        assert_eq!(partition.before().len(), 1);
        assert_eq!(partition.before()[0].key(), "acl");
    }

    #[test]
    fn test_table_from_iterator_preserves_order() {
        let first = RouteIdentifier::for_handler("UsersController", "index");
        let second = RouteIdentifier::for_handler("LeadsController", "create");

        let table: MiddlewareTable = [
            (first.clone(), MiddlewarePartition::new()),
            (second.clone(), MiddlewarePartition::new()),
        ]
        .into_iter()
        .collect();

        let order: Vec<&RouteIdentifier> = table.iter().map(|(id, _)| id).collect();
        assert_eq!(order, [&first, &second]);
    }

    #[test]
    fn test_table_serialization() {
        let id = RouteIdentifier::for_handler("UsersController", "index");
        let mut table = MiddlewareTable::new();
        table.insert(id, create_test_partition());

        let json = serde_json::to_string(&table).expect("serialization should work");
        assert!(json.contains("userscontroller-index"));
        assert!(json.contains("throttle"));
    }
}
