//! Compiled route collections.
//!
//! A [`Collection`] is the unit the host framework mounts: one handler
//! identity, the ordered bindings that share one action, the identifier the
//! dispatcher will recompute at request time, and the route's middleware
//! partition. [`middleware_table`] gathers the partitions of a compiled set
//! into the dispatch lookup table.

use crate::convention::CompiledBinding;
use crate::route::Route;
use talaria_core::{RouteIdentifier, TalariaError, TalariaResult};
use talaria_middleware::{Middleware, MiddlewarePartition, MiddlewareTable, Phase};

/// One handler-bound group of compiled bindings.
///
/// # Example
///
/// ```
/// use talaria_router::Route;
///
/// let collections = Route::get("/users").with_namespace("Api").to_collections()?;
///
/// let index = &collections[0];
/// assert_eq!(index.handler(), "Api::UsersController");
/// assert_eq!(index.route_identifier().as_str(), "api-userscontroller-index");
/// assert_eq!(index.bindings()[0].pattern, "/users");
/// # Ok::<(), talaria_core::TalariaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Collection {
    handler: String,
    route_identifier: RouteIdentifier,
    bindings: Vec<CompiledBinding>,
    partition: MiddlewarePartition,
}

impl Collection {
    /// Builds a collection from a compiled route.
    ///
    /// `bindings` is one action run produced by convention expansion;
    /// `middlewares` is the route's parsed notation list. The identifier is
    /// derived from the route's handler name and the first binding's action,
    /// the same derivation the dispatcher applies at request time.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `bindings` is empty or mixes
    /// actions, since either would detach the identifier from the bindings
    /// registered under it.
    pub fn from_route(
        route: &Route,
        bindings: Vec<CompiledBinding>,
        middlewares: Vec<Middleware>,
    ) -> TalariaResult<Self> {
        let handler = route.handler_name();
        let Some(first) = bindings.first() else {
            return Err(TalariaError::configuration(format!(
                "collection for handler '{handler}' has no bindings"
            )));
        };
        if let Some(stray) = bindings.iter().find(|b| b.action != first.action) {
            return Err(TalariaError::configuration(format!(
                "collection for handler '{handler}' mixes actions '{}' and '{}'",
                first.action, stray.action
            )));
        }

        let route_identifier = RouteIdentifier::for_handler(&handler, &first.action);
        Ok(Self {
            handler,
            route_identifier,
            bindings,
            partition: MiddlewarePartition::from_middlewares(middlewares),
        })
    }

    /// Returns the opaque handler identity, `namespace::controller`.
    #[must_use]
    pub fn handler(&self) -> &str {
        &self.handler
    }

    /// Returns the identifier middlewares are resolved under.
    #[must_use]
    pub const fn route_identifier(&self) -> &RouteIdentifier {
        &self.route_identifier
    }

    /// Returns the ordered bindings for host mounting.
    #[must_use]
    pub fn bindings(&self) -> &[CompiledBinding] {
        &self.bindings
    }

    /// Returns the route's middlewares partitioned by phase.
    #[must_use]
    pub const fn middlewares(&self) -> &MiddlewarePartition {
        &self.partition
    }

    /// Returns the middlewares of one phase, declaration order preserved.
    #[must_use]
    pub fn middlewares_by_phase(&self, phase: Phase) -> &[Middleware] {
        self.partition.phase(phase)
    }
}

/// Assembles the dispatch lookup table from compiled collections.
///
/// Each collection contributes its partition under its identifier. A
/// repeated identifier keeps the last partition and logs the overwrite at
/// debug level.
#[must_use]
pub fn middleware_table(collections: &[Collection]) -> MiddlewareTable {
    collections
        .iter()
        .map(|collection| {
            (
                collection.route_identifier().clone(),
                collection.middlewares().clone(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;

    fn create_test_binding(action: &str) -> CompiledBinding {
        CompiledBinding {
            method: Method::GET,
            pattern: "/users".to_string(),
            action: action.to_string(),
        }
    }

    fn create_test_route() -> Route {
        Route::get("/users").with_namespace("Api").with_controller("UsersController")
    }

    #[test]
    fn test_from_route_requires_bindings() {
        let result = Collection::from_route(&create_test_route(), vec![], vec![]);
        assert!(matches!(result, Err(TalariaError::Configuration { .. })));
    }

    #[test]
    fn test_from_route_rejects_mixed_actions() {
        let bindings = vec![create_test_binding("index"), create_test_binding("show")];
        let result = Collection::from_route(&create_test_route(), bindings, vec![]);
        assert!(matches!(result, Err(TalariaError::Configuration { .. })));
    }

    #[test]
    fn test_identifier_uses_handler_and_first_action() {
        let collection = Collection::from_route(
            &create_test_route(),
            vec![create_test_binding("index")],
            vec![],
        )
        .unwrap();
        assert_eq!(collection.route_identifier().as_str(), "api-userscontroller-index");
        assert_eq!(
            collection.route_identifier(),
            &RouteIdentifier::for_handler("Api::UsersController", "index"),
        );
    }

    #[test]
    fn test_middlewares_are_partitioned_by_phase() {
        let collection = Collection::from_route(
            &create_test_route(),
            vec![create_test_binding("index")],
            vec![
                Middleware::new("auth"),
                Middleware::new("audit").with_phase(Phase::After),
                Middleware::new("throttle"),
            ],
        )
        .unwrap();

        let before: Vec<&str> = collection
            .middlewares_by_phase(Phase::Before)
            .iter()
            .map(Middleware::key)
            .collect();
        assert_eq!(before, ["auth", "throttle"]);
        assert_eq!(collection.middlewares_by_phase(Phase::After).len(), 1);
    }

    #[test]
    fn test_middleware_table_keys_by_identifier() {
        let collections = Route::get("/users")
            .with_namespace("Api")
            .with_middleware("auth")
            .to_collections()
            .unwrap();
        let table = middleware_table(&collections);

        assert_eq!(table.len(), 2);
        let partition = table
            .get(&RouteIdentifier::for_handler("Api::UsersController", "show"))
            .unwrap();
        assert_eq!(partition.before().len(), 1);
        assert_eq!(partition.before()[0].key(), "auth");
    }

    #[test]
    fn test_middleware_table_last_wins_on_collision() {
        let mut collections =
            Route::get("/users").with_middleware("auth").to_collections().unwrap();
        collections.extend(
            Route::get("/users").with_middleware("throttle").to_collections().unwrap(),
        );

        let table = middleware_table(&collections);
        assert_eq!(table.len(), 2);
        let partition = table
            .get(&RouteIdentifier::for_handler("::UsersController", "index"))
            .unwrap();
        assert_eq!(partition.before()[0].key(), "throttle");
    }
}
