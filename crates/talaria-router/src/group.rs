//! Route groups with cascading defaults.
//!
//! A [`RouteGroup`] compiles an ordered set of routes under shared defaults.
//! Defaults fill only what a member route left unset; group middlewares are
//! appended to every member's own list. Cascading happens on clones, so the
//! routes handed to the group are never changed.

use crate::collection::Collection;
use crate::route::Route;
use talaria_core::TalariaResult;

/// An ordered set of routes sharing defaults and middlewares.
///
/// # Example
///
/// ```
/// use talaria_router::{Route, RouteGroup};
///
/// let collections = RouteGroup::new([
///     Route::get("/users"),
///     Route::get("/reports").with_namespace("Internal"),
/// ])
/// .with_default_prefix("/api")
/// .with_default_namespace("Api")
/// .with_middleware("auth")
/// .to_collections()?;
///
/// // The first route took both defaults, the second kept its namespace.
/// assert_eq!(collections[0].handler(), "Api::UsersController");
/// assert_eq!(collections[0].bindings()[0].pattern, "/api/users");
/// assert_eq!(collections[2].handler(), "Internal::ReportsController");
/// # Ok::<(), talaria_core::TalariaError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteGroup {
    routes: Vec<Route>,
    middlewares: Vec<String>,
    default_prefix: Option<String>,
    default_namespace: Option<String>,
    default_action: Option<String>,
}

impl RouteGroup {
    /// Creates a group over an ordered set of routes.
    #[must_use]
    pub fn new(routes: impl IntoIterator<Item = Route>) -> Self {
        Self {
            routes: routes.into_iter().collect(),
            middlewares: Vec::new(),
            default_prefix: None,
            default_namespace: None,
            default_action: None,
        }
    }

    /// Returns the group with one more route appended.
    #[must_use]
    pub fn with_route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Returns the group with more routes appended.
    #[must_use]
    pub fn with_routes(mut self, routes: impl IntoIterator<Item = Route>) -> Self {
        self.routes.extend(routes);
        self
    }

    /// Appends one shared middleware notation.
    #[must_use]
    pub fn with_middleware(mut self, notation: impl Into<String>) -> Self {
        self.middlewares.push(notation.into());
        self
    }

    /// Appends shared middleware notations.
    ///
    /// Shared notations are added after each member route's own middlewares
    /// at compilation time.
    #[must_use]
    pub fn with_middlewares<I, S>(mut self, notations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.middlewares.extend(notations.into_iter().map(Into::into));
        self
    }

    /// Sets the prefix applied to routes without their own.
    ///
    /// Stored with surrounding slashes trimmed; the member route's setter
    /// restores the leading slash on application. An all-slash value clears
    /// the default.
    #[must_use]
    pub fn with_default_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.default_prefix = trim_default(prefix);
        self
    }

    /// Sets the namespace applied to routes without their own.
    ///
    /// Stored with surrounding slashes trimmed; an all-slash value clears
    /// the default.
    #[must_use]
    pub fn with_default_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.default_namespace = trim_default(namespace);
        self
    }

    /// Sets the action override applied to routes without their own.
    ///
    /// Stored with surrounding slashes trimmed; an all-slash value clears
    /// the default.
    #[must_use]
    pub fn with_default_action(mut self, action: impl Into<String>) -> Self {
        self.default_action = trim_default(action);
        self
    }

    /// Returns the member routes in declaration order.
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the shared middleware notations.
    #[must_use]
    pub fn middlewares(&self) -> &[String] {
        &self.middlewares
    }

    /// Returns the default prefix, slash-trimmed.
    #[must_use]
    pub fn default_prefix(&self) -> Option<&str> {
        self.default_prefix.as_deref()
    }

    /// Returns the default namespace, slash-trimmed.
    #[must_use]
    pub fn default_namespace(&self) -> Option<&str> {
        self.default_namespace.as_deref()
    }

    /// Returns the default action, slash-trimmed.
    #[must_use]
    pub fn default_action(&self) -> Option<&str> {
        self.default_action.as_deref()
    }

    /// Compiles every member route, defaults applied, in declaration order.
    ///
    /// Each route is cloned, unset fields are filled from the group
    /// defaults, the shared middlewares are appended, and the clone is
    /// compiled. The result concatenates each route's collections in route
    /// order.
    ///
    /// # Errors
    ///
    /// Returns the first member route compilation error.
    pub fn to_collections(&self) -> TalariaResult<Vec<Collection>> {
        let mut collections = Vec::new();
        for route in &self.routes {
            let mut member = route.clone();
            if member.prefix().is_none() {
                if let Some(prefix) = self.default_prefix.as_deref() {
                    member.set_prefix(prefix);
                }
            }
            if member.namespace().is_none() {
                if let Some(namespace) = self.default_namespace.as_deref() {
                    member.set_namespace(namespace);
                }
            }
            if member.action().is_none() {
                if let Some(action) = self.default_action.as_deref() {
                    member.set_action(action);
                }
            }
            member.add_middlewares(self.middlewares.iter().cloned());

            collections.extend(member.to_collections()?);
        }
        Ok(collections)
    }
}

fn trim_default(value: impl Into<String>) -> Option<String> {
    let trimmed = value.into().trim_matches('/').to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
