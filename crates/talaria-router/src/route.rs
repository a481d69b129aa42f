//! Declarative route definitions.
//!
//! A [`Route`] describes one logical endpoint family: a path, an allowed
//! method set, optional prefix/namespace/controller/action overrides, and a
//! list of middleware notations. Everything left unset is filled by
//! convention directly before compilation, so most declarations stay short.

use crate::collection::Collection;
use crate::convention;
use crate::method::{self, ViaMethods, DEFAULT_METHODS};
use http::Method;
use talaria_core::TalariaResult;
use talaria_middleware::notation;
use tracing::trace;

/// One logical endpoint family, compiled into [`Collection`]s by REST
/// convention.
///
/// # Example
///
/// ```
/// use talaria_router::Route;
///
/// let collections = Route::add("/custom-fields")
///     .with_namespace("Api")
///     .with_middlewares(["auth", "throttle:10,60"])
///     .to_collections()?;
///
/// // create, index, show, edit (PUT and PATCH), delete
/// assert_eq!(collections.len(), 5);
/// assert_eq!(collections[0].handler(), "Api::CustomFieldsController");
/// assert_eq!(collections[0].route_identifier().as_str(), "api-customfieldscontroller-create");
/// # Ok::<(), talaria_core::TalariaError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: String,
    prefix: Option<String>,
    namespace: Option<String>,
    controller: Option<String>,
    action: Option<String>,
    via: Vec<Method>,
    middlewares: Vec<String>,
}

impl Route {
    /// Creates a route for `path` with no method restriction.
    ///
    /// A route whose `via` set is never restricted receives the full default
    /// REST set (POST, GET, PUT, PATCH, DELETE) at compilation time.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: normalize_path(path),
            prefix: None,
            namespace: None,
            controller: None,
            action: None,
            via: Vec::new(),
            middlewares: Vec::new(),
        }
    }

    /// Creates a route answering to the full default REST method set.
    #[must_use]
    pub fn add(path: impl Into<String>) -> Self {
        Self::new(path).with_via(DEFAULT_METHODS)
    }

    /// Creates a GET-only route.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(path).with_via(Method::GET)
    }

    /// Creates a POST-only route.
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(path).with_via(Method::POST)
    }

    /// Creates a PUT-only route.
    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(path).with_via(Method::PUT)
    }

    /// Creates a PATCH-only route.
    #[must_use]
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(path).with_via(Method::PATCH)
    }

    /// Creates a DELETE-only route.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(path).with_via(Method::DELETE)
    }

    /// Returns the route path, always slash-prefixed.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the mount prefix, if set.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Returns the handler namespace, if set.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Returns the controller name, if set.
    #[must_use]
    pub fn controller(&self) -> Option<&str> {
        self.controller.as_deref()
    }

    /// Returns the action override, if set.
    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Returns the allowed method set.
    #[must_use]
    pub fn via(&self) -> &[Method] {
        &self.via
    }

    /// Returns the declared middleware notations.
    #[must_use]
    pub fn middlewares(&self) -> &[String] {
        &self.middlewares
    }

    /// Replaces the route path, normalizing to a leading `/`.
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = normalize_path(path);
    }

    /// Returns the route with a replaced path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.set_path(path);
        self
    }

    /// Sets the mount prefix, normalizing to a leading `/`.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = Some(normalize_path(prefix));
    }

    /// Returns the route with a mount prefix set.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.set_prefix(prefix);
        self
    }

    /// Sets the handler namespace.
    pub fn set_namespace(&mut self, namespace: impl Into<String>) {
        self.namespace = Some(namespace.into());
    }

    /// Returns the route with a handler namespace set.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.set_namespace(namespace);
        self
    }

    /// Sets the controller name, suppressing path derivation.
    pub fn set_controller(&mut self, controller: impl Into<String>) {
        self.controller = Some(controller.into());
    }

    /// Returns the route with a controller name set.
    #[must_use]
    pub fn with_controller(mut self, controller: impl Into<String>) -> Self {
        self.set_controller(controller);
        self
    }

    /// Sets the action override; an empty string clears it.
    ///
    /// An override replaces the conventional action on every binding the
    /// route produces.
    pub fn set_action(&mut self, action: impl Into<String>) {
        let action = action.into();
        self.action = if action.is_empty() { None } else { Some(action) };
    }

    /// Returns the route with the action override set or cleared.
    #[must_use]
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.set_action(action);
        self
    }

    /// Restricts the allowed method set.
    ///
    /// The stored set is the intersection of the given methods with
    /// [`SUPPORTED_METHODS`], duplicates removed, order preserved.
    /// Unsupported methods are dropped without error.
    ///
    /// [`SUPPORTED_METHODS`]: crate::SUPPORTED_METHODS
    pub fn set_via(&mut self, methods: impl ViaMethods) {
        let mut via = Vec::new();
        for candidate in methods.into_methods() {
            if method::is_supported(&candidate) && !via.contains(&candidate) {
                via.push(candidate);
            }
        }
        self.via = via;
    }

    /// Returns the route with a restricted method set.
    #[must_use]
    pub fn with_via(mut self, methods: impl ViaMethods) -> Self {
        self.set_via(methods);
        self
    }

    /// Appends one middleware notation.
    #[must_use]
    pub fn with_middleware(mut self, notation: impl Into<String>) -> Self {
        self.middlewares.push(notation.into());
        self
    }

    /// Appends middleware notations, keeping any already declared.
    #[must_use]
    pub fn with_middlewares<I, S>(mut self, notations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_middlewares(notations);
        self
    }

    /// Appends middleware notations in place.
    pub fn add_middlewares<I, S>(&mut self, notations: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.middlewares.extend(notations.into_iter().map(Into::into));
    }

    /// Fills unset fields from convention.
    ///
    /// An empty `via` set becomes the full default REST set, and an unset
    /// controller is derived from the path (`/custom-fields` becomes
    /// `CustomFieldsController`). Explicitly set values are never touched,
    /// and a second call changes nothing. [`Self::to_collections`] applies
    /// this to a working copy, so calling it up front is only needed to
    /// inspect the derived values.
    pub fn populate_defaults(&mut self) {
        if self.via.is_empty() {
            self.via = DEFAULT_METHODS.to_vec();
        }
        if self.controller.is_none() {
            self.controller = Some(derive_controller(&self.path));
        }
    }

    /// Returns the full URL pattern, prefix included.
    #[must_use]
    pub fn pattern(&self) -> String {
        format!("{}{}", self.prefix.as_deref().unwrap_or(""), self.path)
    }

    /// Returns the opaque handler identity, `namespace::controller`.
    ///
    /// With no namespace the identity keeps a leading separator; identifier
    /// slugging removes it. The controller part is empty until set or
    /// default-populated.
    #[must_use]
    pub fn handler_name(&self) -> String {
        format!(
            "{}::{}",
            self.namespace.as_deref().unwrap_or(""),
            self.controller.as_deref().unwrap_or(""),
        )
    }

    /// Compiles the route into ordered [`Collection`]s.
    ///
    /// Works on a default-populated copy; the route itself is unchanged.
    /// Middleware notations are parsed first and fail fast on the first
    /// malformed one. Bindings sharing an action stay in one collection, so
    /// PUT and PATCH land together while a default GET route splits into
    /// `index` and `show` collections with distinct identifiers.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed middleware notation.
    pub fn to_collections(&self) -> TalariaResult<Vec<Collection>> {
        let mut route = self.clone();
        route.populate_defaults();

        let middlewares = notation::parse_notations(route.middlewares())?;
        let bindings = convention::expand(&route.pattern(), route.via(), route.action());
        trace!(
            pattern = %route.pattern(),
            handler = %route.handler_name(),
            bindings = bindings.len(),
            "expanded route"
        );

        let mut collections = Vec::new();
        let mut rest = bindings.as_slice();
        while let Some(first) = rest.first() {
            let run = rest.iter().take_while(|b| b.action == first.action).count();
            let (head, tail) = rest.split_at(run);
            collections.push(Collection::from_route(&route, head.to_vec(), middlewares.clone())?);
            rest = tail;
        }
        Ok(collections)
    }
}

fn normalize_path(path: impl Into<String>) -> String {
    let path = path.into();
    if path.starts_with('/') {
        path
    } else {
        format!("/{path}")
    }
}

/// Derives a controller name from a path.
///
/// The path is split on every run of non-ASCII-letter characters, each word
/// is capitalized, and the words are concatenated with a `Controller`
/// suffix.
fn derive_controller(path: &str) -> String {
    let mut controller = String::new();
    for word in path
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|word| !word.is_empty())
    {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            controller.push(first.to_ascii_uppercase());
            controller.extend(chars.map(|c| c.to_ascii_lowercase()));
        }
    }
    controller.push_str("Controller");
    controller
}
