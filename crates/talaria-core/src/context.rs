//! Request context types.
//!
//! The [`RequestContext`] carries per-request state through the middleware
//! dispatch chain. The host framework creates one per inbound request,
//! records the matched handler and action on it, and hands it to the
//! dispatcher; middlewares may read request metadata and stash values in the
//! extension map for later stages or the handler itself.

use http::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Instant;
use uuid::Uuid;

/// A unique identifier for each request, using UUID v7.
///
/// UUID v7 is time-ordered, which makes it ideal for request tracking
/// and log correlation.
///
/// # Example
///
/// ```
/// use talaria_core::RequestId;
///
/// let id = RequestId::new();
/// println!("Request ID: {}", id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Creates a new unique request ID using UUID v7.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a `RequestId` from an existing UUID.
    ///
    /// This is useful when propagating request IDs from headers or other
    /// upstream sources.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for RequestId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<RequestId> for Uuid {
    fn from(id: RequestId) -> Self {
        id.0
    }
}

/// Per-request context shared between the dispatcher and middlewares.
///
/// `RequestContext` carries:
/// - A unique request ID for log correlation
/// - The request method and path
/// - The active handler identity and action, as matched by the host framework
/// - A JSON extension map for middleware-to-handler communication
/// - Request timing information
///
/// The active handler pair is what the dispatcher derives the route
/// identifier from; until the host records it, dispatch is a no-op.
///
/// # Example
///
/// ```
/// use talaria_core::RequestContext;
/// use http::Method;
///
/// let mut ctx = RequestContext::new()
///     .with_method(Method::GET)
///     .with_path("/v1/users/42");
/// ctx.set_active_handler("Api::UsersController", "show");
/// assert_eq!(ctx.handler(), Some("Api::UsersController"));
/// ```
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique identifier for this request.
    request_id: RequestId,

    /// The HTTP method of the request.
    method: Method,

    /// The request path, as received by the host framework.
    path: String,

    /// Handler identity of the matched endpoint.
    handler: Option<String>,

    /// Action of the matched endpoint.
    action: Option<String>,

    /// Free-form values shared between middlewares and the handler.
    extensions: HashMap<String, Value>,

    /// When the request started processing.
    started_at: Instant,
}

impl RequestContext {
    /// Creates a new request context with a fresh request ID.
    ///
    /// The method defaults to GET and the path to `/`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            request_id: RequestId::new(),
            method: Method::GET,
            path: "/".to_string(),
            handler: None,
            action: None,
            extensions: HashMap::new(),
            started_at: Instant::now(),
        }
    }

    /// Creates a new request context with the specified request ID.
    #[must_use]
    pub fn with_request_id(request_id: RequestId) -> Self {
        Self {
            request_id,
            ..Self::new()
        }
    }

    /// Creates a mock context for testing purposes.
    #[must_use]
    pub fn mock() -> Self {
        Self::new()
    }

    /// Returns the request ID.
    #[must_use]
    pub const fn request_id(&self) -> RequestId {
        self.request_id
    }

    /// Returns the request method.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Sets the request method.
    pub fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    /// Returns a new context with the specified method.
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Returns the request path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Sets the request path.
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    /// Returns a new context with the specified path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Returns the active handler identity, if the host recorded one.
    #[must_use]
    pub fn handler(&self) -> Option<&str> {
        self.handler.as_deref()
    }

    /// Returns the active action, if the host recorded one.
    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Records the matched handler identity and action for this request.
    ///
    /// The host framework calls this after URL matching and before invoking
    /// the dispatcher; the pair must be exactly what the endpoint was
    /// compiled with for middleware resolution to find the route.
    pub fn set_active_handler(&mut self, handler: impl Into<String>, action: impl Into<String>) {
        self.handler = Some(handler.into());
        self.action = Some(action.into());
    }

    /// Returns a new context with the specified active handler pair.
    #[must_use]
    pub fn with_active_handler(
        mut self,
        handler: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        self.set_active_handler(handler, action);
        self
    }

    /// Returns the extension value stored under `key`, if any.
    #[must_use]
    pub fn extension(&self, key: &str) -> Option<&Value> {
        self.extensions.get(key)
    }

    /// Stores an extension value under `key`, replacing any previous value.
    pub fn set_extension(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.extensions.insert(key.into(), value.into());
    }

    /// Returns the elapsed time since the request started.
    #[must_use]
    pub fn elapsed(&self) -> std::time::Duration {
        self.started_at.elapsed()
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_new_generates_unique_ids() {
        let id1 = RequestId::new();
        let id2 = RequestId::new();
        assert_ne!(id1, id2, "Each RequestId should be unique");
    }

    #[test]
    fn test_request_id_display() {
        let id = RequestId::new();
        let display = id.to_string();
        assert_eq!(display.len(), 36, "UUID string should be 36 characters");
        assert!(display.contains('-'), "UUID should contain hyphens");
    }

    #[test]
    fn test_request_id_from_uuid() {
        let uuid = Uuid::now_v7();
        let id = RequestId::from_uuid(uuid);
        assert_eq!(*id.as_uuid(), uuid);
    }

    #[test]
    fn test_request_id_serialization() {
        let id = RequestId::new();
        let json = serde_json::to_string(&id).expect("serialization should work");
        let parsed: RequestId = serde_json::from_str(&json).expect("deserialization should work");
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_request_context_new() {
        let ctx = RequestContext::new();
        assert_eq!(ctx.method(), &Method::GET);
        assert_eq!(ctx.path(), "/");
        assert!(ctx.handler().is_none());
        assert!(ctx.action().is_none());
    }

    #[test]
    fn test_request_context_builder_pattern() {
        let ctx = RequestContext::new()
            .with_method(Method::DELETE)
            .with_path("/v1/leads/7")
            .with_active_handler("Api::LeadsController", "delete");

        assert_eq!(ctx.method(), &Method::DELETE);
        assert_eq!(ctx.path(), "/v1/leads/7");
        assert_eq!(ctx.handler(), Some("Api::LeadsController"));
        assert_eq!(ctx.action(), Some("delete"));
    }

    #[test]
    fn test_request_context_extensions() {
        let mut ctx = RequestContext::mock();
        assert!(ctx.extension("user_id").is_none());

        ctx.set_extension("user_id", 42);
        ctx.set_extension("scopes", serde_json::json!(["read", "write"]));

        assert_eq!(ctx.extension("user_id"), Some(&Value::from(42)));
        assert_eq!(
            ctx.extension("scopes"),
            Some(&serde_json::json!(["read", "write"]))
        );

        ctx.set_extension("user_id", 7);
        assert_eq!(ctx.extension("user_id"), Some(&Value::from(7)));
    }

    #[test]
    fn test_request_context_elapsed() {
        let ctx = RequestContext::new();
        std::thread::sleep(std::time::Duration::from_millis(10));
        assert!(ctx.elapsed() >= std::time::Duration::from_millis(10));
    }
}
