//! Key-to-executor registry.
//!
//! The registry is the wiring-time map from middleware keys (as used in
//! notations) to [`Executor`] instances. It is populated once at startup and
//! shared read-only with the dispatcher; a key declared on a route but absent
//! here is a resolution miss, which dispatch skips rather than fails.

use crate::executor::Executor;
use std::collections::HashMap;
use std::sync::Arc;

/// Startup-populated map of middleware keys to executors.
///
/// # Example
///
/// ```
/// use talaria_middleware::{Flow, FnExecutor, MiddlewareRegistry};
///
/// let registry = MiddlewareRegistry::new()
///     .with_executor("auth", FnExecutor::new(|_ctx, _params| Flow::Continue));
///
/// assert!(registry.contains_key("auth"));
/// assert!(!registry.contains_key("throttle"));
/// ```
#[derive(Default)]
pub struct MiddlewareRegistry {
    executors: HashMap<String, Arc<dyn Executor>>,
}

impl MiddlewareRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an executor under `key`, replacing any previous entry.
    pub fn register(&mut self, key: impl Into<String>, executor: impl Executor) {
        self.executors.insert(key.into(), Arc::new(executor));
    }

    /// Registers an already-shared executor under `key`.
    pub fn register_arc(&mut self, key: impl Into<String>, executor: Arc<dyn Executor>) {
        self.executors.insert(key.into(), executor);
    }

    /// Returns a copy of the registry with the executor registered.
    #[must_use]
    pub fn with_executor(mut self, key: impl Into<String>, executor: impl Executor) -> Self {
        self.register(key, executor);
        self
    }

    /// Returns the executor registered under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Arc<dyn Executor>> {
        self.executors.get(key)
    }

    /// Returns `true` when an executor is registered under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.executors.contains_key(key)
    }

    /// Returns the registered keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.executors.keys().map(String::as_str)
    }

    /// Returns the number of registered executors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.executors.len()
    }

    /// Returns `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.executors.is_empty()
    }
}

impl std::fmt::Debug for MiddlewareRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        f.debug_struct("MiddlewareRegistry")
            .field("keys", &keys)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::{Flow, FnExecutor};
    use talaria_core::RequestContext;

    struct NoopExecutor;

    impl Executor for NoopExecutor {
        fn execute(&self, _ctx: &mut RequestContext, _parameters: &[String]) -> Flow {
            Flow::Continue
        }
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = MiddlewareRegistry::new();
        assert!(registry.is_empty());

        registry.register("auth", NoopExecutor);
        assert_eq!(registry.len(), 1);
        assert!(registry.contains_key("auth"));
        assert!(registry.get("auth").is_some());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_registry_replaces_on_reregister() {
        let mut registry = MiddlewareRegistry::new();
        registry.register(
            "auth",
            FnExecutor::new(|_ctx: &mut RequestContext, _params: &[String]| Flow::Abort),
        );
        registry.register("auth", NoopExecutor);
        assert_eq!(registry.len(), 1);

        let mut ctx = RequestContext::mock();
        let executor = registry.get("auth").expect("registered");
        assert!(executor.execute(&mut ctx, &[]).is_continue());
    }

    #[test]
    fn test_registry_fluent_wiring() {
        let registry = MiddlewareRegistry::new()
            .with_executor("auth", NoopExecutor)
            .with_executor("throttle", NoopExecutor);

        let mut keys: Vec<&str> = registry.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, ["auth", "throttle"]);
    }

    #[test]
    fn test_registry_register_arc() {
        let shared: Arc<dyn Executor> = Arc::new(NoopExecutor);
        let mut registry = MiddlewareRegistry::new();
        registry.register_arc("auth", Arc::clone(&shared));
        registry.register_arc("auth-again", shared);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_registry_debug_lists_keys() {
        let registry = MiddlewareRegistry::new().with_executor("auth", NoopExecutor);
        let debug = format!("{registry:?}");
        assert!(debug.contains("auth"));
    }
}
