//! Execution contract for registered middlewares.
//!
//! At dispatch time a declared [`Middleware`](crate::Middleware) key resolves
//! to an [`Executor`] held by the registry. Executors are wired once at
//! startup and reused across requests; anything per-request belongs in the
//! [`RequestContext`](talaria_core::RequestContext), not in the executor.

use talaria_core::RequestContext;

/// Synchronous continue/abort signal.
///
/// Every executor returns a `Flow`, and each dispatch phase folds its chain
/// into one: the first [`Flow::Abort`] stops the remaining middlewares of
/// that phase, and the host framework is expected to skip the handler action
/// when the before phase aborts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Flow {
    /// Proceed with the rest of the chain.
    Continue,
    /// Stop the chain; the handler action must not run.
    Abort,
}

impl Flow {
    /// Returns `true` for [`Flow::Continue`].
    #[must_use]
    pub const fn is_continue(self) -> bool {
        matches!(self, Self::Continue)
    }

    /// Returns `true` for [`Flow::Abort`].
    #[must_use]
    pub const fn is_abort(self) -> bool {
        matches!(self, Self::Abort)
    }
}

impl From<bool> for Flow {
    /// `true` continues, `false` aborts.
    fn from(keep_going: bool) -> Self {
        if keep_going {
            Self::Continue
        } else {
            Self::Abort
        }
    }
}

/// A registered middleware implementation.
///
/// Implementations receive the shared request context and the parameter list
/// declared in the notation that selected them. They must not block on
/// anything the host would not expect on its request thread.
///
/// # Example
///
/// ```
/// use talaria_core::RequestContext;
/// use talaria_middleware::{Executor, Flow};
///
/// struct RequireRole;
///
/// impl Executor for RequireRole {
///     fn execute(&self, ctx: &mut RequestContext, parameters: &[String]) -> Flow {
///         let granted = ctx.extension("role").and_then(|v| v.as_str());
///         Flow::from(parameters.iter().any(|p| Some(p.as_str()) == granted))
///     }
/// }
/// ```
pub trait Executor: Send + Sync + 'static {
    /// Runs this middleware for one request.
    fn execute(&self, ctx: &mut RequestContext, parameters: &[String]) -> Flow;
}

/// An executor created from a plain function or closure.
///
/// # Example
///
/// ```
/// use talaria_middleware::{Executor, Flow, FnExecutor};
/// use talaria_core::RequestContext;
///
/// let stamp = FnExecutor::new(|ctx: &mut RequestContext, _params: &[String]| {
///     ctx.set_extension("stamped", true);
///     Flow::Continue
/// });
///
/// let mut ctx = RequestContext::mock();
/// assert!(stamp.execute(&mut ctx, &[]).is_continue());
/// ```
pub struct FnExecutor<F> {
    func: F,
}

impl<F> FnExecutor<F>
where
    F: Fn(&mut RequestContext, &[String]) -> Flow + Send + Sync + 'static,
{
    /// Creates a new function-based executor.
    ///
    /// Closure parameter types are inferred from the executor signature.
    pub const fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> Executor for FnExecutor<F>
where
    F: Fn(&mut RequestContext, &[String]) -> Flow + Send + Sync + 'static,
{
    fn execute(&self, ctx: &mut RequestContext, parameters: &[String]) -> Flow {
        (self.func)(ctx, parameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_predicates() {
        assert!(Flow::Continue.is_continue());
        assert!(!Flow::Continue.is_abort());
        assert!(Flow::Abort.is_abort());
        assert!(!Flow::Abort.is_continue());
    }

    #[test]
    fn test_flow_from_bool() {
        assert_eq!(Flow::from(true), Flow::Continue);
        assert_eq!(Flow::from(false), Flow::Abort);
    }

    #[test]
    fn test_fn_executor_receives_parameters() {
        let executor = FnExecutor::new(|_ctx: &mut RequestContext, params: &[String]| {
            Flow::from(params == ["10", "60"])
        });

        let mut ctx = RequestContext::mock();
        let params = vec!["10".to_string(), "60".to_string()];
        assert!(executor.execute(&mut ctx, &params).is_continue());
        assert!(executor.execute(&mut ctx, &[]).is_abort());
    }

    #[test]
    fn test_fn_executor_mutates_context() {
        let executor = FnExecutor::new(|ctx: &mut RequestContext, _params: &[String]| {
            ctx.set_extension("seen", true);
            Flow::Continue
        });

        let mut ctx = RequestContext::mock();
        let _ = executor.execute(&mut ctx, &[]);
        assert_eq!(ctx.extension("seen"), Some(&serde_json::Value::Bool(true)));
    }
}
