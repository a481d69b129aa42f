//! Request-time middleware dispatch.
//!
//! The dispatcher owns the startup-built [`MiddlewareTable`] and
//! [`MiddlewareRegistry`] and runs one route's middleware lists around the
//! handler action:
//!
//! ```text
//! request matched ──► run_before ──► handler action ──► run_after
//!                        │                                  │
//!                        └── Flow::Abort stops the chain ───┘
//! ```
//!
//! Each phase recomputes the route identifier from the context's active
//! handler and action, which is the same derivation the compiler used when
//! keying the table. Keys without a registered executor are skipped; a
//! missing identifier or handler makes the phase a no-op. The only signal a
//! phase produces is a [`Flow`], and the host framework is responsible for
//! honoring an abort by not invoking the handler (before phase) or by
//! discarding further post-processing (after phase).

use crate::executor::Flow;
use crate::middleware::Phase;
use crate::registry::MiddlewareRegistry;
use crate::table::MiddlewareTable;
use talaria_core::{RequestContext, RouteIdentifier};
use tracing::debug;

/// Runs a route's declared middlewares around the handler action.
///
/// # Example
///
/// ```
/// use talaria_core::RequestContext;
/// use talaria_middleware::{
///     Flow, FnExecutor, Middleware, MiddlewareDispatcher, MiddlewarePartition,
///     MiddlewareRegistry, MiddlewareTable,
/// };
/// use talaria_core::RouteIdentifier;
///
/// let id = RouteIdentifier::for_handler("Api::UsersController", "index");
/// let mut table = MiddlewareTable::new();
/// table.insert(id, MiddlewarePartition::from_middlewares([Middleware::new("auth")]));
///
/// let registry = MiddlewareRegistry::new()
///     .with_executor("auth", FnExecutor::new(|_ctx, _params| Flow::Continue));
///
/// let dispatcher = MiddlewareDispatcher::new(table, registry);
///
/// let mut ctx = RequestContext::new().with_active_handler("Api::UsersController", "index");
/// assert!(dispatcher.run_before(&mut ctx).is_continue());
/// ```
#[derive(Debug)]
pub struct MiddlewareDispatcher {
    table: MiddlewareTable,
    registry: MiddlewareRegistry,
}

impl MiddlewareDispatcher {
    /// Creates a dispatcher over a compiled table and a wired registry.
    #[must_use]
    pub fn new(table: MiddlewareTable, registry: MiddlewareRegistry) -> Self {
        Self { table, registry }
    }

    /// Returns the middleware lookup table.
    #[must_use]
    pub const fn table(&self) -> &MiddlewareTable {
        &self.table
    }

    /// Returns the executor registry.
    #[must_use]
    pub const fn registry(&self) -> &MiddlewareRegistry {
        &self.registry
    }

    /// Runs the before-phase chain for the context's active route.
    ///
    /// Returns [`Flow::Abort`] as soon as any executor aborts; the handler
    /// action and the remaining before-middlewares must not run in that case.
    pub fn run_before(&self, ctx: &mut RequestContext) -> Flow {
        self.run_phase(Phase::Before, ctx)
    }

    /// Runs the after-phase chain for the context's active route.
    ///
    /// Symmetric to [`Self::run_before`]; an abort stops the remaining
    /// after-middlewares.
    pub fn run_after(&self, ctx: &mut RequestContext) -> Flow {
        self.run_phase(Phase::After, ctx)
    }

    fn run_phase(&self, phase: Phase, ctx: &mut RequestContext) -> Flow {
        let Some(identifier) = Self::active_identifier(ctx) else {
            debug!(
                request_id = %ctx.request_id(),
                "no active handler recorded, middleware dispatch skipped"
            );
            return Flow::Continue;
        };

        let Some(partition) = self.table.get(&identifier) else {
            debug!(
                request_id = %ctx.request_id(),
                identifier = %identifier,
                "no middlewares registered for route"
            );
            return Flow::Continue;
        };

        for middleware in partition.phase(phase) {
            let Some(executor) = self.registry.get(middleware.key()) else {
                debug!(
                    identifier = %identifier,
                    key = middleware.key(),
                    "middleware key not in registry, skipping"
                );
                continue;
            };

            if executor.execute(ctx, middleware.parameters()).is_abort() {
                debug!(
                    request_id = %ctx.request_id(),
                    identifier = %identifier,
                    key = middleware.key(),
                    phase = %phase,
                    "middleware aborted the chain"
                );
                return Flow::Abort;
            }
        }

        Flow::Continue
    }

    /// Derives the route identifier from the context's active handler pair.
    fn active_identifier(ctx: &RequestContext) -> Option<RouteIdentifier> {
        match (ctx.handler(), ctx.action()) {
            (Some(handler), Some(action)) => Some(RouteIdentifier::for_handler(handler, action)),
            _ => None,
        }
    }
}
