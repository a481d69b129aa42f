//! # Talaria
//!
//! **Declarative Routing and Middleware Dispatch for the Themis Platform**
//!
//! Talaria compiles abstract endpoint declarations into concrete REST
//! bindings and resolves per-route middlewares at request time:
//!
//! - **Convention over Configuration** – One declaration expands into the
//!   full CRUD surface through a fixed table
//! - **Cascading Defaults** – Groups fill prefix, namespace, and action only
//!   where a route left them unset
//! - **Compact Notations** – Middlewares attach as `key@phase:params`
//!   strings, validated at startup
//! - **Deterministic Identifiers** – One slug algorithm links compiled
//!   routes to their middlewares at request time
//! - **Short-Circuit Dispatch** – Any middleware can abort the chain before
//!   or after the handler action
//!
//! ## Quick Start
//!
//! ```rust
//! use talaria::prelude::*;
//!
//! // Declare endpoints; convention derives controllers and actions.
//! let collections = RouteGroup::new([
//!     Route::get("/users").with_middleware("throttle:10,60"),
//!     Route::post("/sessions"),
//! ])
//! .with_default_namespace("Api")
//! .with_middleware("auth")
//! .to_collections()?;
//!
//! // Wire executors and build the dispatch table.
//! let registry = MiddlewareRegistry::new()
//!     .with_executor("auth", FnExecutor::new(|_ctx, _params| Flow::Continue))
//!     .with_executor("throttle", FnExecutor::new(|_ctx, _params| Flow::Continue));
//! let dispatcher = MiddlewareDispatcher::new(middleware_table(&collections), registry);
//!
//! // Per request: the host records the matched handler, then dispatches.
//! let mut ctx = RequestContext::new().with_active_handler("Api::UsersController", "index");
//! assert!(dispatcher.run_before(&mut ctx).is_continue());
//! assert!(dispatcher.run_after(&mut ctx).is_continue());
//! # Ok::<(), talaria::core::TalariaError>(())
//! ```
//!
//! ## Architecture
//!
//! Compilation happens once at startup; dispatch reads the compiled table on
//! every request:
//!
//! ```text
//! Route / RouteGroup ──► convention compiler ──► Collections ──► host mounts
//!                                                     │
//!                                              MiddlewareTable
//!                                                     │
//! request ──► run_before ──► handler action ──► run_after
//! ```

#![doc(html_root_url = "https://docs.rs/talaria/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use talaria_core as core;

// Re-export middleware types
pub use talaria_middleware as middleware;

// Re-export router types
pub use talaria_router as router;

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use talaria::prelude::*;
/// ```
pub mod prelude {
    pub use talaria_core::{
        ErrorCategory, RequestContext, RequestId, RouteIdentifier, TalariaError, TalariaResult,
    };

    // Re-export the middleware surface
    pub use talaria_middleware::{
        Executor, Flow, FnExecutor, Middleware, MiddlewareDispatcher, MiddlewarePartition,
        MiddlewareRegistry, MiddlewareTable, Phase,
    };

    // Re-export the routing surface
    pub use talaria_router::{
        middleware_table, Collection, CompiledBinding, Route, RouteGroup, ViaMethods,
    };
}
