//! # Talaria Middleware
//!
//! Middleware declaration, parsing, and dispatch for the Talaria router.
//!
//! This crate covers both halves of the middleware life cycle. At compile
//! time, string notations attached to route declarations are parsed into
//! structured [`Middleware`] values and partitioned per route into a
//! [`MiddlewareTable`]. At request time, a [`MiddlewareDispatcher`] looks up
//! the active route's partition and runs its executors around the handler
//! action.
//!
//! ## Life Cycle
//!
//! ```text
//! "throttle@before:10,60" ── parse ──► Middleware ── partition ──► MiddlewareTable
//!                                                                        │
//! request ──► run_before ──► handler action ──► run_after ◄── lookup ────┘
//!                │                                  │
//!                └───── Flow::Abort stops the chain ┘
//! ```
//!
//! ## Notation
//!
//! Notations follow `<key>[@<phase>][:<p1>[,<p2>...]]`:
//!
//! | Notation                | Key        | Phase  | Parameters     |
//! |-------------------------|------------|--------|----------------|
//! | `auth`                  | `auth`     | before | none           |
//! | `auth@after`            | `auth`     | after  | none           |
//! | `throttle:10,60`        | `throttle` | before | `10`, `60`     |
//! | `throttle@before:10,60` | `throttle` | before | `10`, `60`     |
//!
//! The phase defaults to `before`; anything other than `before` or `after`
//! is a validation error, as is an empty key.
//!
//! ## Example
//!
//! ```
//! use talaria_middleware::{notation, Flow, FnExecutor, MiddlewareRegistry, Phase};
//!
//! let middleware = notation::parse_notation("throttle@after:10,60")?;
//! assert_eq!(middleware.key(), "throttle");
//! assert_eq!(middleware.phase(), Phase::After);
//! assert_eq!(middleware.parameters(), ["10", "60"]);
//!
//! let registry = MiddlewareRegistry::new()
//!     .with_executor("throttle", FnExecutor::new(|_ctx, _params| Flow::Continue));
//! assert!(registry.contains_key("throttle"));
//! # Ok::<(), talaria_core::TalariaError>(())
//! ```
//!
//! ## Resolution
//!
//! Executors are registered by key at wiring time. A notation whose key has
//! no registered executor is not an error; the dispatcher skips it and logs
//! at debug level, so routes can name middlewares that only some deployments
//! install.

#![doc(html_root_url = "https://docs.rs/talaria-middleware/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod dispatcher;
mod executor;
mod middleware;
pub mod notation;
mod registry;
mod table;

pub use dispatcher::MiddlewareDispatcher;
pub use executor::{Executor, Flow, FnExecutor};
pub use middleware::{Middleware, Phase};
pub use registry::MiddlewareRegistry;
pub use table::{MiddlewarePartition, MiddlewareTable};
