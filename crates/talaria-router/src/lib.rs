//! Declarative route definitions and REST convention compilation for
//! Talaria.
//!
//! This crate turns abstract endpoint declarations into the concrete
//! bindings a host framework mounts. A [`Route`] names a path, an optional
//! prefix/namespace/controller/action, an allowed method set, and middleware
//! notations; convention fills everything left unset and expands the route
//! into per-action [`Collection`]s. A [`RouteGroup`] compiles many routes
//! under shared cascading defaults.
//!
//! # Pipeline
//!
//! ```text
//! Route / RouteGroup ──► populate defaults ──► convention expansion
//!                                                     │
//!          MiddlewareTable ◄── middleware_table ◄── Collections
//!                 │                                   │
//!            dispatcher                        host URL engine
//! ```
//!
//! # Convention
//!
//! A route expands through a fixed table, one binding per row whose method
//! is in the route's `via` set:
//!
//! | Method | Pattern                  | Action   |
//! |--------|--------------------------|----------|
//! | POST   | route pattern            | `create` |
//! | GET    | route pattern            | `index`  |
//! | GET    | pattern + `/{id:[0-9]+}` | `show`   |
//! | PUT    | pattern + `/{id:[0-9]+}` | `edit`   |
//! | PATCH  | pattern + `/{id:[0-9]+}` | `edit`   |
//! | DELETE | pattern + `/{id:[0-9]+}` | `delete` |
//!
//! # Example
//!
//! ```
//! use talaria_router::{middleware_table, Route, RouteGroup};
//! use talaria_core::RouteIdentifier;
//!
//! let collections = RouteGroup::new([
//!     Route::get("/users").with_middleware("auth"),
//!     Route::post("/sessions"),
//! ])
//! .with_default_namespace("Api")
//! .to_collections()?;
//!
//! let table = middleware_table(&collections);
//! let id = RouteIdentifier::for_handler("Api::UsersController", "index");
//! assert!(table.contains(&id));
//! # Ok::<(), talaria_core::TalariaError>(())
//! ```
//!
//! Compilation is a one-time startup transformation; the resulting
//! collections and table are immutable values the request path only reads.

#![doc(html_root_url = "https://docs.rs/talaria-router/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod collection;
pub mod convention;
mod group;
mod method;
mod route;

pub use collection::{middleware_table, Collection};
pub use convention::{CompiledBinding, Scope, ITEM_SUFFIX};
pub use group::RouteGroup;
pub use method::{is_supported, ViaMethods, DEFAULT_METHODS, SUPPORTED_METHODS};
pub use route::Route;
