//! # Talaria Core
//!
//! Core types for the Talaria routing toolkit.
//!
//! This crate provides the foundational types shared by the route compiler
//! and the middleware dispatcher:
//!
//! - [`RequestContext`] - Per-request context carrying the active handler and metadata
//! - [`RequestId`] - UUID v7 request identifier
//! - [`RouteIdentifier`] - Deterministic endpoint-to-middleware lookup key
//! - [`TalariaError`] - Standard error types

#![doc(html_root_url = "https://docs.rs/talaria-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod context;
mod error;
pub mod identity;

pub use context::{RequestContext, RequestId};
pub use error::{ErrorCategory, TalariaError, TalariaResult};
pub use identity::RouteIdentifier;
