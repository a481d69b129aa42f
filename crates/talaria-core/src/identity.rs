//! Route identity.
//!
//! A [`RouteIdentifier`] links a compiled endpoint to its middleware lists.
//! It is derived once at compile time, when a collection is built from a
//! route, and recomputed at request time from the host framework's active
//! handler and action. Both call sites go through
//! [`RouteIdentifier::for_handler`], which keeps the two computations from
//! ever drifting apart.

use serde::{Deserialize, Serialize};

/// Separator used between slug words.
const SEPARATOR: char = '-';

/// Slugs an arbitrary string into a stable lookup key.
///
/// Lower-cases ASCII letters, collapses every run of non-ASCII-alphanumeric
/// characters into a single `-`, and trims leading/trailing separators. The
/// function is pure: the same input always yields the same output.
///
/// # Example
///
/// ```
/// use talaria_core::identity::slug;
///
/// assert_eq!(slug("Api::V1::UsersController-index"), "api-v1-userscontroller-index");
/// assert_eq!(slug("  Leads Controller  "), "leads-controller");
/// ```
#[must_use]
pub fn slug(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with(SEPARATOR) {
            out.push(SEPARATOR);
        }
    }
    if out.ends_with(SEPARATOR) {
        out.pop();
    }
    out
}

/// Deterministic identifier tying a compiled endpoint to its middlewares.
///
/// The identifier is keyed on the handler identity string and the action of
/// the first binding registered in a collection. The middleware lookup table
/// is indexed by it at startup, and the dispatcher recomputes it per request
/// from the active handler; the two agree because both use this constructor.
///
/// # Example
///
/// ```
/// use talaria_core::RouteIdentifier;
///
/// let compile_time = RouteIdentifier::for_handler("Api::UsersController", "index");
/// let request_time = RouteIdentifier::for_handler("Api::UsersController", "index");
/// assert_eq!(compile_time, request_time);
/// assert_eq!(compile_time.as_str(), "api-userscontroller-index");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteIdentifier(String);

impl RouteIdentifier {
    /// Derives the identifier for a (handler, action) pair.
    ///
    /// The handler string is joined to the action with `-` and the result is
    /// slugged. A leading namespace separator on the handler (unset
    /// namespace) disappears during slugging.
    #[must_use]
    pub fn for_handler(handler: &str, action: &str) -> Self {
        Self(slug(&format!("{handler}{SEPARATOR}{action}")))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RouteIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RouteIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<RouteIdentifier> for String {
    fn from(identifier: RouteIdentifier) -> Self {
        identifier.0
    }
}
