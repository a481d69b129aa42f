//! HTTP method sets for route declarations.
//!
//! This module defines which methods a route may be restricted to and the
//! [`ViaMethods`] conversions accepted by [`Route::with_via`]. Anything
//! outside [`SUPPORTED_METHODS`] is dropped by set intersection rather than
//! rejected, so callers can pass through method lists from config without
//! pre-filtering.
//!
//! [`Route::with_via`]: crate::Route::with_via

use http::Method;

/// Methods a route's `via` set may contain.
///
/// HEAD and OPTIONS are accepted into the set but have no REST convention
/// row, so they never produce bindings on their own.
pub const SUPPORTED_METHODS: [Method; 7] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
    Method::HEAD,
    Method::OPTIONS,
];

/// The method set assigned to a route that never restricted `via`.
pub const DEFAULT_METHODS: [Method; 5] = [
    Method::POST,
    Method::GET,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
];

/// Returns true if the method may appear in a route's `via` set.
#[must_use]
pub fn is_supported(method: &Method) -> bool {
    SUPPORTED_METHODS.contains(method)
}

/// Conversion accepted by `via` setters.
///
/// Implemented for single methods, ordered lists, and compact
/// `"get|put|post"` token strings (case-insensitive). Tokens that do not
/// parse as an HTTP method are dropped, like any other unsupported method.
///
/// # Example
///
/// ```
/// use http::Method;
/// use talaria_router::ViaMethods;
///
/// assert_eq!("get|put".into_methods(), [Method::GET, Method::PUT]);
/// assert_eq!(Method::POST.into_methods(), [Method::POST]);
/// assert_eq!(
///     vec!["get", "delete"].into_methods(),
///     [Method::GET, Method::DELETE],
/// );
/// ```
pub trait ViaMethods {
    /// Converts the value into an ordered method list.
    ///
    /// The list is raw: duplicates and unsupported methods are preserved
    /// here and filtered by the route's set intersection.
    fn into_methods(self) -> Vec<Method>;
}

impl ViaMethods for Method {
    fn into_methods(self) -> Vec<Method> {
        vec![self]
    }
}

impl ViaMethods for &Method {
    fn into_methods(self) -> Vec<Method> {
        vec![self.clone()]
    }
}

impl ViaMethods for &str {
    fn into_methods(self) -> Vec<Method> {
        self.split('|')
            .filter_map(|token| {
                Method::from_bytes(token.trim().to_ascii_uppercase().as_bytes()).ok()
            })
            .collect()
    }
}

impl ViaMethods for String {
    fn into_methods(self) -> Vec<Method> {
        self.as_str().into_methods()
    }
}

impl<T: ViaMethods> ViaMethods for Vec<T> {
    fn into_methods(self) -> Vec<Method> {
        self.into_iter().flat_map(ViaMethods::into_methods).collect()
    }
}

impl<T: ViaMethods, const N: usize> ViaMethods for [T; N] {
    fn into_methods(self) -> Vec<Method> {
        self.into_iter().flat_map(ViaMethods::into_methods).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_methods_cover_defaults() {
        for method in DEFAULT_METHODS {
            assert!(is_supported(&method));
        }
    }

    #[test]
    fn test_trace_and_connect_are_unsupported() {
        assert!(!is_supported(&Method::TRACE));
        assert!(!is_supported(&Method::CONNECT));
    }

    #[test]
    fn test_single_method_conversion() {
        assert_eq!(Method::GET.into_methods(), [Method::GET]);
        assert_eq!((&Method::PUT).into_methods(), [Method::PUT]);
    }

    #[test]
    fn test_pipe_string_is_case_insensitive() {
        assert_eq!(
            "get|PUT|Post".into_methods(),
            [Method::GET, Method::PUT, Method::POST],
        );
    }

    #[test]
    fn test_pipe_string_drops_unparseable_tokens() {
        assert_eq!("get||put".into_methods(), [Method::GET, Method::PUT]);
    }

    #[test]
    fn test_list_conversions_flatten() {
        assert_eq!(
            vec![Method::GET, Method::DELETE].into_methods(),
            [Method::GET, Method::DELETE],
        );
        assert_eq!(
            ["get", "delete"].into_methods(),
            [Method::GET, Method::DELETE],
        );
    }
}
