//! REST convention expansion.
//!
//! One declared route expands into concrete bindings through a single static
//! table, one row per (method, scope) pair:
//!
//! | Method | Scope      | Pattern                  | Default action |
//! |--------|------------|--------------------------|----------------|
//! | POST   | collection | route pattern            | `create`       |
//! | GET    | collection | route pattern            | `index`        |
//! | GET    | item       | pattern + `/{id:[0-9]+}` | `show`         |
//! | PUT    | item       | pattern + `/{id:[0-9]+}` | `edit`         |
//! | PATCH  | item       | pattern + `/{id:[0-9]+}` | `edit`         |
//! | DELETE | item       | pattern + `/{id:[0-9]+}` | `delete`       |
//!
//! Row order is fixed and determines binding order. Rows whose method is not
//! in the route's `via` set produce nothing; an explicit action override
//! replaces the default action on every produced binding.

use http::Method;

/// Path suffix for item-scoped bindings, a single decimal-digit parameter.
pub const ITEM_SUFFIX: &str = "/{id:[0-9]+}";

/// Whether a convention row targets the whole collection or a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The route pattern as declared.
    Collection,
    /// The route pattern with [`ITEM_SUFFIX`] appended.
    Item,
}

/// One row of the convention table.
struct ConventionRow {
    method: Method,
    scope: Scope,
    action: &'static str,
}

const CONVENTION: [ConventionRow; 6] = [
    ConventionRow {
        method: Method::POST,
        scope: Scope::Collection,
        action: "create",
    },
    ConventionRow {
        method: Method::GET,
        scope: Scope::Collection,
        action: "index",
    },
    ConventionRow {
        method: Method::GET,
        scope: Scope::Item,
        action: "show",
    },
    ConventionRow {
        method: Method::PUT,
        scope: Scope::Item,
        action: "edit",
    },
    ConventionRow {
        method: Method::PATCH,
        scope: Scope::Item,
        action: "edit",
    },
    ConventionRow {
        method: Method::DELETE,
        scope: Scope::Item,
        action: "delete",
    },
];

/// One concrete (method, pattern, action) binding produced by expansion.
///
/// Bindings are what the host framework mounts into its URL-matching engine;
/// the action also names the handler method the framework invokes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledBinding {
    /// HTTP method the binding answers to.
    pub method: Method,
    /// Full URL pattern, prefix included.
    pub pattern: String,
    /// Handler action name.
    pub action: String,
}

/// Expands a route pattern and `via` set into ordered bindings.
///
/// `action_override`, when present, is applied uniformly to every binding.
///
/// # Example
///
/// ```
/// use http::Method;
/// use talaria_router::convention::expand;
///
/// let bindings = expand("/users", &[Method::GET], None);
/// assert_eq!(bindings.len(), 2);
/// assert_eq!(bindings[0].pattern, "/users");
/// assert_eq!(bindings[0].action, "index");
/// assert_eq!(bindings[1].pattern, "/users/{id:[0-9]+}");
/// assert_eq!(bindings[1].action, "show");
/// ```
#[must_use]
pub fn expand(
    pattern: &str,
    via: &[Method],
    action_override: Option<&str>,
) -> Vec<CompiledBinding> {
    let mut bindings = Vec::new();
    for row in &CONVENTION {
        if !via.contains(&row.method) {
            continue;
        }
        let full_pattern = match row.scope {
            Scope::Collection => pattern.to_string(),
            Scope::Item => format!("{pattern}{ITEM_SUFFIX}"),
        };
        bindings.push(CompiledBinding {
            method: row.method.clone(),
            pattern: full_pattern,
            action: action_override.unwrap_or(row.action).to_string(),
        });
    }
    bindings
}
