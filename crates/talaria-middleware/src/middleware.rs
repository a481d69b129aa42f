//! Middleware value object and lifecycle phase.
//!
//! A [`Middleware`] is the declarative side of a middleware attachment: it
//! names a key registered elsewhere, the [`Phase`] it runs in, and the
//! parameters handed to the executor per invocation. Values are produced by
//! the notation parser during route compilation and are immutable afterwards.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use talaria_core::TalariaError;

/// When, relative to the handler action, a middleware executes.
///
/// Defaults to [`Phase::Before`] when a notation leaves the phase out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Runs prior to the matched handler action.
    #[default]
    Before,
    /// Runs after the matched handler action.
    After,
}

impl Phase {
    /// Returns the phase token as it appears in notations.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Before => "before",
            Self::After => "after",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = TalariaError;

    /// Parses an explicit phase token. Tokens are case-sensitive; anything
    /// other than `before` or `after` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "before" => Ok(Self::Before),
            "after" => Ok(Self::After),
            other => Err(TalariaError::validation(format!(
                "only before and after are accepted phases, got '{other}'"
            ))),
        }
    }
}

/// One declared middleware attachment on a route.
///
/// # Example
///
/// ```
/// use talaria_middleware::{Middleware, Phase};
///
/// let middleware = Middleware::new("throttle")
///     .with_phase(Phase::Before)
///     .with_parameters(["10", "60"]);
///
/// assert_eq!(middleware.key(), "throttle");
/// assert_eq!(middleware.parameters(), ["10", "60"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Middleware {
    /// Key identifying an executor registered elsewhere.
    key: String,
    /// Lifecycle phase this middleware runs in.
    phase: Phase,
    /// Ordered parameters handed to the executor on every invocation.
    parameters: Vec<String>,
}

impl Middleware {
    /// Creates a middleware for `key` with the default phase and no
    /// parameters.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            phase: Phase::default(),
            parameters: Vec::new(),
        }
    }

    /// Returns a copy with the given phase.
    #[must_use]
    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    /// Returns a copy with the given parameter list.
    #[must_use]
    pub fn with_parameters(
        mut self,
        parameters: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.parameters = parameters.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the middleware key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the declared parameters.
    #[must_use]
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }
}
