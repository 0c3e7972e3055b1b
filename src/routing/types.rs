//! Routing types and error definitions.

use std::sync::Arc;

use thiserror::Error;

/// Errors raised while registering routes.
///
/// All of them are caller mistakes detected at wiring time; none can occur
/// while matching requests.
#[derive(Debug, Error)]
pub enum RouteError {
    /// Method is not one of the supported HTTP methods.
    #[error("unsupported http method [{0}]")]
    UnsupportedMethod(String),

    /// Pattern expanded to the empty string.
    #[error("pattern can not be empty")]
    EmptyPattern,

    /// Pattern does not start with `/`.
    #[error("pattern must begin with '/': {0}")]
    UnrootedPattern(String),

    /// A route with the same full pattern already exists.
    #[error("the route already exists: {0}")]
    Duplicate(String),

    /// A `:name(` capture rule has no closing parenthesis.
    #[error("unclosed capture rule in pattern: {0}")]
    UnclosedRule(String),

    /// The assembled capture expression is not a valid regex.
    #[error("invalid capture rule in pattern {pattern}: {source}")]
    InvalidRule {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Errors raised while rendering a URL from a named route.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// No route was registered under this name.
    #[error("no route named {0:?}")]
    UnknownRoute(String),

    /// Fewer arguments than the template has placeholders.
    #[error("route {name:?} expects {expected} arguments, got {given}")]
    MissingArguments {
        name: String,
        expected: usize,
        given: usize,
    },
}

/// Result type for route registration.
pub type RouteResult<T> = Result<T, RouteError>;

/// Identifies one registered endpoint inside a route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteId(pub(crate) usize);

/// Handler chain as stored by the router. Cloning only bumps a refcount.
pub type HandlerChain<H> = Arc<[H]>;

/// Outcome of a successful lookup.
#[derive(Debug, Clone)]
pub struct RouteMatch<H> {
    /// Handlers bound to the route, unmodified.
    pub handlers: HandlerChain<H>,
    /// Name given to the route, if any.
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RouteError::Duplicate("/a/b".into());
        assert_eq!(err.to_string(), "the route already exists: /a/b");

        let err = RenderError::MissingArguments {
            name: "post".into(),
            expected: 2,
            given: 1,
        };
        assert!(err.to_string().contains("expects 2"));
    }
}
