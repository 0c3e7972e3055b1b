//! Regex-capable radix-tree URL router.
//!
//! Routes are registered per HTTP method with `:name`, `:name(rule)` and
//! `*` placeholders; lookups return the handler chain bound to the route
//! and bind extracted parameters into a caller-supplied sink. Named routes
//! render back into URLs.

pub mod config;
pub mod observability;
pub mod routing;

pub use config::RegtreeConfig;
pub use routing::{
    Discard, Group, Method, ParamSink, Params, RenderError, RouteError, RouteHandle, RouteMatch,
    Router,
};
