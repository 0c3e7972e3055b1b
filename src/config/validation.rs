//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject unsupported methods and patterns not rooted at `/`
//! - Detect route names used twice
//! - Validate the log level
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Duplicate patterns are left to the router, which sees the fully
//!   expanded trie
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::{GroupConfig, RegtreeConfig, RouteConfig};
use crate::routing::Method;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A semantic problem in a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unsupported method {method:?} for {path}")]
    UnsupportedMethod { method: String, path: String },

    #[error("pattern must begin with '/': {0:?}")]
    UnrootedPath(String),

    #[error("route name {0:?} is used more than once")]
    DuplicateName(String),

    #[error("unknown log level {0:?}")]
    LogLevel(String),
}

/// Check a parsed configuration.
pub fn validate_config(config: &RegtreeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut names = HashSet::new();

    if !LOG_LEVELS.contains(&config.observability.log_level.to_ascii_lowercase().as_str()) {
        errors.push(ValidationError::LogLevel(config.observability.log_level.clone()));
    }

    for route in &config.routes {
        check_route("", route, &mut names, &mut errors);
    }
    for group in &config.groups {
        check_group("", group, &mut names, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_group(
    prefix: &str,
    group: &GroupConfig,
    names: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    let prefix = format!("{}{}", prefix, group.prefix);
    for route in &group.routes {
        check_route(&prefix, route, names, errors);
    }
    for nested in &group.groups {
        check_group(&prefix, nested, names, errors);
    }
}

fn check_route(
    prefix: &str,
    route: &RouteConfig,
    names: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    let path = format!("{}{}", prefix, route.path);

    if route.method.parse::<Method>().is_err() {
        errors.push(ValidationError::UnsupportedMethod {
            method: route.method.clone(),
            path: path.clone(),
        });
    }
    if !path.starts_with('/') {
        errors.push(ValidationError::UnrootedPath(path));
    }
    if let Some(name) = route.name.as_deref().filter(|n| !n.is_empty()) {
        if !names.insert(name.to_string()) {
            errors.push(ValidationError::DuplicateName(name.to_string()));
        }
    }
}
