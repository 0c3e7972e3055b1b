//! Configuration schema definitions.
//!
//! A route table file declares router policy, logging, and the routes
//! themselves, either flat or nested in groups. All types derive Serde
//! traits for deserialization from TOML.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RegtreeConfig {
    /// Registration policy.
    pub router: RouterConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,

    /// Routes outside any group.
    pub routes: Vec<RouteConfig>,

    /// Route groups sharing a prefix and leading handlers.
    pub groups: Vec<GroupConfig>,
}

/// Registration policy applied to every route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Register HEAD alongside every GET route.
    pub auto_head: bool,

    /// Register `/path/` alongside `/path`, and the other way round.
    pub auto_trailing_slash: bool,
}

/// One route declaration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// HTTP method, upper case.
    pub method: String,

    /// Pattern, relative to the enclosing groups.
    pub path: String,

    /// Name used for reverse lookup.
    #[serde(default)]
    pub name: Option<String>,

    /// Handler identifiers, run after the groups' handlers.
    #[serde(default)]
    pub handlers: Vec<String>,
}

/// A group of routes.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GroupConfig {
    /// Prefix prepended to every nested pattern.
    pub prefix: String,

    /// Handlers prepended to every nested route's chain.
    #[serde(default)]
    pub handlers: Vec<String>,

    #[serde(default)]
    pub routes: Vec<RouteConfig>,

    #[serde(default)]
    pub groups: Vec<GroupConfig>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Output format for log lines.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
