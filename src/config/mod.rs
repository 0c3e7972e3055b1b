//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! route table file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RegtreeConfig (validated, immutable)
//!     → Router::from_config (registration)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Handlers are named by identifier; binding them to code is up to the
//!   application

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{GroupConfig, LogFormat, ObservabilityConfig, RegtreeConfig, RouteConfig, RouterConfig};
pub use validation::{validate_config, ValidationError};
