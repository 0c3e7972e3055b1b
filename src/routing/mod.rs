//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (method, pattern, handlers):
//!     → router.rs (group expansion, auto HEAD / trailing slash)
//!     → tree.rs (method trie insert, node splitting)
//!     → pattern.rs (compile placeholders into a regex segment)
//!     → RouteHandle (template for naming and URL rendering)
//!
//! Lookup (method, path, sink):
//!     → router.rs (load current route table)
//!     → tree.rs (static children first, then regex children)
//!     → params.rs (sink receives captured parameters)
//!     → RouteMatch (handlers, name) or None
//! ```
//!
//! # Design Decisions
//! - Static continuations always win over regex ones at the same node
//! - Regex siblings are tried in registration order
//! - A lookup miss is `None`, never an error

pub mod method;
pub mod params;
pub mod pattern;
pub mod router;
pub mod template;
pub mod tree;
pub mod types;

pub use method::Method;
pub use params::{Discard, ParamSink, Params};
pub use router::{Group, RouteHandle, RouteTable, Router};
pub use template::Template;
pub use types::{HandlerChain, RenderError, RouteError, RouteMatch, RouteResult};
