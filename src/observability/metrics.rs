//! Routing metrics.
//!
//! # Metrics
//! - `regtree_routes_registered_total` (counter): endpoints added, by method
//! - `regtree_lookups_total` (counter): lookups by method and result
//! - `regtree_named_routes` (gauge): size of the name registry
//!
//! # Design Decisions
//! - Emitted through the `metrics` facade; no-ops until a recorder is set
//! - Result label is `hit` or `miss`, never the path, to bound cardinality
//! - Methods outside [`Method`] share the `other` label

use crate::routing::Method;

/// Method label for lookups with an unrecognised method.
pub const OTHER_METHOD: &str = "other";

pub fn record_route_registered(method: Method) {
    ::metrics::counter!(
        "regtree_routes_registered_total",
        "method" => method.as_str()
    )
    .increment(1);
}

/// `None` records the lookup under [`OTHER_METHOD`].
pub fn record_lookup(method: Option<Method>, hit: bool) {
    ::metrics::counter!(
        "regtree_lookups_total",
        "method" => method.map_or(OTHER_METHOD, Method::as_str),
        "result" => if hit { "hit" } else { "miss" }
    )
    .increment(1);
}

pub fn record_named_routes(count: usize) {
    ::metrics::gauge!("regtree_named_routes").set(count as f64);
}
