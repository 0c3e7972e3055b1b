//! Shared utilities for integration tests.

#![allow(dead_code)]

use regtree::{ParamSink, Router};

/// Binding sink that records every call, in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<(String, String)>,
}

impl ParamSink for RecordingSink {
    fn set_param(&mut self, name: &str, value: &str) {
        self.calls.push((name.to_string(), value.to_string()));
    }
}

impl RecordingSink {
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.calls
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }
}

/// A small blog application's route table.
pub fn blog_router() -> Router<&'static str> {
    let router = Router::new();
    router.get("/", vec!["home"]).unwrap();
    router.get("/users/new", vec!["users.new"]).unwrap();
    router.get("/users/:id", vec!["users.show"]).unwrap();
    router
        .get("/users/:id/posts/:postId", vec!["posts.show"])
        .unwrap();
    let post = router.get("/blog/:year(int)/:month(int)", vec!["blog.month"]).unwrap();
    router.name(&post, "post");
    router.get("/static/*", vec!["assets"]).unwrap();
    router.post("/users", vec!["users.create"]).unwrap();
    router
}

/// Route table file exercising groups, names and policy flags.
pub const ROUTES_TOML: &str = r#"
[router]
auto_head = true
auto_trailing_slash = false

[observability]
log_level = "debug"

[[routes]]
method = "GET"
path = "/"
name = "home"
handlers = ["home"]

[[groups]]
prefix = "/api"
handlers = ["auth"]

[[groups.routes]]
method = "POST"
path = "/login"
handlers = ["login"]

[[groups.groups]]
prefix = "/v1"
handlers = ["v1"]

[[groups.groups.routes]]
method = "GET"
path = "/users/:id(int)"
name = "user"
handlers = ["users.show"]
"#;
