//! Route registration and dispatch.
//!
//! # Responsibilities
//! - Keep one trie per HTTP method, plus the name registry
//! - Expand group prefixes and handler chains at registration
//! - Apply the auto HEAD and trailing-slash policies
//! - Match requests and render URLs for named routes
//!
//! # Design Decisions
//! - Writers serialize on one mutex and publish a fresh copy of the route
//!   table; readers load the current copy without locking
//! - A failed registration publishes nothing, so twins registered by the
//!   auto policies never land half way
//! - Groups are scoped values, not a shared stack

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::sync::{Arc, Mutex, MutexGuard};

use arc_swap::ArcSwap;

use crate::config::{GroupConfig, RegtreeConfig, RouteConfig, RouterConfig};
use crate::observability::metrics;
use crate::routing::method::Method;
use crate::routing::params::ParamSink;
use crate::routing::template::Template;
use crate::routing::tree::{Endpoint, MethodTrie};
use crate::routing::types::{
    HandlerChain, RenderError, RouteError, RouteId, RouteMatch, RouteResult,
};

/// Returned by registration; used to name a route and to inspect its template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteHandle {
    id: RouteId,
    method: Method,
    template: Template,
}

impl RouteHandle {
    pub fn method(&self) -> Method {
        self.method
    }

    /// Registered pattern with one placeholder per parameter.
    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn param_count(&self) -> usize {
        self.template.placeholder_count()
    }
}

#[derive(Debug, Clone)]
struct RouteEntry {
    name: Option<String>,
    template: Template,
}

/// Immutable view of every registered route.
#[derive(Debug, Clone)]
pub struct RouteTable<H> {
    tries: [MethodTrie<H>; Method::COUNT],
    routes: Vec<RouteEntry>,
    names: HashMap<String, RouteId>,
}

impl<H: Clone> Default for RouteTable<H> {
    fn default() -> Self {
        Self {
            tries: std::array::from_fn(|_| MethodTrie::new()),
            routes: Vec::new(),
            names: HashMap::new(),
        }
    }
}

impl<H: Clone> RouteTable<H> {
    fn insert(
        &mut self,
        method: Method,
        pattern: &str,
        handlers: HandlerChain<H>,
    ) -> RouteResult<RouteHandle> {
        let id = RouteId(self.routes.len());
        let trie = &mut self.tries[method.index()];
        let node = trie.insert(pattern, Endpoint { handlers, route: id })?;
        let template = trie.template(node);

        self.routes.push(RouteEntry {
            name: None,
            template: template.clone(),
        });
        Ok(RouteHandle {
            id,
            method,
            template,
        })
    }

    fn set_name(&mut self, handle: &RouteHandle, name: &str) {
        if let Some(entry) = self.routes.get_mut(handle.id.0) {
            entry.name = Some(name.to_string());
            self.names.insert(name.to_string(), handle.id);
        }
    }

    /// Look up `path` under `method`.
    pub fn find<S: ParamSink + ?Sized>(
        &self,
        method: Method,
        path: &str,
        sink: &mut S,
    ) -> Option<RouteMatch<H>> {
        let endpoint = self.tries[method.index()].find(path, sink)?;
        Some(RouteMatch {
            handlers: endpoint.handlers.clone(),
            name: self.routes[endpoint.route.0].name.clone(),
        })
    }

    /// Render the URL of a named route.
    pub fn url_for(&self, name: &str, args: &[&dyn Display]) -> Result<String, RenderError> {
        let entry = self
            .names
            .get(name)
            .map(|id| &self.routes[id.0])
            .filter(|entry| !entry.template.is_empty())
            .ok_or_else(|| RenderError::UnknownRoute(name.to_string()))?;

        entry
            .template
            .render(args)
            .map_err(|given| RenderError::MissingArguments {
                name: name.to_string(),
                expected: entry.template.placeholder_count(),
                given,
            })
    }

    /// Registered patterns per method. Every method is present.
    pub fn routes(&self) -> BTreeMap<Method, Vec<String>> {
        Method::ALL
            .into_iter()
            .map(|method| (method, self.tries[method.index()].routes()))
            .collect()
    }

    /// Named routes with their render templates.
    pub fn named_routes(&self) -> BTreeMap<String, String> {
        self.names
            .iter()
            .map(|(name, id)| (name.clone(), self.routes[id.0].template.to_string()))
            .collect()
    }

    /// Number of registered endpoints, twins included.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// The router: per-method tries, a name registry and registration policy.
pub struct Router<H> {
    config: Mutex<RouterConfig>,
    table: ArcSwap<RouteTable<H>>,
}

impl<H: Clone> Default for Router<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Clone> Router<H> {
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            config: Mutex::new(config),
            table: ArcSwap::from_pointee(RouteTable::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RouterConfig> {
        self.config.lock().expect("router mutex poisoned")
    }

    /// Register HEAD alongside every GET route added from now on.
    pub fn set_auto_head(&self, enabled: bool) {
        self.lock().auto_head = enabled;
    }

    /// Register the trailing-slash twin of every route added from now on.
    pub fn set_auto_trailing_slash(&self, enabled: bool) {
        self.lock().auto_trailing_slash = enabled;
    }

    pub fn config(&self) -> RouterConfig {
        self.lock().clone()
    }

    /// Register `pattern` under `method`.
    pub fn add(&self, method: &str, pattern: &str, handlers: Vec<H>) -> RouteResult<RouteHandle> {
        self.register(method.parse()?, "", &[], pattern, handlers)
    }

    pub fn get(&self, pattern: &str, handlers: Vec<H>) -> RouteResult<RouteHandle> {
        self.register(Method::Get, "", &[], pattern, handlers)
    }

    pub fn post(&self, pattern: &str, handlers: Vec<H>) -> RouteResult<RouteHandle> {
        self.register(Method::Post, "", &[], pattern, handlers)
    }

    pub fn put(&self, pattern: &str, handlers: Vec<H>) -> RouteResult<RouteHandle> {
        self.register(Method::Put, "", &[], pattern, handlers)
    }

    pub fn delete(&self, pattern: &str, handlers: Vec<H>) -> RouteResult<RouteHandle> {
        self.register(Method::Delete, "", &[], pattern, handlers)
    }

    pub fn patch(&self, pattern: &str, handlers: Vec<H>) -> RouteResult<RouteHandle> {
        self.register(Method::Patch, "", &[], pattern, handlers)
    }

    pub fn options(&self, pattern: &str, handlers: Vec<H>) -> RouteResult<RouteHandle> {
        self.register(Method::Options, "", &[], pattern, handlers)
    }

    pub fn head(&self, pattern: &str, handlers: Vec<H>) -> RouteResult<RouteHandle> {
        self.register(Method::Head, "", &[], pattern, handlers)
    }

    /// Register routes sharing `prefix` and a leading handler chain.
    ///
    /// # Example
    ///
    /// ```
    /// use regtree::Router;
    ///
    /// let router = Router::new();
    /// router
    ///     .group("/api", vec!["auth"], |api| {
    ///         api.group("/v1", vec!["v1"], |v1| {
    ///             v1.get("/ping", vec!["ping"])?;
    ///             Ok(())
    ///         })
    ///     })
    ///     .unwrap();
    ///
    /// let found = router.match_route("GET", "/api/v1/ping", &mut regtree::Discard).unwrap();
    /// assert_eq!(&found.handlers[..], &["auth", "v1", "ping"]);
    /// ```
    pub fn group<F>(&self, prefix: &str, handlers: Vec<H>, f: F) -> RouteResult<()>
    where
        F: FnOnce(&Group<'_, H>) -> RouteResult<()>,
    {
        f(&Group {
            router: self,
            prefix: prefix.to_string(),
            handlers,
        })
    }

    fn register(
        &self,
        method: Method,
        prefix: &str,
        group_handlers: &[H],
        pattern: &str,
        handlers: Vec<H>,
    ) -> RouteResult<RouteHandle> {
        let full = format!("{prefix}{pattern}");
        if full.is_empty() {
            return Err(RouteError::EmptyPattern);
        }
        if !full.starts_with('/') {
            return Err(RouteError::UnrootedPattern(full));
        }
        let chain: HandlerChain<H> = group_handlers.iter().cloned().chain(handlers).collect();

        let config = self.lock();
        let mut table = RouteTable::clone(&self.table.load());

        let twin = if config.auto_trailing_slash {
            toggle_trailing_slash(&full)
        } else {
            None
        };
        let mut methods = vec![method];
        if config.auto_head && method == Method::Get {
            methods.push(Method::Head);
        }

        let handle = table.insert(method, &full, chain.clone())?;
        for &m in &methods {
            if m != method {
                table.insert(m, &full, chain.clone())?;
            }
            if let Some(twin) = &twin {
                table.insert(m, twin, chain.clone())?;
            }
        }

        self.table.store(Arc::new(table));
        drop(config);

        tracing::debug!(
            method = %method,
            pattern = %full,
            params = handle.param_count(),
            handlers = chain.len(),
            "Route registered"
        );
        for m in methods {
            metrics::record_route_registered(m);
        }
        Ok(handle)
    }

    /// Register `handle` under `name`. Empty names are ignored; reusing a
    /// name points it at the newer route.
    pub fn name(&self, handle: &RouteHandle, name: &str) {
        if name.is_empty() {
            return;
        }

        let _config = self.lock();
        let mut table = RouteTable::clone(&self.table.load());
        table.set_name(handle, name);
        let named = table.names.len();
        self.table.store(Arc::new(table));

        tracing::debug!(name = %name, template = %handle.template, "Route named");
        metrics::record_named_routes(named);
    }

    /// Find the route for `method` and `path`, binding parameters into `sink`.
    ///
    /// Unknown methods and unmatched paths both yield `None`.
    pub fn match_route<S: ParamSink + ?Sized>(
        &self,
        method: &str,
        path: &str,
        sink: &mut S,
    ) -> Option<RouteMatch<H>> {
        let Ok(parsed) = method.parse::<Method>() else {
            tracing::trace!(method = %method, path = %path, "Unsupported method");
            metrics::record_lookup(None, false);
            return None;
        };

        let found = self.table.load().find(parsed, path, sink);
        tracing::trace!(method = %parsed, path = %path, hit = found.is_some(), "Route lookup");
        metrics::record_lookup(Some(parsed), found.is_some());
        found
    }

    /// Render the URL of a named route from positional arguments.
    pub fn url_for(&self, name: &str, args: &[&dyn Display]) -> Result<String, RenderError> {
        self.table.load().url_for(name, args)
    }

    pub fn routes(&self) -> BTreeMap<Method, Vec<String>> {
        self.table.load().routes()
    }

    pub fn named_routes(&self) -> BTreeMap<String, String> {
        self.table.load().named_routes()
    }

    /// Current route table; later registrations do not affect it.
    pub fn snapshot(&self) -> Arc<RouteTable<H>> {
        self.table.load_full()
    }
}

/// Registration scope for routes sharing a prefix and leading handlers.
pub struct Group<'r, H> {
    router: &'r Router<H>,
    prefix: String,
    handlers: Vec<H>,
}

impl<H: Clone> Group<'_, H> {
    pub fn add(&self, method: &str, pattern: &str, handlers: Vec<H>) -> RouteResult<RouteHandle> {
        self.register(method.parse()?, pattern, handlers)
    }

    pub fn get(&self, pattern: &str, handlers: Vec<H>) -> RouteResult<RouteHandle> {
        self.register(Method::Get, pattern, handlers)
    }

    pub fn post(&self, pattern: &str, handlers: Vec<H>) -> RouteResult<RouteHandle> {
        self.register(Method::Post, pattern, handlers)
    }

    pub fn put(&self, pattern: &str, handlers: Vec<H>) -> RouteResult<RouteHandle> {
        self.register(Method::Put, pattern, handlers)
    }

    pub fn delete(&self, pattern: &str, handlers: Vec<H>) -> RouteResult<RouteHandle> {
        self.register(Method::Delete, pattern, handlers)
    }

    pub fn patch(&self, pattern: &str, handlers: Vec<H>) -> RouteResult<RouteHandle> {
        self.register(Method::Patch, pattern, handlers)
    }

    pub fn options(&self, pattern: &str, handlers: Vec<H>) -> RouteResult<RouteHandle> {
        self.register(Method::Options, pattern, handlers)
    }

    pub fn head(&self, pattern: &str, handlers: Vec<H>) -> RouteResult<RouteHandle> {
        self.register(Method::Head, pattern, handlers)
    }

    /// Open a nested group; prefixes and handlers concatenate outer first.
    pub fn group<F>(&self, prefix: &str, handlers: Vec<H>, f: F) -> RouteResult<()>
    where
        F: FnOnce(&Group<'_, H>) -> RouteResult<()>,
    {
        let mut chain = self.handlers.clone();
        chain.extend(handlers);
        f(&Group {
            router: self.router,
            prefix: format!("{}{}", self.prefix, prefix),
            handlers: chain,
        })
    }

    /// Name a route registered through this group.
    pub fn name(&self, handle: &RouteHandle, name: &str) {
        self.router.name(handle, name);
    }

    fn register(&self, method: Method, pattern: &str, handlers: Vec<H>) -> RouteResult<RouteHandle> {
        self.router
            .register(method, &self.prefix, &self.handlers, pattern, handlers)
    }
}

impl Router<String> {
    /// Build a router from a route table. Handlers are handler identifiers.
    pub fn from_config(config: &RegtreeConfig) -> RouteResult<Self> {
        let router = Router::with_config(config.router.clone());
        router.group("", Vec::new(), |root| {
            for route in &config.routes {
                add_configured(root, route)?;
            }
            for group in &config.groups {
                add_configured_group(root, group)?;
            }
            Ok(())
        })?;

        tracing::info!(
            endpoints = router.snapshot().len(),
            named = router.named_routes().len(),
            "Route table built"
        );
        Ok(router)
    }
}

fn add_configured(scope: &Group<'_, String>, route: &RouteConfig) -> RouteResult<()> {
    let handle = scope.add(&route.method, &route.path, route.handlers.clone())?;
    if let Some(name) = &route.name {
        scope.name(&handle, name);
    }
    Ok(())
}

fn add_configured_group(scope: &Group<'_, String>, group: &GroupConfig) -> RouteResult<()> {
    scope.group(&group.prefix, group.handlers.clone(), |inner| {
        for route in &group.routes {
            add_configured(inner, route)?;
        }
        for nested in &group.groups {
            add_configured_group(inner, nested)?;
        }
        Ok(())
    })
}

/// `/foo` ↔ `/foo/`; `None` for the root path.
fn toggle_trailing_slash(pattern: &str) -> Option<String> {
    if pattern.len() <= 1 {
        return None;
    }
    match pattern.strip_suffix('/') {
        Some(trimmed) => Some(trimmed.to_string()),
        None => Some(format!("{pattern}/")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::params::{Discard, Params};

    fn handlers(found: &RouteMatch<&'static str>) -> Vec<&'static str> {
        found.handlers.to_vec()
    }

    #[test]
    fn test_add_and_match() {
        let router = Router::new();
        router.add("GET", "/users/:id/posts/:postId", vec!["posts"]).unwrap();

        let mut params = Params::new();
        let found = router
            .match_route("GET", "/users/7/posts/99", &mut params)
            .unwrap();
        assert_eq!(handlers(&found), vec!["posts"]);
        assert_eq!(found.name, None);
        let bound: Vec<(&str, &str)> = params.iter().collect();
        assert_eq!(bound, vec![("id", "7"), ("postId", "99")]);

        assert!(router.match_route("POST", "/users/7/posts/99", &mut Discard).is_none());
        assert!(router.match_route("BREW", "/users/7/posts/99", &mut Discard).is_none());
    }

    #[test]
    fn test_registration_errors() {
        let router: Router<&str> = Router::new();
        assert!(matches!(
            router.add("FETCH", "/x", vec![]),
            Err(RouteError::UnsupportedMethod(_))
        ));
        assert!(matches!(router.add("GET", "", vec![]), Err(RouteError::EmptyPattern)));
        assert!(matches!(
            router.add("GET", "x", vec![]),
            Err(RouteError::UnrootedPattern(_))
        ));

        router.get("/a/b", vec!["h"]).unwrap();
        assert!(matches!(
            router.get("/a/b", vec!["h"]),
            Err(RouteError::Duplicate(_))
        ));
    }

    #[test]
    fn test_empty_handler_chain_is_still_a_route() {
        let router: Router<&str> = Router::new();
        router.get("/noop", vec![]).unwrap();
        let found = router.match_route("GET", "/noop", &mut Discard).unwrap();
        assert!(found.handlers.is_empty());
    }

    #[test]
    fn test_name_and_url_for() {
        let router = Router::new();
        let handle = router.get("/blog/:year/:month", vec!["post"]).unwrap();
        assert_eq!(handle.param_count(), 2);
        assert_eq!(handle.template().to_string(), "/blog/{}/{}");

        router.name(&handle, "post");
        assert_eq!(router.url_for("post", &[&2024, &5]).unwrap(), "/blog/2024/5");

        let found = router.match_route("GET", "/blog/2024/5", &mut Discard).unwrap();
        assert_eq!(found.name.as_deref(), Some("post"));

        assert_eq!(
            router.url_for("post", &[&2024]),
            Err(RenderError::MissingArguments {
                name: "post".into(),
                expected: 2,
                given: 1
            })
        );
        assert_eq!(
            router.url_for("nope", &[]),
            Err(RenderError::UnknownRoute("nope".into()))
        );
    }

    #[test]
    fn test_empty_name_is_ignored_and_last_name_wins() {
        let router = Router::new();
        let a = router.get("/a", vec!["a"]).unwrap();
        let b = router.get("/b", vec!["b"]).unwrap();

        router.name(&a, "");
        assert!(router.named_routes().is_empty());

        router.name(&a, "page");
        router.name(&b, "page");
        assert_eq!(router.url_for("page", &[]).unwrap(), "/b");
        assert_eq!(router.named_routes().len(), 1);
    }

    #[test]
    fn test_nested_groups() {
        let router = Router::new();
        router
            .group("/api", vec!["mw1"], |api| {
                api.group("/v1", vec!["mw2"], |v1| {
                    v1.add("GET", "/ping", vec!["h"])?;
                    Ok(())
                })?;
                api.post("/login", vec!["login"])?;
                Ok(())
            })
            .unwrap();

        let found = router.match_route("GET", "/api/v1/ping", &mut Discard).unwrap();
        assert_eq!(handlers(&found), vec!["mw1", "mw2", "h"]);
        let found = router.match_route("POST", "/api/login", &mut Discard).unwrap();
        assert_eq!(handlers(&found), vec!["mw1", "login"]);

        // Group scope ends with the call.
        router.get("/ping", vec!["plain"]).unwrap();
        let found = router.match_route("GET", "/ping", &mut Discard).unwrap();
        assert_eq!(handlers(&found), vec!["plain"]);
    }

    #[test]
    fn test_group_error_propagates() {
        let router = Router::new();
        let result = router.group("/api", vec!["mw"], |api| {
            api.get("/a", vec!["a"])?;
            api.get("/a", vec!["again"])?;
            Ok(())
        });
        assert!(matches!(result, Err(RouteError::Duplicate(path)) if path == "/api/a"));
    }

    #[test]
    fn test_group_with_relative_prefix_is_rejected() {
        let router: Router<&str> = Router::new();
        let result = router.group("api", vec![], |api| {
            api.get("/x", vec![])?;
            Ok(())
        });
        assert!(matches!(result, Err(RouteError::UnrootedPattern(p)) if p == "api/x"));
    }

    #[test]
    fn test_auto_head() {
        let router = Router::with_config(RouterConfig {
            auto_head: true,
            ..RouterConfig::default()
        });
        router.get("/page", vec!["page"]).unwrap();
        router.post("/form", vec!["form"]).unwrap();

        assert!(router.match_route("HEAD", "/page", &mut Discard).is_some());
        assert!(router.match_route("HEAD", "/form", &mut Discard).is_none());
    }

    #[test]
    fn test_auto_trailing_slash() {
        let router = Router::new();
        router.set_auto_trailing_slash(true);
        router.get("/foo", vec!["foo"]).unwrap();
        router.get("/bar/", vec!["bar"]).unwrap();
        router.get("/", vec!["root"]).unwrap();

        for path in ["/foo", "/foo/", "/bar", "/bar/"] {
            assert!(router.match_route("GET", path, &mut Discard).is_some(), "{path}");
        }
        assert_eq!(router.routes()[&Method::Get].len(), 5);
    }

    #[test]
    fn test_failed_registration_publishes_nothing() {
        let router = Router::new();
        router.get("/foo/", vec!["explicit"]).unwrap();
        router.set_auto_trailing_slash(true);

        // Main route lands, its twin collides: nothing is kept.
        assert!(router.get("/foo", vec!["auto"]).is_err());
        assert!(router.match_route("GET", "/foo", &mut Discard).is_none());
        assert_eq!(router.snapshot().len(), 1);
    }

    #[test]
    fn test_routes_lists_every_method() {
        let router = Router::new();
        router.get("/user", vec!["a"]).unwrap();
        router.get("/username", vec!["b"]).unwrap();
        router.put("/user/:id", vec!["c"]).unwrap();

        let routes = router.routes();
        assert_eq!(routes.len(), Method::COUNT);
        assert_eq!(routes[&Method::Get], vec!["/user", "/username"]);
        assert_eq!(routes[&Method::Put], vec!["/user/:id"]);
        assert!(routes[&Method::Delete].is_empty());
    }

    #[test]
    fn test_snapshot_is_stable() {
        let router = Router::new();
        router.get("/a", vec!["a"]).unwrap();
        let before = router.snapshot();
        router.get("/b", vec!["b"]).unwrap();

        assert!(before.find(Method::Get, "/b", &mut Discard).is_none());
        assert!(router.snapshot().find(Method::Get, "/b", &mut Discard).is_some());
    }

    /// Records the label set of every counter registered through it.
    #[derive(Default)]
    struct LabelCapture {
        keys: Mutex<Vec<(String, Vec<(String, String)>)>>,
    }

    impl ::metrics::Recorder for LabelCapture {
        fn describe_counter(
            &self,
            _key: ::metrics::KeyName,
            _unit: Option<::metrics::Unit>,
            _description: ::metrics::SharedString,
        ) {
        }

        fn describe_gauge(
            &self,
            _key: ::metrics::KeyName,
            _unit: Option<::metrics::Unit>,
            _description: ::metrics::SharedString,
        ) {
        }

        fn describe_histogram(
            &self,
            _key: ::metrics::KeyName,
            _unit: Option<::metrics::Unit>,
            _description: ::metrics::SharedString,
        ) {
        }

        fn register_counter(
            &self,
            key: &::metrics::Key,
            _metadata: &::metrics::Metadata<'_>,
        ) -> ::metrics::Counter {
            let labels = key
                .labels()
                .map(|label| (label.key().to_string(), label.value().to_string()))
                .collect();
            self.keys
                .lock()
                .unwrap()
                .push((key.name().to_string(), labels));
            ::metrics::Counter::noop()
        }

        fn register_gauge(
            &self,
            _key: &::metrics::Key,
            _metadata: &::metrics::Metadata<'_>,
        ) -> ::metrics::Gauge {
            ::metrics::Gauge::noop()
        }

        fn register_histogram(
            &self,
            _key: &::metrics::Key,
            _metadata: &::metrics::Metadata<'_>,
        ) -> ::metrics::Histogram {
            ::metrics::Histogram::noop()
        }
    }

    #[test]
    fn test_unknown_methods_share_one_lookup_label() {
        let router: Router<&str> = Router::new();
        let capture = LabelCapture::default();

        ::metrics::with_local_recorder(&capture, || {
            for i in 0..3 {
                assert!(router.match_route(&format!("X-BREW-{i}"), "/", &mut Discard).is_none());
            }
            router.match_route("GET", "/", &mut Discard);
        });

        let keys = capture.keys.lock().unwrap();
        let mut methods: Vec<&str> = keys
            .iter()
            .filter(|(name, _)| name == "regtree_lookups_total")
            .flat_map(|(_, labels)| labels.iter())
            .filter(|(key, _)| key == "method")
            .map(|(_, value)| value.as_str())
            .collect();
        methods.sort_unstable();
        methods.dedup();
        assert_eq!(methods, vec!["GET", metrics::OTHER_METHOD]);
    }

    #[test]
    fn test_toggle_trailing_slash() {
        assert_eq!(toggle_trailing_slash("/foo").as_deref(), Some("/foo/"));
        assert_eq!(toggle_trailing_slash("/foo/").as_deref(), Some("/foo"));
        assert_eq!(toggle_trailing_slash("/"), None);
    }
}
