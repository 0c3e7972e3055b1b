//! Per-method routing trie.
//!
//! A radix tree over literal path text whose leaves may be regex segments.
//! Nodes live in an arena and refer to each other by [`NodeId`]; the parent
//! link is only followed to rebuild a node's full pattern and template.
//!
//! # Lookup order
//! At every static node the static child whose first character matches the
//! remaining path is tried first; if that subtree fails, dynamic children
//! are tried in registration order and the first full match wins.

use crate::routing::params::ParamSink;
use crate::routing::pattern::{self, DynamicSegment};
use crate::routing::template::Template;
use crate::routing::types::{HandlerChain, RouteError, RouteId, RouteResult};

/// Index of a node in its trie's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

const ROOT: NodeId = NodeId(0);

#[derive(Debug, Clone)]
enum Segment {
    Static(String),
    Dynamic(DynamicSegment),
}

/// What a terminal node resolves to.
#[derive(Debug, Clone)]
pub struct Endpoint<H> {
    pub handlers: HandlerChain<H>,
    pub route: RouteId,
}

#[derive(Debug, Clone)]
struct TrieNode<H> {
    segment: Segment,
    /// First character of the segment, used to pick a static child.
    dispatch: char,
    endpoint: Option<Endpoint<H>>,
    static_children: Vec<NodeId>,
    dynamic_children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl<H> TrieNode<H> {
    fn new(segment: Segment, parent: Option<NodeId>) -> Self {
        let dispatch = match &segment {
            Segment::Static(text) => text.chars().next(),
            Segment::Dynamic(dynamic) => dynamic.source.chars().next(),
        }
        .unwrap_or('\0');
        Self {
            segment,
            dispatch,
            endpoint: None,
            static_children: Vec::new(),
            dynamic_children: Vec::new(),
            parent,
        }
    }

    /// Pattern text as registered.
    fn source(&self) -> &str {
        match &self.segment {
            Segment::Static(text) => text,
            Segment::Dynamic(dynamic) => &dynamic.source,
        }
    }
}

/// Routing tree for one HTTP method, rooted at `/`.
#[derive(Debug, Clone)]
pub struct MethodTrie<H> {
    nodes: Vec<TrieNode<H>>,
}

impl<H: Clone> Default for MethodTrie<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Clone> MethodTrie<H> {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new(Segment::Static("/".to_string()), None)],
        }
    }

    /// Number of nodes, split and prefix nodes included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1 && self.nodes[0].endpoint.is_none()
    }

    /// Register `pattern` (rooted at `/`) and return the terminal node.
    pub fn insert(&mut self, pattern: &str, endpoint: Endpoint<H>) -> RouteResult<NodeId> {
        match self.insert_at(ROOT, pattern, &endpoint)? {
            Some(id) => Ok(id),
            None => Err(RouteError::UnrootedPattern(pattern.to_string())),
        }
    }

    /// Look up `path`, binding parameters into `sink` on success.
    pub fn find<S: ParamSink + ?Sized>(&self, path: &str, sink: &mut S) -> Option<&Endpoint<H>> {
        self.find_at(ROOT, path, sink)
    }

    /// Full pattern of the node, as it was registered.
    pub fn full_path(&self, id: NodeId) -> String {
        let mut parts = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = &self.nodes[current.0];
            parts.push(node.source());
            cursor = node.parent;
        }
        parts.iter().rev().copied().collect()
    }

    /// Render template of the node, from the root down.
    pub fn template(&self, id: NodeId) -> Template {
        let mut chain = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            chain.push(current);
            cursor = self.nodes[current.0].parent;
        }

        let mut template = Template::new();
        for current in chain.into_iter().rev() {
            match &self.nodes[current.0].segment {
                Segment::Static(text) => template.push_str(text),
                Segment::Dynamic(dynamic) => template.extend(&dynamic.template),
            }
        }
        template
    }

    /// Full patterns of every terminal node, depth first, static children
    /// before dynamic ones.
    pub fn routes(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect(ROOT, &mut out);
        out
    }

    fn collect(&self, id: NodeId, out: &mut Vec<String>) {
        let node = &self.nodes[id.0];
        if node.endpoint.is_some() {
            out.push(self.full_path(id));
        }
        for &child in node.static_children.iter().chain(&node.dynamic_children) {
            self.collect(child, out);
        }
    }

    fn insert_at(
        &mut self,
        id: NodeId,
        pattern: &str,
        endpoint: &Endpoint<H>,
    ) -> RouteResult<Option<NodeId>> {
        let Segment::Static(text) = &self.nodes[id.0].segment else {
            return Ok(None);
        };
        let text_len = text.len();
        let matched = common_prefix_len(text, pattern);
        if matched == 0 {
            return Ok(None);
        }

        if matched == text_len {
            if matched == pattern.len() {
                return self.attach(id, endpoint).map(Some);
            }

            let rest = &pattern[matched..];
            for child in self.nodes[id.0].static_children.clone() {
                if let Some(found) = self.insert_at(child, rest, endpoint)? {
                    return Ok(Some(found));
                }
            }
            return self.add_child(id, rest, endpoint).map(Some);
        }

        self.split(id, matched);
        if matched == pattern.len() {
            self.attach(id, endpoint).map(Some)
        } else {
            self.add_child(id, &pattern[matched..], endpoint).map(Some)
        }
    }

    /// Cut node `id` after `at` bytes. The tail, with the node's endpoint and
    /// children, moves into a new sole static child.
    fn split(&mut self, id: NodeId, at: usize) {
        let tail_id = NodeId(self.nodes.len());
        let node = &mut self.nodes[id.0];
        let Segment::Static(text) = &mut node.segment else {
            return;
        };
        let tail_text = text.split_off(at);

        let mut tail = TrieNode::new(Segment::Static(tail_text), Some(id));
        tail.endpoint = node.endpoint.take();
        tail.static_children = std::mem::replace(&mut node.static_children, vec![tail_id]);
        tail.dynamic_children = std::mem::take(&mut node.dynamic_children);

        for &child in tail.static_children.iter().chain(&tail.dynamic_children) {
            self.nodes[child.0].parent = Some(tail_id);
        }
        self.nodes.push(tail);
    }

    fn attach(&mut self, id: NodeId, endpoint: &Endpoint<H>) -> RouteResult<NodeId> {
        if self.nodes[id.0].endpoint.is_some() {
            return Err(RouteError::Duplicate(self.full_path(id)));
        }
        self.nodes[id.0].endpoint = Some(endpoint.clone());
        Ok(id)
    }

    fn push(&mut self, node: TrieNode<H>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    fn add_child(
        &mut self,
        parent: NodeId,
        pattern: &str,
        endpoint: &Endpoint<H>,
    ) -> RouteResult<NodeId> {
        let compiled = pattern::compile(pattern)?;

        let Some(dynamic) = compiled.dynamic else {
            let mut node = TrieNode::new(Segment::Static(compiled.static_prefix), Some(parent));
            node.endpoint = Some(endpoint.clone());
            let id = self.push(node);
            self.nodes[parent.0].static_children.push(id);
            return Ok(id);
        };

        if compiled.static_prefix.is_empty() {
            let existing = self.nodes[parent.0].dynamic_children.iter().copied().find(|&child| {
                matches!(&self.nodes[child.0].segment, Segment::Dynamic(d) if d.expr == dynamic.expr)
            });
            if let Some(child) = existing {
                return Err(RouteError::Duplicate(self.full_path(child)));
            }

            let mut node = TrieNode::new(Segment::Dynamic(dynamic), Some(parent));
            node.endpoint = Some(endpoint.clone());
            let id = self.push(node);
            self.nodes[parent.0].dynamic_children.push(id);
            return Ok(id);
        }

        let prefix = self.push(TrieNode::new(
            Segment::Static(compiled.static_prefix),
            Some(parent),
        ));
        self.nodes[parent.0].static_children.push(prefix);

        let mut node = TrieNode::new(Segment::Dynamic(dynamic), Some(prefix));
        node.endpoint = Some(endpoint.clone());
        let id = self.push(node);
        self.nodes[prefix.0].dynamic_children.push(id);
        Ok(id)
    }

    fn find_at<S: ParamSink + ?Sized>(
        &self,
        id: NodeId,
        path: &str,
        sink: &mut S,
    ) -> Option<&Endpoint<H>> {
        let node = &self.nodes[id.0];
        let text = match &node.segment {
            Segment::Dynamic(dynamic) => return bind(node, dynamic, path, sink),
            Segment::Static(text) => text,
        };

        let rest = path.strip_prefix(text.as_str())?;
        if rest.is_empty() {
            if let Some(endpoint) = &node.endpoint {
                return Some(endpoint);
            }
        }

        if let Some(next) = rest.chars().next() {
            let child = node
                .static_children
                .iter()
                .copied()
                .find(|&child| self.nodes[child.0].dispatch == next);
            if let Some(child) = child {
                if let Some(found) = self.find_at(child, rest, sink) {
                    return Some(found);
                }
            }
        }

        for &child in &node.dynamic_children {
            let child = &self.nodes[child.0];
            if let Segment::Dynamic(dynamic) = &child.segment {
                if let Some(found) = bind(child, dynamic, rest, sink) {
                    return Some(found);
                }
            }
        }
        None
    }
}

fn bind<'t, H, S: ParamSink + ?Sized>(
    node: &'t TrieNode<H>,
    dynamic: &DynamicSegment,
    path: &str,
    sink: &mut S,
) -> Option<&'t Endpoint<H>> {
    let endpoint = node.endpoint.as_ref()?;
    let values = dynamic.captures(path)?;
    for (name, value) in dynamic.params.iter().zip(values) {
        sink.set_param(name, value);
    }
    Some(endpoint)
}

/// Length in bytes of the longest common prefix, on character boundaries.
fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(c, _)| c.len_utf8())
        .sum()
}
