//! Segment compiler.
//!
//! Turns the not-yet-consumed tail of a route pattern into a literal prefix
//! and, when the tail declares parameters, a regex-backed dynamic remainder.
//!
//! Placeholder syntax:
//! - `*` captures everything that follows, unnamed
//! - `:name` captures one path segment (no `/`)
//! - `:name(int)` digits, `:name(string)` word characters
//! - `:name(rule)` any other rule is used as the group body verbatim

use regex::Regex;

use crate::routing::template::Template;
use crate::routing::types::{RouteError, RouteResult};

const SEGMENT_RULE: &str = "[^/]+";
const INT_RULE: &str = "[0-9]+";
const STRING_RULE: &str = "[0-9A-Za-z_]+";
const WILDCARD_RULE: &str = ".*";

/// Result of compiling one pattern tail.
#[derive(Debug, Clone)]
pub struct CompiledSegment {
    /// Literal text before the first placeholder; the whole tail when static.
    pub static_prefix: String,
    /// Everything from the first placeholder on.
    pub dynamic: Option<DynamicSegment>,
}

/// The regex-backed part of a pattern tail.
#[derive(Debug, Clone)]
pub struct DynamicSegment {
    /// Pattern text as registered, e.g. `:id/posts`.
    pub source: String,
    /// Unanchored regex source, used to detect identical siblings.
    pub expr: String,
    /// `expr` anchored at both ends.
    pub regex: Regex,
    /// Parameter names in declaration order; wildcards are unnamed (`""`).
    pub params: Vec<String>,
    /// One placeholder per parameter.
    pub template: Template,
}

impl DynamicSegment {
    /// Match the whole of `path`, returning one value per parameter.
    pub fn captures<'p>(&self, path: &'p str) -> Option<Vec<&'p str>> {
        let caps = self.regex.captures(path)?;
        Some(
            caps.iter()
                .skip(1)
                .map(|group| group.map_or("", |m| m.as_str()))
                .collect(),
        )
    }
}

/// Characters allowed in a parameter name.
pub fn is_param_char(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphanumeric()
}

/// Compile a pattern tail.
pub fn compile(pattern: &str) -> RouteResult<CompiledSegment> {
    let bytes = pattern.as_bytes();
    let Some(first) = bytes.iter().position(|&b| b == b':' || b == b'*') else {
        return Ok(CompiledSegment {
            static_prefix: pattern.to_string(),
            dynamic: None,
        });
    };

    let mut expr = String::new();
    let mut params = Vec::new();
    let mut template = Template::new();
    let mut literal_start = first;
    let mut i = first;

    while i < bytes.len() {
        match bytes[i] {
            b'*' => {
                push_literal(&mut expr, &mut template, &pattern[literal_start..i]);
                push_capture(&mut expr, &mut template, WILDCARD_RULE);
                params.push(String::new());
                i += 1;
                literal_start = i;
            }
            b':' => {
                push_literal(&mut expr, &mut template, &pattern[literal_start..i]);
                let name_start = i + 1;
                let mut j = name_start;
                while j < bytes.len() && is_param_char(bytes[j]) {
                    j += 1;
                }
                let name = &pattern[name_start..j];

                let mut rule = "";
                i = j;
                if j < bytes.len() && bytes[j] == b'(' {
                    let close = pattern[j + 1..]
                        .find(')')
                        .map(|offset| j + 1 + offset)
                        .ok_or_else(|| RouteError::UnclosedRule(pattern.to_string()))?;
                    rule = &pattern[j + 1..close];
                    i = close + 1;
                }
                let body = match rule {
                    "" => SEGMENT_RULE,
                    "int" => INT_RULE,
                    "string" => STRING_RULE,
                    custom => custom,
                };

                push_capture(&mut expr, &mut template, body);
                params.push(name.to_string());
                literal_start = i;
            }
            _ => i += 1,
        }
    }
    push_literal(&mut expr, &mut template, &pattern[literal_start..]);

    let regex = Regex::new(&format!("^{}$", expr)).map_err(|source| RouteError::InvalidRule {
        pattern: pattern.to_string(),
        source,
    })?;

    Ok(CompiledSegment {
        static_prefix: pattern[..first].to_string(),
        dynamic: Some(DynamicSegment {
            source: pattern[first..].to_string(),
            expr,
            regex,
            params,
            template,
        }),
    })
}

fn push_literal(expr: &mut String, template: &mut Template, text: &str) {
    expr.push_str(&regex::escape(text));
    template.push_str(text);
}

fn push_capture(expr: &mut String, template: &mut Template, body: &str) {
    expr.push('(');
    expr.push_str(body);
    expr.push(')');
    template.push_placeholder();
}
