//! Render templates for reverse URL lookup.
//!
//! A template is the registered pattern with every parameter replaced by a
//! positional placeholder. Templates are built per trie node and joined by
//! walking from the root down to an endpoint.

use std::fmt::{self, Display, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Literal(String),
    Placeholder,
}

/// Literal text interleaved with positional placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    parts: Vec<Part>,
}

impl Template {
    pub fn new() -> Self {
        Self::default()
    }

    /// Template consisting of literal text only.
    pub fn literal(text: &str) -> Self {
        let mut template = Self::new();
        template.push_str(text);
        template
    }

    pub fn push_str(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.parts.last_mut() {
            Some(Part::Literal(last)) => last.push_str(text),
            _ => self.parts.push(Part::Literal(text.to_string())),
        }
    }

    pub fn push_placeholder(&mut self) {
        self.parts.push(Part::Placeholder);
    }

    /// Append another template after this one.
    pub fn extend(&mut self, other: &Template) {
        for part in &other.parts {
            match part {
                Part::Literal(text) => self.push_str(text),
                Part::Placeholder => self.push_placeholder(),
            }
        }
    }

    pub fn placeholder_count(&self) -> usize {
        self.parts.iter().filter(|p| matches!(p, Part::Placeholder)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Substitute `args` into the placeholders, in order.
    ///
    /// Arguments beyond the placeholder count are appended to the end.
    /// Returns `Err(given)` when there are fewer arguments than placeholders.
    pub fn render(&self, args: &[&dyn Display]) -> Result<String, usize> {
        if args.len() < self.placeholder_count() {
            return Err(args.len());
        }

        let mut out = String::new();
        let mut args = args.iter();
        for part in &self.parts {
            match part {
                Part::Literal(text) => out.push_str(text),
                Part::Placeholder => {
                    if let Some(arg) = args.next() {
                        let _ = write!(out, "{}", arg);
                    }
                }
            }
        }
        for arg in args {
            let _ = write!(out, "{}", arg);
        }
        Ok(out)
    }
}

impl Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            match part {
                Part::Literal(text) => f.write_str(text)?,
                Part::Placeholder => f.write_str("{}")?,
            }
        }
        Ok(())
    }
}
