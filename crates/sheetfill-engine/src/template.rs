use crate::error::EngineError;
use std::fmt::{self, Display};

/// One parsed piece of a format template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// Raised by [`Template::render`] when the resolver has no value for a
/// placeholder. The executor maps this to a row-level substitution error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedPlaceholder {
    pub name: String,
}

/// A format template with `{ColumnName}` placeholders.
///
/// Parsing is strict and happens up front: unclosed or empty placeholders and
/// stray closing braces are rejected here, so a template that survives
/// construction can only fail per-row when a placeholder resolves to nothing.
/// `{{` and `}}` escape literal braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    raw: String,
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(raw: &str) -> Result<Self, EngineError> {
        if raw.is_empty() {
            return Err(EngineError::invalid_format("template must be non-empty"));
        }

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = raw.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    if chars.peek() == Some(&'{') {
                        chars.next();
                        literal.push('{');
                        continue;
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(c) => name.push(c),
                            None => {
                                return Err(EngineError::invalid_format(
                                    "unclosed '{' in template",
                                ));
                            }
                        }
                    }
                    if name.is_empty() {
                        return Err(EngineError::invalid_format("empty placeholder '{}'"));
                    }
                    segments.push(Segment::Placeholder(name));
                }
                '}' => {
                    if chars.peek() == Some(&'}') {
                        chars.next();
                        literal.push('}');
                    } else {
                        return Err(EngineError::invalid_format("stray '}' in template"));
                    }
                }
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Template {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The template text as written.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Placeholder names in order of appearance (duplicates included).
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Reject any placeholder that is not one of the declared source columns.
    pub fn validate_against(&self, sources: &[String]) -> Result<(), EngineError> {
        for name in self.placeholders() {
            if !sources.iter().any(|s| s == name) {
                return Err(EngineError::invalid_format(format!(
                    "placeholder '{{{name}}}' is not a declared source column"
                )));
            }
        }
        Ok(())
    }

    /// Substitute placeholders via `resolve`. Returns the rendered string or
    /// the first placeholder the resolver could not satisfy.
    pub fn render<F>(&self, mut resolve: F) -> Result<String, UnresolvedPlaceholder>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => match resolve(name) {
                    Some(value) => out.push_str(&value),
                    None => {
                        return Err(UnresolvedPlaceholder { name: name.clone() });
                    }
                },
            }
        }
        Ok(out)
    }
}

impl Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
