//! Placeholder templates.
//!
//! A template is literal text with `{name}` placeholders. It is parsed once
//! into an ordered list of [`InterpolationPart`]s that borrow from the source
//! text, then rendered against a set of [`Bindings`].
//!
//! ```text
//! "register{Name}.ts"
//!   └── Literal("register") · Parameter("Name") · Literal(".ts")
//! ```
//!
//! ## Edge Cases
//!
//! - No escaping: every `{` opens a placeholder that runs to the next `}`.
//! - `{a{b}` is a single parameter named `a{b`.
//! - A stray `}` outside a placeholder is literal text.
//! - Bound values are inserted as-is; they are never parsed again.

use std::collections::HashMap;

use crate::domain::error::{DomainError, DomainResult};

/// One segment of a parsed template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationPart<'a> {
    /// Text copied to the output unchanged.
    Literal(&'a str),
    /// A `{name}` placeholder; holds the text between the braces.
    Parameter(&'a str),
}

/// Values available to placeholders during rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    values: HashMap<String, String>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a binding, consuming self and returning the extended set.
    ///
    /// ```rust
    /// use digen_core::domain::Bindings;
    ///
    /// let bindings = Bindings::new()
    ///     .with("Name", "UserService")
    ///     .with("interface", "IUserService");
    /// assert_eq!(bindings.get("Name"), Some("UserService"));
    /// ```
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Split `template` into literal and parameter parts.
///
/// # Errors
///
/// [`DomainError::UnclosedParameter`] when a `{` has no matching `}`; the
/// position is the byte offset of the opening brace.
pub fn parse(template: &str) -> DomainResult<Vec<InterpolationPart<'_>>> {
    let mut parts = Vec::new();
    let mut rest = template;
    let mut offset = 0;

    while let Some(open) = rest.find('{') {
        if open > 0 {
            parts.push(InterpolationPart::Literal(&rest[..open]));
        }

        let inner = &rest[open + 1..];
        let close = inner
            .find('}')
            .ok_or(DomainError::UnclosedParameter {
                position: offset + open,
            })?;
        parts.push(InterpolationPart::Parameter(&inner[..close]));

        let consumed = open + close + 2;
        offset += consumed;
        rest = &rest[consumed..];
    }

    if !rest.is_empty() {
        parts.push(InterpolationPart::Literal(rest));
    }

    Ok(parts)
}

/// Concatenate `parts`, substituting each parameter from `bindings`.
///
/// # Errors
///
/// [`DomainError::MissingParameter`] for the first parameter without a
/// binding. Nothing is ever substituted with an empty string implicitly.
pub fn render(parts: &[InterpolationPart<'_>], bindings: &Bindings) -> DomainResult<String> {
    let mut out = String::new();

    for part in parts {
        match *part {
            InterpolationPart::Literal(text) => out.push_str(text),
            InterpolationPart::Parameter(name) => {
                let value = bindings
                    .get(name)
                    .ok_or_else(|| DomainError::MissingParameter {
                        name: name.to_string(),
                    })?;
                out.push_str(value);
            }
        }
    }

    Ok(out)
}

/// Join `items` with `separator`.
///
/// Zero items give an empty string and a single item is returned unchanged.
pub fn join<S: AsRef<str>>(separator: &str, items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, rest @ ..] => {
            let mut out = first.as_ref().to_string();
            for item in rest {
                out.push_str(separator);
                out.push_str(item.as_ref());
            }
            out
        }
    }
}

/// A parsed template tied to the lifetime of its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'a> {
    source: &'a str,
    parts: Vec<InterpolationPart<'a>>,
}

impl<'a> Template<'a> {
    pub fn parse(source: &'a str) -> DomainResult<Self> {
        Ok(Self {
            source,
            parts: parse(source)?,
        })
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn parts(&self) -> &[InterpolationPart<'a>] {
        &self.parts
    }

    /// Parameter names in order of appearance (duplicates included).
    pub fn parameters(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.parts.iter().filter_map(|part| match part {
            InterpolationPart::Parameter(name) => Some(*name),
            InterpolationPart::Literal(_) => None,
        })
    }

    pub fn render(&self, bindings: &Bindings) -> DomainResult<String> {
        render(&self.parts, bindings)
    }
}
