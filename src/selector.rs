//! Compound simple selectors.
//!
//! Supports one compound selector per query: an optional tag (or `*`) followed by any mix of
//! `.class`, `#id`, `[attr]` and `[attr=value]` parts. Combinators and selector lists are
//! rejected; the browser host hands its selectors to the native `querySelectorAll` instead.

use crate::error::NavError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeMatch {
    pub name: String,
    /// `None` matches on presence only
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selector {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: Vec<AttributeMatch>,
}

/// The element facts a selector can test.
pub trait Matchable {
    fn tag_name(&self) -> String;
    fn element_id(&self) -> String;
    fn has_class(&self, class: &str) -> bool;
    fn attribute(&self, name: &str) -> Option<String>;
}

impl Selector {
    pub fn parse(source: &str) -> Result<Selector, NavError> {
        let text = source.trim();
        if text.is_empty() {
            return Err(NavError::selector(source, "empty selector"));
        }

        let mut selector = Selector::default();
        let mut rest = text;

        if let Some(stripped) = rest.strip_prefix('*') {
            rest = stripped;
        } else {
            let (tag, tail) = split_ident(rest);
            if !tag.is_empty() {
                selector.tag = Some(tag.to_ascii_lowercase());
            }
            rest = tail;
        }

        while let Some(c) = rest.chars().next() {
            match c {
                '.' | '#' => {
                    let (ident, tail) = split_ident(&rest[1..]);
                    if ident.is_empty() {
                        return Err(NavError::selector(source, format!("expected a name after '{c}'")));
                    }
                    if c == '.' {
                        selector.classes.push(ident.to_string());
                    } else if selector.id.replace(ident.to_string()).is_some() {
                        return Err(NavError::selector(source, "more than one id"));
                    }
                    rest = tail;
                }
                '[' => {
                    let close = attribute_end(rest)
                        .ok_or_else(|| NavError::selector(source, "unterminated '['"))?;
                    selector.attributes.push(parse_attribute(source, &rest[1..close])?);
                    rest = &rest[close + 1..];
                }
                c if c.is_whitespace() || c == '>' || c == '+' || c == '~' => {
                    return Err(NavError::selector(source, "combinators are not supported"));
                }
                ',' => {
                    return Err(NavError::selector(source, "selector lists are not supported"));
                }
                other => {
                    return Err(NavError::selector(source, format!("unexpected '{other}'")));
                }
            }
        }

        Ok(selector)
    }

    pub fn matches<M: Matchable + ?Sized>(&self, element: &M) -> bool {
        if let Some(tag) = &self.tag {
            if !element.tag_name().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if &element.element_id() != id {
                return false;
            }
        }
        if !self.classes.iter().all(|class| element.has_class(class)) {
            return false;
        }
        self.attributes.iter().all(|attr| {
            match (element.attribute(&attr.name), &attr.value) {
                (Some(_), None) => true,
                (Some(actual), Some(expected)) => &actual == expected,
                (None, _) => false,
            }
        })
    }
}

impl FromStr for Selector {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selector::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "{tag}")?,
            None if self.id.is_none() && self.classes.is_empty() && self.attributes.is_empty() => {
                write!(f, "*")?
            }
            None => {}
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        for attr in &self.attributes {
            match &attr.value {
                Some(value) => write!(f, "[{}=\"{}\"]", attr.name, value)?,
                None => write!(f, "[{}]", attr.name)?,
            }
        }
        Ok(())
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn split_ident(text: &str) -> (&str, &str) {
    let end = text
        .char_indices()
        .find(|(_, c)| !is_ident_char(*c))
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    text.split_at(end)
}

/// Byte index of the `]` closing the attribute part at the start of `text`, skipping quoted values.
fn attribute_end(text: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (idx, c) in text.char_indices() {
        match (quote, c) {
            (Some(open), c) if c == open => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, ']') => return Some(idx),
            (None, _) => {}
        }
    }
    None
}

fn parse_attribute(source: &str, body: &str) -> Result<AttributeMatch, NavError> {
    let (name, value) = match body.split_once('=') {
        Some((name, value)) => (name.trim(), Some(unquote(value.trim()))),
        None => (body.trim(), None),
    };
    if name.is_empty() || !name.chars().all(is_ident_char) {
        return Err(NavError::selector(source, format!("invalid attribute name '{name}'")));
    }
    Ok(AttributeMatch {
        name: name.to_string(),
        value: value.map(str::to_string),
    })
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
