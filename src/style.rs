//! Inline style declarations.
//!
//! Components ship without a stylesheet, so every element carries its own
//! `style` attribute. A [`Style`] keeps declarations in insertion order and
//! a later declaration of the same property replaces the earlier one, the
//! way a spread `{ ...base, width: "100%" }` would.

use std::fmt;

use yew::AttrValue;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    decls: Vec<(&'static str, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `property` to `value`, replacing any earlier value in place.
    pub fn with(mut self, property: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.decls.iter_mut().find(|(p, _)| *p == property) {
            Some(slot) => slot.1 = value,
            None => self.decls.push((property, value)),
        }
        self
    }

    /// Apply every declaration of `other` on top of `self`.
    pub fn merge(self, other: &Style) -> Self {
        other
            .decls
            .iter()
            .fold(self, |style, (p, v)| style.with(*p, v.clone()))
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.decls
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.decls.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{property}: {value};")?;
        }
        Ok(())
    }
}

impl From<Style> for AttrValue {
    fn from(style: Style) -> Self {
        AttrValue::from(style.to_string())
    }
}

/// Column wrapper of a labeled field.
pub fn field_container() -> Style {
    Style::new()
        .with("display", "flex")
        .with("justify-content", "center")
        .with("flex-direction", "column")
        .with("align-items", "flex-start")
        .with("width", "100%")
}

/// The name label above a labeled field.
pub fn field_label() -> Style {
    Style::new()
        .with("color", "white")
        .with("font-size", "12px")
        .with("font-weight", "bold")
        .with("margin-bottom", "6px")
}

/// The label wrapping the input and its caption.
pub fn field_caption() -> Style {
    field_label()
        .with("display", "flex")
        .with("justify-content", "center")
}

pub fn field_input() -> Style {
    Style::new()
        .with("padding", "0.5rem")
        .with("border-radius", "0.25rem")
        .with("border", "1px solid #D1D5DB")
        .with("width", "max-content")
        .with("margin-bottom", "1rem")
}

/// Padded vertical stack used by the stacked layout.
pub fn stacked_container() -> Style {
    Style::new()
        .with("padding", "10px")
        .with("display", "flex")
        .with("flex-direction", "column")
}

/// One checkbox or radio with its caption on a single line.
pub fn inline_label() -> Style {
    Style::new()
        .with("display", "flex")
        .with("align-items", "center")
        .with("gap", "8px")
        .with("color", "#333")
}
