//! Native `<input type>` and `<button type>` enumerations.
//!
//! Both enums parse leniently from attribute strings: the HTML `type`
//! attribute is ASCII case-insensitive, and an unknown value behaves as if
//! the attribute were missing, so it maps to the element default
//! (`text` for inputs, `button` for our `Button` component).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use yew::html::IntoPropValue;
use yew::AttrValue;

use crate::error::FormError;

/// The `type` of a native `<input>` element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InputKind {
    #[default]
    Text,
    Password,
    Email,
    Number,
    Range,
    Checkbox,
    Radio,
    Date,
    Time,
    DatetimeLocal,
    Month,
    Week,
    Color,
    File,
    Url,
    Search,
    Tel,
    Hidden,
    Submit,
    Reset,
}

impl InputKind {
    /// Every supported kind, in the order the input catalogue renders them.
    pub const ALL: [InputKind; 20] = [
        InputKind::Text,
        InputKind::Password,
        InputKind::Email,
        InputKind::Number,
        InputKind::Range,
        InputKind::Checkbox,
        InputKind::Radio,
        InputKind::Date,
        InputKind::Time,
        InputKind::DatetimeLocal,
        InputKind::Month,
        InputKind::Week,
        InputKind::Color,
        InputKind::File,
        InputKind::Url,
        InputKind::Search,
        InputKind::Tel,
        InputKind::Hidden,
        InputKind::Submit,
        InputKind::Reset,
    ];

    /// The attribute value written into `type="..."`.
    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Password => "password",
            InputKind::Email => "email",
            InputKind::Number => "number",
            InputKind::Range => "range",
            InputKind::Checkbox => "checkbox",
            InputKind::Radio => "radio",
            InputKind::Date => "date",
            InputKind::Time => "time",
            InputKind::DatetimeLocal => "datetime-local",
            InputKind::Month => "month",
            InputKind::Week => "week",
            InputKind::Color => "color",
            InputKind::File => "file",
            InputKind::Url => "url",
            InputKind::Search => "search",
            InputKind::Tel => "tel",
            InputKind::Hidden => "hidden",
            InputKind::Submit => "submit",
            InputKind::Reset => "reset",
        }
    }

    /// Parse an attribute value, falling back to [`InputKind::Text`].
    pub fn from_attr(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    /// Checkbox and radio report `checked` instead of `value` on change.
    pub fn is_checkable(self) -> bool {
        matches!(self, InputKind::Checkbox | InputKind::Radio)
    }

    /// Kinds that honour `minlength`, `maxlength` and `pattern`.
    pub fn is_text_like(self) -> bool {
        matches!(
            self,
            InputKind::Text
                | InputKind::Password
                | InputKind::Email
                | InputKind::Url
                | InputKind::Search
                | InputKind::Tel
        )
    }

    /// Kinds that honour `min`, `max` and `step`.
    pub fn is_ranged(self) -> bool {
        matches!(
            self,
            InputKind::Number
                | InputKind::Range
                | InputKind::Date
                | InputKind::Time
                | InputKind::DatetimeLocal
                | InputKind::Month
                | InputKind::Week
        )
    }
}

impl FromStr for InputKind {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FormError::UnknownKind(s.to_string()))
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for InputKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for InputKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(InputKind::from_attr(&raw))
    }
}

/// The `type` of a `<button>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonKind::Button => "button",
            ButtonKind::Submit => "submit",
            ButtonKind::Reset => "reset",
        }
    }

    /// Parse an attribute value, falling back to [`ButtonKind::Button`].
    pub fn from_attr(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "submit" => ButtonKind::Submit,
            "reset" => ButtonKind::Reset,
            _ => ButtonKind::Button,
        }
    }
}

impl fmt::Display for ButtonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Components accept `kind="email"` straight from markup; unknown strings
// take the element default.
macro_rules! lenient_prop {
    ($kind:ty) => {
        impl IntoPropValue<$kind> for &'static str {
            fn into_prop_value(self) -> $kind {
                <$kind>::from_attr(self)
            }
        }

        impl IntoPropValue<$kind> for String {
            fn into_prop_value(self) -> $kind {
                <$kind>::from_attr(&self)
            }
        }

        impl IntoPropValue<$kind> for AttrValue {
            fn into_prop_value(self) -> $kind {
                <$kind>::from_attr(&self)
            }
        }
    };
}

lenient_prop!(InputKind);
lenient_prop!(ButtonKind);
