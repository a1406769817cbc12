//! Field descriptors: the single configuration object every field
//! component renders from.
//!
//! A descriptor can be built in code:
//!
//! ```rust
//! use yew_form_fields::{FieldDescriptor, InputKind};
//!
//! let password = FieldDescriptor::new(InputKind::Password, "password")
//!     .placeholder("Enter your password")
//!     .min_length(8)
//!     .required(true);
//! assert!(!password.is_controlled());
//! ```
//!
//! or declared as JSON with HTML attribute names:
//!
//! ```rust
//! let fields = yew_form_fields::parse_fields(
//!     r#"[{ "type": "email", "name": "email", "required": true }]"#,
//! ).unwrap();
//! assert_eq!(fields[0].name, "email");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::kind::InputKind;

/// HTML constraint attributes forwarded verbatim to the `<input>`.
///
/// `min`, `max` and `step` stay strings because dates and times use them
/// too (`min="2024-01-01"`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Constraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    pub required: bool,
    /// File kinds only: comma-separated extensions or MIME types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept: Option<String>,
    pub multiple: bool,
    #[serde(rename = "autoComplete", skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<String>,
}

/// Everything needed to render one form input.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    #[serde(rename = "type", default)]
    pub kind: InputKind,
    pub name: String,
    /// DOM id of the input; derived from the name when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Text of the field label; the name is shown when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// `Some` makes the field controlled by the caller. For checkbox and
    /// radio kinds it is only the value submitted when checked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Trailing text rendered after the input (radio/checkbox captions).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(flatten)]
    pub constraints: Constraints,
}

impl FieldDescriptor {
    pub fn new(kind: InputKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.constraints.required = required;
        self
    }

    pub fn min_length(mut self, len: u32) -> Self {
        self.constraints.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: u32) -> Self {
        self.constraints.max_length = Some(len);
        self
    }

    pub fn min(mut self, min: impl ToString) -> Self {
        self.constraints.min = Some(min.to_string());
        self
    }

    pub fn max(mut self, max: impl ToString) -> Self {
        self.constraints.max = Some(max.to_string());
        self
    }

    pub fn step(mut self, step: impl ToString) -> Self {
        self.constraints.step = Some(step.to_string());
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.constraints.pattern = Some(pattern.into());
        self
    }

    pub fn accept(mut self, accept: impl Into<String>) -> Self {
        self.constraints.accept = Some(accept.into());
        self
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.constraints.multiple = multiple;
        self
    }

    pub fn autocomplete(mut self, hint: impl Into<String>) -> Self {
        self.constraints.autocomplete = Some(hint.into());
        self
    }

    /// A controlled field's value is owned by the caller, not the DOM.
    pub fn is_controlled(&self) -> bool {
        self.value.is_some() && !self.kind.is_checkable()
    }

    /// The text shown in the field's label.
    pub fn label_text(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    /// The DOM id tying `<label for>` to the input.
    ///
    /// An explicit `id` wins. Otherwise the name is used with each run of
    /// whitespace replaced by `-`, since ids may not contain spaces.
    pub fn input_id(&self) -> Option<String> {
        if let Some(id) = self.id.as_deref().filter(|id| !id.trim().is_empty()) {
            return Some(id.split_whitespace().collect::<Vec<_>>().join("-"));
        }
        let id = self.name.split_whitespace().collect::<Vec<_>>().join("-");
        (!id.is_empty()).then_some(id)
    }
}

/// How a [`Field`](crate::Field) arranges its label and input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldLayout {
    /// Name label above, input wrapped in a second label with the caption.
    #[default]
    Labeled,
    /// Padded vertical stack: label, then input.
    Stacked,
    /// Input followed by its caption on one line, for checkbox/radio groups.
    Inline,
}

/// Parse a JSON array of field declarations.
pub fn parse_fields(json: &str) -> Result<Vec<FieldDescriptor>, FormError> {
    Ok(serde_json::from_str(json)?)
}
