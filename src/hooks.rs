//! hooks.rs
//!
//! Custom Yew hook for controlled fields.
//!
//! # Usage
//! ```rust,ignore
//! use yew::prelude::*;
//! use yew_form_fields::{use_field_value, Field, FieldDescriptor, InputKind};
//!
//! #[function_component(Nickname)]
//! fn nickname() -> Html {
//!     let nick = use_field_value(String::new());
//!     let descriptor = FieldDescriptor::new(InputKind::Text, "nickname").value(nick.value());
//!     html! {
//!         <>
//!             <Field {descriptor} on_change={nick.on_change()} />
//!             <p>{ format!("Hello, {}", nick.value()) }</p>
//!         </>
//!     }
//! }
//! ```

use yew::functional::hook;
use yew::prelude::*;

use crate::event::{FieldChange, FieldValue};

/// Handle returned by [`use_field_value`].
#[derive(Clone, PartialEq)]
pub struct FieldState {
    value: UseStateHandle<String>,
    checked: UseStateHandle<bool>,
}

impl FieldState {
    /// Current text value, to be fed back into the descriptor.
    pub fn value(&self) -> String {
        (*self.value).clone()
    }

    /// Current checked flag for checkbox/radio fields.
    pub fn checked(&self) -> bool {
        *self.checked
    }

    /// Callback that stores whatever the field reports on each edit.
    pub fn on_change(&self) -> Callback<Event> {
        let value = self.value.clone();
        let checked = self.checked.clone();
        Callback::from(move |event: Event| {
            let Some(change) = FieldChange::from_event(&event) else {
                return;
            };
            match change.value {
                FieldValue::Text(text) => value.set(text),
                FieldValue::Checked(flag) => checked.set(flag),
                FieldValue::Files(files) => {
                    value.set(files.first().map(|f| f.name.clone()).unwrap_or_default())
                }
            }
        })
    }

    /// Overwrite the value from outside the field (e.g. a reset button).
    pub fn set(&self, text: impl Into<String>) {
        self.value.set(text.into());
    }
}

/// Hold a controlled field value across renders.
///
/// The returned [`FieldState`] owns the value; the field only reports
/// edits through [`FieldState::on_change`].
#[hook]
pub fn use_field_value(initial: String) -> FieldState {
    let value = use_state(move || initial);
    let checked = use_state(|| false);
    FieldState { value, checked }
}
