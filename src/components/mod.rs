mod choice_group;
mod field;
mod input;

pub use choice_group::*;
pub use field::*;
pub use input::*;

use yew::prelude::*;

use crate::kind::ButtonKind;
use crate::style::Style;

/// A native `<button>` of the given kind.
#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    /// Button label text
    pub label: String,
    /// `button` (default), `submit` or `reset`; accepts plain strings
    #[prop_or_default]
    pub kind: ButtonKind,
    /// Click handler
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    /// Disable state
    #[prop_or_default]
    pub disabled: bool,
    /// Inline style
    #[prop_or_default]
    pub style: Option<Style>,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button
            type={props.kind.as_str()}
            onclick={props.onclick.clone()}
            disabled={props.disabled}
            style={props.style.as_ref().map(|s| s.to_string())}
            class="yff-button"
        >
            { &props.label }
        </button>
    }
}
