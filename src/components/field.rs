//! The descriptor-driven field renderer behind `Input` and `InputTag`.
//!
//! Every constraint in the descriptor becomes the matching HTML attribute,
//! so the browser performs the same validation it would for a hand-written
//! `<input>`. `Field` itself never validates.

use yew::prelude::*;

use crate::descriptor::{FieldDescriptor, FieldLayout};
use crate::kind::InputKind;
use crate::style::{self, Style};

#[derive(Properties, PartialEq, Clone)]
pub struct FieldProps {
    pub descriptor: FieldDescriptor,
    #[prop_or_default]
    pub layout: FieldLayout,
    /// Receives the native event on every edit.
    #[prop_or_default]
    pub on_change: Option<Callback<Event>>,
    /// Declarations merged over the layout's input style.
    #[prop_or_default]
    pub input_style: Option<Style>,
}

/// Text-like kinds report edits on `input`, like a React `onChange`;
/// checkable and file inputs only fire `change`.
fn fires_on_input(kind: InputKind) -> bool {
    !kind.is_checkable() && kind != InputKind::File
}

fn render_input(props: &FieldProps, id: Option<&str>) -> Html {
    let d = &props.descriptor;
    let c = &d.constraints;

    let (oninput, onchange) = match props.on_change.clone() {
        Some(cb) if fires_on_input(d.kind) => (
            Some(Callback::from(move |e: InputEvent| cb.emit(e.into()))),
            None,
        ),
        other => (None, other),
    };

    let base = match props.layout {
        FieldLayout::Labeled => style::field_input(),
        FieldLayout::Stacked | FieldLayout::Inline => Style::new(),
    };
    let input_style = match &props.input_style {
        Some(extra) => base.merge(extra),
        None => base,
    };
    let input_style = (!input_style.is_empty()).then(|| AttrValue::from(input_style));

    html! {
        <input
            id={id.map(|id| AttrValue::from(id.to_string()))}
            type={d.kind.as_str()}
            name={d.name.clone()}
            value={d.value.clone()}
            placeholder={d.placeholder.clone()}
            required={c.required}
            multiple={c.multiple}
            minlength={c.min_length.map(|n| n.to_string())}
            maxlength={c.max_length.map(|n| n.to_string())}
            min={c.min.clone()}
            max={c.max.clone()}
            step={c.step.clone()}
            pattern={c.pattern.clone()}
            accept={c.accept.clone()}
            autocomplete={c.autocomplete.clone()}
            style={input_style}
            {oninput}
            {onchange}
        />
    }
}

/// One form field rendered from a [`FieldDescriptor`].
#[function_component(Field)]
pub fn field(props: &FieldProps) -> Html {
    let d = &props.descriptor;
    let id = d.input_id();

    match props.layout {
        FieldLayout::Labeled => html! {
            <div style={style::field_container().to_string()}>
                <label style={style::field_label().to_string()} for={id.clone()}>
                    { d.label_text() }
                </label>
                <label style={style::field_caption().to_string()}>
                    { render_input(props, id.as_deref()) }
                    { d.caption.clone().unwrap_or_default() }
                </label>
            </div>
        },
        FieldLayout::Stacked => html! {
            <div style={style::stacked_container().to_string()}>
                <label for={id.clone()}>{ d.label_text() }</label>
                { render_input(props, id.as_deref()) }
            </div>
        },
        // Group members share a name, so association comes from nesting.
        FieldLayout::Inline => html! {
            <label style={style::inline_label().to_string()}>
                { render_input(props, None) }
                { d.caption.as_deref().unwrap_or(d.label_text()) }
            </label>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_checkable_and_file_kinds_wait_for_change() {
        let on_change: Vec<_> = InputKind::ALL
            .into_iter()
            .filter(|k| !fires_on_input(*k))
            .collect();
        assert_eq!(
            on_change,
            vec![InputKind::Checkbox, InputKind::Radio, InputKind::File]
        );
    }
}
