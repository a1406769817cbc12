//! Prop-compatible wrappers over [`Field`].
//!
//! `Input` and `InputTag` exist for call sites written against either
//! naming convention. Both only translate their props into a
//! [`FieldDescriptor`]; rendering lives in `Field`.

use yew::prelude::*;

use super::field::Field;
use crate::descriptor::{FieldDescriptor, FieldLayout};
use crate::kind::InputKind;

fn default_placeholder() -> String {
    "Enter text".to_string()
}

/// A labeled field: the name as a label above, the input below with an
/// optional caption after it.
#[derive(Properties, PartialEq, Clone)]
pub struct InputProps {
    /// Input type; unknown strings render as `text`
    #[prop_or_default]
    pub kind: InputKind,
    #[prop_or_default]
    pub name: String,
    /// DOM id; derived from `name` when unset
    #[prop_or_default]
    pub id: Option<String>,
    /// Controlled value; leave unset for an uncontrolled field
    #[prop_or_default]
    pub value: Option<String>,
    #[prop_or_else(default_placeholder)]
    pub placeholder: String,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub min_length: Option<u32>,
    #[prop_or_default]
    pub max_length: Option<u32>,
    #[prop_or_default]
    pub on_change: Option<Callback<Event>>,
    /// Caption rendered after the input
    #[prop_or_default]
    pub input_label: Option<String>,
}

impl From<&InputProps> for FieldDescriptor {
    fn from(props: &InputProps) -> Self {
        FieldDescriptor {
            kind: props.kind,
            name: props.name.clone(),
            id: props.id.clone(),
            value: props.value.clone(),
            placeholder: Some(props.placeholder.clone()),
            caption: props.input_label.clone(),
            ..FieldDescriptor::default()
        }
        .required(props.required)
        .with_lengths(props.min_length, props.max_length)
    }
}

#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    html! {
        <Field
            descriptor={FieldDescriptor::from(props)}
            layout={FieldLayout::Labeled}
            on_change={props.on_change.clone()}
        />
    }
}

/// The stacked variant: padded column with the label over the input.
#[derive(Properties, PartialEq, Clone)]
pub struct InputTagProps {
    /// Input type; unknown strings render as `text`
    #[prop_or_default]
    pub type_value: InputKind,
    #[prop_or_default]
    pub name: String,
    /// Minimum length of the value
    #[prop_or_default]
    pub min_value: Option<u32>,
    #[prop_or_default]
    pub on_change_func: Option<Callback<Event>>,
    #[prop_or_default]
    pub input_label: Option<String>,
    #[prop_or_default]
    pub place_holder: Option<String>,
}

impl From<&InputTagProps> for FieldDescriptor {
    fn from(props: &InputTagProps) -> Self {
        FieldDescriptor {
            kind: props.type_value,
            name: props.name.clone(),
            label: props.input_label.clone(),
            placeholder: props.place_holder.clone(),
            ..FieldDescriptor::default()
        }
        .with_lengths(props.min_value, None)
    }
}

#[function_component(InputTag)]
pub fn input_tag(props: &InputTagProps) -> Html {
    html! {
        <Field
            descriptor={FieldDescriptor::from(props)}
            layout={FieldLayout::Stacked}
            on_change={props.on_change_func.clone()}
        />
    }
}

impl FieldDescriptor {
    fn with_lengths(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.constraints.min_length = min;
        self.constraints.max_length = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_props() -> InputProps {
        InputProps {
            kind: InputKind::default(),
            name: String::new(),
            id: None,
            value: None,
            placeholder: default_placeholder(),
            required: false,
            min_length: None,
            max_length: None,
            on_change: None,
            input_label: None,
        }
    }

    #[test]
    fn input_props_map_onto_the_descriptor() {
        let props = InputProps {
            kind: InputKind::Password,
            name: "password".into(),
            required: true,
            min_length: Some(8),
            max_length: Some(64),
            ..input_props()
        };
        let d = FieldDescriptor::from(&props);
        assert_eq!(d.kind, InputKind::Password);
        assert_eq!(d.label_text(), "password");
        assert_eq!(d.placeholder.as_deref(), Some("Enter text"));
        assert!(d.constraints.required);
        assert_eq!(d.constraints.min_length, Some(8));
        assert_eq!(d.constraints.max_length, Some(64));
        assert!(!d.is_controlled());
    }

    #[test]
    fn input_caption_comes_from_input_label() {
        let props = InputProps {
            kind: InputKind::Radio,
            name: "Gender".into(),
            input_label: Some("Male".into()),
            ..input_props()
        };
        let d = FieldDescriptor::from(&props);
        assert_eq!(d.caption.as_deref(), Some("Male"));
        assert_eq!(d.label_text(), "Gender");
    }

    #[test]
    fn input_id_prop_overrides_the_name() {
        let props = InputProps {
            name: "Enter Name".into(),
            ..input_props()
        };
        assert_eq!(FieldDescriptor::from(&props).input_id().as_deref(), Some("Enter-Name"));

        let props = InputProps {
            id: Some("billing-name".into()),
            ..props
        };
        assert_eq!(FieldDescriptor::from(&props).input_id().as_deref(), Some("billing-name"));
    }

    #[test]
    fn input_tag_props_use_the_label_and_min_length() {
        let props = InputTagProps {
            type_value: InputKind::Text,
            name: "name".into(),
            min_value: Some(3),
            on_change_func: None,
            input_label: Some("Name".into()),
            place_holder: Some("Enter your name".into()),
        };
        let d = FieldDescriptor::from(&props);
        assert_eq!(d.label_text(), "Name");
        assert_eq!(d.placeholder.as_deref(), Some("Enter your name"));
        assert_eq!(d.constraints.min_length, Some(3));
        assert_eq!(d.constraints.max_length, None);
    }
}
