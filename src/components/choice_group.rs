use yew::prelude::*;

use super::field::Field;
use crate::descriptor::{FieldDescriptor, FieldLayout};
use crate::kind::InputKind;
use crate::style::{self, Style};

/// One option of a [`ChoiceGroup`]: the submitted value and its caption.
#[derive(Clone, Debug, PartialEq)]
pub struct Choice {
    pub value: String,
    pub caption: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            caption: caption.into(),
        }
    }
}

/// A titled row of checkboxes or radios sharing one `name`.
#[derive(Properties, PartialEq, Clone)]
pub struct ChoiceGroupProps {
    /// `checkbox` or `radio`; any other kind renders as `checkbox`
    pub kind: InputKind,
    pub name: String,
    pub title: String,
    pub choices: Vec<Choice>,
    #[prop_or_default]
    pub on_change: Option<Callback<Event>>,
}

impl ChoiceGroupProps {
    fn member(&self, choice: &Choice) -> FieldDescriptor {
        let kind = if self.kind.is_checkable() {
            self.kind
        } else {
            InputKind::Checkbox
        };
        FieldDescriptor::new(kind, self.name.clone())
            .value(choice.value.clone())
            .caption(choice.caption.clone())
    }
}

fn row() -> Style {
    Style::new().with("display", "flex").with("gap", "20px")
}

#[function_component(ChoiceGroup)]
pub fn choice_group(props: &ChoiceGroupProps) -> Html {
    html! {
        <div style={Style::new().with("display", "flex").with("flex-direction", "column").with("gap", "8px").to_string()}>
            <p style={style::field_label().with("color", "#333").to_string()}>{ &props.title }</p>
            <div style={row().to_string()}>
                { for props.choices.iter().map(|choice| html! {
                    <Field
                        key={choice.value.clone()}
                        descriptor={props.member(choice)}
                        layout={FieldLayout::Inline}
                        on_change={props.on_change.clone()}
                    />
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn members_share_the_group_name() {
        let props = ChoiceGroupProps {
            kind: InputKind::Radio,
            name: "gender".into(),
            title: "Gender:".into(),
            choices: vec![Choice::new("male", "Male"), Choice::new("female", "Female")],
            on_change: None,
        };
        let members: Vec<_> = props.choices.iter().map(|c| props.member(c)).collect();
        assert!(members.iter().all(|m| m.name == "gender" && m.kind == InputKind::Radio));
        assert_eq!(members[1].value.as_deref(), Some("female"));
        assert_eq!(members[1].caption.as_deref(), Some("Female"));
    }

    #[test]
    fn non_checkable_kind_becomes_checkbox() {
        let props = ChoiceGroupProps {
            kind: InputKind::Email,
            name: "interests".into(),
            title: "Interests:".into(),
            choices: vec![Choice::new("coding", "Coding")],
            on_change: None,
        };
        assert_eq!(props.member(&props.choices[0]).kind, InputKind::Checkbox);
    }
}
