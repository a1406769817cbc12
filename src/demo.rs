//! Ready-made demo forms.
//!
//! - [`LoginForm`] intercepts submission and logs name, email and password.
//! - [`FieldShowcase`] renders a few labeled fields with no behaviour.
//! - [`InputTypesDemo`] walks through every native input type and logs
//!   each change.
//!
//! The `demos/` crates mount these with `yew::Renderer`.

use log::Level;
use yew::prelude::*;

use crate::components::{Button, Choice, ChoiceGroup, Field, Input, InputTag};
use crate::descriptor::{FieldDescriptor, FieldLayout};
use crate::event::{FieldChange, FormSnapshot};
use crate::kind::{ButtonKind, InputKind};
use crate::logging::log_object;
use crate::style::Style;

/// Fields the login form reports on submit, in reporting order.
pub const LOGIN_FIELDS: [&str; 3] = ["name", "email", "password"];

/// The values the login form logs for `snapshot`, one per field.
pub fn login_values(snapshot: &FormSnapshot) -> Vec<String> {
    LOGIN_FIELDS
        .iter()
        .map(|name| snapshot.get(name).unwrap_or_default().to_string())
        .collect()
}

#[derive(Properties, PartialEq, Clone)]
pub struct LoginFormProps {
    /// Called with the snapshot after the values are logged.
    #[prop_or_default]
    pub on_submit: Option<Callback<FormSnapshot>>,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match FormSnapshot::from_submit(&e) {
                Ok(snapshot) => {
                    for value in login_values(&snapshot) {
                        log::info!("{}", value);
                    }
                    if let Some(cb) = &on_submit {
                        cb.emit(snapshot);
                    }
                }
                Err(err) => log::error!("could not read the submitted form: {}", err),
            }
        })
    };

    html! {
        <div class="container">
            <form {onsubmit}>
                <InputTag
                    type_value="text"
                    name="name"
                    min_value={3}
                    input_label="Name"
                    place_holder="Enter your name"
                />
                <InputTag
                    type_value="email"
                    name="email"
                    input_label="Email"
                    place_holder="Enter your email"
                />
                <InputTag
                    type_value="password"
                    name="password"
                    min_value={8}
                    input_label="Password"
                    place_holder="Enter your password"
                />
                <div class="button-container">
                    <Button kind="submit" label="Submit" />
                    <Button kind="reset" label="Reset" />
                </div>
            </form>
        </div>
    }
}

#[function_component(FieldShowcase)]
pub fn field_showcase() -> Html {
    html! {
        <div class="container">
            <Input kind="text" placeholder="Enter Name" name="Enter Name" />
            <Input kind="email" placeholder="Enter Email" name="Enter Email" />
            <Input kind="range" name="Set the Range" />
            <Input kind="radio" name="Gender" input_label="Male" />
        </div>
    }
}

/// Fields rendered before the checkbox and radio groups.
const LEADING_FIELDS: usize = 5;

/// Every single-input entry of [`InputTypesDemo`], in render order.
pub fn input_catalogue() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new(InputKind::Text, "textInput")
            .label("Text Input:")
            .placeholder("Enter text")
            .max_length(50),
        FieldDescriptor::new(InputKind::Password, "password")
            .label("Password:")
            .min_length(8)
            .autocomplete("new-password"),
        FieldDescriptor::new(InputKind::Email, "email")
            .label("Email:")
            .placeholder("example@email.com")
            .pattern(r"[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$"),
        FieldDescriptor::new(InputKind::Number, "number")
            .label("Number:")
            .min(0)
            .max(4)
            .step(2),
        FieldDescriptor::new(InputKind::Range, "range")
            .label("Range:")
            .min(0)
            .max(100)
            .step(10),
        FieldDescriptor::new(InputKind::Date, "date")
            .label("Date:")
            .min("2024-01-01")
            .max("2025-12-31"),
        FieldDescriptor::new(InputKind::Time, "time").label("Time:"),
        FieldDescriptor::new(InputKind::Color, "color").label("Color:"),
        FieldDescriptor::new(InputKind::File, "file")
            .label("File:")
            .accept(".pdf,.doc,.docx")
            .multiple(true),
        FieldDescriptor::new(InputKind::Url, "website")
            .label("Website:")
            .placeholder("https://example.com")
            .pattern("https://.*"),
        FieldDescriptor::new(InputKind::Search, "search")
            .label("Search:")
            .placeholder("Search..."),
        FieldDescriptor::new(InputKind::Tel, "phone")
            .label("Phone:")
            .placeholder("123-456-7890"),
    ]
}

fn catalogue_input_style(kind: InputKind) -> Style {
    match kind {
        InputKind::Range => Style::new().with("width", "100%"),
        InputKind::Color => Style::new(),
        _ => Style::new()
            .with("width", "100%")
            .with("padding", "8px 12px")
            .with("border", "1px solid #ddd")
            .with("border-radius", "4px")
            .with("font-size", "16px")
            .with("box-sizing", "border-box"),
    }
}

fn action_button(background: &str) -> Style {
    Style::new()
        .with("padding", "10px 20px")
        .with("background-color", background)
        .with("color", "white")
        .with("border", "none")
        .with("border-radius", "4px")
        .with("cursor", "pointer")
        .with("font-size", "16px")
}

#[function_component(InputTypesDemo)]
pub fn input_types_demo() -> Html {
    let on_change = Callback::from(|e: Event| {
        if let Some(change) = FieldChange::from_event(&e) {
            log_object(Level::Info, &change.log_label(), &change.value);
        }
    });

    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        match FormSnapshot::from_submit(&e) {
            Ok(snapshot) => log_object(Level::Info, "event:", &snapshot),
            Err(err) => log::error!("could not read the submitted form: {}", err),
        }
    });

    let on_reset = Callback::from(|_: MouseEvent| log::info!("Form reset"));

    let render = |descriptor: FieldDescriptor| {
        let input_style = catalogue_input_style(descriptor.kind);
        let key = descriptor.name.clone();
        html! {
            <Field
                key={key}
                {descriptor}
                layout={FieldLayout::Stacked}
                on_change={on_change.clone()}
                {input_style}
            />
        }
    };

    let mut catalogue = input_catalogue();
    let trailing = catalogue.split_off(LEADING_FIELDS);

    let container = Style::new()
        .with("max-width", "800px")
        .with("margin", "20px auto")
        .with("padding", "20px")
        .with("box-shadow", "0 2px 4px rgba(0, 0, 0, 0.1)")
        .with("border-radius", "8px")
        .with("background-color", "white");
    let header = Style::new()
        .with("margin-bottom", "20px")
        .with("border-bottom", "1px solid #eee")
        .with("padding-bottom", "10px");
    let title = Style::new()
        .with("font-size", "24px")
        .with("font-weight", "bold")
        .with("color", "#333")
        .with("margin", "0 0 10px 0");
    let form = Style::new()
        .with("display", "flex")
        .with("flex-direction", "column")
        .with("gap", "20px");
    let buttons = Style::new()
        .with("display", "flex")
        .with("gap", "10px")
        .with("margin-top", "20px");

    html! {
        <div style={container.to_string()}>
            <div style={header.to_string()}>
                <h1 style={title.to_string()}>{ "HTML Input Types Demo" }</h1>
            </div>

            <form {onsubmit} style={form.to_string()}>
                { for catalogue.into_iter().map(render) }

                <ChoiceGroup
                    kind={InputKind::Checkbox}
                    name="interests"
                    title="Interests:"
                    choices={vec![Choice::new("coding", "Coding"), Choice::new("design", "Design")]}
                    on_change={on_change.clone()}
                />
                <ChoiceGroup
                    kind={InputKind::Radio}
                    name="gender"
                    title="Gender:"
                    choices={vec![Choice::new("male", "Male"), Choice::new("female", "Female")]}
                    on_change={on_change.clone()}
                />

                { for trailing.into_iter().map(render) }

                <input type="hidden" name="hiddenField" value="secretValue" />

                <div style={buttons.to_string()}>
                    <input type="submit" value="save" style={action_button("#3b82f6").to_string()} />
                    <Button
                        kind={ButtonKind::Reset}
                        label="Reset"
                        onclick={on_reset}
                        style={action_button("#6b7280")}
                    />
                </div>
            </form>
        </div>
    }
}
