//! Browser tests for the demo forms.
#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Mutex;
use std::time::Duration;

use log::{Level, LevelFilter, Log, Metadata, Record};

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, EventInit, HtmlFormElement, HtmlInputElement};
use yew::platform::time::sleep;
use yew::prelude::*;
use yew_form_fields::demo::{
    input_catalogue, login_values, FieldShowcase, InputTypesDemo, LoginForm, LoginFormProps,
};
use yew_form_fields::FormSnapshot;

wasm_bindgen_test_configure!(run_in_browser);

/// Keeps every record logged from the demo module.
struct Captured;

static CAPTURED: Captured = Captured;
static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

impl Log for Captured {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target() == "yew_form_fields::demo"
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            RECORDS.lock().unwrap().push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

/// Install the capturing logger (once per test binary) and clear it.
fn capture_logs() {
    if log::set_logger(&CAPTURED).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }
    RECORDS.lock().unwrap().clear();
}

fn captured() -> Vec<(Level, String)> {
    RECORDS.lock().unwrap().clone()
}

async fn render<C>(props: C::Properties) -> Element
where
    C: BaseComponent,
{
    let root = gloo_utils::document().create_element("div").unwrap();
    gloo_utils::body().append_child(&root).unwrap();
    yew::Renderer::<C>::with_root_and_props(root.clone(), props).render();
    sleep(Duration::ZERO).await;
    root
}

fn input(root: &Element, name: &str) -> HtmlInputElement {
    root.query_selector(&format!("input[name='{name}']"))
        .unwrap()
        .unwrap_or_else(|| panic!("no input named {name}"))
        .unchecked_into()
}

fn submit_event() -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    Event::new_with_event_init_dict("submit", &init).unwrap()
}

#[wasm_bindgen_test]
async fn login_submit_is_intercepted_and_reports_three_values() {
    let submitted = Rc::new(RefCell::new(None::<FormSnapshot>));
    let sink = submitted.clone();
    let props = LoginFormProps {
        on_submit: Some(Callback::from(move |snapshot| *sink.borrow_mut() = Some(snapshot))),
    };
    let root = render::<LoginForm>(props).await;

    input(&root, "name").set_value("Ann");
    input(&root, "email").set_value("a@b.com");
    input(&root, "password").set_value("secret12");

    let form: HtmlFormElement = root.query_selector("form").unwrap().unwrap().unchecked_into();
    capture_logs();
    let not_prevented = form.dispatch_event(&submit_event()).unwrap();
    let logged = captured();
    assert!(!not_prevented, "default navigation must be prevented");

    assert_eq!(
        logged,
        [
            (Level::Info, "Ann".to_string()),
            (Level::Info, "a@b.com".to_string()),
            (Level::Info, "secret12".to_string()),
        ]
    );
    let snapshot = submitted.borrow().clone().expect("submission reported");
    assert_eq!(login_values(&snapshot), ["Ann", "a@b.com", "secret12"]);
}

#[wasm_bindgen_test]
async fn login_form_has_submit_and_reset_buttons() {
    let root = render::<LoginForm>(LoginFormProps { on_submit: None }).await;
    let kinds: Vec<_> = ["submit", "reset"]
        .iter()
        .map(|kind| root.query_selector(&format!("button[type='{kind}']")).unwrap().is_some())
        .collect();
    assert_eq!(kinds, [true, true]);
}

#[wasm_bindgen_test]
async fn showcase_has_no_form_and_four_fields() {
    let root = render::<FieldShowcase>(()).await;
    assert!(root.query_selector("form").unwrap().is_none());
    assert_eq!(root.query_selector_all("input").unwrap().length(), 4);
    assert_eq!(input(&root, "Gender").type_(), "radio");
    assert_eq!(input(&root, "Enter Name").placeholder(), "Enter Name");
    // range gets the default placeholder, like every Input
    assert_eq!(input(&root, "Set the Range").placeholder(), "Enter text");
}

#[wasm_bindgen_test]
async fn showcase_ids_have_no_spaces_and_match_their_labels() {
    let root = render::<FieldShowcase>(()).await;
    let name = input(&root, "Enter Name");
    assert_eq!(name.id(), "Enter-Name");
    assert!(root.query_selector("label[for='Enter-Name']").unwrap().is_some());
    assert_eq!(input(&root, "Set the Range").id(), "Set-the-Range");
}

#[wasm_bindgen_test]
async fn catalogue_renders_every_entry_and_the_groups() {
    let root = render::<InputTypesDemo>(()).await;
    for descriptor in input_catalogue() {
        assert_eq!(input(&root, &descriptor.name).type_(), descriptor.kind.as_str());
    }
    assert_eq!(root.query_selector_all("input[name='interests']").unwrap().length(), 2);
    assert_eq!(root.query_selector_all("input[name='gender']").unwrap().length(), 2);
    assert_eq!(input(&root, "hiddenField").value(), "secretValue");
    assert!(input(&root, "file").multiple());
}

#[wasm_bindgen_test]
async fn catalogue_submit_is_intercepted() {
    let root = render::<InputTypesDemo>(()).await;
    let form: HtmlFormElement = root.query_selector("form").unwrap().unwrap().unchecked_into();
    assert!(!form.dispatch_event(&submit_event()).unwrap());

    let snapshot = FormSnapshot::from_form(&form).unwrap();
    assert_eq!(snapshot.get("hiddenField"), Some("secretValue"));
    // unchecked boxes are not submitted
    assert_eq!(snapshot.get("interests"), None);
}
