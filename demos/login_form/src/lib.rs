// src/lib.rs
use wasm_bindgen::prelude::*;
use yew_form_fields::demo::LoginForm;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("logger installed once");
    yew::Renderer::<LoginForm>::new().render();
}
