// src/lib.rs
use wasm_bindgen::prelude::*;
use yew_form_fields::demo::InputTypesDemo;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("logger installed once");
    yew::Renderer::<InputTypesDemo>::new().render();
}
