// src/lib.rs
use wasm_bindgen::prelude::*;
use yew_form_fields::demo::FieldShowcase;

// Nothing here logs; the showcase has no handlers.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    yew::Renderer::<FieldShowcase>::new().render();
}
