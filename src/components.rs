pub mod icon;
pub mod nav_bar;
pub mod notification;
pub mod player;
pub mod router;
pub mod settings;
pub mod tile;
pub mod top;

use crate::objects::JsError;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

pub fn input_element_from_event(ev: &web_sys::Event) -> Result<HtmlInputElement, JsError> {
    let target = ev.target().ok_or("could not get target object")?;

    target
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsError::from("error casting target to input element"))
}
