//! Browser binding: wraps real document elements in [`DomElement`] handles,
//! wires event listeners, and drives the controller from scroll, click,
//! submit, intersection, and animation-frame signals.

mod element;
mod mount;
mod submit;

pub use element::DomElement;
pub use mount::{attach, Attachment};

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::config::ControllerConfig;

thread_local! {
    static MOUNTED: RefCell<Option<Attachment>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() {
    wasm_logger::init(wasm_logger::Config::default());
}

/// Attach the controller to the current document. `config_json` may carry
/// overrides for any [`ControllerConfig`] key.
#[wasm_bindgen]
pub fn mount(config_json: Option<String>) -> Result<(), JsValue> {
    let config = match config_json {
        Some(json) => ControllerConfig::from_json(&json)
            .map_err(|err| JsValue::from_str(&format!("invalid config: {err}")))?,
        None => ControllerConfig::default(),
    };
    let attachment = attach(config)?;
    MOUNTED.with(|slot| *slot.borrow_mut() = Some(attachment));
    log::info!("pagefx mounted");
    Ok(())
}

/// Detach all listeners and stop any running animation.
#[wasm_bindgen]
pub fn unmount() {
    MOUNTED.with(|slot| slot.borrow_mut().take());
    log::info!("pagefx unmounted");
}
