//! `ElementHandle` implementation over a live DOM element.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::geometry::Rect;
use crate::page::{ElementHandle, Flag};

#[derive(Clone)]
pub struct DomElement {
    inner: HtmlElement,
}

impl DomElement {
    pub fn new(inner: HtmlElement) -> Self {
        Self { inner }
    }

    pub fn from_element(element: Element) -> Option<Self> {
        element.dyn_into::<HtmlElement>().ok().map(Self::new)
    }

    pub fn raw(&self) -> &HtmlElement {
        &self.inner
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.inner.get_attribute(name)
    }
}

impl ElementHandle for DomElement {
    fn set_flag(&self, flag: Flag, on: bool) {
        let classes = self.inner.class_list();
        let result = if on {
            classes.add_1(flag.class())
        } else {
            classes.remove_1(flag.class())
        };
        if let Err(err) = result {
            log::warn!("classList update failed: {err:?}");
        }
    }

    fn has_flag(&self, flag: Flag) -> bool {
        self.inner.class_list().contains(flag.class())
    }

    fn text(&self) -> String {
        self.inner.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.inner.set_text_content(Some(text));
    }

    fn offset_top(&self) -> f64 {
        f64::from(self.inner.offset_top())
    }

    fn offset_height(&self) -> f64 {
        f64::from(self.inner.offset_height())
    }

    fn rect(&self) -> Rect {
        let rect = self.inner.get_bounding_client_rect();
        Rect::new(rect.top(), rect.left(), rect.bottom(), rect.right())
    }

    fn field_name(&self) -> Option<String> {
        self.inner.get_attribute("name")
    }

    fn value(&self) -> String {
        if let Some(input) = self.inner.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = self.inner.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else if let Some(select) = self.inner.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else {
            String::new()
        }
    }

    fn set_value(&self, value: &str) {
        if let Some(input) = self.inner.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = self.inner.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        } else if let Some(select) = self.inner.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        }
    }
}
