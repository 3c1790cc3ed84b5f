//! Shared synthetic element fixture for unit tests.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::geometry::Rect;
use crate::page::{ElementHandle, Flag};

#[derive(Default)]
struct FakeState {
    flags: BTreeSet<&'static str>,
    text: String,
    offset_top: f64,
    offset_height: f64,
    rect: Rect,
    field_name: Option<String>,
    value: String,
}

/// Interior-mutability element handle for driving the controller without a
/// document.
#[derive(Clone, Default)]
pub struct FakeElement(Rc<RefCell<FakeState>>);

impl FakeElement {
    pub fn with_text(text: &str) -> Self {
        let el = Self::default();
        el.0.borrow_mut().text = text.to_string();
        el
    }

    pub fn with_offset(top: f64, height: f64) -> Self {
        let el = Self::default();
        el.set_offset(top, height);
        el
    }

    pub fn field(name: &str, value: &str) -> Self {
        let el = Self::default();
        {
            let mut state = el.0.borrow_mut();
            state.field_name = Some(name.to_string());
            state.value = value.to_string();
        }
        el
    }

    pub fn set_offset(&self, top: f64, height: f64) {
        let mut state = self.0.borrow_mut();
        state.offset_top = top;
        state.offset_height = height;
    }

    pub fn set_rect_top(&self, top: f64) {
        self.0.borrow_mut().rect.top = top;
    }
}

impl ElementHandle for FakeElement {
    fn set_flag(&self, flag: Flag, on: bool) {
        let mut state = self.0.borrow_mut();
        if on {
            state.flags.insert(flag.class());
        } else {
            state.flags.remove(flag.class());
        }
    }

    fn has_flag(&self, flag: Flag) -> bool {
        self.0.borrow().flags.contains(flag.class())
    }

    fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    fn offset_top(&self) -> f64 {
        self.0.borrow().offset_top
    }

    fn offset_height(&self) -> f64 {
        self.0.borrow().offset_height
    }

    fn rect(&self) -> Rect {
        self.0.borrow().rect
    }

    fn field_name(&self) -> Option<String> {
        self.0.borrow().field_name.clone()
    }

    fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    fn set_value(&self, value: &str) {
        self.0.borrow_mut().value = value.to_string();
    }
}
