//! Mutually exclusive button groups (language selector, company filter).
//!
//! Selecting a button only moves the visual flag; the normalized label is
//! handed to a pluggable hook so a real language-switch or filter-apply
//! routine can be attached without touching this module.

use crate::page::{ElementHandle, Flag};

/// How a button label becomes a selection value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalize {
    /// Language buttons: whitespace-trimmed, case preserved.
    Trim,
    /// Filter buttons: trimmed and lowercased.
    TrimLowercase,
}

impl Normalize {
    pub fn apply(self, raw: &str) -> String {
        match self {
            Normalize::Trim => raw.trim().to_string(),
            Normalize::TrimLowercase => raw.trim().to_lowercase(),
        }
    }
}

/// Callback receiving the normalized selection value.
pub type SelectionHook = Box<dyn Fn(&str)>;

pub struct ToggleGroup<H> {
    name: &'static str,
    buttons: Vec<H>,
    normalize: Normalize,
    hook: Option<SelectionHook>,
}

impl<H: ElementHandle> ToggleGroup<H> {
    pub fn new(
        name: &'static str,
        buttons: Vec<H>,
        normalize: Normalize,
        hook: Option<SelectionHook>,
    ) -> Self {
        Self {
            name,
            buttons,
            normalize,
            hook,
        }
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Make the clicked button the only active one and emit its normalized
    /// label. Out-of-range indices are ignored.
    pub fn on_click(&self, index: usize) -> Option<String> {
        let clicked = self.buttons.get(index)?;
        for button in &self.buttons {
            button.set_flag(Flag::Active, false);
        }
        clicked.set_flag(Flag::Active, true);

        let selection = self.normalize.apply(&clicked.text());
        log::info!("{} selected: {}", self.name, selection);
        if let Some(hook) = &self.hook {
            hook(&selection);
        }
        Some(selection)
    }
}
