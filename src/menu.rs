//! Mobile menu: a trigger button and a slide-out panel whose open flags move
//! in lockstep.

use crate::page::{ElementHandle, Flag, MobileMenuModel};

pub struct MobileMenu<H> {
    trigger: H,
    panel: H,
    open: bool,
}

impl<H: ElementHandle> MobileMenu<H> {
    pub fn new(model: MobileMenuModel<H>) -> Self {
        Self {
            trigger: model.trigger,
            panel: model.panel,
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.sync();
    }

    /// Clicking any link inside the panel closes the menu.
    pub fn close(&mut self) {
        self.open = false;
        self.sync();
    }

    fn sync(&self) {
        self.trigger.set_flag(Flag::Active, self.open);
        self.panel.set_flag(Flag::Active, self.open);
    }
}
