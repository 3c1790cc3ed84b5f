//! The dependency-injection seam between the controller and the page.
//!
//! The controller never queries a global document. It is handed a
//! [`PageModel`] of handles at construction, and every handle implements
//! [`ElementHandle`], so tests drive the controller with synthetic fixtures
//! and the wasm build drives it with `web-sys` wrappers.

use crate::geometry::Rect;

/// Visual-state markers the controller toggles, mapped to the CSS classes
/// the stylesheet keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    /// Navbar treatment applied once the page has scrolled past the
    /// threshold.
    Scrolled,
    /// Shared active/revealed marker: the highlighted nav link, the selected
    /// toggle button, the open menu, a revealed element.
    Active,
}

impl Flag {
    pub fn class(self) -> &'static str {
        match self {
            Flag::Scrolled => "scrolled",
            Flag::Active => "active",
        }
    }
}

/// Abstract view of a single page element.
///
/// Geometry is read through the handle on every use; nothing is cached, so
/// responsive layout changes are picked up naturally. The field accessors
/// only mean something for form controls; other elements keep the defaults.
pub trait ElementHandle: Clone {
    fn set_flag(&self, flag: Flag, on: bool);
    fn has_flag(&self, flag: Flag) -> bool;

    fn text(&self) -> String;
    fn set_text(&self, text: &str);

    /// Document-relative top offset (px).
    fn offset_top(&self) -> f64;
    /// Rendered height (px).
    fn offset_height(&self) -> f64;
    /// Viewport-relative bounding rectangle.
    fn rect(&self) -> Rect;

    /// `name` attribute for form controls.
    fn field_name(&self) -> Option<String> {
        None
    }
    fn value(&self) -> String {
        String::new()
    }
    fn set_value(&self, _value: &str) {}
}

/// A named page region tracked by the scroll reactor.
#[derive(Debug, Clone)]
pub struct Section<H> {
    pub id: String,
    pub el: H,
}

/// A navigation link referencing `"#" + section id`.
#[derive(Debug, Clone)]
pub struct NavLink<H> {
    pub target: String,
    pub el: H,
}

/// Mobile menu trigger/panel pair. Only built when both exist.
#[derive(Debug, Clone)]
pub struct MobileMenuModel<H> {
    pub trigger: H,
    pub panel: H,
}

/// The fixed set of page regions and controls the controller operates on.
/// Optional parts that are absent simply disable the matching behavior.
pub struct PageModel<H> {
    pub navbar: Option<H>,
    pub sections: Vec<Section<H>>,
    pub nav_links: Vec<NavLink<H>>,
    pub language_buttons: Vec<H>,
    pub filter_buttons: Vec<H>,
    pub reveal_elements: Vec<H>,
    /// Named fields of the contact form, if the page has one.
    pub contact_fields: Option<Vec<H>>,
    pub mobile_menu: Option<MobileMenuModel<H>>,
    /// Stat counter elements inside the hero card.
    pub stat_elements: Vec<H>,
}

impl<H> Default for PageModel<H> {
    fn default() -> Self {
        Self {
            navbar: None,
            sections: Vec::new(),
            nav_links: Vec::new(),
            language_buttons: Vec::new(),
            filter_buttons: Vec::new(),
            reveal_elements: Vec::new(),
            contact_fields: None,
            mobile_menu: None,
            stat_elements: Vec::new(),
        }
    }
}
