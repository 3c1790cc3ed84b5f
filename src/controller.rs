//! The page controller facade: owns every sub-controller and exposes one
//! entry point per browser signal. Optional page regions that are absent
//! simply turn the matching entry points into no-ops.

use crate::anchors;
use crate::config::ControllerConfig;
use crate::counter::StatPanel;
use crate::form::{ContactForm, FormFields, FormHook, FormOutcome, SubmitError, Submitter};
use crate::menu::MobileMenu;
use crate::page::{ElementHandle, PageModel};
use crate::scroll::{ScrollInput, ScrollReactor};
use crate::toggle::{Normalize, SelectionHook, ToggleGroup};

/// Pluggable collaborators. Every hook is optional; selections are always
/// logged regardless.
#[derive(Default)]
pub struct Hooks {
    /// Receives the trimmed label of the chosen language button.
    pub language: Option<SelectionHook>,
    /// Receives the trimmed, lowercased label of the chosen filter button.
    pub filter: Option<SelectionHook>,
    /// Receives contact-form submission outcomes.
    pub form: Option<FormHook>,
}

pub struct PageController<H: ElementHandle> {
    scroll: ScrollReactor<H>,
    language: ToggleGroup<H>,
    filters: ToggleGroup<H>,
    menu: Option<MobileMenu<H>>,
    form: Option<ContactForm<H>>,
    stats: StatPanel<H>,
}

impl<H: ElementHandle> PageController<H> {
    pub fn new(model: PageModel<H>, config: &ControllerConfig, hooks: Hooks) -> Self {
        let scroll = ScrollReactor::new(
            model.navbar,
            model.sections,
            model.nav_links,
            model.reveal_elements,
            config,
        );
        Self {
            scroll,
            language: ToggleGroup::new(
                "language",
                model.language_buttons,
                Normalize::Trim,
                hooks.language,
            ),
            filters: ToggleGroup::new(
                "filter",
                model.filter_buttons,
                Normalize::TrimLowercase,
                hooks.filter,
            ),
            menu: model.mobile_menu.map(MobileMenu::new),
            form: model
                .contact_fields
                .map(|fields| ContactForm::new(fields, hooks.form)),
            stats: StatPanel::new(model.stat_elements, config),
        }
    }

    /// Run the initial pass the original page performed on load: the three
    /// scroll reactions at the current position.
    pub fn init(&mut self, input: ScrollInput) {
        log::info!("page controller initialized");
        self.on_scroll(input);
    }

    pub fn on_scroll(&mut self, input: ScrollInput) {
        self.scroll.on_scroll(input);
    }

    /// Offset an intercepted anchor click should animate to, or `None` when
    /// the href names no known section and the click should fall through.
    pub fn anchor_scroll_target(&self, href: &str) -> Option<f64> {
        anchors::scroll_target(href, self.scroll.navbar(), self.scroll.sections())
    }

    pub fn on_language_select(&self, index: usize) -> Option<String> {
        self.language.on_click(index)
    }

    pub fn on_filter_select(&self, index: usize) -> Option<String> {
        self.filters.on_click(index)
    }

    pub fn on_menu_toggle(&mut self) {
        if let Some(menu) = &mut self.menu {
            menu.toggle();
        }
    }

    pub fn on_menu_link_click(&mut self) {
        if let Some(menu) = &mut self.menu {
            menu.close();
        }
    }

    pub fn menu_is_open(&self) -> bool {
        self.menu.as_ref().map_or(false, MobileMenu::is_open)
    }

    pub fn has_contact_form(&self) -> bool {
        self.form.is_some()
    }

    /// Current form fields, for an asynchronous submitter. Empty when the
    /// page has no contact form.
    pub fn collect_form(&self) -> FormFields {
        self.form.as_ref().map(ContactForm::collect).unwrap_or_default()
    }

    /// Complete an asynchronous submission started with [`collect_form`].
    ///
    /// [`collect_form`]: Self::collect_form
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) -> Option<FormOutcome> {
        self.form.as_mut().map(|form| form.finish(result))
    }

    /// Synchronous submission path used by tests and same-tick submitters.
    pub fn submit_with(&mut self, submitter: &mut dyn Submitter) -> Option<FormOutcome> {
        self.form.as_mut().map(|form| form.submit_with(submitter))
    }

    pub fn has_counters(&self) -> bool {
        !self.stats.is_empty()
    }

    /// The stat container became visible; first sighting starts the
    /// counters.
    pub fn on_stats_visible(&mut self) {
        self.stats.on_visible();
    }

    /// Animation-frame tick; true while another frame should be scheduled.
    pub fn on_frame(&mut self) -> bool {
        self.stats.on_frame()
    }

    pub fn counters_animating(&self) -> bool {
        self.stats.is_animating()
    }

    /// Teardown: stop the counter animation permanently.
    pub fn cancel_counters(&mut self) {
        self.stats.cancel();
    }
}
