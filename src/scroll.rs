//! Scroll reactor: navbar elevation, active-section tracking, and scroll
//! reveal. All three are pure functions of the current scroll input plus
//! geometry re-read from the handles on every tick, so redundant or
//! interleaved invocations always settle to the same state.

use crate::config::ControllerConfig;
use crate::page::{ElementHandle, Flag, NavLink, Section};

/// Scroll state sampled from the window at event time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollInput {
    /// Vertical scroll offset (px).
    pub offset: f64,
    /// Viewport height (px).
    pub viewport_height: f64,
}

pub struct ScrollReactor<H> {
    navbar: Option<H>,
    sections: Vec<Section<H>>,
    nav_links: Vec<NavLink<H>>,
    reveals: RevealSet<H>,
    navbar_threshold: f64,
    probe_offset: f64,
}

impl<H: ElementHandle> ScrollReactor<H> {
    pub fn new(
        navbar: Option<H>,
        sections: Vec<Section<H>>,
        nav_links: Vec<NavLink<H>>,
        reveal_elements: Vec<H>,
        config: &ControllerConfig,
    ) -> Self {
        Self {
            navbar,
            sections,
            nav_links,
            reveals: RevealSet::new(reveal_elements, config.reveal_offset),
            navbar_threshold: config.navbar_scroll_threshold,
            probe_offset: config.section_probe_offset,
        }
    }

    pub fn on_scroll(&mut self, input: ScrollInput) {
        self.update_navbar(input.offset);
        self.update_active_link(input.offset);
        self.reveals.scan(input.viewport_height);
    }

    pub fn navbar(&self) -> Option<&H> {
        self.navbar.as_ref()
    }

    pub fn sections(&self) -> &[Section<H>] {
        &self.sections
    }

    fn update_navbar(&self, offset: f64) {
        if let Some(navbar) = &self.navbar {
            navbar.set_flag(Flag::Scrolled, offset > self.navbar_threshold);
        }
    }

    /// Highlight the nav link matching the section the offset currently
    /// falls in. Sections are probed in document order and the last match
    /// wins; with no match every link is cleared, which is the intended
    /// state above the first section and below the last.
    fn update_active_link(&self, offset: f64) {
        let mut current: Option<&str> = None;
        for section in &self.sections {
            let top = section.el.offset_top() - self.probe_offset;
            if offset >= top && offset < top + section.el.offset_height() {
                current = Some(&section.id);
            }
        }
        for link in &self.nav_links {
            let matches = current
                .map(|id| link.target.strip_prefix('#') == Some(id))
                .unwrap_or(false);
            link.el.set_flag(Flag::Active, matches);
        }
    }
}

/// Reveal elements with a monotonic dormant -> revealed transition. The set
/// re-scans every element each tick, but a revealed element is recorded and
/// re-asserted, never un-marked, even if it scrolls back below the
/// threshold.
struct RevealSet<H> {
    elements: Vec<H>,
    revealed: Vec<bool>,
    offset: f64,
}

impl<H: ElementHandle> RevealSet<H> {
    fn new(elements: Vec<H>, offset: f64) -> Self {
        let revealed = vec![false; elements.len()];
        Self {
            elements,
            revealed,
            offset,
        }
    }

    fn scan(&mut self, viewport_height: f64) {
        let threshold = viewport_height - self.offset;
        for (element, revealed) in self.elements.iter().zip(self.revealed.iter_mut()) {
            if *revealed || element.rect().top < threshold {
                *revealed = true;
                element.set_flag(Flag::Active, true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::FakeElement;

    fn reactor(
        sections: Vec<(&str, f64, f64)>,
        links: Vec<&str>,
    ) -> (ScrollReactor<FakeElement>, FakeElement, Vec<FakeElement>) {
        let navbar = FakeElement::default();
        let link_els: Vec<FakeElement> = links.iter().map(|_| FakeElement::default()).collect();
        let reactor = ScrollReactor::new(
            Some(navbar.clone()),
            sections
                .into_iter()
                .map(|(id, top, height)| Section {
                    id: id.to_string(),
                    el: FakeElement::with_offset(top, height),
                })
                .collect(),
            links
                .iter()
                .zip(&link_els)
                .map(|(target, el)| NavLink {
                    target: target.to_string(),
                    el: el.clone(),
                })
                .collect(),
            Vec::new(),
            &ControllerConfig::default(),
        );
        (reactor, navbar, link_els)
    }

    fn input(offset: f64) -> ScrollInput {
        ScrollInput {
            offset,
            viewport_height: 800.0,
        }
    }

    #[test]
    fn navbar_elevated_strictly_past_threshold() {
        let (mut reactor, navbar, _) = reactor(vec![], vec![]);
        reactor.on_scroll(input(50.0));
        assert!(!navbar.has_flag(Flag::Scrolled), "50 is not past 50");
        reactor.on_scroll(input(51.0));
        assert!(navbar.has_flag(Flag::Scrolled));
        reactor.on_scroll(input(0.0));
        assert!(!navbar.has_flag(Flag::Scrolled));
    }

    #[test]
    fn offset_inside_one_section_activates_exactly_its_link() {
        let (mut reactor, _, links) = reactor(
            vec![("home", 0.0, 600.0), ("about", 600.0, 600.0)],
            vec!["#home", "#about"],
        );
        reactor.on_scroll(input(700.0)); // inside about's [500, 1100) range
        assert!(!links[0].has_flag(Flag::Active));
        assert!(links[1].has_flag(Flag::Active));
    }

    #[test]
    fn offset_outside_every_section_clears_all_links() {
        let (mut reactor, _, links) = reactor(vec![("about", 600.0, 200.0)], vec!["#about"]);
        reactor.on_scroll(input(600.0));
        assert!(links[0].has_flag(Flag::Active));
        reactor.on_scroll(input(0.0)); // above [500, 700)
        assert!(!links[0].has_flag(Flag::Active));
        reactor.on_scroll(input(900.0)); // below it
        assert!(!links[0].has_flag(Flag::Active));
    }

    #[test]
    fn overlapping_sections_resolve_to_the_later_one() {
        let (mut reactor, _, links) = reactor(
            vec![("first", 100.0, 500.0), ("second", 300.0, 500.0)],
            vec!["#first", "#second"],
        );
        reactor.on_scroll(input(400.0)); // inside both ranges
        assert!(!links[0].has_flag(Flag::Active));
        assert!(links[1].has_flag(Flag::Active));
    }

    #[test]
    fn reveal_is_monotonic() {
        let element = FakeElement::default();
        element.set_rect_top(500.0);
        let mut reactor = ScrollReactor::new(
            None,
            Vec::new(),
            Vec::new(),
            vec![element.clone()],
            &ControllerConfig::default(),
        );

        reactor.on_scroll(input(0.0)); // 500 < 800 - 100
        assert!(element.has_flag(Flag::Active));

        // Scrolled back: the element sits below the threshold again, and an
        // outside actor even cleared the class. The reactor re-asserts it.
        element.set_rect_top(900.0);
        element.set_flag(Flag::Active, false);
        reactor.on_scroll(input(0.0));
        assert!(element.has_flag(Flag::Active));
    }

    #[test]
    fn dormant_element_stays_dormant_until_threshold() {
        let element = FakeElement::default();
        element.set_rect_top(750.0); // not above 800 - 100
        let mut reactor = ScrollReactor::new(
            None,
            Vec::new(),
            Vec::new(),
            vec![element.clone()],
            &ControllerConfig::default(),
        );
        reactor.on_scroll(input(0.0));
        assert!(!element.has_flag(Flag::Active));
    }
}
