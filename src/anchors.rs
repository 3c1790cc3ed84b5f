//! Smooth same-page anchor navigation.
//!
//! Only the target-offset computation lives here; the DOM layer cancels the
//! default jump and performs the animated scroll.

use crate::page::{ElementHandle, Section};

/// Scroll offset an anchor click should animate to: the target section's
/// document offset minus the navbar height, measured at click time so
/// responsive navbar changes are honored. `None` for hrefs that are not
/// same-page anchors or name no known section.
pub fn scroll_target<H: ElementHandle>(
    href: &str,
    navbar: Option<&H>,
    sections: &[Section<H>],
) -> Option<f64> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    let section = sections.iter().find(|s| s.id == id)?;
    let navbar_height = navbar.map_or(0.0, |n| n.offset_height());
    Some(section.el.offset_top() - navbar_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::FakeElement;

    fn sections() -> Vec<Section<FakeElement>> {
        vec![Section {
            id: "contact".to_string(),
            el: FakeElement::with_offset(1200.0, 400.0),
        }]
    }

    #[test]
    fn target_accounts_for_current_navbar_height() {
        let navbar = FakeElement::with_offset(0.0, 64.0);
        let sections = sections();
        assert_eq!(
            scroll_target("#contact", Some(&navbar), &sections),
            Some(1136.0)
        );

        // The navbar collapsed after a layout change; the next click sees it.
        navbar.set_offset(0.0, 48.0);
        assert_eq!(
            scroll_target("#contact", Some(&navbar), &sections),
            Some(1152.0)
        );
    }

    #[test]
    fn missing_navbar_counts_as_zero_height() {
        assert_eq!(
            scroll_target::<FakeElement>("#contact", None, &sections()),
            Some(1200.0)
        );
    }

    #[test]
    fn unknown_or_non_anchor_hrefs_are_ignored() {
        let sections = sections();
        assert_eq!(scroll_target::<FakeElement>("#nope", None, &sections), None);
        assert_eq!(scroll_target::<FakeElement>("#", None, &sections), None);
        assert_eq!(
            scroll_target::<FakeElement>("/about", None, &sections),
            None
        );
    }
}
