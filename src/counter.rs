//! Stat counter animation.
//!
//! Each counter is a small state machine: `Idle -> Animating -> Settled`,
//! with `Cancelled` as an extra terminal state for teardown. The target is
//! parsed from the element's displayed text; values that do not parse to a
//! non-negative integer below the configured cap are settled immediately and
//! the element is left untouched.

use crate::config::ControllerConfig;
use crate::page::ElementHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterState {
    Idle,
    Animating,
    Settled,
    Cancelled,
}

pub struct Counter<H> {
    el: H,
    target: u32,
    accumulator: f64,
    increment: f64,
    state: CounterState,
}

impl<H: ElementHandle> Counter<H> {
    pub fn new(el: H, config: &ControllerConfig) -> Self {
        let target = parse_target(&el.text()).filter(|t| *t < config.counter_max_target);
        let state = match target {
            Some(_) => CounterState::Idle,
            // Nothing to animate; the element keeps its text.
            None => CounterState::Settled,
        };
        let target = target.unwrap_or(0);
        let frames = config.counter_duration_ms / config.counter_frame_ms;
        Self {
            el,
            target,
            accumulator: 0.0,
            increment: f64::from(target) / frames,
            state,
        }
    }

    pub fn state(&self) -> CounterState {
        self.state
    }

    /// Enter the animating state. Only valid from `Idle`; a counter that has
    /// already run (or had nothing to animate) never restarts.
    pub fn start(&mut self) {
        if self.state == CounterState::Idle {
            self.state = CounterState::Animating;
            self.tick();
        }
    }

    /// Advance one animation frame. Returns true while more frames are
    /// needed. The displayed value is the floored accumulator until the
    /// target is reached, then pinned exactly to the target.
    pub fn tick(&mut self) -> bool {
        if self.state != CounterState::Animating {
            return false;
        }
        self.accumulator += self.increment;
        if self.accumulator < f64::from(self.target) {
            self.el.set_text(&(self.accumulator.floor() as u32).to_string());
            true
        } else {
            self.el.set_text(&self.target.to_string());
            self.state = CounterState::Settled;
            false
        }
    }

    /// Stop a running animation. No further element mutation happens after
    /// this returns.
    pub fn cancel(&mut self) {
        if self.state == CounterState::Animating {
            self.state = CounterState::Cancelled;
        }
    }
}

/// Leading-integer parse matching the original page's numeric handling:
/// leading whitespace skipped, digits taken until the first non-digit, a
/// negative sign rejected.
fn parse_target(text: &str) -> Option<u32> {
    let trimmed = text.trim_start();
    let digits: String = trimmed
        .strip_prefix('+')
        .unwrap_or(trimmed)
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() || trimmed.starts_with('-') {
        return None;
    }
    digits.parse().ok()
}

/// All counters of the hero card. The visibility observer fires once for
/// the whole container; the panel guards against re-triggering on its own
/// as well.
pub struct StatPanel<H> {
    counters: Vec<Counter<H>>,
    triggered: bool,
}

impl<H: ElementHandle> StatPanel<H> {
    pub fn new(elements: Vec<H>, config: &ControllerConfig) -> Self {
        let counters = elements
            .into_iter()
            .map(|el| Counter::new(el, config))
            .collect();
        Self {
            counters,
            triggered: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// First sighting of the container starts every idle counter; later
    /// sightings are no-ops.
    pub fn on_visible(&mut self) {
        if self.triggered {
            return;
        }
        self.triggered = true;
        log::debug!("stat panel visible, starting {} counters", self.counters.len());
        for counter in &mut self.counters {
            counter.start();
        }
    }

    /// Advance every running counter one frame; true while any still runs.
    pub fn on_frame(&mut self) -> bool {
        let mut animating = false;
        for counter in &mut self.counters {
            if counter.tick() {
                animating = true;
            }
        }
        animating
    }

    pub fn is_animating(&self) -> bool {
        self.counters
            .iter()
            .any(|c| c.state() == CounterState::Animating)
    }

    pub fn cancel(&mut self) {
        for counter in &mut self.counters {
            counter.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::FakeElement;

    fn run_to_completion(counter: &mut Counter<FakeElement>, limit: usize) -> usize {
        let mut frames = 0;
        while counter.tick() {
            frames += 1;
            assert!(frames < limit, "animation never settled");
        }
        frames
    }

    #[test]
    fn sequence_is_nondecreasing_and_ends_pinned_to_target() {
        let el = FakeElement::with_text("42");
        let mut counter = Counter::new(el.clone(), &ControllerConfig::default());
        counter.start();

        let mut last = el.text().parse::<u32>().unwrap();
        assert!(last <= 42);
        let mut ticks = 0;
        while counter.tick() {
            let shown: u32 = el.text().parse().unwrap();
            assert!(shown >= last, "displayed value regressed");
            assert!(shown <= 42, "displayed value overshot the target");
            last = shown;
            ticks += 1;
            assert!(ticks < 500, "animation never settled");
        }
        assert_eq!(el.text(), "42");
        assert_eq!(counter.state(), CounterState::Settled);
    }

    #[test]
    fn animation_spans_roughly_duration_over_frame_ms_frames() {
        let el = FakeElement::with_text("42");
        let mut counter = Counter::new(el, &ControllerConfig::default());
        counter.start();
        // 2000ms / 16ms = 125 increments in total, give or take rounding at
        // the final frame; start() consumed the first.
        let frames = run_to_completion(&mut counter, 500);
        assert!((120..=126).contains(&frames), "settled after {frames} frames");
    }

    #[test]
    fn target_at_or_above_cap_is_left_untouched() {
        let el = FakeElement::with_text("1500");
        let mut counter = Counter::new(el.clone(), &ControllerConfig::default());
        assert_eq!(counter.state(), CounterState::Settled);
        counter.start();
        assert!(!counter.tick());
        assert_eq!(el.text(), "1500");
    }

    #[test]
    fn unparseable_target_is_left_untouched() {
        let el = FakeElement::with_text("N/A");
        let counter = Counter::new(el.clone(), &ControllerConfig::default());
        assert_eq!(counter.state(), CounterState::Settled);
        assert_eq!(el.text(), "N/A");
    }

    #[test]
    fn negative_target_is_left_untouched() {
        let el = FakeElement::with_text("-5");
        let counter = Counter::new(el.clone(), &ControllerConfig::default());
        assert_eq!(counter.state(), CounterState::Settled);
        assert_eq!(el.text(), "-5");
    }

    #[test]
    fn suffixed_target_animates_on_the_leading_integer() {
        let el = FakeElement::with_text("150+");
        let mut counter = Counter::new(el.clone(), &ControllerConfig::default());
        counter.start();
        run_to_completion(&mut counter, 500);
        assert_eq!(el.text(), "150");
    }

    #[test]
    fn zero_target_settles_immediately_at_zero() {
        let el = FakeElement::with_text("0");
        let mut counter = Counter::new(el.clone(), &ControllerConfig::default());
        counter.start();
        assert_eq!(el.text(), "0");
        assert_eq!(counter.state(), CounterState::Settled);
    }

    #[test]
    fn cancel_stops_all_further_mutation() {
        let el = FakeElement::with_text("42");
        let mut counter = Counter::new(el.clone(), &ControllerConfig::default());
        counter.start();
        counter.tick();
        let frozen = el.text();
        counter.cancel();
        assert!(!counter.tick());
        assert!(!counter.tick());
        assert_eq!(el.text(), frozen);
        assert_eq!(counter.state(), CounterState::Cancelled);
    }

    #[test]
    fn panel_does_not_restart_on_a_second_sighting() {
        let el = FakeElement::with_text("42");
        let mut panel = StatPanel::new(vec![el.clone()], &ControllerConfig::default());
        panel.on_visible();
        while panel.on_frame() {}
        assert_eq!(el.text(), "42");

        panel.on_visible();
        assert!(!panel.is_animating());
        assert!(!panel.on_frame());
        assert_eq!(el.text(), "42");
    }
}
