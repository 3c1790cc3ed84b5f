//! Queries the page's fixed regions, builds the [`PageModel`], and attaches
//! the event listeners that drive the controller.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList, ScrollBehavior, ScrollToOptions, Window,
};

use super::element::DomElement;
use super::submit;
use crate::config::ControllerConfig;
use crate::controller::{Hooks, PageController};
use crate::form::FormOutcome;
use crate::page::{MobileMenuModel, NavLink, PageModel, Section};
use crate::scroll::ScrollInput;

type SharedController = Rc<RefCell<PageController<DomElement>>>;
type RafClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;
type RafId = Rc<RefCell<Option<i32>>>;

/// A live binding between the controller and the document. Dropping it
/// removes every listener, disconnects the observer, and cancels any
/// running animation.
pub struct Attachment {
    controller: SharedController,
    listeners: Vec<Listener>,
    observer: Option<IntersectionObserver>,
    observer_callback: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>,
    pending_scroll: Rc<RefCell<Option<Timeout>>>,
    raf: RafClosure,
    raf_id: RafId,
}

impl Attachment {
    pub fn controller(&self) -> &SharedController {
        &self.controller
    }
}

impl Drop for Attachment {
    fn drop(&mut self) {
        self.listeners.clear();
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
        self.observer_callback.take();
        // Dropping a pending Timeout cancels it.
        self.pending_scroll.borrow_mut().take();
        self.controller.borrow_mut().cancel_counters();
        // Cancel any scheduled frame before dropping its closure.
        if let Some(id) = self.raf_id.borrow_mut().take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.raf.borrow_mut().take();
    }
}

/// An event listener that detaches itself when dropped.
struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, JsValue> {
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Build the page model from the document and wire everything up.
pub fn attach(config: ControllerConfig) -> Result<Attachment, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let navbar = document
        .get_element_by_id("navbar")
        .and_then(DomElement::from_element);

    let sections: Vec<Section<DomElement>> = select_all(&document, "section")?
        .into_iter()
        .filter_map(|el| {
            let id = el.attribute("id").filter(|id| !id.is_empty())?;
            Some(Section { id, el })
        })
        .collect();

    let nav_links: Vec<NavLink<DomElement>> = select_all(&document, ".nav-links a")?
        .into_iter()
        .filter_map(|el| {
            let target = el.attribute("href")?;
            Some(NavLink { target, el })
        })
        .collect();

    let language_buttons = select_all(&document, ".lang-btn")?;
    let filter_buttons = select_all(&document, ".filter-btn")?;
    let reveal_elements = select_all(&document, ".reveal")?;

    let contact_form = document
        .query_selector(".contact-form")?
        .and_then(DomElement::from_element);
    let contact_fields = match &contact_form {
        Some(form) => Some(select_within(
            form.raw(),
            "input[name], textarea[name], select[name]",
        )?),
        None => None,
    };

    let menu_trigger = document
        .query_selector(".mobile-menu-toggle")?
        .and_then(DomElement::from_element);
    let menu_panel = document
        .query_selector(".mobile-menu")?
        .and_then(DomElement::from_element);
    let mobile_menu = match (menu_trigger, menu_panel) {
        (Some(trigger), Some(panel)) => Some(MobileMenuModel { trigger, panel }),
        _ => None,
    };

    let hero_card = document
        .query_selector(".hero-card")?
        .and_then(DomElement::from_element);
    let stat_elements = match &hero_card {
        Some(hero) => select_within(hero.raw(), ".stat-number")?,
        None => Vec::new(),
    };

    let hooks = Hooks {
        language: None,
        filter: None,
        form: Some(alert_hook(&window)),
    };

    let model = PageModel {
        navbar,
        sections,
        nav_links,
        language_buttons: language_buttons.clone(),
        filter_buttons: filter_buttons.clone(),
        reveal_elements,
        contact_fields,
        mobile_menu: mobile_menu.clone(),
        stat_elements,
    };

    let controller: SharedController =
        Rc::new(RefCell::new(PageController::new(model, &config, hooks)));
    let mut listeners = Vec::new();
    let pending_scroll: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let raf: RafClosure = Rc::new(RefCell::new(None));
    let raf_id: RafId = Rc::new(RefCell::new(None));

    // Debounced scroll: each event re-arms a trailing timeout that samples
    // the final scroll position, so a burst settles to the same state as a
    // single synchronous recomputation.
    {
        let controller = controller.clone();
        let window = window.clone();
        let pending = pending_scroll.clone();
        let debounce_ms = config.debounce_ms;
        let callback = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            let controller = controller.clone();
            let window = window.clone();
            let timeout = Timeout::new(debounce_ms, move || {
                controller.borrow_mut().on_scroll(scroll_input(&window));
            });
            // Replacing the old timeout cancels it.
            *pending.borrow_mut() = Some(timeout);
        });
        listeners.push(Listener::attach(&window, "scroll", callback)?);
    }

    // Smooth anchor navigation for every same-page anchor link.
    for anchor in select_all(&document, "a[href^='#']")? {
        let controller = controller.clone();
        let window = window.clone();
        let target = anchor.clone();
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            let Some(href) = target.attribute("href") else {
                return;
            };
            if let Some(top) = controller.borrow().anchor_scroll_target(&href) {
                smooth_scroll_to(&window, top);
            }
        });
        listeners.push(Listener::attach(anchor.raw(), "click", callback)?);
    }

    for (index, button) in language_buttons.iter().enumerate() {
        let controller = controller.clone();
        let callback = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            controller.borrow().on_language_select(index);
        });
        listeners.push(Listener::attach(button.raw(), "click", callback)?);
    }

    for (index, button) in filter_buttons.iter().enumerate() {
        let controller = controller.clone();
        let callback = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            controller.borrow().on_filter_select(index);
        });
        listeners.push(Listener::attach(button.raw(), "click", callback)?);
    }

    if let Some(menu) = &mobile_menu {
        let toggle_controller = controller.clone();
        let callback = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            toggle_controller.borrow_mut().on_menu_toggle();
        });
        listeners.push(Listener::attach(menu.trigger.raw(), "click", callback)?);

        for link in select_within(menu.panel.raw(), "a")? {
            let controller = controller.clone();
            let callback = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
                controller.borrow_mut().on_menu_link_click();
            });
            listeners.push(Listener::attach(link.raw(), "click", callback)?);
        }
    }

    if let Some(form) = &contact_form {
        let controller = controller.clone();
        let submit_url = config.submit_url.clone();
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            let fields = controller.borrow().collect_form();
            match &submit_url {
                Some(url) => {
                    let controller = controller.clone();
                    let url = url.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let result = submit::post_fields(&url, &fields).await;
                        controller.borrow_mut().finish_submit(result);
                    });
                }
                // No endpoint configured: the stubbed always-successful
                // submission.
                None => {
                    log::info!("form submitted (no endpoint configured): {fields:?}");
                    controller.borrow_mut().finish_submit(Ok(()));
                }
            }
        });
        listeners.push(Listener::attach(form.raw(), "submit", callback)?);
    }

    let mut observer = None;
    let mut observer_callback = None;
    if let Some(hero) = &hero_card {
        if controller.borrow().has_counters() {
            let (obs, cb) = observe_stats(
                &config,
                controller.clone(),
                raf.clone(),
                raf_id.clone(),
                hero.raw(),
            )?;
            observer = Some(obs);
            observer_callback = Some(cb);
        }
    }

    // The original ran its scroll reactions once on load as well.
    controller.borrow_mut().init(scroll_input(&window));

    Ok(Attachment {
        controller,
        listeners,
        observer,
        observer_callback,
        pending_scroll,
        raf,
        raf_id,
    })
}

fn observe_stats(
    config: &ControllerConfig,
    controller: SharedController,
    raf: RafClosure,
    raf_id: RafId,
    hero: &Element,
) -> Result<
    (
        IntersectionObserver,
        Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    ),
    JsValue,
> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    // One-shot: stop watching before starting the animation.
                    observer.unobserve(&entry.target());
                    controller.borrow_mut().on_stats_visible();
                    run_animation_frames(controller.clone(), raf.clone(), raf_id.clone());
                }
            }
        },
    );
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.stats_visibility_threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(hero);
    Ok((observer, callback))
}

/// Self-rescheduling requestAnimationFrame loop; stops once no counter is
/// animating. The closure stays in `raf` so teardown can drop it outside
/// its own invocation, and the last frame id stays in `raf_id` so teardown
/// can cancel a frame that is still scheduled.
fn run_animation_frames(controller: SharedController, raf: RafClosure, raf_id: RafId) {
    let holder = raf.clone();
    let holder_id = raf_id.clone();
    *raf.borrow_mut() = Some(Closure::new(move || {
        holder_id.borrow_mut().take();
        let more = controller.borrow_mut().on_frame();
        if more {
            if let Some(callback) = holder.borrow().as_ref() {
                request_frame(callback, &holder_id);
            }
        }
    }));
    if let Some(callback) = raf.borrow().as_ref() {
        request_frame(callback, &raf_id);
    }
}

fn request_frame(callback: &Closure<dyn FnMut()>, raf_id: &RafId) {
    if let Some(window) = web_sys::window() {
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => *raf_id.borrow_mut() = Some(id),
            Err(err) => log::error!("requestAnimationFrame failed: {err:?}"),
        }
    }
}

fn scroll_input(window: &Window) -> ScrollInput {
    let offset = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    ScrollInput {
        offset,
        viewport_height,
    }
}

fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn alert_hook(window: &Window) -> Box<dyn Fn(&FormOutcome)> {
    let window = window.clone();
    Box::new(move |outcome| {
        let message = match outcome {
            FormOutcome::Accepted => {
                "Thank you for your message! We will get back to you soon.".to_string()
            }
            FormOutcome::Failed(reason) => {
                format!("Sorry, your message could not be sent: {reason}")
            }
        };
        let _ = window.alert_with_message(&message);
    })
}

fn select_all(document: &Document, selector: &str) -> Result<Vec<DomElement>, JsValue> {
    Ok(collect_elements(document.query_selector_all(selector)?))
}

fn select_within(root: &Element, selector: &str) -> Result<Vec<DomElement>, JsValue> {
    Ok(collect_elements(root.query_selector_all(selector)?))
}

fn collect_elements(list: NodeList) -> Vec<DomElement> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(DomElement::from_element)
        .collect()
}
