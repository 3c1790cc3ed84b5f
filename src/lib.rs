//! pagefx — progressive enhancement for a static marketing page.
//!
//! The page itself stays plain HTML/CSS; this crate attaches behavior to it:
//! navbar elevation and active-link highlighting on scroll, scroll-reveal
//! animations, smooth anchor navigation, language/filter toggle groups, a
//! mobile menu, a contact form handler, and a stat counter animation.
//!
//! All decision logic lives in pure modules written against the
//! [`page::ElementHandle`] abstraction, so the whole controller can be
//! exercised on the host with synthetic fixtures. The `dom` module (wasm32
//! only) binds the controller to a real document through `web-sys`.

pub mod anchors;
pub mod config;
pub mod controller;
pub mod counter;
pub mod debounce;
pub mod form;
pub mod geometry;
pub mod menu;
pub mod page;
pub mod scroll;
pub mod toggle;

#[cfg(target_arch = "wasm32")]
pub mod dom;

#[cfg(test)]
pub(crate) mod testutil;

pub use config::ControllerConfig;
pub use controller::{Hooks, PageController};
pub use form::{FormFields, FormOutcome, SubmitError, Submitter};
pub use page::{ElementHandle, Flag, PageModel};
