//! Contact form handling.
//!
//! The form never performs its own network submission. The collected field
//! map goes to an injected [`Submitter`], and the user-visible
//! acknowledgment depends on the result it returns; a failed submission is
//! reported as a failure, never as a silent success. The DOM layer drives
//! the asynchronous path through [`ContactForm::collect`] and
//! [`ContactForm::finish`] so an HTTP future can complete later.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::page::ElementHandle;

/// Field-name to value mapping collected on submit.
pub type FormFields = BTreeMap<String, String>;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server rejected submission with status {status}")]
    Rejected { status: u16 },
    #[error("failed to encode submission: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The injected submission collaborator.
pub trait Submitter {
    fn submit(&mut self, fields: &FormFields) -> Result<(), SubmitError>;
}

/// Outcome surfaced to the embedding page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Accepted,
    Failed(String),
}

/// Callback receiving the submission outcome.
pub type FormHook = Box<dyn Fn(&FormOutcome)>;

pub struct ContactForm<H> {
    fields: Vec<H>,
    hook: Option<FormHook>,
}

impl<H: ElementHandle> ContactForm<H> {
    pub fn new(fields: Vec<H>, hook: Option<FormHook>) -> Self {
        Self { fields, hook }
    }

    /// Gather the current name/value pairs. Unnamed controls are skipped.
    pub fn collect(&self) -> FormFields {
        self.fields
            .iter()
            .filter_map(|f| f.field_name().map(|name| (name, f.value())))
            .collect()
    }

    /// Apply a submission result: success clears every field, failure keeps
    /// the user's input so they can retry. Either way the outcome reaches
    /// the hook.
    pub fn finish(&mut self, result: Result<(), SubmitError>) -> FormOutcome {
        let outcome = match result {
            Ok(()) => {
                log::info!("contact form submitted");
                for field in &self.fields {
                    field.set_value("");
                }
                FormOutcome::Accepted
            }
            Err(err) => {
                log::error!("contact form submission failed: {err}");
                FormOutcome::Failed(err.to_string())
            }
        };
        if let Some(hook) = &self.hook {
            hook(&outcome);
        }
        outcome
    }

    /// Synchronous submission path: collect, hand the fields to the
    /// collaborator exactly once, apply the result.
    pub fn submit_with(&mut self, submitter: &mut dyn Submitter) -> FormOutcome {
        let fields = self.collect();
        let result = submitter.submit(&fields);
        self.finish(result)
    }
}
