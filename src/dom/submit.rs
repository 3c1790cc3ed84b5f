//! HTTP submission collaborator for the contact form.

use gloo_net::http::Request;

use crate::form::{FormFields, SubmitError};

/// POST the collected field map as JSON. A non-2xx status is a rejection;
/// transport problems surface as network errors.
pub async fn post_fields(url: &str, fields: &FormFields) -> Result<(), SubmitError> {
    let request = Request::post(url)
        .json(fields)
        .map_err(|err| SubmitError::Network(err.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|err| SubmitError::Network(err.to_string()))?;
    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Rejected {
            status: response.status(),
        })
    }
}
