use gloo_net::http::Request;

use super::*;

/// Posts applications to the form relay as multipart form data.
pub(super) struct GlooRelay {
    endpoint: String,
}

impl GlooRelay {
    pub(super) fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl ApplicationRelay for GlooRelay {
    type Attachment = web_sys::File;

    async fn submit(
        &self,
        submission: RelaySubmission<web_sys::File>,
    ) -> Result<RelayResponse, RelayError> {
        let form = build_form_data(&submission)?;
        let response = Request::post(&self.endpoint)
            .header("Accept", "application/json")
            .body(form)
            .map_err(|error| RelayError::Encode(error.to_string()))?
            .send()
            .await
            .map_err(|error| RelayError::Network(error.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| RelayError::Network(error.to_string()))?;
        debug!(status, endpoint = %self.endpoint, "relay responded");
        Ok(RelayResponse { status, body })
    }
}

fn build_form_data(submission: &RelaySubmission<web_sys::File>) -> Result<web_sys::FormData, RelayError> {
    let form = web_sys::FormData::new()
        .map_err(|error| RelayError::Encode(js_error_message(&error)))?;
    for (name, value) in &submission.fields {
        form.append_with_str(name, value)
            .map_err(|error| RelayError::Encode(js_error_message(&error)))?;
    }
    for (slot, file) in &submission.attachments {
        form.append_with_blob_and_filename(slot.form_name(), file, &file.name())
            .map_err(|error| RelayError::Encode(js_error_message(&error)))?;
    }
    Ok(form)
}
