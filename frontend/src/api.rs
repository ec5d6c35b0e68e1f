use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use shared::prediction::parse_prediction;
use shared::{ClientConfig, ClientError, PredictionResult};
use wasm_bindgen::JsValue;
use web_sys::{AbortController, AbortSignal, FormData};

/// A running prediction request. Dropping it stops the deadline timer;
/// [`InFlight::cancel`] aborts the fetch itself.
pub struct InFlight {
    controller: AbortController,
    _deadline: Timeout,
}

impl InFlight {
    pub fn start(timeout_ms: u32) -> Result<(Self, AbortSignal), ClientError> {
        let controller = AbortController::new().map_err(js_failure)?;
        let signal = controller.signal();

        let deadline = Timeout::new(timeout_ms, {
            let controller = controller.clone();
            move || {
                log::warn!("Prediction request timed out after {} ms", timeout_ms);
                controller.abort();
            }
        });

        Ok((
            Self {
                controller,
                _deadline: deadline,
            },
            signal,
        ))
    }

    pub fn cancel(self) {
        self.controller.abort();
    }
}

/// POSTs `file` as the only multipart part and normalizes the reply.
pub async fn request_prediction(
    config: &ClientConfig,
    file: &GlooFile,
    signal: &AbortSignal,
) -> Result<PredictionResult, ClientError> {
    let form_data = FormData::new().map_err(js_failure)?;
    form_data
        .append_with_blob(&config.file_field, file.as_ref())
        .map_err(js_failure)?;

    let response = Request::post(&config.endpoint)
        .abort_signal(Some(signal))
        .body(form_data)
        .map_err(|e| ClientError::network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ClientError::network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ClientError::network(e.to_string()))?;

    if !response.ok() {
        return Err(ClientError::from_status(status, &body));
    }

    parse_prediction(&body)
}

fn js_failure(err: JsValue) -> ClientError {
    ClientError::network(format!("{:?}", err))
}
