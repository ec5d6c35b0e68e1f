use super::super::{Model, Msg};
use super::utils::{clear_file_input, first_file, timestamp_now};
use crate::api::{self, InFlight};
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{ClientError, PredictionResult, RequestId};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

fn cancel_in_flight(model: &mut Model) {
    if let Some(in_flight) = model.in_flight.take() {
        in_flight.cancel();
    }
}

pub fn handle_file_chosen(model: &mut Model, file: Option<GlooFile>) -> bool {
    let Some(file) = file else {
        return false;
    };

    log::info!(
        "Selected {} ({} bytes, {})",
        file.name(),
        file.size(),
        file.raw_mime_type()
    );

    cancel_in_flight(model);
    model.completed_at = None;
    model
        .session
        .select_file(Some(file), |f| ObjectUrl::from(f.clone()))
}

pub fn handle_drop(model: &mut Model, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    let file = event
        .data_transfer()
        .and_then(|data_transfer| data_transfer.files())
        .and_then(|file_list| first_file(&file_list));

    handle_file_chosen(model, file);
    true
}

pub fn handle_paste(model: &mut Model, event: ClipboardEvent) -> bool {
    let file = event
        .clipboard_data()
        .and_then(|data_transfer| data_transfer.files())
        .and_then(|file_list| first_file(&file_list));

    if file.is_some() {
        event.prevent_default();
        handle_file_chosen(model, file)
    } else {
        false
    }
}

pub fn handle_analyze(model: &mut Model, ctx: &Context<Model>) -> bool {
    let (id, file) = match model.session.begin_submit() {
        Ok(ticket) => ticket,
        Err(e) => {
            log::warn!("Submit rejected: {}", e);
            return true;
        }
    };

    cancel_in_flight(model);
    model.completed_at = None;

    let (in_flight, signal) = match InFlight::start(model.config.timeout_ms) {
        Ok(started) => started,
        Err(e) => {
            log::error!("Could not start request {}: {:?}", id, e.cause());
            model.session.complete(id, Err(e));
            return true;
        }
    };
    model.in_flight = Some(in_flight);

    log::info!("Request {}: uploading {} to {}", id, file.name(), model.config.endpoint);

    let config = model.config.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = api::request_prediction(&config, &file, &signal).await;
        link.send_message(Msg::PredictionFinished(id, outcome));
    });

    true
}

pub fn handle_prediction_finished(
    model: &mut Model,
    id: RequestId,
    outcome: Result<PredictionResult, ClientError>,
) -> bool {
    match &outcome {
        Ok(result) => log::info!(
            "Request {}: {} ({:.3})",
            id,
            result.label,
            result.confidence
        ),
        Err(e) => {
            if let Some(cause) = e.cause() {
                log::error!("Request {} failed: {}", id, cause);
            }
        }
    }

    if !model.session.complete(id, outcome) {
        return false;
    }

    model.in_flight = None;
    if model.session.result().is_some() {
        model.completed_at = Some(timestamp_now());
    }
    true
}

pub fn handle_reset(model: &mut Model) -> bool {
    cancel_in_flight(model);
    model.session.reset();
    model.completed_at = None;
    model.is_dragging = false;
    clear_file_input();
    true
}
