use super::super::Model;
use super::super::Msg;
use super::utils::{Rejection, take_single_image};
use crate::api::{ClassifyClient, ClassifyError};
use crate::state::RequestTicket;
use gloo_file::File as GlooFile;
use gloo_file::callbacks::read_as_data_url;
use js_sys::Date;
use shared::{ClassifyResponse, DataUrl, ImagePayload};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent, FileList};
use yew::prelude::*;

pub fn handle_file_accepted(model: &mut Model, ctx: &Context<Model>, file: GlooFile) -> bool {
    log::info!("Reading {} ({} bytes)", file.name(), file.size());
    model.state.file_accepted();

    let link = ctx.link().clone();
    // Replacing the reader drops (and aborts) any read still in progress.
    model.reader = Some(read_as_data_url(&file, move |result| {
        link.send_message(Msg::FileRead(result.map_err(|err| err.to_string())));
    }));

    true
}

pub fn handle_file_rejected(rejection: Rejection) -> bool {
    log::warn!("Ignoring file: {}", rejection);
    false
}

pub fn handle_file_read(
    model: &mut Model,
    ctx: &Context<Model>,
    result: Result<String, String>,
) -> bool {
    model.reader = None;

    let data_url = match result {
        Ok(data_url) => data_url,
        Err(err) => {
            log::error!("File reading has failed: {}", err);
            model.state.file_read_failed();
            return true;
        }
    };

    let payload = match DataUrl::parse(&data_url) {
        Ok(parsed) => parsed.to_payload(),
        Err(err) => {
            log::error!("File reading produced an unusable data url: {}", err);
            model.state.file_read_failed();
            return true;
        }
    };

    let ticket = model.state.begin_request(data_url);
    send_classify_request(ctx, model.client.clone(), ticket, payload);
    true
}

pub fn send_classify_request(
    ctx: &Context<Model>,
    client: ClassifyClient,
    ticket: RequestTicket,
    payload: ImagePayload,
) {
    log::info!(
        "Dispatching classify request {} ({} base64 chars) to {}",
        ticket,
        payload.len(),
        client.endpoint()
    );

    spawn_local({
        let link = ctx.link().clone();

        async move {
            let started = Date::now();
            let outcome = client.classify(payload).await;
            let elapsed_ms = Date::now() - started;
            link.send_message(Msg::ClassifyFinished {
                ticket,
                outcome,
                elapsed_ms,
            });
        }
    });
}

pub fn handle_classify_finished(
    model: &mut Model,
    ticket: RequestTicket,
    outcome: Result<ClassifyResponse, ClassifyError>,
    elapsed_ms: f64,
) -> bool {
    match outcome {
        Ok(response) => {
            log::info!(
                "Request {} returned {} predictions in {:.0} ms",
                ticket,
                response.predictions.len(),
                elapsed_ms
            );
            let applied = model.state.apply_predictions(ticket, response.predictions);
            if !applied {
                log::warn!("Discarding stale response for request {}", ticket);
            }
            applied
        }
        Err(err) => {
            log::error!("Error in image classification (request {}): {}", ticket, err);
            let applied = model.state.apply_failure(ticket);
            if !applied {
                log::warn!("Discarding stale failure for request {}", ticket);
            }
            applied
        }
    }
}

pub fn handle_dismiss_notice(model: &mut Model) -> bool {
    if model.state.dismissed_notice() {
        return false;
    }
    model.state.dismiss_notice();
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(file_list) = event.data_transfer().and_then(|transfer| transfer.files()) {
        process_file_list(ctx, &file_list);
    }

    true
}

pub fn handle_paste(ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    if let Some(file_list) = event.clipboard_data().and_then(|data| data.files()) {
        if file_list.length() > 0 {
            event.prevent_default();
            process_file_list(ctx, &file_list);
        }
    }
    false
}

pub fn process_file_list(ctx: &Context<Model>, file_list: &FileList) {
    let msg = match take_single_image(file_list) {
        Ok(file) => Msg::FileAccepted(file),
        Err(rejection) => Msg::FileRejected(rejection),
    };
    ctx.link().send_message(msg);
}
