mod api;
mod components;
mod config;
mod state;

use api::{ClassifyClient, ClassifyError};
use components::handlers;
use components::header::render_header;
use components::notice::render_notice;
use components::results::render_results;
use components::upload_section::render_upload_section;
use components::utils::Rejection;
use config::ApiConfig;
use gloo_events::EventListener;
use gloo_file::File as GlooFile;
use gloo_file::callbacks::FileReader;
use shared::ClassifyResponse;
use state::{RequestTicket, UploadState};
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

// Yew msg components
enum Msg {
    // File operations
    FileAccepted(GlooFile),
    FileRejected(Rejection),
    FileRead(Result<String, String>),

    // Classification
    ClassifyFinished {
        ticket: RequestTicket,
        outcome: Result<ClassifyResponse, ClassifyError>,
        elapsed_ms: f64,
    },

    // UI states
    DismissNotice,
    SetDragging(bool),

    // Input events
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

// Main component
struct Model {
    state: UploadState,
    client: ClassifyClient,
    reader: Option<FileReader>,
    is_dragging: bool,
    paste_listener: Option<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = ApiConfig::load();
        log::info!("Classifier API base URL: {}", config.base_url());

        let mut model = Self {
            state: UploadState::new(),
            client: ClassifyClient::new(&config),
            reader: None,
            is_dragging: false,
            paste_listener: None,
        };

        let link = ctx.link().clone();
        let window = web_sys::window().expect("no global `window` exists");
        let listener = EventListener::new(&window, "paste", move |event| {
            if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                link.send_message(Msg::HandlePaste(clipboard_event.clone()));
            }
        });
        model.paste_listener = Some(listener);

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // File operations
            Msg::FileAccepted(file) => handlers::handle_file_accepted(self, ctx, file),
            Msg::FileRejected(rejection) => handlers::handle_file_rejected(rejection),
            Msg::FileRead(result) => handlers::handle_file_read(self, ctx, result),

            // Classification
            Msg::ClassifyFinished {
                ticket,
                outcome,
                elapsed_ms,
            } => handlers::handle_classify_finished(self, ticket, outcome, elapsed_ms),

            // UI states
            Msg::DismissNotice => handlers::handle_dismiss_notice(self),
            Msg::SetDragging(is_dragging) => {
                let changed = self.is_dragging != is_dragging;
                self.is_dragging = is_dragging;
                changed
            }

            // Input events
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                <main class="main-content">
                    { render_header() }
                    { render_notice(self, ctx) }
                    { render_upload_section(self, ctx) }
                    { render_results(self) }
                </main>
            </div>
        }
    }
}

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
