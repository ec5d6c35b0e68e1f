mod api;
mod components;
mod config;

use components::handlers;
use components::header::render_header;
use components::results::render_results;
use components::upload_section::render_upload_section;
use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{ClientConfig, ClientError, PredictionResult, RequestId, UploadSession};
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

// Yew msg components
enum Msg {
    // File operations
    FileChosen(Option<GlooFile>),
    Reset,

    // Analysis operations
    Analyze,
    PredictionFinished(RequestId, Result<PredictionResult, ClientError>),

    // UI states
    SetDragging(bool),

    // Input events
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

// Main component
struct Model {
    config: ClientConfig,
    session: UploadSession<GlooFile, ObjectUrl>,
    in_flight: Option<api::InFlight>,
    completed_at: Option<String>,
    is_dragging: bool,
    paste_listener: Option<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = config::load_client_config();
        log::info!(
            "Posting to {} (field \"{}\", timeout {} ms)",
            config.endpoint,
            config.file_field,
            config.timeout_ms
        );

        let mut model = Self {
            config,
            session: UploadSession::new(),
            in_flight: None,
            completed_at: None,
            is_dragging: false,
            paste_listener: None,
        };

        let link = ctx.link().clone();
        if let Some(window) = web_sys::window() {
            let listener = EventListener::new(&window, "paste", move |event| {
                if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                    link.send_message(Msg::HandlePaste(clipboard_event.clone()));
                }
            });
            model.paste_listener = Some(listener);
        }

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileChosen(file) => handlers::handle_file_chosen(self, file),
            Msg::Reset => handlers::handle_reset(self),

            Msg::Analyze => handlers::handle_analyze(self, ctx),
            Msg::PredictionFinished(id, outcome) => {
                handlers::handle_prediction_finished(self, id, outcome)
            }

            Msg::SetDragging(is_dragging) => {
                let changed = self.is_dragging != is_dragging;
                self.is_dragging = is_dragging;
                changed
            }

            Msg::HandleDrop(event) => handlers::handle_drop(self, event),
            Msg::HandlePaste(event) => handlers::handle_paste(self, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="page">
                { render_header() }

                <main class="container">
                    { render_upload_section(self, ctx) }
                    { render_results(self) }
                </main>

                <footer class="footer">
                    <p>{"AI Skin Detector | Rust WASM client"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
