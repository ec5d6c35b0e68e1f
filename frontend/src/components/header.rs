use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="hero">
            <h1>{"AI Skin Detector"}</h1>
            <p class="sub">
                {"Upload a skin image and our AI will analyze it and show diagnosis with a confidence score."}
            </p>
        </header>
    }
}
