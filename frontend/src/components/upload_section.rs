use super::super::Model;
use super::super::Msg;
use super::utils::{debounce, first_file, open_file_dialog, render_error_message, FILE_INPUT_ID};
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let loading = model.session.is_loading();

    html! {
        <section class="panel upload-panel">
            <h2>{"Upload Image for Detection"}</h2>

            { render_drop_zone(model, ctx) }
            if let Some(file) = model.session.file() {
                <p class="file-name" title={file.name()}>{ file.name() }</p>
            }

            <div class="upload-actions">
                <button
                    class="btn primary"
                    onclick={link.callback(|_| Msg::Analyze)}
                    disabled={loading}
                >
                    { if loading { "Analyzing..." } else { "Analyze Image" } }
                </button>
                <button
                    class="btn ghost"
                    onclick={link.callback(|_| Msg::Reset)}
                    title={ if loading { "Cancel the running analysis and clear" } else { "Clear" } }
                >
                    {"Clear"}
                </button>
            </div>

            { render_error_message(model) }
        </section>
    }
}

fn render_drop_zone(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FileChosen(input.files().as_ref().and_then(first_file))
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);
    let preview = model.session.preview();

    // The input sits outside the zone so its synthetic click does not bubble back into it.
    html! {
        <>
        <input
            type="file"
            id={FILE_INPUT_ID}
            accept="image/*"
            style="display: none;"
            onchange={handle_change}
        />
        <div
            class={classes!(
                "dropzone",
                preview.is_some().then_some("with-preview"),
                model.is_dragging.then_some("drag-over")
            )}
            ondragover={handle_drag_over}
            ondragleave={handle_drag_leave}
            ondrop={handle_drop}
            onclick={debounce(300, open_file_dialog)}
        >
            {
                if let Some(url) = preview {
                    html! { <img src={url.to_string()} alt="preview" class="preview-img" /> }
                } else {
                    html! {
                        <div class="drop-inner">
                            <strong>{"Click, drag or paste an image here"}</strong>
                            <div class="hint">{"PNG/JPG, a clear close-up of the skin works best"}</div>
                        </div>
                    }
                }
            }
        </div>
        </>
    }
}
