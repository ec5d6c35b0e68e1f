use super::super::Model;
use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use js_sys::Date;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{FileList, HtmlInputElement};
use yew::prelude::*;

pub const FILE_INPUT_ID: &str = "file-input";

// Debounce function to limit button events
pub fn debounce<F>(duration: i32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration as u32, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

/// Only the first file counts; the MIME filter on the input is a hint, not a check.
pub fn first_file(file_list: &FileList) -> Option<GlooFile> {
    file_list.item(0).map(GlooFile::from)
}

fn file_input() -> Option<HtmlInputElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(FILE_INPUT_ID)?
        .dyn_into::<HtmlInputElement>()
        .ok()
}

pub fn open_file_dialog() {
    if let Some(input) = file_input() {
        input.click();
    }
}

/// Lets the same file be picked again after a reset.
pub fn clear_file_input() {
    if let Some(input) = file_input() {
        input.set_value("");
    }
}

pub fn timestamp_now() -> String {
    Date::new_0()
        .to_locale_string("default", &JsValue::UNDEFINED)
        .into()
}

pub fn render_error_message(model: &Model) -> Html {
    if let Some(error) = model.session.error() {
        html! {
            <div class="error">
                <p>{ error.to_string() }</p>
                {
                    if let Some(detail) = error.detail() {
                        html! { <p class="error-detail">{ detail }</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    } else {
        html! {}
    }
}
