use super::super::Model;
use super::super::Msg;
use super::preview_area::render_preview_area;
use super::utils::{Rejection, debounce, take_single_image};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let picked = input
            .files()
            .map_or(Err(Rejection::NoFile), |files| take_single_image(&files));

        input.set_value("");

        match picked {
            Ok(file) => Msg::FileAccepted(file),
            Err(rejection) => Msg::FileRejected(rejection),
        }
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
    let trigger_file_input = Callback::from(|_| {
        if let Some(input) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id("file-input"))
        {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    let preview = model.state.selected_preview();

    html! {
        <div class="upload-section">
            <input
                type="file"
                id="file-input"
                accept={shared::accept_attribute()}
                style="display: none;"
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!(
                    "upload-area",
                    preview.is_some().then_some("has-preview"),
                    model.state.is_loading().then_some("busy"),
                    model.is_dragging.then_some("drag-over")
                )}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                { render_preview_area(preview) }
            </div>
        </div>
    }
}
