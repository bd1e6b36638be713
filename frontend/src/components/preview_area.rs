use yew::prelude::*;

pub fn render_preview_area(preview: Option<&str>) -> Html {
    match preview {
        Some(data_url) => html! {
            <img
                id="actual-image-preview"
                class="image-preview"
                src={data_url.to_string()}
                alt="Preview"
            />
        },
        None => html! {
            <div class="upload-placeholder">
                <p class="placeholder-title">{"Drag image here"}</p>
                <p>{"or click to select"}</p>
                <p class="file-types">{"Only JPG and PNG files allowed"}</p>
            </div>
        },
    }
}
