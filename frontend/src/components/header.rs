use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1>{"Image class predictions"}</h1>
            <p class="subtitle">
                {"Our pre-trained model "}<b>{"DenseNet201"}</b>{" is able to predict 10 classes:"}
            </p>
            <b class="class-list">
                {"airplanes, automobiles, birds, cats, deers, dogs, frogs, horses, ships and trucks"}
            </b>
        </header>
    }
}
