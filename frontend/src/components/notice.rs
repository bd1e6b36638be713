use super::super::{Model, Msg};
use yew::prelude::*;

pub fn render_notice(model: &Model, ctx: &Context<Model>) -> Html {
    if model.state.dismissed_notice() {
        return html! {};
    }

    html! {
        <div class="notice">
            <p>
                {"The first classification can take a while to come back while the model warms up."}
            </p>
            <button
                class="notice-dismiss"
                title="Dismiss"
                onclick={ctx.link().callback(|_| Msg::DismissNotice)}
            >
                {"×"}
            </button>
        </div>
    }
}
