use super::super::Model;
use crate::state::ResultsView;
use shared::Prediction;
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    let content = match model.state.results_view() {
        ResultsView::Idle => html! {},
        ResultsView::Loading => html! { <i class="loading">{"Loading the results..."}</i> },
        ResultsView::Failed => html! { <p class="error-message">{"An error has occurred!"}</p> },
        ResultsView::Ready([]) => {
            html! { <p class="no-results-message">{"No predictions returned for this image."}</p> }
        }
        ResultsView::Ready(predictions) => {
            html! { <>{ for predictions.iter().map(render_prediction) }</> }
        }
    };

    html! {
        <div class={classes!("results-container", model.state.has_error().then_some("has-error"))}>
            { content }
        </div>
    }
}

fn render_prediction(prediction: &Prediction) -> Html {
    html! {
        <b class="prediction" title={format!("{:.4}", prediction.confidence)}>
            { prediction.to_string() }
        </b>
    }
}
