//! UI state owned by the upload controller.
//!
//! Every classify request gets a [`RequestTicket`] when it is dispatched.
//! Completions carrying anything but the latest ticket are dropped, so the
//! screen always reflects the most recently started request.

use shared::Prediction;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl fmt::Display for RequestTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the results area should show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultsView<'a> {
    Idle,
    Loading,
    Failed,
    Ready(&'a [Prediction]),
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct UploadState {
    selected_preview: Option<String>,
    is_loading: bool,
    has_error: bool,
    predictions: Option<Vec<Prediction>>,
    dismissed_notice: bool,
    latest_ticket: u64,
}

impl UploadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_preview(&self) -> Option<&str> {
        self.selected_preview.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }

    pub fn dismissed_notice(&self) -> bool {
        self.dismissed_notice
    }

    /// A file got past the drop-zone filter and is being read.
    pub fn file_accepted(&mut self) {
        self.has_error = false;
    }

    /// Reading the file failed or produced something that is not a base64
    /// data URL. Any request still in flight is abandoned.
    pub fn file_read_failed(&mut self) {
        self.latest_ticket += 1;
        self.predictions = None;
        self.is_loading = false;
        self.has_error = true;
    }

    /// Shows the preview and enters the loading state for a new request.
    pub fn begin_request(&mut self, preview: String) -> RequestTicket {
        self.latest_ticket += 1;
        self.selected_preview = Some(preview);
        self.is_loading = true;
        self.has_error = false;
        RequestTicket(self.latest_ticket)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest_ticket
    }

    /// Returns false when the ticket is stale and nothing changed.
    pub fn apply_predictions(&mut self, ticket: RequestTicket, predictions: Vec<Prediction>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.predictions = Some(predictions);
        self.is_loading = false;
        self.has_error = false;
        true
    }

    /// Returns false when the ticket is stale and nothing changed.
    pub fn apply_failure(&mut self, ticket: RequestTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.predictions = None;
        self.is_loading = false;
        self.has_error = true;
        true
    }

    pub fn dismiss_notice(&mut self) {
        self.dismissed_notice = true;
    }

    pub fn results_view(&self) -> ResultsView<'_> {
        if self.has_error {
            ResultsView::Failed
        } else if self.is_loading {
            ResultsView::Loading
        } else {
            match &self.predictions {
                Some(predictions) => ResultsView::Ready(predictions),
                None => ResultsView::Idle,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREVIEW: &str = "data:image/png;base64,iVBORw0KGgo=";

    fn prediction(label: &str, confidence: f64) -> Prediction {
        Prediction {
            label: label.to_string(),
            confidence,
        }
    }

    fn rendered(state: &UploadState) -> Vec<String> {
        match state.results_view() {
            ResultsView::Ready(predictions) => predictions.iter().map(ToString::to_string).collect(),
            _ => Vec::new(),
        }
    }

    #[test]
    fn starts_idle_with_notice_visible() {
        let state = UploadState::new();
        assert_eq!(state.results_view(), ResultsView::Idle);
        assert_eq!(state.selected_preview(), None);
        assert!(!state.dismissed_notice());
    }

    #[test]
    fn begin_request_sets_preview_and_loading() {
        let mut state = UploadState::new();
        state.begin_request(PREVIEW.to_string());
        assert_eq!(state.selected_preview(), Some(PREVIEW));
        assert!(state.is_loading());
        assert!(!state.has_error());
        assert_eq!(state.results_view(), ResultsView::Loading);
    }

    #[test]
    fn successful_response_renders_each_prediction() {
        let mut state = UploadState::new();
        let ticket = state.begin_request(PREVIEW.to_string());
        assert!(state.apply_predictions(
            ticket,
            vec![prediction("cat", 0.932), prediction("dog", 0.041)]
        ));
        assert!(!state.is_loading());
        assert_eq!(rendered(&state), ["Cat: 93.2%", "Dog: 4.1%"]);
    }

    #[test]
    fn pending_request_hides_previous_predictions() {
        let mut state = UploadState::new();
        let first = state.begin_request(PREVIEW.to_string());
        state.apply_predictions(first, vec![prediction("ship", 0.8)]);

        state.begin_request(PREVIEW.to_string());
        assert_eq!(state.results_view(), ResultsView::Loading);
        assert!(rendered(&state).is_empty());
    }

    #[test]
    fn failure_shows_error_and_hides_earlier_success() {
        let mut state = UploadState::new();
        let first = state.begin_request(PREVIEW.to_string());
        state.apply_predictions(first, vec![prediction("horse", 0.7)]);

        let second = state.begin_request(PREVIEW.to_string());
        assert!(state.apply_failure(second));
        assert!(state.has_error());
        assert!(!state.is_loading());
        assert_eq!(state.results_view(), ResultsView::Failed);
    }

    #[test]
    fn new_request_clears_error() {
        let mut state = UploadState::new();
        let ticket = state.begin_request(PREVIEW.to_string());
        state.apply_failure(ticket);

        state.file_accepted();
        assert!(!state.has_error());
        state.begin_request(PREVIEW.to_string());
        assert!(state.is_loading() && !state.has_error());
    }

    #[test]
    fn rereading_after_failure_shows_nothing_until_new_results() {
        let mut state = UploadState::new();
        let failed = state.begin_request(PREVIEW.to_string());
        state.apply_failure(failed);

        state.file_accepted();
        assert_eq!(state.results_view(), ResultsView::Idle);

        let retry = state.begin_request(PREVIEW.to_string());
        state.apply_predictions(retry, vec![prediction("cat", 0.5)]);
        assert_eq!(rendered(&state), ["Cat: 50.0%"]);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = UploadState::new();
        let first = state.begin_request(PREVIEW.to_string());
        let second = state.begin_request(PREVIEW.to_string());

        assert!(!state.apply_predictions(first, vec![prediction("cat", 0.9)]));
        assert!(state.is_loading());

        assert!(state.apply_predictions(second, vec![prediction("dog", 0.6)]));
        assert_eq!(rendered(&state), ["Dog: 60.0%"]);

        assert!(!state.apply_failure(first));
        assert!(!state.has_error());
        assert_eq!(rendered(&state), ["Dog: 60.0%"]);
    }

    #[test]
    fn newer_request_wins_even_when_older_one_resolves_last() {
        let mut state = UploadState::new();
        let first = state.begin_request(PREVIEW.to_string());
        let second = state.begin_request(PREVIEW.to_string());

        state.apply_failure(second);
        assert!(!state.apply_predictions(first, vec![prediction("cat", 0.9)]));
        assert_eq!(state.results_view(), ResultsView::Failed);
    }

    #[test]
    fn file_read_failure_sets_error_and_abandons_pending_request() {
        let mut state = UploadState::new();
        let pending = state.begin_request(PREVIEW.to_string());

        state.file_read_failed();
        assert!(state.has_error());
        assert!(!state.is_loading());
        assert!(!state.is_current(pending));
        assert!(!state.apply_predictions(pending, vec![prediction("bird", 0.5)]));
        assert_eq!(state.results_view(), ResultsView::Failed);

        state.file_accepted();
        assert_eq!(state.results_view(), ResultsView::Idle);
    }

    #[test]
    fn empty_prediction_list_is_ready_not_idle() {
        let mut state = UploadState::new();
        let ticket = state.begin_request(PREVIEW.to_string());
        state.apply_predictions(ticket, Vec::new());
        assert_eq!(state.results_view(), ResultsView::Ready(&[]));
    }

    #[test]
    fn dismissing_notice_sticks() {
        let mut state = UploadState::new();
        state.dismiss_notice();
        state.begin_request(PREVIEW.to_string());
        assert!(state.dismissed_notice());
    }

    #[test]
    fn tickets_increase_monotonically() {
        let mut state = UploadState::new();
        let first = state.begin_request(PREVIEW.to_string());
        state.file_read_failed();
        let second = state.begin_request(PREVIEW.to_string());
        assert!(second > first);
        assert_eq!(second.to_string(), "#3");
    }
}
