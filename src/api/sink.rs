//! Presentation Sink
//!
//! The consumed interface between the core and whatever renders it. The
//! session controllers dictate when busy indicators start and stop and
//! when displays change; the surface owns how any of it looks.

use crate::logic::chat::ChatTurn;
use crate::logic::validate::FieldValidity;

use super::view::{Notice, ResultView, StatusView};

pub trait PresentationSink: Send + Sync {
    /// Predict control disabled / input fields marked in flight
    fn prediction_busy(&self, busy: bool);

    /// Per-field validity flags after a validation pass
    fn show_field_validity(&self, validity: &FieldValidity);

    /// Render the single live prediction result
    fn show_result(&self, view: &ResultView);

    /// Clear the result display back to its placeholder
    fn clear_result(&self);

    /// Assistant typing indicator
    fn chat_busy(&self, busy: bool);

    /// Full transcript snapshot after any append or clear
    fn transcript_changed(&self, turns: &[ChatTurn]);

    /// Assistant connectivity for the status chip
    fn assistant_status(&self, online: bool);

    /// Global service status banner
    fn status_changed(&self, status: &StatusView);

    /// Transient notification
    fn notify(&self, notice: &Notice);
}

// ============================================================================
// TEST SUPPORT
// ============================================================================

#[cfg(test)]
pub mod recording {
    //! Sink that records every call, for asserting on render behavior.

    use parking_lot::Mutex;

    use super::*;

    #[derive(Default)]
    pub struct RecordingSink {
        pub busy_transitions: Mutex<Vec<bool>>,
        pub validity_flags: Mutex<Vec<Vec<crate::logic::measurements::Field>>>,
        pub results: Mutex<Vec<ResultView>>,
        pub clears: Mutex<usize>,
        pub chat_busy_transitions: Mutex<Vec<bool>>,
        pub transcripts: Mutex<Vec<Vec<ChatTurn>>>,
        pub assistant_statuses: Mutex<Vec<bool>>,
        pub notices: Mutex<Vec<Notice>>,
    }

    impl RecordingSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn rendered_results(&self) -> Vec<ResultView> {
            self.results.lock().clone()
        }

        pub fn last_transcript(&self) -> Vec<ChatTurn> {
            self.transcripts.lock().last().cloned().unwrap_or_default()
        }
    }

    impl PresentationSink for RecordingSink {
        fn prediction_busy(&self, busy: bool) {
            self.busy_transitions.lock().push(busy);
        }

        fn show_field_validity(&self, validity: &FieldValidity) {
            self.validity_flags.lock().push(validity.failed_fields());
        }

        fn show_result(&self, view: &ResultView) {
            self.results.lock().push(view.clone());
        }

        fn clear_result(&self) {
            *self.clears.lock() += 1;
        }

        fn chat_busy(&self, busy: bool) {
            self.chat_busy_transitions.lock().push(busy);
        }

        fn transcript_changed(&self, turns: &[ChatTurn]) {
            self.transcripts.lock().push(turns.to_vec());
        }

        fn assistant_status(&self, online: bool) {
            self.assistant_statuses.lock().push(online);
        }

        fn status_changed(&self, _status: &StatusView) {
            // The session cores never drive the banner; only the surface does.
        }

        fn notify(&self, notice: &Notice) {
            self.notices.lock().push(notice.clone());
        }
    }
}
