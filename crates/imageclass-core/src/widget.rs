//! Upload Widget State
//!
//! UI-independent state behind the upload widget. The phase is derived from
//! the fields, so there is no way for it to disagree with them:
//!
//! ```text
//! Idle ──select──▶ FileSelected ──predict──▶ Predicting ──ok──▶ ResultShown
//!  ▲                 ▲    │                      │                 │
//!  └─────remove──────┼────┘                      └──err──▶ FileSelected
//!                    └───────────select──────────────────────────────┘
//! ```
//!
//! At most one prediction is in flight per widget: `predict_enabled` is
//! false while one is running, and `begin_prediction` refuses a second.

use crate::client::PredictionClient;
use crate::error::{Alert, ClassifyResult};
use crate::file::SelectedFile;
use crate::types::{PredictionResponse, PredictionResult, ResultView};

/// Where the widget is in its lifecycle
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum WidgetPhase {
    /// Nothing selected, drop area visible
    #[default]
    Idle,
    /// An image is selected and previewed
    FileSelected,
    /// A request is in flight
    Predicting,
    /// The last request succeeded and its result is on screen
    ResultShown,
}

impl WidgetPhase {
    pub fn label(&self) -> &'static str {
        match self {
            WidgetPhase::Idle => "idle",
            WidgetPhase::FileSelected => "file selected",
            WidgetPhase::Predicting => "predicting",
            WidgetPhase::ResultShown => "result shown",
        }
    }
}

/// Proof that a prediction was started, handed back on completion.
///
/// Carries the selection generation so a result for a file that has since
/// been removed or replaced can be discarded.
#[derive(Debug)]
pub struct PredictionTicket {
    generation: u64,
    file: SelectedFile,
}

impl PredictionTicket {
    /// The file to upload
    pub fn file(&self) -> &SelectedFile {
        &self.file
    }
}

#[derive(Clone, Debug, Default)]
pub struct UploadWidget {
    selected: Option<SelectedFile>,
    result: Option<PredictionResult>,
    in_flight: bool,
    dragover: bool,
    generation: u64,
}

impl UploadWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> WidgetPhase {
        if self.in_flight {
            WidgetPhase::Predicting
        } else if self.result.is_some() {
            WidgetPhase::ResultShown
        } else if self.selected.is_some() {
            WidgetPhase::FileSelected
        } else {
            WidgetPhase::Idle
        }
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    /// Render model for the result card, if a result is shown
    pub fn result_view(&self) -> Option<ResultView> {
        self.result.as_ref().map(ResultView::from)
    }

    /// Predict button state
    pub fn predict_enabled(&self) -> bool {
        self.selected.is_some() && !self.in_flight
    }

    /// Loader state
    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// The drop/select area is replaced by the preview while a file is selected.
    pub fn drop_area_visible(&self) -> bool {
        self.selected.is_none()
    }

    pub fn result_visible(&self) -> bool {
        self.result.is_some()
    }

    pub fn is_dragover(&self) -> bool {
        self.dragover
    }

    /// Highlight the drop area while a drag hovers over it.
    pub fn set_dragover(&mut self, dragover: bool) {
        self.dragover = dragover;
    }

    /// Take `file` as the new selection.
    ///
    /// Non-images are rejected without touching any state.
    pub fn select_file(&mut self, file: SelectedFile) -> ClassifyResult<()> {
        if let Err(e) = file.ensure_image() {
            tracing::warn!("Rejected selection: {}", e);
            return Err(e);
        }

        tracing::info!("Selected {} ({})", file.name(), file.media_type());
        self.selected = Some(file);
        self.result = None;
        self.generation += 1;
        Ok(())
    }

    /// Take the first file of a drop or picker list; an empty list is ignored.
    pub fn select_first(
        &mut self,
        files: impl IntoIterator<Item = SelectedFile>,
    ) -> ClassifyResult<()> {
        match files.into_iter().next() {
            Some(file) => self.select_file(file),
            None => Ok(()),
        }
    }

    /// Drop the selection and go back to the empty drop area.
    pub fn remove_file(&mut self) {
        if let Some(file) = self.selected.take() {
            tracing::info!("Removed {}", file.name());
        }
        self.result = None;
        self.dragover = false;
        self.generation += 1;
    }

    /// Start a prediction for the current selection.
    ///
    /// Returns `None` (and changes nothing) when no file is selected or a
    /// request is already running. Otherwise disables predict, shows the
    /// loader and hides the previous result.
    pub fn begin_prediction(&mut self) -> Option<PredictionTicket> {
        if self.in_flight {
            tracing::debug!("Prediction already in flight, ignoring");
            return None;
        }
        let file = self.selected.clone()?;

        self.in_flight = true;
        self.result = None;
        Some(PredictionTicket {
            generation: self.generation,
            file,
        })
    }

    /// Complete the prediction started with `ticket`.
    ///
    /// The in-flight flag is cleared first, whatever the outcome. A result
    /// is shown only if the selection has not changed since the ticket was
    /// issued; otherwise the outcome is dropped silently.
    pub fn finish_prediction(
        &mut self,
        ticket: PredictionTicket,
        outcome: ClassifyResult<PredictionResult>,
    ) -> Option<Alert> {
        self.in_flight = false;

        if ticket.generation != self.generation {
            tracing::debug!(
                "Discarding prediction for {}: selection changed",
                ticket.file.name()
            );
            return None;
        }

        match outcome {
            Ok(result) => {
                tracing::info!(
                    "Prediction for {}: {} ({})",
                    ticket.file.name(),
                    result.prediction,
                    result.confidence
                );
                self.result = Some(result);
                None
            }
            Err(e) => {
                tracing::error!("Prediction for {} failed: {}", ticket.file.name(), e);
                Some(e.alert())
            }
        }
    }

    /// Run a whole prediction against `client`.
    ///
    /// No-op when nothing is selected. Returns the alert to show, if any.
    pub async fn predict<C: PredictionClient>(&mut self, client: &C) -> Option<Alert> {
        let ticket = self.begin_prediction()?;
        let outcome = client
            .predict(ticket.file())
            .await
            .and_then(PredictionResponse::into_result);
        self.finish_prediction(ticket, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AlertKind, ClassifyError};
    use std::collections::BTreeMap;

    fn image() -> SelectedFile {
        SelectedFile::from_bytes("cat.png", vec![0u8; 8])
    }

    fn cat_result() -> PredictionResult {
        PredictionResult {
            prediction: "cat".to_string(),
            confidence: "72.30%".to_string(),
            probabilities: BTreeMap::from([("cat".to_string(), 72.3), ("dog".to_string(), 27.7)]),
        }
    }

    #[test]
    fn test_initial_state() {
        let widget = UploadWidget::new();
        assert_eq!(widget.phase(), WidgetPhase::Idle);
        assert!(widget.drop_area_visible());
        assert!(!widget.predict_enabled());
        assert!(!widget.result_visible());
        assert!(!widget.is_loading());
    }

    #[test]
    fn test_select_rejects_non_image() {
        let mut widget = UploadWidget::new();
        let err = widget
            .select_file(SelectedFile::from_bytes("notes.txt", b"hi".to_vec()))
            .unwrap_err();
        assert!(matches!(err, ClassifyError::InvalidFileType { .. }));
        assert!(widget.selected().is_none());
        assert!(!widget.predict_enabled());
    }

    #[test]
    fn test_select_first_of_empty_list() {
        let mut widget = UploadWidget::new();
        widget.select_first(Vec::new()).unwrap();
        assert_eq!(widget.phase(), WidgetPhase::Idle);

        widget
            .select_first(vec![image(), SelectedFile::from_bytes("b.txt", vec![1u8])])
            .unwrap();
        assert_eq!(widget.selected().map(|f| f.name()), Some("cat.png"));
    }

    #[test]
    fn test_begin_without_file_is_noop() {
        let mut widget = UploadWidget::new();
        assert!(widget.begin_prediction().is_none());
        assert!(!widget.is_loading());
    }

    #[test]
    fn test_single_prediction_in_flight() {
        let mut widget = UploadWidget::new();
        widget.select_file(image()).unwrap();

        let ticket = widget.begin_prediction().unwrap();
        assert_eq!(widget.phase(), WidgetPhase::Predicting);
        assert!(!widget.predict_enabled());
        assert!(widget.begin_prediction().is_none());

        assert!(widget.finish_prediction(ticket, Ok(cat_result())).is_none());
        assert_eq!(widget.phase(), WidgetPhase::ResultShown);
        assert!(widget.predict_enabled());
    }

    #[test]
    fn test_failure_returns_to_file_selected() {
        let mut widget = UploadWidget::new();
        widget.select_file(image()).unwrap();

        let ticket = widget.begin_prediction().unwrap();
        let alert = widget
            .finish_prediction(ticket, Err(ClassifyError::Service(None)))
            .unwrap();
        assert_eq!(alert.kind, AlertKind::ServiceRejected);
        assert_eq!(widget.phase(), WidgetPhase::FileSelected);
        assert!(widget.predict_enabled());
        assert!(!widget.is_loading());
    }

    #[test]
    fn test_stale_result_discarded() {
        let mut widget = UploadWidget::new();
        widget.select_file(image()).unwrap();
        let ticket = widget.begin_prediction().unwrap();

        widget.remove_file();
        assert!(widget.finish_prediction(ticket, Ok(cat_result())).is_none());
        assert_eq!(widget.phase(), WidgetPhase::Idle);
        assert!(!widget.result_visible());
        assert!(!widget.is_loading());
    }

    #[test]
    fn test_new_selection_during_prediction_stays_disabled() {
        let mut widget = UploadWidget::new();
        widget.select_file(image()).unwrap();
        let ticket = widget.begin_prediction().unwrap();

        widget
            .select_file(SelectedFile::from_bytes("dog.jpg", vec![0u8; 8]))
            .unwrap();
        assert!(!widget.predict_enabled());

        assert!(widget
            .finish_prediction(ticket, Err(ClassifyError::MalformedResponse("x".into())))
            .is_none());
        assert_eq!(widget.phase(), WidgetPhase::FileSelected);
        assert!(widget.predict_enabled());
    }

    #[test]
    fn test_dragover_cleared_on_remove() {
        let mut widget = UploadWidget::new();
        widget.set_dragover(true);
        assert!(widget.is_dragover());
        widget.remove_file();
        assert!(!widget.is_dragover());
    }

    #[test]
    fn test_phase_labels() {
        assert_eq!(WidgetPhase::default(), WidgetPhase::Idle);
        assert_eq!(WidgetPhase::Predicting.label(), "predicting");
        assert_eq!(WidgetPhase::ResultShown.label(), "result shown");
    }
}
