//! Property-based tests for the upload widget
//!
//! Uses proptest to check the widget invariants over arbitrary operation
//! sequences and the ordering of rendered probability rows.

use std::collections::BTreeMap;

use imageclass_core::{
    ClassifyError, PredictionResult, PredictionTicket, SelectedFile, UploadWidget, WidgetPhase,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Operations a user (or the network) can perform on the widget
#[derive(Debug, Clone)]
enum WidgetOp {
    SelectImage,
    SelectText,
    Remove,
    Begin,
    FinishOk,
    FinishErr,
    Drag(bool),
}

fn widget_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<WidgetOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(WidgetOp::SelectImage),
            1 => Just(WidgetOp::SelectText),
            1 => Just(WidgetOp::Remove),
            3 => Just(WidgetOp::Begin),
            2 => Just(WidgetOp::FinishOk),
            2 => Just(WidgetOp::FinishErr),
            1 => any::<bool>().prop_map(WidgetOp::Drag),
        ],
        0..max_ops,
    )
}

fn probabilities_strategy() -> impl Strategy<Value = BTreeMap<String, f64>> {
    prop::collection::btree_map("[a-z]{1,8}", 0.0f64..=100.0, 0..12)
}

fn result_with(probabilities: BTreeMap<String, f64>) -> PredictionResult {
    PredictionResult {
        prediction: "x".to_string(),
        confidence: "1.00%".to_string(),
        probabilities,
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Predict is enabled exactly when a file is selected and nothing is in flight
    #[test]
    fn predict_enabled_invariant(ops in widget_ops_strategy(40)) {
        let mut widget = UploadWidget::new();
        let mut ticket: Option<PredictionTicket> = None;

        for op in ops {
            match op {
                WidgetOp::SelectImage => {
                    widget.select_file(SelectedFile::from_bytes("a.png", vec![0u8; 4])).unwrap();
                }
                WidgetOp::SelectText => {
                    let before = widget.selected().cloned();
                    prop_assert!(widget
                        .select_file(SelectedFile::from_bytes("a.txt", vec![0u8; 4]))
                        .is_err());
                    prop_assert_eq!(widget.selected().cloned(), before);
                }
                WidgetOp::Remove => widget.remove_file(),
                WidgetOp::Begin => {
                    let started = widget.begin_prediction();
                    if ticket.is_some() {
                        prop_assert!(started.is_none());
                    } else {
                        ticket = started;
                    }
                }
                WidgetOp::FinishOk => {
                    if let Some(t) = ticket.take() {
                        widget.finish_prediction(t, Ok(result_with(BTreeMap::new())));
                    }
                }
                WidgetOp::FinishErr => {
                    if let Some(t) = ticket.take() {
                        widget.finish_prediction(t, Err(ClassifyError::Service(None)));
                    }
                }
                WidgetOp::Drag(over) => widget.set_dragover(over),
            }

            prop_assert_eq!(
                widget.predict_enabled(),
                widget.selected().is_some() && ticket.is_none()
            );
            prop_assert_eq!(widget.is_loading(), ticket.is_some());
            prop_assert_eq!(widget.drop_area_visible(), widget.selected().is_none());
            if widget.result_visible() {
                prop_assert!(widget.selected().is_some());
                prop_assert_eq!(widget.phase(), WidgetPhase::ResultShown);
            }
        }
    }

    /// Rendered rows are sorted by descending score and keep every label
    #[test]
    fn rows_sorted_descending(probabilities in probabilities_strategy()) {
        let rows = result_with(probabilities.clone()).sorted_rows();
        prop_assert_eq!(rows.len(), probabilities.len());
        for pair in rows.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        for row in &rows {
            prop_assert!(probabilities.contains_key(&row.label));
            prop_assert!(row.value_text().ends_with('%'));
        }
    }
}
