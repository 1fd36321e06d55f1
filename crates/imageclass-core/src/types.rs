//! Wire types for the prediction service and the view model rendered from them.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ClassifyError, ClassifyResult};

/// Viewports narrower than this (logical px) scroll the result into view.
pub const NARROW_VIEWPORT_WIDTH: f64 = 768.0;

/// Body returned by `POST /predict`.
///
/// Every field but `success` is optional on the wire: failures only carry
/// `error`, and some failures do not even carry that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probabilities: Option<BTreeMap<String, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PredictionResponse {
    /// Successful response, as the service sends it
    pub fn success(
        prediction: impl Into<String>,
        confidence: impl Into<String>,
        probabilities: impl IntoIterator<Item = (String, f64)>,
    ) -> Self {
        Self {
            success: true,
            prediction: Some(prediction.into()),
            confidence: Some(confidence.into()),
            probabilities: Some(probabilities.into_iter().collect()),
            error: None,
        }
    }

    /// Failed response with an optional message
    pub fn failure(error: Option<String>) -> Self {
        Self {
            success: false,
            prediction: None,
            confidence: None,
            probabilities: None,
            error,
        }
    }

    /// Split the response into a renderable result or the failure it reports.
    pub fn into_result(self) -> ClassifyResult<PredictionResult> {
        if !self.success {
            return Err(ClassifyError::Service(self.error));
        }

        let missing = |field: &str| ClassifyError::MalformedResponse(format!("missing '{field}'"));
        Ok(PredictionResult {
            prediction: self.prediction.ok_or_else(|| missing("prediction"))?,
            confidence: self.confidence.ok_or_else(|| missing("confidence"))?,
            probabilities: self.probabilities.ok_or_else(|| missing("probabilities"))?,
        })
    }
}

/// A successful classification.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    /// Winning label
    pub prediction: String,
    /// Preformatted by the service, e.g. `"72.30%"`
    pub confidence: String,
    /// Label to score, scores in 0..=100
    pub probabilities: BTreeMap<String, f64>,
}

impl PredictionResult {
    /// Probability rows, highest score first.
    ///
    /// Ties keep label order since the map iterates sorted and the sort is stable.
    pub fn sorted_rows(&self) -> Vec<ProbabilityRow> {
        let mut rows: Vec<ProbabilityRow> = self
            .probabilities
            .iter()
            .map(|(label, score)| ProbabilityRow::new(label.clone(), *score))
            .collect();
        rows.sort_by(|a, b| descending(a.score, b.score));
        rows
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// One bar in the probability list
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityRow {
    pub label: String,
    pub score: f64,
}

impl ProbabilityRow {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }

    /// CSS width of the bar, clamped to the container
    pub fn bar_width(&self) -> String {
        let width = if self.score.is_finite() {
            self.score.clamp(0.0, 100.0)
        } else {
            0.0
        };
        format!("{width}%")
    }

    /// Score with one decimal place, e.g. `72.3%`
    ///
    /// Exact ties round away from zero (`72.25` shows as `72.3%`), the way
    /// `Number.prototype.toFixed` does.
    pub fn value_text(&self) -> String {
        format!("{:.1}%", round_tenths_half_up(self.score))
    }
}

/// `{:.1}` rounds the exact binary value, so only true ties need help:
/// those it would send to the even digit.
fn round_tenths_half_up(score: f64) -> f64 {
    if !score.is_finite() {
        return score;
    }
    let scaled = score * 10.0;
    // Non-zero residual means the product was rounded, so `score` is not
    // exactly on a hundredths tie (0.15 is stored as 0.1499...).
    let exact = score.mul_add(10.0, -scaled) == 0.0;
    if exact && scaled.abs().fract() == 0.5 {
        let magnitude = scaled.abs().floor() + 1.0;
        (magnitude / 10.0).copysign(score)
    } else {
        score
    }
}

/// Everything the result card shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub prediction: String,
    pub confidence_badge: String,
    pub rows: Vec<ProbabilityRow>,
}

impl From<&PredictionResult> for ResultView {
    fn from(result: &PredictionResult) -> Self {
        Self {
            prediction: result.prediction.clone(),
            confidence_badge: format!("{} Confidence", result.confidence),
            rows: result.sorted_rows(),
        }
    }
}

/// Whether a freshly rendered result should be scrolled into view.
pub fn should_scroll_into_view(viewport_width: f64) -> bool {
    viewport_width < NARROW_VIEWPORT_WIDTH
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(probabilities: &[(&str, f64)]) -> PredictionResult {
        PredictionResult {
            prediction: "cat".to_string(),
            confidence: "72.30%".to_string(),
            probabilities: probabilities
                .iter()
                .map(|(l, s)| (l.to_string(), *s))
                .collect(),
        }
    }

    #[test]
    fn test_rows_sorted_descending() {
        let view = ResultView::from(&result(&[("dog", 27.7), ("cat", 72.3)]));
        let rendered: Vec<String> = view
            .rows
            .iter()
            .map(|r| format!("{} ({})", r.label, r.value_text()))
            .collect();
        assert_eq!(rendered, vec!["cat (72.3%)", "dog (27.7%)"]);
        assert_eq!(view.confidence_badge, "72.30% Confidence");
    }

    #[test]
    fn test_ties_keep_label_order() {
        let rows = result(&[("b", 10.0), ("a", 10.0), ("c", 80.0)]).sorted_rows();
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_row_formatting() {
        let row = ProbabilityRow::new("cat", 72.25);
        assert_eq!(row.bar_width(), "72.25%");
        assert_eq!(ProbabilityRow::new("x", 0.04).value_text(), "0.0%");
        assert_eq!(ProbabilityRow::new("x", 100.0).value_text(), "100.0%");
        assert_eq!(ProbabilityRow::new("x", 130.0).bar_width(), "100%");
        assert_eq!(ProbabilityRow::new("x", f64::NAN).bar_width(), "0%");
    }

    #[test]
    fn test_value_text_rounds_half_up() {
        assert_eq!(ProbabilityRow::new("x", 72.25).value_text(), "72.3%");
        assert_eq!(ProbabilityRow::new("x", 12.25).value_text(), "12.3%");
        assert_eq!(ProbabilityRow::new("x", 50.25).value_text(), "50.3%");
        assert_eq!(ProbabilityRow::new("x", 0.25).value_text(), "0.3%");
        assert_eq!(ProbabilityRow::new("x", 99.95).value_text(), "100.0%");
        // Not ties once stored: 0.15 is 0.1499..., 72.35 is 72.3499...
        assert_eq!(ProbabilityRow::new("x", 0.15).value_text(), "0.1%");
        assert_eq!(ProbabilityRow::new("x", 72.35).value_text(), "72.3%");
        assert_eq!(ProbabilityRow::new("x", 72.26).value_text(), "72.3%");
        assert_eq!(ProbabilityRow::new("x", 72.24).value_text(), "72.2%");
    }

    #[test]
    fn test_response_parsing() {
        let body = r#"{"success":true,"prediction":"cat","confidence":"72.30%","probabilities":{"cat":72.3,"dog":27.7}}"#;
        let response: PredictionResponse = serde_json::from_str(body).unwrap();
        let result = response.into_result().unwrap();
        assert_eq!(result.prediction, "cat");
        assert_eq!(result.probabilities.len(), 2);
    }

    #[test]
    fn test_failure_response() {
        let response: PredictionResponse =
            serde_json::from_str(r#"{"success":false,"error":"Invalid file type"}"#).unwrap();
        match response.into_result() {
            Err(ClassifyError::Service(Some(msg))) => assert_eq!(msg, "Invalid file type"),
            other => panic!("unexpected: {:?}", other),
        }

        // Missing flag reads as failure
        let response: PredictionResponse = serde_json::from_str(r#"{"error":"x"}"#).unwrap();
        assert!(!response.success);
    }

    #[test]
    fn test_success_without_probabilities_is_malformed() {
        let response: PredictionResponse =
            serde_json::from_str(r#"{"success":true,"prediction":"cat","confidence":"1%"}"#)
                .unwrap();
        assert!(matches!(
            response.into_result(),
            Err(ClassifyError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_scroll_breakpoint() {
        assert!(should_scroll_into_view(375.0));
        assert!(should_scroll_into_view(767.9));
        assert!(!should_scroll_into_view(768.0));
        assert!(!should_scroll_into_view(1280.0));
    }
}
