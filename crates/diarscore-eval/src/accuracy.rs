//! Time-weighted classification accuracy.
//!
//! Compares aligned segments against ground-truth segments by positional
//! index: segment `i` of the predictions must correspond to segment `i`
//! of the ground truth by construction. The two lists must therefore have
//! identical length; a mismatch fails fast instead of silently
//! misaligning.

use diarscore_core::{DiarScoreError, LabeledSegment, ReferenceSegment, Result, TimeSpan};

/// Time-weighted match ratio between predictions and ground truth.
///
/// `accuracy = matched duration / total duration` over positional segment
/// pairs. An unassigned prediction never matches, and a prediction can
/// only match a numeric ground-truth label of equal value. Fails with
/// [`DiarScoreError::ZeroTotalDuration`] when there is nothing to weigh.
pub fn accuracy(aligned: &[LabeledSegment], reference: &[ReferenceSegment]) -> Result<f64> {
    if aligned.len() != reference.len() {
        return Err(DiarScoreError::SegmentCountMismatch {
            predicted: aligned.len(),
            reference: reference.len(),
        });
    }

    let mut match_time = 0.0;
    let mut total_time = 0.0;
    for (pred, truth) in aligned.iter().zip(reference) {
        let duration = pred.duration();
        if let Some(speaker) = pred.speaker {
            if truth.label.matches_cluster(speaker) {
                match_time += duration;
            }
        }
        total_time += duration;
    }

    if total_time <= 0.0 {
        return Err(DiarScoreError::ZeroTotalDuration);
    }

    Ok(match_time / total_time)
}
