//! Ground-truth expansion to a frame-label sequence.
//!
//! Converts labeled ground-truth intervals into one label per fixed time
//! step so the result is directly comparable to the diarizer's output.
//! Ground-truth labels are arbitrary identifiers, so they are re-indexed
//! to dense ids in first-appearance order; the mapping table is kept.

use diarscore_core::{
    validate_segments, DiarScoreError, ReferenceSegment, Result, SpeakerLabel,
};

/// A ground-truth labeling expanded to frame resolution.
///
/// Frame `i` holds the dense index of the interval containing timestamp
/// `i * step`, or `None` where no interval covers the timestamp. Gaps are
/// kept explicit instead of being folded into some real speaker.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedGroundTruth {
    labels: Vec<Option<u32>>,
    speakers: Vec<SpeakerLabel>,
    step: f64,
}

impl ExpandedGroundTruth {
    /// Per-frame dense labels; `None` marks a gap in the ground truth.
    #[inline]
    pub fn labels(&self) -> &[Option<u32>] {
        &self.labels
    }

    /// Dense index to original label mapping, in first-appearance order.
    #[inline]
    pub fn speakers(&self) -> &[SpeakerLabel] {
        &self.speakers
    }

    /// Time step between consecutive frames, in seconds.
    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the expansion holds no frames.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of frames actually covered by some interval.
    pub fn covered_frames(&self) -> usize {
        self.labels.iter().filter(|l| l.is_some()).count()
    }
}

/// Expand ground-truth intervals to a frame-label sequence at `step`.
///
/// The sequence spans `ceil(max_end / step)` frames. Intervals must be
/// sorted and non-overlapping; the list must be non-empty.
pub fn expand_ground_truth(
    reference: &[ReferenceSegment],
    step: f64,
) -> Result<ExpandedGroundTruth> {
    if !(step > 0.0) || !step.is_finite() {
        return Err(DiarScoreError::InvalidStep { step });
    }
    if reference.is_empty() {
        return Err(DiarScoreError::EmptyGroundTruth);
    }
    validate_segments(reference)?;

    // Dense re-indexing of the arbitrary labels.
    let mut speakers: Vec<SpeakerLabel> = Vec::new();
    let mut dense: Vec<u32> = Vec::with_capacity(reference.len());
    for seg in reference {
        let idx = match speakers.iter().position(|s| *s == seg.label) {
            Some(idx) => idx,
            None => {
                speakers.push(seg.label.clone());
                speakers.len() - 1
            }
        };
        dense.push(idx as u32);
    }

    // Sorted input, so the last interval carries the maximum end time.
    let max_end = reference[reference.len() - 1].end_time;
    let num_frames = (max_end / step).ceil() as usize;

    let mut labels = vec![None; num_frames];
    let mut cursor = 0;
    for (i, slot) in labels.iter_mut().enumerate() {
        let t = i as f64 * step;
        while cursor < reference.len() && reference[cursor].end_time <= t {
            cursor += 1;
        }
        if cursor < reference.len() && t >= reference[cursor].start_time {
            *slot = Some(dense[cursor]);
        }
    }

    Ok(ExpandedGroundTruth {
        labels,
        speakers,
        step,
    })
}
