//! Frame-label sequences and the external diarizer contract.
//!
//! The external clustering algorithm emits one integer cluster id per
//! fixed time step. This module holds the validated container for that
//! output and the trait through which the rest of the system reaches the
//! diarizer without depending on its internals.

use crate::error::{DiarScoreError, Result};
use std::fmt;

/// An ordered sequence of cluster ids at a fixed time step.
///
/// Frame `i` covers `[i * step, (i + 1) * step)`; the timestamp marks the
/// step start, not its center. Construction validates the diarizer output
/// contract: a strictly positive step and every label in
/// `[0, num_speakers)`. The sequence is immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLabelSequence {
    labels: Vec<u32>,
    step: f64,
    num_speakers: u32,
}

impl FrameLabelSequence {
    /// Build a sequence from raw diarizer output, validating the contract.
    pub fn new(labels: Vec<u32>, step: f64, num_speakers: u32) -> Result<Self> {
        if !(step > 0.0) || !step.is_finite() {
            return Err(DiarScoreError::InvalidStep { step });
        }
        for (frame, &label) in labels.iter().enumerate() {
            if label >= num_speakers {
                return Err(DiarScoreError::LabelOutOfRange {
                    label,
                    frame,
                    num_speakers,
                });
            }
        }
        Ok(Self {
            labels,
            step,
            num_speakers,
        })
    }

    /// The cluster ids, one per frame.
    #[inline]
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    /// Time step between consecutive frames, in seconds.
    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of speakers the diarizer was asked for.
    #[inline]
    pub fn num_speakers(&self) -> u32 {
        self.num_speakers
    }

    /// Number of frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the sequence holds no frames.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Timestamp of frame `i` (the start of its step).
    #[inline]
    pub fn timestamp(&self, i: usize) -> f64 {
        i as f64 * self.step
    }

    /// Total time covered by the sequence, in seconds.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.labels.len() as f64 * self.step
    }
}

impl fmt::Display for FrameLabelSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} frames @ {:.3}s ({} speakers)",
            self.labels.len(),
            self.step,
            self.num_speakers
        )
    }
}

/// The external diarizer, seen only through its output shape.
///
/// Implementations wrap whatever actually produced the labels (a model
/// run, a persisted file, a fixture); the evaluation core never sees
/// anything beyond the returned sequence.
pub trait FrameLabelSource {
    /// Produce the frame-label sequence for the requested speaker count.
    fn frame_labels(&self, num_speakers: u32) -> Result<FrameLabelSequence>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_construction_and_timestamps() {
        let seq = FrameLabelSequence::new(vec![0, 0, 1, 1], 0.2, 2).unwrap();
        assert_eq!(seq.len(), 4);
        assert!((seq.timestamp(3) - 0.6).abs() < 1e-12);
        assert!((seq.duration() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_nonpositive_step() {
        let err = FrameLabelSequence::new(vec![0], 0.0, 1).unwrap_err();
        assert!(matches!(err, DiarScoreError::InvalidStep { .. }));

        assert!(FrameLabelSequence::new(vec![0], -0.2, 1).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_label() {
        let err = FrameLabelSequence::new(vec![0, 2, 1], 0.2, 2).unwrap_err();
        match err {
            DiarScoreError::LabelOutOfRange {
                label,
                frame,
                num_speakers,
            } => {
                assert_eq!(label, 2);
                assert_eq!(frame, 1);
                assert_eq!(num_speakers, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_sequence_is_valid() {
        let seq = FrameLabelSequence::new(Vec::new(), 0.2, 2).unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.duration(), 0.0);
    }
}
