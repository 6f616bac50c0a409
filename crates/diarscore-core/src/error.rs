//! Error types for DiarScore.

use thiserror::Error;

/// Main error type for DiarScore operations.
#[derive(Debug, Error)]
pub enum DiarScoreError {
    /// Input file could not be parsed against its JSON schema.
    #[error("Malformed input file {path}: {source}")]
    MalformedInput {
        path: String,
        source: serde_json::Error,
    },

    /// Predicted and reference segment lists differ in length, violating
    /// the positional-correspondence assumption of the accuracy metric.
    #[error(
        "Segment count mismatch: {predicted} predicted vs {reference} reference segments"
    )]
    SegmentCountMismatch { predicted: usize, reference: usize },

    /// Total segment duration is zero, so the accuracy ratio is undefined.
    #[error("Total segment duration is zero, accuracy is undefined")]
    ZeroTotalDuration,

    /// A frame label fell outside the declared speaker range. This is a
    /// contract violation by the external diarizer.
    #[error("Frame label {label} at frame {frame} out of range for {num_speakers} speakers")]
    LabelOutOfRange {
        label: u32,
        frame: usize,
        num_speakers: u32,
    },

    /// Frame step must be strictly positive.
    #[error("Invalid frame step {step}: must be > 0")]
    InvalidStep { step: f64 },

    /// A segment has a nonpositive span or a negative start time.
    #[error("Invalid segment [{start_time}, {end_time}) at index {index}")]
    InvalidSegment {
        start_time: f64,
        end_time: f64,
        index: usize,
    },

    /// Segments within a list must be sorted ascending and non-overlapping.
    #[error("Segments out of order or overlapping at index {index}")]
    UnsortedSegments { index: usize },

    /// Ground-truth expansion needs at least one interval.
    #[error("Ground truth is empty, nothing to expand")]
    EmptyGroundTruth,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for DiarScore operations.
pub type Result<T> = std::result::Result<T, DiarScoreError>;
