//! DiarScore Core - Foundation types for diarization evaluation
//!
//! This crate provides the fundamental types used throughout DiarScore:
//! - Segment types (VAD, labeled, ground-truth reference)
//! - Frame-label sequences and the external diarizer contract
//! - Error types

pub mod error;
pub mod frames;
pub mod segment;

pub use error::{DiarScoreError, Result};
pub use frames::{FrameLabelSequence, FrameLabelSource};
pub use segment::{
    speaker_totals, validate_segments, LabeledSegment, ReferenceSegment, SpeakerLabel,
    SpeakerTotal, TimeSpan, VadSegment,
};
