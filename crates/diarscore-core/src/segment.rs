//! Segment types for diarization evaluation.
//!
//! Three views of the same half-open `[start_time, end_time)` interval:
//! a VAD segment (speech, no speaker yet), a labeled segment (speech with
//! a predicted speaker after alignment), and a reference segment (ground
//! truth with an arbitrary speaker label).

use crate::error::{DiarScoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A voice-activity segment: an interval flagged as containing speech,
/// with no speaker identity attached yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VadSegment {
    /// Start time in seconds (inclusive).
    pub start_time: f64,
    /// End time in seconds (exclusive).
    pub end_time: f64,
}

impl VadSegment {
    /// Create a new VAD segment.
    #[inline]
    pub fn new(start_time: f64, end_time: f64) -> Self {
        Self {
            start_time,
            end_time,
        }
    }
}

/// A segment carrying the speaker chosen by alignment.
///
/// `speaker` is `None` when no diarization frame overlapped the segment,
/// the explicit "unassigned" outcome. It serializes as JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledSegment {
    /// Start time in seconds (inclusive).
    pub start_time: f64,
    /// End time in seconds (exclusive).
    pub end_time: f64,
    /// Predicted speaker id, or `None` if no frame overlapped the segment.
    pub speaker: Option<u32>,
}

/// A ground-truth speaker label.
///
/// Ground-truth files may label speakers with integers or free-form names;
/// both compare and hash by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpeakerLabel {
    /// Numeric label, comparable to a predicted cluster id.
    Id(u32),
    /// Named label (e.g., "alice").
    Name(String),
}

impl SpeakerLabel {
    /// Whether this label equals a predicted cluster id.
    ///
    /// Only numeric labels can match a prediction; a named label never
    /// does, mirroring the reference comparison of an id against an
    /// arbitrary ground-truth value.
    #[inline]
    pub fn matches_cluster(&self, cluster: u32) -> bool {
        matches!(self, SpeakerLabel::Id(id) if *id == cluster)
    }
}

impl fmt::Display for SpeakerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeakerLabel::Id(id) => write!(f, "{id}"),
            SpeakerLabel::Name(name) => write!(f, "{name}"),
        }
    }
}

/// A ground-truth segment, parsed from the `[start, end, label]` tuple
/// schema of the ground-truth file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "(f64, f64, SpeakerLabel)")]
pub struct ReferenceSegment {
    /// Start time in seconds (inclusive).
    pub start_time: f64,
    /// End time in seconds (exclusive).
    pub end_time: f64,
    /// Ground-truth speaker label.
    pub label: SpeakerLabel,
}

impl ReferenceSegment {
    /// Create a new reference segment.
    pub fn new(start_time: f64, end_time: f64, label: SpeakerLabel) -> Self {
        Self {
            start_time,
            end_time,
            label,
        }
    }
}

impl From<(f64, f64, SpeakerLabel)> for ReferenceSegment {
    fn from((start_time, end_time, label): (f64, f64, SpeakerLabel)) -> Self {
        Self {
            start_time,
            end_time,
            label,
        }
    }
}

/// Common view over anything spanning `[start_time, end_time)`.
pub trait TimeSpan {
    /// Start time in seconds (inclusive).
    fn start_time(&self) -> f64;
    /// End time in seconds (exclusive).
    fn end_time(&self) -> f64;

    /// Segment duration in seconds.
    #[inline]
    fn duration(&self) -> f64 {
        self.end_time() - self.start_time()
    }
}

macro_rules! impl_time_span {
    ($($ty:ty),*) => {
        $(impl TimeSpan for $ty {
            #[inline]
            fn start_time(&self) -> f64 {
                self.start_time
            }
            #[inline]
            fn end_time(&self) -> f64 {
                self.end_time
            }
        })*
    };
}

impl_time_span!(VadSegment, LabeledSegment, ReferenceSegment);

/// Validate that a segment list is well formed: every segment has
/// `0 <= start < end`, and the list is sorted ascending with no overlap
/// between consecutive segments.
pub fn validate_segments<T: TimeSpan>(segments: &[T]) -> Result<()> {
    for (index, seg) in segments.iter().enumerate() {
        if seg.start_time() < 0.0
            || !seg.start_time().is_finite()
            || !seg.end_time().is_finite()
            || seg.end_time() <= seg.start_time()
        {
            return Err(DiarScoreError::InvalidSegment {
                start_time: seg.start_time(),
                end_time: seg.end_time(),
                index,
            });
        }
        if index > 0 && seg.start_time() < segments[index - 1].end_time() {
            return Err(DiarScoreError::UnsortedSegments { index });
        }
    }
    Ok(())
}

/// Per-speaker speaking-time summary built from aligned segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerTotal {
    /// Speaker id.
    pub speaker: u32,
    /// Total speaking time in seconds.
    pub total_time: f64,
    /// Number of segments assigned to this speaker.
    pub segment_count: usize,
}

/// Aggregate aligned segments into per-speaker totals, sorted by total
/// speaking time descending. Unassigned segments are not counted.
pub fn speaker_totals(segments: &[LabeledSegment]) -> Vec<SpeakerTotal> {
    let mut totals: HashMap<u32, (f64, usize)> = HashMap::new();

    for seg in segments {
        if let Some(speaker) = seg.speaker {
            let entry = totals.entry(speaker).or_insert((0.0, 0));
            entry.0 += seg.duration();
            entry.1 += 1;
        }
    }

    let mut summary: Vec<SpeakerTotal> = totals
        .into_iter()
        .map(|(speaker, (total_time, segment_count))| SpeakerTotal {
            speaker,
            total_time,
            segment_count,
        })
        .collect();

    summary.sort_by(|a, b| {
        b.total_time
            .partial_cmp(&a.total_time)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.speaker.cmp(&b.speaker))
    });

    summary
}
