//! JSON readers and writers for the batch file formats.
//!
//! Three schemas cross the pipeline boundary:
//! - VAD input: array of `{"start_time", "end_time"}` objects
//! - Ground truth: array of `[start, end, label]` tuples
//! - Output: array of `{"start_time", "end_time", "speaker"}` objects,
//!   same order and count as the VAD input
//!
//! Plus the persisted diarizer output, a plain array of cluster ids,
//! which backs the file-based [`FrameLabelSource`] used by the binary.

use diarscore_core::{
    validate_segments, DiarScoreError, FrameLabelSequence, FrameLabelSource, LabeledSegment,
    ReferenceSegment, Result, VadSegment,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

fn malformed(path: &Path, source: serde_json::Error) -> DiarScoreError {
    DiarScoreError::MalformedInput {
        path: path.display().to_string(),
        source,
    }
}

/// Read and validate the VAD segment list.
pub fn read_vad_segments(path: &Path) -> Result<Vec<VadSegment>> {
    let json = fs::read_to_string(path)?;
    let segments: Vec<VadSegment> =
        serde_json::from_str(&json).map_err(|e| malformed(path, e))?;
    validate_segments(&segments)?;
    debug!(count = segments.len(), path = %path.display(), "read VAD segments");
    Ok(segments)
}

/// Read and validate the ground-truth segment list.
pub fn read_ground_truth(path: &Path) -> Result<Vec<ReferenceSegment>> {
    let json = fs::read_to_string(path)?;
    let segments: Vec<ReferenceSegment> =
        serde_json::from_str(&json).map_err(|e| malformed(path, e))?;
    validate_segments(&segments)?;
    debug!(count = segments.len(), path = %path.display(), "read ground truth");
    Ok(segments)
}

/// Write the aligned segment list. Called once, only after the full
/// alignment computation has succeeded.
pub fn write_aligned_segments(path: &Path, segments: &[LabeledSegment]) -> Result<()> {
    // Serializing a slice of plain structs cannot fail; keep the error
    // path anyway for schema changes.
    let json = serde_json::to_string_pretty(segments).map_err(|e| malformed(path, e))?;
    fs::write(path, json)?;
    debug!(count = segments.len(), path = %path.display(), "wrote aligned segments");
    Ok(())
}

/// A persisted diarizer output file: a JSON array of cluster ids at a
/// fixed step. This is the concrete [`FrameLabelSource`] the binary
/// injects, keeping the diarizer itself out of process.
#[derive(Debug, Clone)]
pub struct JsonLabelFile {
    path: PathBuf,
    step: f64,
}

impl JsonLabelFile {
    /// Point at a label file with the step its producer used.
    pub fn new(path: impl Into<PathBuf>, step: f64) -> Self {
        Self {
            path: path.into(),
            step,
        }
    }
}

impl FrameLabelSource for JsonLabelFile {
    fn frame_labels(&self, num_speakers: u32) -> Result<FrameLabelSequence> {
        let json = fs::read_to_string(&self.path)?;
        let labels: Vec<u32> =
            serde_json::from_str(&json).map_err(|e| malformed(&self.path, e))?;
        FrameLabelSequence::new(labels, self.step, num_speakers)
    }
}
