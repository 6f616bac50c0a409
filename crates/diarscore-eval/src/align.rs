//! Frame-to-segment alignment by overlap-weighted majority vote.
//!
//! Maps a frame-label sequence onto an arbitrary set of VAD segments:
//! each segment is assigned the cluster whose frames overlap it for the
//! longest accumulated duration. Frame timestamps mark step starts, so a
//! segment's first in-range frame also credits the tail of the previous
//! frame's step back to the segment (boundary spillover).

use diarscore_core::{
    validate_segments, FrameLabelSequence, LabeledSegment, Result, VadSegment,
};
use tracing::debug;

/// Align a frame-label sequence onto VAD segments.
///
/// Returns a new segment list in the same order, each annotated with the
/// winning speaker. Ties resolve to the lowest cluster id. A segment no
/// frame overlaps gets `speaker: None` rather than a default cluster.
/// The inputs are not mutated.
pub fn align_segments(
    frames: &FrameLabelSequence,
    vad: &[VadSegment],
) -> Result<Vec<LabeledSegment>> {
    validate_segments(vad)?;

    let mut aligned = Vec::with_capacity(vad.len());
    for seg in vad {
        let weights = accumulate(frames, seg);
        aligned.push(LabeledSegment {
            start_time: seg.start_time,
            end_time: seg.end_time,
            speaker: vote(&weights),
        });
    }

    let unassigned = aligned.iter().filter(|s| s.speaker.is_none()).count();
    debug!(
        segments = aligned.len(),
        unassigned, "aligned frame labels onto VAD segments"
    );

    Ok(aligned)
}

/// Accumulate per-speaker overlap durations for one segment.
///
/// For each frame `i` at `t = i * step` with `start <= t < end`, the
/// portion of its step inside the segment is `min(step, end - t)`. When
/// the previous frame's step straddles the segment start (`t - step <
/// start` and `t - step >= 0`), its cluster is additionally credited
/// `t - start`, the part of that step the segment actually covers.
pub(crate) fn accumulate(frames: &FrameLabelSequence, seg: &VadSegment) -> Vec<f64> {
    let step = frames.step();
    let labels = frames.labels();
    let mut weights = vec![0.0_f64; frames.num_speakers() as usize];

    for (i, &label) in labels.iter().enumerate() {
        let t = frames.timestamp(i);
        if t >= seg.end_time {
            break;
        }
        if t < seg.start_time {
            continue;
        }

        weights[label as usize] += step.min(seg.end_time - t);

        let prev_t = t - step;
        if i > 0 && prev_t < seg.start_time && prev_t >= 0.0 {
            weights[labels[i - 1] as usize] += t - seg.start_time;
        }
    }

    weights
}

/// First-maximum vote: index of the largest positive weight, lowest index
/// on ties; `None` if every weight is zero.
fn vote(weights: &[f64]) -> Option<u32> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, &w) in weights.iter().enumerate() {
        if w > 0.0 && best.map_or(true, |(_, bw)| w > bw) {
            best = Some((idx, w));
        }
    }
    best.map(|(idx, _)| idx as u32)
}
