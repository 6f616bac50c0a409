//! Contingency matrix and clustering purity metrics.
//!
//! Builds the joint frequency table of predicted clusters vs ground-truth
//! labels over the common prefix of the two frame sequences, then derives
//! the two standard size-weighted purity scores. Ground-truth gap frames
//! carry no label and are left out of the table entirely.

use crate::expand::ExpandedGroundTruth;
use diarscore_core::FrameLabelSequence;

/// Joint frequency table of (predicted cluster, ground-truth label).
///
/// Stored row-major: `counts[p * num_ref + g]`. The matrix is small
/// (speakers squared), so a flat `Vec` is plenty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContingencyMatrix {
    counts: Vec<u64>,
    num_pred: usize,
    num_ref: usize,
    total: u64,
}

/// The two purity scores, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PurityScores {
    /// Size-weighted average cluster purity.
    pub cluster: f64,
    /// Size-weighted average speaker purity.
    pub speaker: f64,
}

impl ContingencyMatrix {
    /// Build the matrix from a predicted sequence and an expanded ground
    /// truth, comparing over the common prefix and skipping gap frames.
    pub fn build(predicted: &FrameLabelSequence, reference: &ExpandedGroundTruth) -> Self {
        let num_pred = predicted.num_speakers() as usize;
        let num_ref = reference.speakers().len();
        let mut counts = vec![0_u64; num_pred * num_ref];
        let mut total = 0_u64;

        let n = predicted.len().min(reference.len());
        for i in 0..n {
            let p = predicted.labels()[i] as usize;
            if let Some(g) = reference.labels()[i] {
                counts[p * num_ref + g as usize] += 1;
                total += 1;
            }
        }

        Self {
            counts,
            num_pred,
            num_ref,
            total,
        }
    }

    /// Frame count for (predicted cluster `p`, ground-truth label `g`).
    #[inline]
    pub fn count(&self, p: usize, g: usize) -> u64 {
        self.counts[p * self.num_ref + g]
    }

    /// Total number of frames counted in the matrix.
    #[inline]
    pub fn total_frames(&self) -> u64 {
        self.total
    }

    /// Size-weighted average cluster purity.
    ///
    /// Each predicted cluster contributes the fraction of its frames that
    /// belong to its majority true speaker, weighted by cluster size;
    /// this collapses to `sum of per-row maxima / total`.
    pub fn cluster_purity(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let row_maxima: u64 = (0..self.num_pred)
            .map(|p| (0..self.num_ref).map(|g| self.count(p, g)).max().unwrap_or(0))
            .sum();
        row_maxima as f64 / self.total as f64
    }

    /// Size-weighted average speaker purity: the symmetric metric with
    /// the roles of clusters and labels swapped.
    pub fn speaker_purity(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let col_maxima: u64 = (0..self.num_ref)
            .map(|g| (0..self.num_pred).map(|p| self.count(p, g)).max().unwrap_or(0))
            .sum();
        col_maxima as f64 / self.total as f64
    }

    /// Both purity scores.
    pub fn purity_scores(&self) -> PurityScores {
        PurityScores {
            cluster: self.cluster_purity(),
            speaker: self.speaker_purity(),
        }
    }
}

/// Convenience: build the matrix and return both scores in one call.
pub fn purity_scores(
    predicted: &FrameLabelSequence,
    reference: &ExpandedGroundTruth,
) -> PurityScores {
    ContingencyMatrix::build(predicted, reference).purity_scores()
}
