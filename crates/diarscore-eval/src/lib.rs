//! DiarScore Eval - Alignment and evaluation metrics
//!
//! The algorithmic core of DiarScore:
//! - Frame-to-segment alignment by overlap-weighted majority vote
//! - Ground-truth interval expansion to frame labels
//! - Time-weighted classification accuracy
//! - Contingency matrix with cluster/speaker purity
//! - The explicit pipeline value tying the stages together
//! - JSON readers/writers for the batch file formats

pub mod accuracy;
pub mod align;
pub mod expand;
pub mod pipeline;
pub mod purity;
pub mod store;

pub use accuracy::accuracy;
pub use align::align_segments;
pub use expand::{expand_ground_truth, ExpandedGroundTruth};
pub use pipeline::{EvalReport, EvalRun, PipelineConfig};
pub use purity::{purity_scores, ContingencyMatrix, PurityScores};
pub use store::JsonLabelFile;
