//! End-to-end tests for the batch evaluation pipeline.
//!
//! Exercises the full file-in, file-out path: persisted diarizer labels
//! and JSON segment lists go in, an aligned segment file and the two
//! scores come out.

use diarscore_core::{LabeledSegment, SpeakerLabel};
use diarscore_eval::pipeline::{self, PipelineConfig};
use diarscore_eval::{store, JsonLabelFile};
use std::path::{Path, PathBuf};

// ── Helpers ────────────────────────────────────────────────────

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn config() -> PipelineConfig {
    PipelineConfig {
        frame_step: 0.2,
        num_speakers: 2,
    }
}

// ── Full batch run ─────────────────────────────────────────────

#[test]
fn batch_run_produces_output_file_and_scores() {
    let dir = tempfile::tempdir().unwrap();

    // Nine frames: speaker 0 for 0.6s, speaker 1 for 0.6s, speaker 0
    // again for 0.6s. Ground truth disagrees on the final segment.
    let labels = write_file(dir.path(), "labels.json", "[0, 0, 0, 1, 1, 1, 0, 0, 0]");
    let vad = write_file(
        dir.path(),
        "vad.json",
        r#"[
            {"start_time": 0.0, "end_time": 0.6},
            {"start_time": 0.6, "end_time": 1.2},
            {"start_time": 1.2, "end_time": 1.8}
        ]"#,
    );
    let truth = write_file(
        dir.path(),
        "gt.json",
        "[[0.0, 0.6, 0], [0.6, 1.2, 1], [1.2, 1.8, 1]]",
    );
    let output = dir.path().join("new_vad.json");

    let vad = store::read_vad_segments(&vad).unwrap();
    let reference = store::read_ground_truth(&truth).unwrap();
    let source = JsonLabelFile::new(&labels, 0.2);

    let report = pipeline::run(&source, &vad, &reference, &config()).unwrap();
    store::write_aligned_segments(&output, &report.run.aligned).unwrap();

    // Two of the three 0.6s segments agree with the ground truth.
    assert!((report.accuracy - 2.0 / 3.0).abs() < 1e-9);

    // Cluster 0 covers both true speakers (3 + 3 frames), cluster 1 is
    // pure; true speaker 1 is split the same way symmetrically.
    assert!((report.cluster_purity - 2.0 / 3.0).abs() < 1e-9);
    assert!((report.speaker_purity - 2.0 / 3.0).abs() < 1e-9);

    let json = std::fs::read_to_string(&output).unwrap();
    let decoded: Vec<LabeledSegment> = serde_json::from_str(&json).unwrap();
    let speakers: Vec<_> = decoded.iter().map(|s| s.speaker).collect();
    assert_eq!(speakers, vec![Some(0), Some(1), Some(0)]);
}

#[test]
fn perfect_run_scores_one_everywhere() {
    let dir = tempfile::tempdir().unwrap();

    let labels = write_file(dir.path(), "labels.json", "[0, 0, 0, 1, 1, 1]");
    let vad = write_file(
        dir.path(),
        "vad.json",
        r#"[{"start_time": 0.0, "end_time": 0.6}, {"start_time": 0.6, "end_time": 1.2}]"#,
    );
    let truth = write_file(dir.path(), "gt.json", "[[0.0, 0.6, 0], [0.6, 1.2, 1]]");

    let vad = store::read_vad_segments(&vad).unwrap();
    let reference = store::read_ground_truth(&truth).unwrap();
    let source = JsonLabelFile::new(&labels, 0.2);

    let report = pipeline::run(&source, &vad, &reference, &config()).unwrap();
    assert_eq!(report.accuracy, 1.0);
    assert_eq!(report.cluster_purity, 1.0);
    assert_eq!(report.speaker_purity, 1.0);
}

// ── Spec'd alignment scenarios over the file path ──────────────

#[test]
fn partial_final_frame_weighs_its_overlap_only() {
    // VAD segment [0.0, 0.7) over labels 0,0,0,1,1,1 at 0.2s steps: the
    // frame at 0.6 contributes only 0.1s, and cluster 0 wins with 0.7s.
    let dir = tempfile::tempdir().unwrap();

    let labels = write_file(dir.path(), "labels.json", "[0, 0, 0, 1, 1, 1]");
    let vad = write_file(
        dir.path(),
        "vad.json",
        r#"[{"start_time": 0.0, "end_time": 0.7}]"#,
    );
    let truth = write_file(dir.path(), "gt.json", "[[0.0, 0.7, 0]]");

    let vad = store::read_vad_segments(&vad).unwrap();
    let reference = store::read_ground_truth(&truth).unwrap();
    let source = JsonLabelFile::new(&labels, 0.2);

    let report = pipeline::run(&source, &vad, &reference, &config()).unwrap();
    assert_eq!(report.run.aligned[0].speaker, Some(0));
    assert_eq!(report.accuracy, 1.0);
}

#[test]
fn segment_on_frame_boundary_votes_majority() {
    // VAD segment [0.6, 1.2): all three overlapping frames carry
    // cluster 1.
    let dir = tempfile::tempdir().unwrap();

    let labels = write_file(dir.path(), "labels.json", "[0, 0, 0, 1, 1, 1]");
    let vad = write_file(
        dir.path(),
        "vad.json",
        r#"[{"start_time": 0.6, "end_time": 1.2}]"#,
    );
    let truth = write_file(dir.path(), "gt.json", "[[0.6, 1.2, 1]]");

    let vad = store::read_vad_segments(&vad).unwrap();
    let reference = store::read_ground_truth(&truth).unwrap();
    let source = JsonLabelFile::new(&labels, 0.2);

    let report = pipeline::run(&source, &vad, &reference, &config()).unwrap();
    assert_eq!(report.run.aligned[0].speaker, Some(1));
}

// ── Failure modes ──────────────────────────────────────────────

#[test]
fn shape_mismatch_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();

    let labels = write_file(dir.path(), "labels.json", "[0, 0, 1, 1]");
    let vad = write_file(
        dir.path(),
        "vad.json",
        r#"[{"start_time": 0.0, "end_time": 0.8}]"#,
    );
    // Two ground-truth segments against one VAD segment.
    let truth = write_file(dir.path(), "gt.json", "[[0.0, 0.4, 0], [0.4, 0.8, 1]]");

    let vad = store::read_vad_segments(&vad).unwrap();
    let reference = store::read_ground_truth(&truth).unwrap();
    let source = JsonLabelFile::new(&labels, 0.2);

    assert!(pipeline::run(&source, &vad, &reference, &config()).is_err());
}

#[test]
fn named_ground_truth_labels_flow_through_purity() {
    // String labels cannot match cluster ids positionally, but purity
    // only cares about the partition they induce.
    let dir = tempfile::tempdir().unwrap();

    let labels = write_file(dir.path(), "labels.json", "[0, 0, 0, 1, 1, 1]");
    let vad = write_file(
        dir.path(),
        "vad.json",
        r#"[{"start_time": 0.0, "end_time": 0.6}, {"start_time": 0.6, "end_time": 1.2}]"#,
    );
    let truth = write_file(
        dir.path(),
        "gt.json",
        r#"[[0.0, 0.6, "alice"], [0.6, 1.2, "bob"]]"#,
    );

    let vad = store::read_vad_segments(&vad).unwrap();
    let reference = store::read_ground_truth(&truth).unwrap();
    assert_eq!(reference[0].label, SpeakerLabel::Name("alice".into()));

    let source = JsonLabelFile::new(&labels, 0.2);
    let report = pipeline::run(&source, &vad, &reference, &config()).unwrap();

    assert_eq!(report.accuracy, 0.0);
    assert_eq!(report.cluster_purity, 1.0);
    assert_eq!(report.speaker_purity, 1.0);
}
