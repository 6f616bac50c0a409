//! DiarScore - Speaker diarization scoring
//!
//! Batch entry point: aligns a diarizer's frame labels onto VAD segments,
//! writes the speaker-labeled segment list, and prints accuracy and
//! purity against a ground truth.

use anyhow::{bail, Context, Result};
use diarscore_core::speaker_totals;
use diarscore_eval::pipeline::{self, PipelineConfig};
use diarscore_eval::store;
use diarscore_eval::JsonLabelFile;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 4 || args.len() > 6 {
        eprintln!(
            "Usage: diarscore <labels.json> <vad.json> <ground_truth.json> <output.json> \
             [num_speakers] [frame_step]"
        );
        bail!("expected 4 to 6 arguments, got {}", args.len());
    }

    let labels_path = PathBuf::from(&args[0]);
    let vad_path = PathBuf::from(&args[1]);
    let truth_path = PathBuf::from(&args[2]);
    let output_path = PathBuf::from(&args[3]);

    let mut config = PipelineConfig::default();
    if let Some(arg) = args.get(4) {
        config.num_speakers = arg
            .parse()
            .with_context(|| format!("invalid speaker count: {arg}"))?;
    }
    if let Some(arg) = args.get(5) {
        config.frame_step = arg
            .parse()
            .with_context(|| format!("invalid frame step: {arg}"))?;
    }

    info!("DiarScore starting...");

    let vad = store::read_vad_segments(&vad_path)
        .with_context(|| format!("reading VAD segments from {}", vad_path.display()))?;
    let reference = store::read_ground_truth(&truth_path)
        .with_context(|| format!("reading ground truth from {}", truth_path.display()))?;

    let source = JsonLabelFile::new(&labels_path, config.frame_step);
    let report = pipeline::run(&source, &vad, &reference, &config)
        .context("evaluation pipeline failed")?;

    store::write_aligned_segments(&output_path, &report.run.aligned)
        .with_context(|| format!("writing aligned segments to {}", output_path.display()))?;

    for total in speaker_totals(&report.run.aligned) {
        info!(
            speaker = total.speaker,
            seconds = total.total_time,
            segments = total.segment_count,
            "speaker total"
        );
    }

    println!("Accuracy: {:.1}%", report.accuracy * 100.0);
    println!(
        "Speaker purity: {:.1}% - Cluster purity: {:.1}%",
        report.speaker_purity * 100.0,
        report.cluster_purity * 100.0
    );

    Ok(())
}
