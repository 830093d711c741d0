//! Train, evaluate and report.

use std::io::Write;

use anyhow::{Context, Result};
use hamspam_core::NbClassifier;
use tracing::info;

use crate::args::{Cli, OutputFormat};
use crate::output::RunSummary;

pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let config = cli.config();
    info!(?config, training = %cli.training_file.display(), "training classifier");

    let classifier = NbClassifier::from_files(&cli.training_file, cli.stopword_file.as_ref(), config)
        .with_context(|| format!("training on {}", cli.training_file.display()))?;

    let report = classifier
        .evaluate_file(&cli.eval_file)
        .with_context(|| format!("evaluating {}", cli.eval_file.display()))?;
    info!(%report, "evaluation finished");

    let summary = RunSummary::new(
        classifier.config().clone(),
        classifier.vocabulary_stats(),
        report,
        classifier.top_probabilities(cli.top),
    );

    match cli.format {
        OutputFormat::Text => summary.write_text(out)?,
        OutputFormat::Json => summary.write_json(out)?,
    }
    Ok(())
}
