//! Command line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use hamspam_core::ClassifierConfig;
use hamspam_core::config::{DEFAULT_MIN_FREQUENCY, DEFAULT_SMOOTHING};
use tracing::Level;

/// Train a Naive Bayes ham/spam classifier and report its accuracy
#[derive(Parser, Debug, Clone)]
#[command(name = "hamspam")]
#[command(about = "Train a Naive Bayes ham/spam classifier and report its accuracy")]
#[command(version)]
pub struct Cli {
    /// Training data, one `label<TAB>message` per line
    pub training_file: PathBuf,

    /// Test or dev data in the same format
    pub eval_file: PathBuf,

    /// Optional newline-delimited stopword list
    pub stopword_file: Option<PathBuf>,

    /// Minimum number of occurrences for a word to enter the vocabulary
    #[arg(short = 'm', long, default_value_t = DEFAULT_MIN_FREQUENCY)]
    pub min_frequency: usize,

    /// Additive smoothing constant
    #[arg(short = 'k', long, default_value_t = DEFAULT_SMOOTHING)]
    pub smoothing: f64,

    /// Number of most probable (word, label) pairs to print
    #[arg(short = 'n', long, default_value_t = 3)]
    pub top: usize,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain lines, one value per line
    Text,
    /// A single pretty-printed JSON object
    Json,
}

impl Cli {
    pub fn config(&self) -> ClassifierConfig {
        ClassifierConfig::new()
            .with_min_frequency(self.min_frequency)
            .with_smoothing(self.smoothing)
    }

    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_positionals() {
        let cli = Cli::try_parse_from(["hamspam", "train.txt", "dev.txt"]).unwrap();
        assert_eq!(cli.training_file, PathBuf::from("train.txt"));
        assert_eq!(cli.eval_file, PathBuf::from("dev.txt"));
        assert!(cli.stopword_file.is_none());
        assert_eq!(cli.config(), ClassifierConfig::default());
        assert_eq!(cli.top, 3);
        assert_eq!(cli.log_level(), Level::WARN);
    }

    #[test]
    fn parses_stopwords_and_options() {
        let cli = Cli::try_parse_from([
            "hamspam", "train.txt", "dev.txt", "stop.txt", "-k", "0.05", "-m", "2", "-vv",
            "--format", "json",
        ])
        .unwrap();
        assert_eq!(cli.stopword_file, Some(PathBuf::from("stop.txt")));
        assert_eq!(cli.config().smoothing, 0.05);
        assert_eq!(cli.config().min_frequency, 2);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.log_level(), Level::DEBUG);
    }

    #[test]
    fn rejects_wrong_argument_count() {
        assert!(Cli::try_parse_from(["hamspam", "train.txt"]).is_err());
        assert!(Cli::try_parse_from(["hamspam", "a", "b", "c", "d"]).is_err());
    }
}
