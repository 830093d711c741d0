//! # hamspam Core
//!
//! A multinomial Naive Bayes classifier that labels short text messages as
//! `ham` or `spam`. Provides the tokenizer, vocabulary builder, parameter
//! estimator, log-space scorer and accuracy evaluator.
//!
//! ## Quick Start
//!
//! ```rust
//! use hamspam_core::{ClassifierConfig, Label, NbClassifier};
//!
//! let corpus = "ham\ti love cats\nspam\tbuy cheap pills now\n";
//! let classifier = NbClassifier::from_corpus(corpus, None, ClassifierConfig::default()).unwrap();
//!
//! assert_eq!(classifier.classify("i love cats"), Some(Label::Ham));
//! let report = classifier.evaluate("ham\ti love cats\n").unwrap();
//! assert_eq!(report.accuracy(), Some(100.0));
//! ```
pub mod classifier;
pub mod config;
pub mod error;
pub mod eval;
pub mod model;
pub mod text;
pub mod types;
pub mod vocab;

// Re-export primary API
pub use classifier::{NbClassifier, VocabularyStats};
pub use config::ClassifierConfig;
pub use error::{ClassifierError, Result};
pub use eval::{EvaluationReport, Evaluator};
pub use model::{ConditionalTable, NaiveBayesModel, RankedEntry, TrainingStats};
pub use text::{LabeledLine, Tokenizer};
pub use types::{Label, PerLabel, Scores};
pub use vocab::{AttributeSet, Stopwords};
