pub mod naive_bayes;
pub mod table;
pub mod trainer;

pub use naive_bayes::NaiveBayesModel;
pub use table::{ConditionalTable, RankedEntry};
pub use trainer::TrainingStats;
