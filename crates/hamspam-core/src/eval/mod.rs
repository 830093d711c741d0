pub mod evaluator;
pub mod report;

pub use evaluator::Evaluator;
pub use report::EvaluationReport;
