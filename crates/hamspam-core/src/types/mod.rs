pub mod label;
pub mod per_label;

pub use label::Label;
pub use per_label::{PerLabel, Scores};
