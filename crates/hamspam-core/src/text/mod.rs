pub mod corpus;
pub mod tokenizer;

pub use corpus::{LabeledLine, read_to_string};
pub use tokenizer::Tokenizer;
