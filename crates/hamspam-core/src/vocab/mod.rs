pub mod attributes;
pub mod stopwords;

pub use attributes::AttributeSet;
pub use stopwords::Stopwords;
