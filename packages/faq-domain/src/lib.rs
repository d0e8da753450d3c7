pub mod language;
pub mod normalize;
pub mod similarity;
pub mod stopwords;

pub use language::{Language, classify_script, contains_secondary_script};
pub use normalize::{KeywordSet, Normalizer};
pub use similarity::{jaccard, partial_ratio};
