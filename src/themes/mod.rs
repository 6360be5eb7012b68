// Theme analysis — the fixed vocabulary, keyword-weight extraction, and
// overlap scoring against the user's preferred themes.

pub mod extractor;
pub mod overlap;
pub mod vocabulary;
