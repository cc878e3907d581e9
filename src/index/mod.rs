pub mod matcher;
pub mod trie;

pub use matcher::{GenomeMatcher, Location, MatcherOpt, DEFAULT_MIN_SEARCH_LENGTH};
pub use trie::Trie;
