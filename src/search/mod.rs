pub mod debounce;
pub mod index;
pub mod query;

pub use debounce::Debouncer;
pub use index::PrefixIndex;
pub use query::SearchQuery;
