mod config;
mod page;

pub use config::PaginationConfig;
pub use page::{PageSlice, Selection, paginate};
