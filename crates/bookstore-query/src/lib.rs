mod book;
pub mod filter;
pub mod mutation;
pub mod pipeline;
mod query;
mod sort;

pub use book::Book;
pub use pipeline::{AuthorCount, DecadeCount, GenrePriceSummary};
pub use query::{Page, Query};
pub use sort::{Sort, SortDirection};
