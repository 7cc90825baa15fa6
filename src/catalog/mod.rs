pub mod error;
pub mod pagination;
pub mod params;
pub mod predicate;
pub mod sort;

pub use error::QueryError;
pub use pagination::{PageWindow, Pagination};
pub use params::{ListParams, RawListQuery};
pub use predicate::{BindValue, ProductFilter};
pub use sort::{SortDirection, SortSpec};
