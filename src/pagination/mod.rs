//! Page-number and cursor pagination for listing operations.

mod cursor;
mod page;

pub use cursor::{CursorPage, paginate_after};
pub use page::{Page, PageRequest, PaginationError};
