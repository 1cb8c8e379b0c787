//! Application services for category management and soft-delete lifecycle.

mod lifecycle;

pub use lifecycle::{
    CategoryCursor, CategoryService, CategoryServiceError, CategoryServiceResult,
    CategoryTaskCount,
};
