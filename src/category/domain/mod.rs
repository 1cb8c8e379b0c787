//! Domain model for categories and their soft-delete lifecycle.

mod category;
mod error;
mod ids;
mod name;

pub use category::{Category, CategoryState, PersistedCategoryData};
pub use error::CategoryDomainError;
pub use ids::CategoryId;
pub use name::CategoryName;
