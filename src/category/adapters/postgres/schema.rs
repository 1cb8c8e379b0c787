//! Diesel schema for category persistence.

diesel::table! {
    /// Task categories, including soft-deleted ones.
    categories (id) {
        /// Internal category identifier.
        id -> Uuid,
        /// Unique category name.
        #[max_length = 100]
        name -> Varchar,
        /// Soft-delete flag, kept in step with `deleted_at`.
        is_deleted -> Bool,
        /// Soft-delete timestamp.
        deleted_at -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last rename timestamp.
        updated_at -> Timestamptz,
    }
}
