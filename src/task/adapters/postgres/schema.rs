//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Internal task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 200]
        title -> Varchar,
        /// Free-form description.
        description -> Text,
        /// Workflow status.
        #[max_length = 20]
        status -> Varchar,
        /// Optional deadline.
        deadline -> Nullable<Timestamptz>,
        /// Owning user.
        owner_id -> Nullable<Uuid>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Task-to-category links.
    task_categories (task_id, category_id) {
        /// Linked task.
        task_id -> Uuid,
        /// Linked category.
        category_id -> Uuid,
    }
}

diesel::table! {
    /// Subtask records; removed with their parent task.
    subtasks (id) {
        /// Internal subtask identifier.
        id -> Uuid,
        /// Parent task.
        task_id -> Uuid,
        /// Subtask title.
        #[max_length = 200]
        title -> Varchar,
        /// Free-form description.
        description -> Text,
        /// Workflow status.
        #[max_length = 20]
        status -> Varchar,
        /// Optional deadline.
        deadline -> Nullable<Timestamptz>,
        /// Owning user.
        owner_id -> Nullable<Uuid>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(task_categories -> tasks (task_id));
diesel::joinable!(subtasks -> tasks (task_id));
diesel::allow_tables_to_appear_in_same_query!(tasks, task_categories, subtasks);
