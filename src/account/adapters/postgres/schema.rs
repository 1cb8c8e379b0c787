//! Diesel schema for user account persistence.

diesel::table! {
    /// Registered user accounts.
    users (id) {
        /// Internal user identifier.
        id -> Uuid,
        /// Unique login name.
        #[max_length = 150]
        username -> Varchar,
        /// Optional notification address.
        #[max_length = 254]
        email -> Nullable<Varchar>,
        /// Administrative flag.
        is_staff -> Bool,
        /// Encoded password digest.
        #[max_length = 255]
        password_hash -> Varchar,
        /// Registration timestamp.
        created_at -> Timestamptz,
    }
}
