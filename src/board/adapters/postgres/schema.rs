//! Diesel schema for task persistence.

diesel::table! {
    /// Board task records.
    tasks (id) {
        /// Store-assigned task identifier.
        #[max_length = 64]
        id -> Varchar,
        /// Task title.
        title -> Text,
        /// Optional description.
        description -> Nullable<Text>,
        /// Optional deadline date.
        deadline_date -> Nullable<Date>,
        /// Optional deadline time of day.
        deadline_time -> Nullable<Time>,
        /// Column identifier.
        #[max_length = 32]
        column_id -> Varchar,
        /// Store-assigned creation timestamp.
        created_at -> Nullable<Timestamptz>,
    }
}
