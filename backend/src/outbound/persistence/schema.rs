//! Diesel table definitions for the SQLite schema.
//!
//! These must match the embedded migrations exactly; Diesel uses them for
//! compile-time query validation and type-safe SQL generation.

diesel::table! {
    users (id) {
        id -> Integer,
        username -> Text,
        password_digest -> Text,
        created_at -> Timestamp,
    }
}

diesel::table! {
    news (id) {
        id -> Integer,
        title -> Text,
        text -> Text,
        date -> Timestamp,
    }
}

diesel::table! {
    comments (id) {
        id -> Integer,
        news_id -> Integer,
        author_id -> Integer,
        text -> Text,
        created -> Timestamp,
    }
}

diesel::table! {
    notes (id) {
        id -> Integer,
        title -> Text,
        text -> Text,
        slug -> Text,
        author_id -> Integer,
    }
}

diesel::joinable!(comments -> news (news_id));
diesel::joinable!(comments -> users (author_id));
diesel::joinable!(notes -> users (author_id));

diesel::allow_tables_to_appear_in_same_query!(users, news, comments, notes);
