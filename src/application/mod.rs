pub mod add_words;
pub mod list_words;
pub mod search;
