pub mod similarity;
pub mod word_status;
