pub mod google;
pub mod openai;
