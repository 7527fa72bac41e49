pub mod vocabulary_entry;
