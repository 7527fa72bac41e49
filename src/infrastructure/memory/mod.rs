pub mod vocabulary_repo;
