pub mod embedding_port;
pub mod vocabulary_repository;
