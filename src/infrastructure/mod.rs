pub mod embeddings;
pub mod memory;
