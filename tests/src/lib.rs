pub mod memory_db;
pub use memory_db::{MemoryDb, MemoryReader, Row};

pub mod models;
