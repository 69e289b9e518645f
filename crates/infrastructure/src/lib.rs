//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_session_repository;
mod in_memory_user_directory;
mod json_session_file;

pub use in_memory_session_repository::InMemorySessionRepository;
pub use in_memory_user_directory::InMemoryUserDirectory;
pub use json_session_file::JsonSessionFile;
