pub mod backend;
pub mod file;
pub mod keys;
pub mod manager;
pub mod memory;
pub mod traits;
