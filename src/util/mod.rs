pub mod process;
pub mod repo;
