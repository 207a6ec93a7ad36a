pub mod build;
pub mod clean;
pub mod doctor;
pub mod gen;
pub mod stage;
