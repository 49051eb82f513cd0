pub mod cli;
pub mod classify;
pub mod context;
pub mod nutrition;
pub mod profile;
