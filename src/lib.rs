pub mod compute;
pub mod config;
pub mod entities;
pub mod feedback;
pub mod input;
pub mod session;
