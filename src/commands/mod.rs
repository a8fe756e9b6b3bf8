//! Command implementations for the microblog CLI

pub mod log;
pub mod setup;
