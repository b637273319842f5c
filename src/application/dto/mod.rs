//! Data Transfer Objects - For API boundaries

pub mod activity;

pub use activity::*;
