pub mod age;
pub mod api;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod output;
pub mod scoring;
pub mod syllabus;

pub use error::{Result, ValidationError};
