pub mod builtin;
pub mod engine;
pub mod types;

pub use engine::LineMatcher;
pub use types::{Category, Finding, Rule, Severity};
