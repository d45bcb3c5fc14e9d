//! Configuration: markdownlint-style config files, the user config they produce, and
//! resolution of that config against the rule registry into one effective
//! [`RuleConfig`] per rule.

pub mod types;
pub use types::*;

mod loading;
pub use loading::*;

mod resolver;
pub use resolver::*;
