//! textiq - Social media post template composer
//!
//! Composes posts from a title, an optional film stock, an optional label and
//! a set of hashtags, keeps them in a small local store and formats them into
//! the text block that gets pasted into the target platform.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::TextiqError;
