//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, FilmAction, HashtagAction, LabelAction};
pub use output::{format_post_detail, format_post_list, format_vocabulary};
