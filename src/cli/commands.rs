//! CLI command definitions

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "textiq")]
#[command(about = "Social media post template composer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save a new post
    New {
        /// Post title
        title: String,

        /// Film stock name
        #[arg(short, long)]
        film: Option<String>,

        /// Label for organizing posts
        #[arg(short, long)]
        label: Option<String>,

        /// Hashtag to attach (repeatable, leading # optional)
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Append special spacing to the title
        #[arg(long)]
        spacer: bool,

        /// Copy the post to the clipboard after saving
        #[arg(long)]
        copy: bool,
    },

    /// Change an existing post
    Edit {
        /// Post id or unique prefix
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New film stock name
        #[arg(short, long, conflicts_with = "no_film")]
        film: Option<String>,

        /// Remove the film
        #[arg(long)]
        no_film: bool,

        /// New label
        #[arg(short, long, conflicts_with = "no_label")]
        label: Option<String>,

        /// Remove the label
        #[arg(long)]
        no_label: bool,

        /// Replace all hashtags (repeatable)
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Add a hashtag (repeatable)
        #[arg(long = "add-tag", value_name = "TAG")]
        add_tags: Vec<String>,

        /// Remove a hashtag (repeatable)
        #[arg(long = "remove-tag", value_name = "TAG")]
        remove_tags: Vec<String>,

        /// Append special spacing to the title
        #[arg(long)]
        spacer: bool,
    },

    /// Delete a post
    Delete {
        /// Post id or unique prefix
        id: String,
    },

    /// List posts, newest first
    List {
        /// Maximum number of posts to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Only show posts with this label
        #[arg(short, long)]
        label: Option<String>,
    },

    /// Print a post's formatted text
    Show {
        /// Post id or unique prefix
        id: String,
    },

    /// Copy a post's formatted text to the clipboard
    Copy {
        /// Post id or unique prefix
        id: String,
    },

    /// Format a draft without saving it
    Preview {
        /// Draft title
        #[arg(default_value = "")]
        title: String,

        /// Film stock name
        #[arg(short, long)]
        film: Option<String>,

        /// Label
        #[arg(short, long)]
        label: Option<String>,

        /// Hashtag (repeatable)
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Append special spacing to the title
        #[arg(long)]
        spacer: bool,

        /// Copy the draft to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Manage available films
    Films {
        #[command(subcommand)]
        action: Option<FilmAction>,
    },

    /// Manage available labels
    Labels {
        #[command(subcommand)]
        action: Option<LabelAction>,
    },

    /// Manage available hashtags
    Hashtags {
        #[command(subcommand)]
        action: Option<HashtagAction>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum FilmAction {
    /// Show all films
    List,
    /// Add a film
    Add { name: String },
}

#[derive(Subcommand, Debug)]
pub enum LabelAction {
    /// Show all labels
    List,
    /// Add a label
    Add { name: String },
    /// Remove every label
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum HashtagAction {
    /// Show all hashtags
    List,
    /// Add a hashtag (leading # optional)
    Add { name: String },
    /// Remove a hashtag from the list (posts keep it)
    Remove { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_new_with_repeated_tags() {
        let cli = Cli::try_parse_from([
            "textiq", "new", "Sunset", "-f", "Kodak Gold 200", "-t", "sunset", "--tag", "#film",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::New {
                title, film, tags, ..
            }) => {
                assert_eq!(title, "Sunset");
                assert_eq!(film.as_deref(), Some("Kodak Gold 200"));
                assert_eq!(tags, vec!["sunset", "#film"]);
            }
            other => panic!("Expected New command, got {:?}", other),
        }
    }

    #[test]
    fn test_edit_film_conflicts_with_no_film() {
        let result = Cli::try_parse_from(["textiq", "edit", "abc", "-f", "X", "--no-film"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_hashtags_remove() {
        let cli = Cli::try_parse_from(["textiq", "hashtags", "remove", "here"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Hashtags {
                action: Some(HashtagAction::Remove { .. })
            })
        ));
    }
}
