//! Command-line definitions

use clap::{Parser, Subcommand};
use nuru_common::GameMode;

#[derive(Debug, Parser)]
#[command(name = "nuructl")]
#[command(about = "Nuru - learn languages through culture, conversation and play", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Color output: auto, always or never
    #[arg(long, global = true, value_name = "WHEN")]
    pub color: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show level, XP and section progress
    Dashboard,

    /// List languages or pick the one to learn
    Languages {
        #[command(subcommand)]
        action: Option<LanguageAction>,
    },

    /// Browse culture entries
    Culture {
        /// Only history entries
        #[arg(long)]
        history: bool,

        #[command(subcommand)]
        action: Option<CultureAction>,
    },

    /// Browse and play conversation scenarios
    Conversation {
        #[command(subcommand)]
        action: Option<ConversationAction>,
    },

    /// Listening practice lessons
    Listening {
        #[command(subcommand)]
        action: Option<ListeningAction>,
    },

    /// Show the learning path
    Path {
        /// Show every node, not just the first 20
        #[arg(long)]
        all: bool,

        #[command(subcommand)]
        action: Option<PathAction>,
    },

    /// Play a timed minigame (word-match, sentence-builder, vocabulary-quiz,
    /// listening-comprehension, repeatable-challenge)
    Play {
        mode: GameMode,
    },

    /// Show or create your profile
    Profile {
        #[command(subcommand)]
        action: Option<ProfileAction>,
    },

    /// Store a session token
    Login {
        #[arg(long)]
        token: String,
    },

    /// Forget the stored session token
    Logout,
}

#[derive(Debug, Subcommand)]
pub enum LanguageAction {
    /// Make a language the active one
    Select { id: u64 },
}

#[derive(Debug, Subcommand)]
pub enum CultureAction {
    /// Read entry number N from the list
    Read {
        n: usize,

        /// Mark the entry completed and collect its XP
        #[arg(long)]
        complete: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConversationAction {
    /// Walk through a scenario and complete it
    Play { id: u64 },
}

#[derive(Debug, Subcommand)]
pub enum ListeningAction {
    /// Speak a lesson aloud
    Speak { id: u32 },
}

#[derive(Debug, Subcommand)]
pub enum PathAction {
    /// Open node number N
    Open {
        n: usize,

        /// Mark the node completed and collect its XP
        #[arg(long)]
        complete: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    /// Create your profile, or change its display name
    Setup { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_play_mode() {
        let cli = Cli::try_parse_from(["nuructl", "play", "word-match"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Play {
                mode: GameMode::WordMatch
            }
        ));
        assert!(Cli::try_parse_from(["nuructl", "play", "chess"]).is_err());
    }

    #[test]
    fn test_parse_nested_actions() {
        let cli =
            Cli::try_parse_from(["nuructl", "-v", "culture", "read", "2", "--complete"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.color.is_none());
        assert!(matches!(
            cli.command,
            Commands::Culture {
                history: false,
                action: Some(CultureAction::Read { n: 2, complete: true })
            }
        ));

        let cli = Cli::try_parse_from(["nuructl", "path", "--all"]).unwrap();
        assert!(matches!(cli.command, Commands::Path { all: true, action: None }));
    }
}
