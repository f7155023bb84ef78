//! nuructl - terminal client for the Nuru language-learning backend
//!
//! The binary is a thin shell over [`dispatch`]; everything else lives here
//! so command flows can be exercised against a fake backend.

pub mod cli;
pub mod commands;
pub mod context;
pub mod display;
pub mod errors;
pub mod logging;
pub mod notify;
pub mod runner;
pub mod spinner;

use anyhow::Result;
use cli::{
    Commands, ConversationAction, CultureAction, LanguageAction, ListeningAction, PathAction,
    ProfileAction,
};
use context::Context;
use std::io::Write;

/// Run one parsed command, writing its output to `out`
pub fn dispatch(ctx: &mut Context, command: Commands, out: &mut dyn Write) -> Result<()> {
    tracing::debug!("Dispatching {:?}", command);
    match command {
        Commands::Dashboard => commands::dashboard::run(ctx, out),
        Commands::Languages { action: None } => commands::languages::list(ctx, out),
        Commands::Languages {
            action: Some(LanguageAction::Select { id }),
        } => commands::languages::select(ctx, out, id),
        Commands::Culture {
            history,
            action: None,
        } => commands::culture::list(ctx, out, history),
        Commands::Culture {
            history,
            action: Some(CultureAction::Read { n, complete }),
        } => commands::culture::read(ctx, out, history, n, complete),
        Commands::Conversation { action: None } => commands::conversation::list(ctx, out),
        Commands::Conversation {
            action: Some(ConversationAction::Play { id }),
        } => commands::conversation::play(ctx, out, id),
        Commands::Listening { action: None } => commands::listening::list(ctx, out),
        Commands::Listening {
            action: Some(ListeningAction::Speak { id }),
        } => commands::listening::speak(ctx, out, id),
        Commands::Path { all, action: None } => commands::path::show(ctx, out, all),
        Commands::Path {
            action: Some(PathAction::Open { n, complete }),
            ..
        } => commands::path::open(ctx, out, n, complete),
        Commands::Play { mode } => commands::play::run(ctx, out, mode),
        Commands::Profile { action: None } => commands::profile::show(ctx, out),
        Commands::Profile {
            action: Some(ProfileAction::Setup { name }),
        } => commands::profile::setup(ctx, out, &name),
        Commands::Login { token } => commands::session::login(ctx, out, &token),
        Commands::Logout => commands::session::logout(ctx, out),
    }
}
