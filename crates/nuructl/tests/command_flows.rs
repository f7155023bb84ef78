//! End-to-end command flows against the fake backend

use clap::Parser;
use nuru_common::backend::FakeBackend;
use nuru_common::config::NuruConfig;
use nuru_common::{UserProfile, UserProgress};
use nuructl::cli::Cli;
use nuructl::commands::{complete_item, CompletionKind};
use nuructl::context::Context;
use nuructl::dispatch;
use nuructl::errors::{exit_code_for, EXIT_BACKEND_UNAVAILABLE, EXIT_COMMAND_NOT_AVAILABLE};
use nuructl::notify::{
    ENTRY_ALREADY_COMPLETED, LANGUAGE_UPDATED, LOGIN_FOR_LANGUAGE, LOGIN_FOR_PROGRESS, LOGIN_HINT,
};

fn signed_in_config() -> NuruConfig {
    let mut config = NuruConfig::default();
    config.session.token = Some("session-token".to_string());
    config
}

fn swahili_learner() -> FakeBackend {
    FakeBackend::new()
        .with_progress(UserProgress {
            selected_language: 2,
            ..UserProgress::default()
        })
        .with_profile(UserProfile {
            name: "Amina".to_string(),
            xp: 0,
            level: 1,
            selected_language: 2,
        })
}

fn run(ctx: &mut Context, args: &[&str]) -> anyhow::Result<String> {
    let mut argv = vec!["nuructl"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv)?;
    let mut out = Vec::new();
    dispatch(ctx, cli.command, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_dashboard_signed_in() {
    let mut ctx = Context::new(Box::new(swahili_learner()), signed_in_config());
    let text = run(&mut ctx, &["dashboard"]).unwrap();

    assert!(text.contains("Welcome back to Nuru, Amina!"));
    assert!(text.contains("Level 1 - 0 XP"));
    assert!(text.contains("150 XP to Level 2"));
    assert!(text.contains("Difficulty: Beginner"));
    assert!(text.contains("*   2  Swahili"));
    assert!(!text.contains(LOGIN_HINT));
}

#[test]
fn test_dashboard_signed_out() {
    let mut ctx = Context::new(Box::new(FakeBackend::new()), NuruConfig::default());
    let text = run(&mut ctx, &["dashboard"]).unwrap();

    assert!(text.contains("Welcome to Nuru!"));
    assert!(!text.contains("Level 1"));
    assert!(text.contains(LOGIN_HINT));
    // Default language is marked when nothing is selected
    assert!(text.contains("*   1  Arabic"));
}

#[test]
fn test_select_language() {
    let mut ctx = Context::new(Box::new(FakeBackend::new()), signed_in_config());
    let text = run(&mut ctx, &["languages", "select", "5"]).unwrap();
    assert!(text.contains(LANGUAGE_UPDATED));
    assert!(text.contains("Now learning Yoruba."));
    assert_eq!(ctx.progress().unwrap().selected_language, 5);

    let err = run(&mut ctx, &["languages", "select", "42"]).unwrap_err();
    assert_eq!(exit_code_for(&err), EXIT_COMMAND_NOT_AVAILABLE);
}

#[test]
fn test_select_language_signed_out() {
    let backend = FakeBackend::new().signed_out();
    let mut ctx = Context::new(Box::new(backend), NuruConfig::default());
    let text = run(&mut ctx, &["languages", "select", "2"]).unwrap();
    assert!(text.contains(LOGIN_FOR_LANGUAGE));
}

#[test]
fn test_read_culture_twice() {
    let mut ctx = Context::new(Box::new(swahili_learner()), signed_in_config());

    let text = run(&mut ctx, &["culture", "read", "2", "--complete"]).unwrap();
    assert!(text.contains("Greeting Elders"));
    assert!(text.contains("[OK] Completed! +30 XP"));

    let text = run(&mut ctx, &["culture", "read", "2", "--complete"]).unwrap();
    assert!(text.contains(ENTRY_ALREADY_COMPLETED));
    assert_eq!(ctx.progress().unwrap().xp, 30);

    let text = run(&mut ctx, &["culture"]).unwrap();
    assert!(text.contains("[x]  2. Greeting Elders"));
}

#[test]
fn test_history_filter_numbers_its_own_list() {
    let mut ctx = Context::new(Box::new(swahili_learner()), signed_in_config());
    let text = run(&mut ctx, &["culture", "--history"]).unwrap();
    assert!(text.contains(" 1. History of the Swahili Coast"));
    assert!(!text.contains("Greeting Elders"));

    let text = run(&mut ctx, &["culture", "--history", "read", "1"]).unwrap();
    assert!(text.contains("History of the Swahili Coast"));
    assert!(run(&mut ctx, &["culture", "--history", "read", "2"]).is_err());
}

#[test]
fn test_completion_signed_out_prompts_login() {
    let mut ctx = Context::new(Box::new(FakeBackend::new()), NuruConfig::default());
    let mut out = Vec::new();
    complete_item(&ctx, &mut out, CompletionKind::Dialogue, 1, 40).unwrap();
    assert!(String::from_utf8(out).unwrap().contains(LOGIN_FOR_PROGRESS));

    // A token the backend refuses gets the same prompt instead of an error
    let backend = swahili_learner().signed_out();
    ctx = Context::new(Box::new(backend), signed_in_config());
    let mut out = Vec::new();
    complete_item(&ctx, &mut out, CompletionKind::CultureEntry, 7, 30).unwrap();
    assert!(String::from_utf8(out).unwrap().contains(LOGIN_FOR_PROGRESS));
}

#[test]
fn test_conversation_play_levels_up() {
    let backend = FakeBackend::new().with_progress(UserProgress {
        xp: 140,
        level: 1,
        selected_language: 2,
        ..UserProgress::default()
    });
    let mut ctx = Context::new(Box::new(backend), signed_in_config());
    let text = run(&mut ctx, &["conversation", "play", "1"]).unwrap();

    assert!(text.contains("Step 1 of 2"));
    assert!(text.contains("Step 2 of 2"));
    assert!(text.contains("[OK] Completed! +40 XP"));
    assert!(text.contains("Level Up! You've reached Level 2"));
}

#[test]
fn test_path_walk() {
    let mut ctx = Context::new(Box::new(swahili_learner()), signed_in_config());

    let err = run(&mut ctx, &["path", "open", "3"]).unwrap_err();
    assert!(format!("{:#}", err).contains("locked"));
    assert_eq!(exit_code_for(&err), EXIT_COMMAND_NOT_AVAILABLE);

    run(&mut ctx, &["path", "open", "1", "--complete"]).unwrap();
    run(&mut ctx, &["path", "open", "2", "--complete"]).unwrap();
    let text = run(&mut ctx, &["path", "open", "3", "--complete"]).unwrap();
    assert!(text.contains("At the Market"));
    assert!(text.contains("Completed! +40 XP"));

    let text = run(&mut ctx, &["path"]).unwrap();
    assert!(text.contains("[x]       3. At the Market"));
    assert!(text.contains("[>]       4. Swahili Proverbs"));
}

#[test]
fn test_listening_lessons() {
    let mut ctx = Context::new(Box::new(swahili_learner()), signed_in_config());
    let text = run(&mut ctx, &["listening"]).unwrap();
    assert!(text.contains("Greetings"));
    assert!(text.contains("Food"));
    assert!(text.contains("Voice: sw  Recognition: sw-KE"));

    // No speech engine in tests: the lesson is shown and the notice explains why
    let text = run(&mut ctx, &["listening", "speak", "1"]).unwrap();
    assert!(text.contains("Text-to-speech not supported"));
    assert!(run(&mut ctx, &["listening", "speak", "999"]).is_err());
}

#[test]
fn test_unavailable_backend_exit_code() {
    let backend = FakeBackend::new().unavailable();
    let mut ctx = Context::new(Box::new(backend), signed_in_config());
    let err = run(&mut ctx, &["languages"]).unwrap_err();
    assert_eq!(exit_code_for(&err), EXIT_BACKEND_UNAVAILABLE);
    assert!(format!("{:#}", err).starts_with("Failed to load languages"));
}

#[test]
fn test_logout_without_config_file() {
    let mut ctx = Context::new(Box::new(FakeBackend::new()), signed_in_config());
    let text = run(&mut ctx, &["logout"]).unwrap();
    assert!(text.contains("Logged out"));
    assert!(!ctx.authenticated());

    let text = run(&mut ctx, &["dashboard"]).unwrap();
    assert!(text.contains(LOGIN_HINT));
}
