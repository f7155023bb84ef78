//! Learning flows against the fake backend

use nuru_common::backend::{
    completion_outcome, progress_snapshot, BackendClient, BackendError, CompletionOutcome,
    FakeBackend, Page,
};
use nuru_common::difficulty::session_difficulty;
use nuru_common::learning_path::{build_learning_path, NodeKind};
use nuru_common::minigame::{new_game, submit_outcome, GameSession, Submission};
use nuru_common::progression::{level_up, LearnerProgression};
use nuru_common::{GameMode, UserProgress};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SWAHILI: u64 = 2;

fn learner() -> FakeBackend {
    FakeBackend::new().with_progress(UserProgress {
        selected_language: SWAHILI,
        ..UserProgress::default()
    })
}

fn path(backend: &FakeBackend) -> Vec<nuru_common::learning_path::PathNode> {
    let culture = backend
        .get_culture_entries(SWAHILI, Page::content())
        .unwrap();
    let scenarios = backend
        .get_conversation_scenarios(SWAHILI, Page::content())
        .unwrap();
    build_learning_path(&culture, &scenarios, progress_snapshot(backend).as_ref())
}

fn complete(backend: &FakeBackend, kind: NodeKind, id: u64, xp: u64) -> CompletionOutcome {
    let result = match kind {
        NodeKind::Culture => backend.complete_culture_entry(id, xp),
        NodeKind::Conversation => backend.complete_dialogue(id, xp),
    };
    completion_outcome(result).unwrap()
}

#[test]
fn test_walking_the_path_unlocks_nodes_and_levels_up() {
    let backend = learner();
    let mut levels = Vec::new();

    loop {
        let nodes = path(&backend);
        let Some(next) = nodes.iter().find(|n| !n.is_completed) else {
            break;
        };
        assert!(next.is_next_up);
        assert!(!next.is_locked);
        assert!(nodes
            .iter()
            .filter(|n| !n.is_completed && n.id != next.id)
            .all(|n| n.is_locked));

        let before = backend.progress().unwrap().level;
        let outcome = complete(&backend, next.kind(), next.content_id, next.xp_reward);
        assert_eq!(outcome, CompletionOutcome::Recorded);
        let after = backend.progress().unwrap().level;
        if let Some(level) = level_up(before, after) {
            levels.push(level);
        }
    }

    let progress = backend.progress().unwrap();
    assert_eq!(progress.xp, 50 + 30 + 40 + 40 + 25);
    assert_eq!(progress.completed_culture_entries.len(), 3);
    assert_eq!(progress.completed_dialogues, vec![1, 2]);
    assert_eq!(levels, vec![2]);

    // Everything done: the first node is offered again
    let nodes = path(&backend);
    assert!(nodes.iter().all(|n| n.is_completed && !n.is_locked));
    assert!(nodes[0].is_next_up);
}

#[test]
fn test_repeat_completion_is_reported_not_awarded() {
    let backend = learner();
    let nodes = path(&backend);
    let first = &nodes[0];

    assert_eq!(
        complete(&backend, first.kind(), first.content_id, first.xp_reward),
        CompletionOutcome::Recorded
    );
    assert_eq!(
        complete(&backend, first.kind(), first.content_id, first.xp_reward),
        CompletionOutcome::AlreadyCompleted
    );
    assert_eq!(backend.progress().unwrap().xp, first.xp_reward);
}

#[test]
fn test_minigame_result_is_recorded() {
    let backend = learner();
    let configs = backend
        .get_minigame_configs(SWAHILI, Page::content())
        .unwrap();
    let config = configs
        .iter()
        .find(|c| c.game_mode == GameMode::VocabularyQuiz)
        .cloned();

    let difficulty = session_difficulty(1, GameMode::VocabularyQuiz, config.as_ref());
    let game = new_game(
        GameMode::VocabularyQuiz,
        SWAHILI,
        &difficulty,
        &mut StdRng::seed_from_u64(11),
    );
    let mut session = GameSession::new(game, &difficulty, config);
    while let Some(prompt) = session.prompt() {
        assert!(!prompt.choices.is_empty());
        session.respond("1");
    }
    let outcome = session.finish();
    assert_eq!(outcome.xp_reward, 25);

    let submission = submit_outcome(&backend, &outcome, true).unwrap();
    assert!(matches!(submission, Submission::Submit { xp_reward: 25, .. }));

    let progress = backend.progress().unwrap();
    assert_eq!(progress.xp, 25);
    assert_eq!(progress.completed_minigames.len(), 1);
    assert_eq!(progress.completed_minigames[0].1, GameMode::VocabularyQuiz);
    assert_eq!(
        LearnerProgression::new(progress.xp, progress.level).xp_to_next_level(),
        125
    );
}

#[test]
fn test_signed_out_learner() {
    let backend = FakeBackend::new().signed_out();

    assert!(backend.get_languages(Page::languages()).is_ok());
    assert!(progress_snapshot(&backend).is_none());
    assert!(matches!(
        backend.complete_dialogue(1, 40),
        Err(BackendError::Unauthenticated)
    ));
    // Content stays browsable, so the path renders with the first node next up
    let nodes = path(&backend);
    assert!(nodes[0].is_next_up);
    assert!(nodes[1].is_locked);
}

#[test]
fn test_unavailable_backend() {
    let backend = FakeBackend::new().unavailable();
    assert!(matches!(
        backend.get_languages(Page::languages()),
        Err(BackendError::Unavailable(_))
    ));
}
