//! In-memory backend actor.
//!
//! Mirrors the actor's observable rules: anonymous callers may read the
//! catalogs but every per-user call fails with `Unauthenticated`, culture
//! entries and dialogues complete once, minigames record every run.

use super::{BackendClient, BackendError, Page};
use crate::progression::level_from_xp;
use crate::types::{
    CompletedMinigame, ConversationScenario, CultureContent, DialogueStep, GameMode, Language,
    MinigameConfig, UserProfile, UserProgress,
};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Error code the actor uses for rejected mutations
const ACTOR_REJECT_CODE: i32 = -32000;

#[derive(Debug, Default)]
struct FakeState {
    languages: Vec<Language>,
    culture: HashMap<u64, Vec<CultureContent>>,
    scenarios: Vec<ConversationScenario>,
    configs: Vec<MinigameConfig>,
    progress: Option<UserProgress>,
    profile: Option<UserProfile>,
    authenticated: bool,
    unavailable: bool,
    calls: usize,
}

/// Fake backend for tests and offline use
pub struct FakeBackend {
    state: Mutex<FakeState>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeBackend {
    /// Empty catalogs, signed in, no progress yet
    pub fn empty() -> Self {
        Self {
            state: Mutex::new(FakeState {
                authenticated: true,
                ..FakeState::default()
            }),
        }
    }

    /// Signed-in backend seeded with a small catalog
    pub fn new() -> Self {
        let backend = Self::empty();
        {
            let mut state = backend.state();
            state.languages = seed_languages();
            state.culture.insert(2, seed_swahili_culture());
            state.scenarios = seed_scenarios();
            state.configs = seed_configs();
        }
        backend
    }

    /// Same catalog, anonymous caller
    pub fn signed_out(self) -> Self {
        self.state().authenticated = false;
        self
    }

    /// Every call fails as if the actor were unreachable
    pub fn unavailable(self) -> Self {
        self.state().unavailable = true;
        self
    }

    pub fn with_languages(self, languages: Vec<Language>) -> Self {
        self.state().languages = languages;
        self
    }

    pub fn with_culture(self, language_id: u64, entries: Vec<CultureContent>) -> Self {
        self.state().culture.insert(language_id, entries);
        self
    }

    pub fn with_scenarios(self, scenarios: Vec<ConversationScenario>) -> Self {
        self.state().scenarios = scenarios;
        self
    }

    pub fn with_configs(self, configs: Vec<MinigameConfig>) -> Self {
        self.state().configs = configs;
        self
    }

    pub fn with_progress(self, progress: UserProgress) -> Self {
        self.state().progress = Some(progress);
        self
    }

    pub fn with_profile(self, profile: UserProfile) -> Self {
        self.state().profile = Some(profile);
        self
    }

    /// Number of calls made so far
    pub fn call_count(&self) -> usize {
        self.state().calls
    }

    /// Current progress record, if the caller has one
    pub fn progress(&self) -> Option<UserProgress> {
        self.state().progress.clone()
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.state().profile.clone()
    }

    fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Count the call and reject it when the actor is down
    fn begin(&self) -> Result<MutexGuard<'_, FakeState>, BackendError> {
        let mut state = self.state();
        state.calls += 1;
        if state.unavailable {
            return Err(BackendError::Unavailable("fake backend offline".to_string()));
        }
        Ok(state)
    }

    /// Like begin(), but requires a signed-in caller
    fn begin_user(&self) -> Result<MutexGuard<'_, FakeState>, BackendError> {
        let state = self.begin()?;
        if !state.authenticated {
            return Err(BackendError::Unauthenticated);
        }
        Ok(state)
    }
}

fn window<T: Clone>(items: &[T], page: Page) -> Vec<T> {
    let offset = usize::try_from(page.offset).unwrap_or(usize::MAX);
    let limit = usize::try_from(page.limit).unwrap_or(usize::MAX);
    items.iter().skip(offset).take(limit).cloned().collect()
}

impl FakeState {
    fn progress_mut(&mut self) -> &mut UserProgress {
        self.progress.get_or_insert_with(UserProgress::default)
    }

    fn award(&mut self, xp: u64) {
        let progress = self.progress_mut();
        progress.xp = progress.xp.saturating_add(xp);
        progress.level = level_from_xp(progress.xp);
        let (total, level) = (progress.xp, progress.level);
        if let Some(profile) = self.profile.as_mut() {
            profile.xp = total;
            profile.level = level;
        }
    }
}

impl BackendClient for FakeBackend {
    fn get_languages(&self, page: Page) -> Result<Vec<Language>, BackendError> {
        let state = self.begin()?;
        Ok(window(&state.languages, page))
    }

    fn get_culture_entries(
        &self,
        language_id: u64,
        page: Page,
    ) -> Result<Vec<CultureContent>, BackendError> {
        let state = self.begin()?;
        Ok(state
            .culture
            .get(&language_id)
            .map(|entries| window(entries, page))
            .unwrap_or_default())
    }

    fn get_conversation_scenarios(
        &self,
        language_id: u64,
        page: Page,
    ) -> Result<Vec<ConversationScenario>, BackendError> {
        let state = self.begin()?;
        let matching: Vec<_> = state
            .scenarios
            .iter()
            .filter(|s| s.language_id == language_id)
            .cloned()
            .collect();
        Ok(window(&matching, page))
    }

    fn get_minigame_configs(
        &self,
        language_id: u64,
        page: Page,
    ) -> Result<Vec<MinigameConfig>, BackendError> {
        let state = self.begin()?;
        let matching: Vec<_> = state
            .configs
            .iter()
            .filter(|c| c.language_id == language_id)
            .cloned()
            .collect();
        Ok(window(&matching, page))
    }

    fn get_user_progress(&self) -> Result<UserProgress, BackendError> {
        let state = self.begin_user()?;
        state.progress.clone().ok_or_else(|| {
            BackendError::from_actor(ACTOR_REJECT_CODE, "User progress not found")
        })
    }

    fn get_caller_user_profile(&self) -> Result<Option<UserProfile>, BackendError> {
        let state = self.begin_user()?;
        Ok(state.profile.clone())
    }

    fn save_caller_user_profile(&self, profile: &UserProfile) -> Result<(), BackendError> {
        let mut state = self.begin_user()?;
        state.profile = Some(profile.clone());
        let progress = state.progress_mut();
        progress.selected_language = profile.selected_language;
        Ok(())
    }

    fn set_selected_language(&self, language_id: u64) -> Result<(), BackendError> {
        let mut state = self.begin_user()?;
        state.progress_mut().selected_language = language_id;
        if let Some(profile) = state.profile.as_mut() {
            profile.selected_language = language_id;
        }
        Ok(())
    }

    fn complete_culture_entry(&self, entry_id: u64, xp_reward: u64) -> Result<(), BackendError> {
        let mut state = self.begin_user()?;
        if state.progress_mut().completed_culture_entries.contains(&entry_id) {
            return Err(BackendError::from_actor(
                ACTOR_REJECT_CODE,
                "Culture entry already completed",
            ));
        }
        state.progress_mut().completed_culture_entries.push(entry_id);
        state.award(xp_reward);
        Ok(())
    }

    fn complete_dialogue(&self, dialogue_id: u64, xp_reward: u64) -> Result<(), BackendError> {
        let mut state = self.begin_user()?;
        if state.progress_mut().completed_dialogues.contains(&dialogue_id) {
            return Err(BackendError::from_actor(
                ACTOR_REJECT_CODE,
                "Dialogue already completed",
            ));
        }
        state.progress_mut().completed_dialogues.push(dialogue_id);
        state.award(xp_reward);
        Ok(())
    }

    fn complete_minigame(
        &self,
        mode: GameMode,
        xp_reward: u64,
        score: u64,
    ) -> Result<(), BackendError> {
        let mut state = self.begin_user()?;
        state
            .progress_mut()
            .completed_minigames
            .push(CompletedMinigame(xp_reward, mode, score));
        state.award(xp_reward);
        Ok(())
    }
}

fn seed_languages() -> Vec<Language> {
    [
        (1, "Arabic", "Classical and Modern Standard Arabic of North Africa"),
        (2, "Swahili", "Lingua franca of East Africa"),
        (3, "Hausa", "Widely spoken across West Africa and the Sahel"),
        (4, "Amharic", "Official working language of Ethiopia"),
        (5, "Yoruba", "Tonal language of southwestern Nigeria and Benin"),
        (6, "Zulu", "Most widely spoken home language in South Africa"),
    ]
    .into_iter()
    .map(|(id, name, description)| Language {
        id,
        name: name.to_string(),
        description: description.to_string(),
    })
    .collect()
}

fn seed_swahili_culture() -> Vec<CultureContent> {
    [
        (
            "History of the Swahili Coast",
            "City-states such as Kilwa and Lamu grew rich on Indian Ocean trade.",
            50,
            "Historia ya Pwani ya Afrika Mashariki",
            "History of the East African Coast",
        ),
        (
            "Greeting Elders",
            "Younger people greet elders with 'Shikamoo'; the reply is 'Marahaba'.",
            30,
            "Shikamoo",
            "I hold your feet (respectful greeting)",
        ),
        (
            "Swahili Proverbs",
            "Proverbs (methali) are woven into everyday speech and kanga cloth.",
            40,
            "Haraka haraka haina baraka",
            "Hurry hurry has no blessing",
        ),
    ]
    .into_iter()
    .map(|(title, content, xp, language_text, translated_text)| CultureContent {
        title: title.to_string(),
        content: content.to_string(),
        xp_reward: xp,
        language_text: language_text.to_string(),
        translated_text: translated_text.to_string(),
    })
    .collect()
}

fn step(speaker: &str, prompt: &str, expected_response: &str) -> DialogueStep {
    DialogueStep {
        speaker: speaker.to_string(),
        prompt: prompt.to_string(),
        expected_response: expected_response.to_string(),
    }
}

fn seed_scenarios() -> Vec<ConversationScenario> {
    vec![
        ConversationScenario {
            id: 1,
            title: "At the Market".to_string(),
            description: "Buy fruit from a stall in Mombasa".to_string(),
            language_id: 2,
            xp_reward: 40,
            steps: vec![
                step("Vendor", "Karibu! Unataka nini?", "Nataka maembe, tafadhali."),
                step("Vendor", "Maembe matatu ni shilingi mia moja.", "Asante sana."),
            ],
        },
        ConversationScenario {
            id: 2,
            title: "Meeting a Neighbour".to_string(),
            description: "Exchange morning greetings".to_string(),
            language_id: 2,
            xp_reward: 25,
            steps: vec![step("Neighbour", "Habari za asubuhi?", "Nzuri, asante.")],
        },
    ]
}

fn seed_configs() -> Vec<MinigameConfig> {
    let config = |id, game_mode, xp_reward, instructions: &str, time_limit| MinigameConfig {
        id,
        language_id: 2,
        game_mode,
        difficulty: 1,
        xp_reward,
        instructions: instructions.to_string(),
        time_limit,
    };
    vec![
        config(1, GameMode::WordMatch, 20, "Match each word with its translation", Some(60)),
        config(2, GameMode::SentenceBuilder, 30, "Put the words in the right order", Some(90)),
        config(3, GameMode::VocabularyQuiz, 25, "Pick the correct meaning", None),
        config(
            4,
            GameMode::ListeningComprehension,
            25,
            "Listen to the phrase and answer",
            None,
        ),
    ]
}
