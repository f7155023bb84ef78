//! Per-invocation state shared by the commands

use crate::notify::Notifier;
use anyhow::{Context as _, Result};
use nuru_common::backend::{caller_profile, progress_snapshot, BackendClient, HttpBackendClient};
use nuru_common::config::{ColorMode, NuruConfig};
use nuru_common::progression::LearnerProgression;
use nuru_common::speech::{engine_for, NoSpeech, SpeechEngine};
use nuru_common::{UserProfile, UserProgress, DEFAULT_LANGUAGE_ID};
use std::path::PathBuf;

pub struct Context {
    pub backend: Box<dyn BackendClient>,
    pub config: NuruConfig,
    /// Where login/logout persist the config; None keeps changes in memory
    pub config_path: Option<PathBuf>,
    pub speech: Box<dyn SpeechEngine>,
    pub notifier: Notifier,
}

impl Context {
    /// Context for tests and embedding: no speech, no colors, no config file
    pub fn new(backend: Box<dyn BackendClient>, config: NuruConfig) -> Self {
        Self {
            backend,
            config,
            config_path: None,
            speech: Box::new(NoSpeech),
            notifier: Notifier::plain(),
        }
    }

    /// Context for a real run: HTTP backend and configured speech
    pub fn from_config(config: NuruConfig, config_path: PathBuf) -> Result<Self> {
        let backend = HttpBackendClient::new(
            &config.backend,
            config.session_token().map(str::to_string),
        )
        .context("Failed to set up backend client")?;
        tracing::debug!("Backend endpoint: {}", backend.endpoint());

        let color = match config.output.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                console::colors_enabled() && std::env::var_os("NO_COLOR").is_none()
            }
        };

        Ok(Self {
            speech: engine_for(config.speech.command.as_deref()),
            backend: Box::new(backend),
            config,
            config_path: Some(config_path),
            notifier: Notifier::new(color),
        })
    }

    pub fn color(&self) -> bool {
        self.notifier.color()
    }

    /// A session token is configured
    pub fn authenticated(&self) -> bool {
        self.config.is_authenticated()
    }

    /// Progress snapshot; None when signed out or unreadable
    pub fn progress(&self) -> Option<UserProgress> {
        if !self.authenticated() {
            return None;
        }
        progress_snapshot(self.backend.as_ref())
    }

    pub fn profile(&self) -> Option<UserProfile> {
        if !self.authenticated() {
            return None;
        }
        caller_profile(self.backend.as_ref())
    }

    /// Language the content commands work in
    pub fn selected_language(&self, progress: Option<&UserProgress>) -> u64 {
        progress
            .map(|p| p.selected_language)
            .filter(|id| *id != 0)
            .unwrap_or(DEFAULT_LANGUAGE_ID)
    }

    /// Learner level for difficulty scaling; 1 when unknown
    pub fn level(&self, progress: Option<&UserProgress>) -> u64 {
        progress.map(|p| p.level.max(1)).unwrap_or(1)
    }

    pub fn progression(progress: &UserProgress) -> LearnerProgression {
        LearnerProgression::new(progress.xp, progress.level)
    }

    /// Persist the config if this context owns a config file
    pub fn save_config(&self) -> Result<()> {
        match &self.config_path {
            Some(path) => self.config.save_to(path),
            None => Ok(()),
        }
    }
}
