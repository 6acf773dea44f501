//! Session controller: owns the single active player, prepares draws,
//! records completions and snapshots progression after every change.

pub mod persistence;

pub use persistence::{FileStore, MemoryStore, SaveFile, SnapshotStore};

use crate::achievements::{evaluate, AchievementId, Achievements};
use crate::draw::{draw, DrawOutcome, DrawRequest};
use crate::error::{GachaError, GachaResult, PersistenceError};
use crate::items::{collection_progress, validate_content, CollectionProgress};
use crate::profiles::PlayerProfile;
use crate::progression::{
    can_draw, collected_ids, next_draw_kind, record_draw, spins_remaining, DrawResult, Milestone,
    ProgressionState, SpecialMessage,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Keeps the cosmetic stream apart from the gameplay stream under one seed.
const COSMETIC_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Where the current draw cycle stands. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPhase {
    /// Nothing prepared (logged out or not eligible).
    Idle,
    /// Next draw selected and its reel built; waiting for the user.
    Ready(DrawOutcome),
    /// Requested; the presentation layer is revealing it.
    InFlight(DrawOutcome),
}

#[derive(Debug)]
struct ActivePlayer {
    profile: PlayerProfile,
    state: ProgressionState,
}

/// The one player session the presentation layer talks to.
pub struct GameSession<S: SnapshotStore> {
    store: S,
    player: Option<ActivePlayer>,
    phase: DrawPhase,
    /// Milestone messages not yet shown, oldest first.
    pending_messages: VecDeque<SpecialMessage>,
    achievements: Achievements,
    /// Winner selection. Its distribution is what the odds promise.
    outcome_rng: ChaCha8Rng,
    /// Reel filler, winning slot and flavor notifications.
    cosmetic_rng: ChaCha8Rng,
}

impl<S: SnapshotStore> GameSession<S> {
    /// Validate content, then restore whatever `store` holds. Seeds from OS
    /// entropy.
    pub fn new(store: S) -> GachaResult<Self> {
        Self::build(
            store,
            ChaCha8Rng::from_entropy(),
            ChaCha8Rng::from_entropy(),
        )
    }

    /// Same as [`GameSession::new`] with reproducible randomness.
    pub fn with_seed(store: S, seed: u64) -> GachaResult<Self> {
        Self::build(
            store,
            ChaCha8Rng::seed_from_u64(seed),
            ChaCha8Rng::seed_from_u64(seed ^ COSMETIC_SEED_SALT),
        )
    }

    fn build(store: S, outcome_rng: ChaCha8Rng, cosmetic_rng: ChaCha8Rng) -> GachaResult<Self> {
        validate_content()?;
        let mut session = Self {
            store,
            player: None,
            phase: DrawPhase::Idle,
            pending_messages: VecDeque::new(),
            achievements: Achievements::default(),
            outcome_rng,
            cosmetic_rng,
        };
        session.restore();
        Ok(session)
    }

    /// Load the stored snapshot. Anything unreadable falls back to a logged
    /// out session; a known player with a broken inventory starts over.
    fn restore(&mut self) {
        let json = match self.store.load() {
            Ok(Some(json)) => json,
            Ok(None) => return,
            Err(e) => {
                log::warn!("could not read session snapshot, starting fresh: {e}");
                return;
            }
        };

        let save = match persistence::decode(&json) {
            Ok(save) => save,
            Err(e) => {
                log::warn!("discarding session snapshot: {e}");
                self.persist();
                return;
            }
        };

        let Some(saved) = save.current_player.filter(|_| save.is_authenticated) else {
            return;
        };
        let profile = match saved.profile() {
            Ok(profile) => profile,
            Err(e) => {
                log::warn!("discarding session snapshot: {e}");
                self.persist();
                return;
            }
        };
        match saved.restore_state() {
            Ok(state) => {
                log::info!("restored {} at spin {}", profile.id(), state.spin_index());
                self.start(profile, state);
            }
            Err(e) => {
                log::warn!("resetting progress for {}: {e}", profile.id());
                self.start(profile, ProgressionState::new());
                self.persist();
            }
        }
    }

    fn start(&mut self, profile: PlayerProfile, state: ProgressionState) {
        self.achievements.clear();
        self.achievements.sync(&evaluate(profile, &state));
        self.pending_messages.clear();
        self.player = Some(ActivePlayer { profile, state });
        self.prepare_next_draw();
    }

    // ── Collaborator API ─────────────────────────────────────────────

    /// Start a fresh session for `nickname`. Returns false for unknown
    /// nicknames and leaves the current session untouched.
    pub fn login(&mut self, nickname: &str) -> bool {
        match PlayerProfile::from_nickname(nickname) {
            Ok(profile) => {
                log::info!("login: {}", profile.id());
                self.start(profile, ProgressionState::new());
                self.persist();
                true
            }
            Err(e) => {
                log::info!("login rejected: {e}");
                false
            }
        }
    }

    pub fn logout(&mut self) {
        if let Some(player) = self.player.take() {
            log::info!("logout: {}", player.profile.id());
        }
        self.phase = DrawPhase::Idle;
        self.pending_messages.clear();
        self.achievements.clear();
        self.persist();
    }

    /// Move the prepared draw in flight and return it. A no-op returning
    /// `None` when logged out, ineligible, or a draw is already in flight.
    pub fn request_draw(&mut self) -> Option<&DrawOutcome> {
        let player = self.player.as_ref()?;
        if !can_draw(player.profile, &player.state) {
            return None;
        }

        match std::mem::replace(&mut self.phase, DrawPhase::Idle) {
            DrawPhase::InFlight(outcome) => {
                self.phase = DrawPhase::InFlight(outcome);
                return None;
            }
            DrawPhase::Ready(outcome) => self.phase = DrawPhase::InFlight(outcome),
            DrawPhase::Idle => {
                self.prepare_next_draw();
                if let DrawPhase::Ready(outcome) = std::mem::replace(&mut self.phase, DrawPhase::Idle) {
                    self.phase = DrawPhase::InFlight(outcome);
                }
            }
        }
        self.current_draw()
    }

    /// Record the in-flight draw. `result` must carry the item the engine
    /// selected; on any error nothing changes.
    pub fn report_draw_complete(&mut self, result: DrawResult) -> GachaResult<Option<Milestone>> {
        let expected = match &self.phase {
            DrawPhase::InFlight(outcome) => outcome.item,
            _ => return Err(GachaError::NoDrawInFlight),
        };
        if expected.id != result.item.id {
            return Err(GachaError::ResultMismatch {
                expected: expected.id,
                actual: result.item.id.to_string(),
            });
        }
        let player = self.player.as_mut().ok_or(GachaError::NotAuthenticated)?;

        self.phase = DrawPhase::Idle;
        let milestone = record_draw(
            player.profile,
            &mut player.state,
            result,
            &mut self.cosmetic_rng,
        );
        log::debug!(
            "{} draw {}: {} ({})",
            player.profile.id(),
            player.state.spin_index(),
            result.item.id,
            result.item.rarity.as_str()
        );

        if let Some(milestone) = &milestone {
            self.pending_messages.push_back(milestone.message);
        }
        for id in self
            .achievements
            .update(&evaluate(player.profile, &player.state))
        {
            log::info!("achievement unlocked: {id:?}");
        }

        self.persist();
        self.prepare_next_draw();
        Ok(milestone)
    }

    /// Report the in-flight draw as finished now.
    pub fn complete_draw(&mut self) -> GachaResult<Option<Milestone>> {
        let item = match &self.phase {
            DrawPhase::InFlight(outcome) => outcome.item,
            _ => return Err(GachaError::NoDrawInFlight),
        };
        self.report_draw_complete(DrawResult::new(item))
    }

    pub fn has_more_draws(&self) -> bool {
        self.player
            .as_ref()
            .is_some_and(|p| can_draw(p.profile, &p.state))
    }

    /// Back to an empty progression for the same player.
    pub fn reset_progress(&mut self) {
        let Some(player) = self.player.as_ref() else {
            return;
        };
        let profile = player.profile;
        log::info!("reset progress: {}", profile.id());
        self.phase = DrawPhase::Idle;
        self.start(profile, ProgressionState::new());
        self.persist();
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn current_draw(&self) -> Option<&DrawOutcome> {
        match &self.phase {
            DrawPhase::Ready(outcome) | DrawPhase::InFlight(outcome) => Some(outcome),
            DrawPhase::Idle => None,
        }
    }

    pub fn phase(&self) -> &DrawPhase {
        &self.phase
    }

    pub fn is_draw_in_flight(&self) -> bool {
        matches!(self.phase, DrawPhase::InFlight(_))
    }

    /// Oldest milestone message not yet taken.
    pub fn pending_message(&self) -> Option<&SpecialMessage> {
        self.pending_messages.front()
    }

    pub fn take_pending_message(&mut self) -> Option<SpecialMessage> {
        self.pending_messages.pop_front()
    }

    pub fn has_pending_bonus_draw(&self) -> bool {
        self.player
            .as_ref()
            .is_some_and(|p| p.state.pending_bonus_draw())
    }

    pub fn take_unlocked_achievement(&mut self) -> Option<AchievementId> {
        self.achievements.take_next()
    }

    pub fn achievements(&self) -> &Achievements {
        &self.achievements
    }

    pub fn is_authenticated(&self) -> bool {
        self.player.is_some()
    }

    pub fn profile(&self) -> Option<PlayerProfile> {
        self.player.as_ref().map(|p| p.profile)
    }

    pub fn state(&self) -> Option<&ProgressionState> {
        self.player.as_ref().map(|p| &p.state)
    }

    /// `None` when logged out or the player has no limit.
    pub fn spins_remaining(&self) -> Option<i64> {
        self.player
            .as_ref()
            .and_then(|p| spins_remaining(p.profile, &p.state))
    }

    pub fn collection_progress(&self) -> Option<CollectionProgress> {
        self.player.as_ref().map(|p| {
            collection_progress(
                &collected_ids(&p.state),
                p.profile,
                p.state.alternate_mode_active(),
            )
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // ── Internals ────────────────────────────────────────────────────

    /// Select the next winner and build its reel while the player is eligible.
    fn prepare_next_draw(&mut self) {
        self.phase = DrawPhase::Idle;
        let Some(player) = self.player.as_ref() else {
            return;
        };
        if !can_draw(player.profile, &player.state) {
            return;
        }

        let collected = collected_ids(&player.state);
        let request = DrawRequest {
            profile: player.profile,
            collected: &collected,
            alternate_mode: player.state.alternate_mode_active(),
            rarity_floor_removed: player.state.rarity_floor_removed(),
            kind: next_draw_kind(player.profile, &player.state),
        };
        match draw(&request, &mut self.outcome_rng, &mut self.cosmetic_rng) {
            Some(outcome) => self.phase = DrawPhase::Ready(outcome),
            None => log::warn!("no draw available for {}", player.profile.id()),
        }
    }

    fn persist(&mut self) {
        let save = match &self.player {
            Some(player) => SaveFile::for_player(player.profile, &player.state),
            None => SaveFile::logged_out(),
        };
        let result = persistence::encode(&save)
            .and_then(|json| self.store.save(&json).map_err(PersistenceError::from));
        if let Err(e) = result {
            log::warn!("failed to save session: {e}");
        }
    }
}
