//! Game Runtime
//!
//! Owns the whole simulation state and advances it one frame at a time.
//! Nothing in here touches the window, the clock or the GPU, so a run can be
//! driven headless with scripted input and a seeded RNG.

use rand::Rng;

use super::event::{Events, GameOverEvent, LandedEvent, RecycleEvent};
use super::platform::PlatformField;
use super::player::{MoveInput, Player};
use crate::settings::Settings;

/// Where the run is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Running,
    /// Terminal. No transition leaves this state.
    GameOver { final_score: u32 },
}

impl GamePhase {
    pub fn is_running(&self) -> bool {
        matches!(self, GamePhase::Running)
    }
}

/// Result of a single [`GameState::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep going
    Running,
    /// The player fell out of the world on this tick
    GameOver { final_score: u32 },
    /// The run had already ended before this tick; nothing happened
    Finished,
}

/// Complete simulation state for one run
pub struct GameState {
    pub settings: Settings,
    pub player: Player,
    pub platforms: PlatformField,
    pub score: u32,
    pub phase: GamePhase,
    /// Ticks simulated so far
    pub frame: u64,
    /// Events from the most recent tick
    pub events: Events,
}

impl GameState {
    /// Start a run: player at the spawn point, fresh platform field
    pub fn new<R: Rng + ?Sized>(settings: Settings, rng: &mut R) -> Self {
        let player = Player::new(&settings);
        let platforms = PlatformField::generate(rng, &settings);
        Self::with_field(settings, player, platforms)
    }

    /// Start a run from an explicit player and field
    pub fn with_field(settings: Settings, player: Player, platforms: PlatformField) -> Self {
        Self {
            settings,
            player,
            platforms,
            score: 0,
            phase: GamePhase::Running,
            frame: 0,
            events: Events::new(),
        }
    }

    /// Run one frame of game simulation.
    ///
    /// Order: walk, fall, land, scroll, fall-out check. Events from the
    /// previous tick are discarded first.
    pub fn tick<R: Rng + ?Sized>(&mut self, input: MoveInput, rng: &mut R) -> TickOutcome {
        self.events.clear_all();
        if !self.phase.is_running() {
            return TickOutcome::Finished;
        }
        self.frame += 1;

        self.player.move_horizontal(input);
        self.player.apply_gravity();

        if let Some(slot) = self.player.landing_slot(self.platforms.as_slice()) {
            self.score = self.score.saturating_add(1);
            self.events.landed.send(LandedEvent {
                slot,
                score: self.score,
            });
        }

        self.scroll(rng);

        if self.player.y > self.settings.screen_height {
            let final_score = self.score;
            self.phase = GamePhase::GameOver { final_score };
            self.events.game_over.send(GameOverEvent {
                final_score,
                frames: self.frame,
            });
            return TickOutcome::GameOver { final_score };
        }

        TickOutcome::Running
    }

    /// Push the world down while the player is in the top band of the screen.
    /// Each platform that drops off the bottom is recycled and scores a point.
    fn scroll<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.player.y >= self.settings.scroll_threshold() {
            return;
        }
        let dy = self.settings.scroll_speed;
        self.player.y += dy;

        for slot in self.platforms.scroll(dy, rng, &self.settings) {
            self.score = self.score.saturating_add(1);
            let x = self.platforms.get(slot).map_or(0.0, |p| p.x);
            self.events.recycled.send(RecycleEvent {
                slot,
                x,
                score: self.score,
            });
        }
    }
}
