//! Loads the saved schedule once, applies user actions and persists after each one.

use log::info;

use crate::error::BracketError;
use crate::form::{validate_submission, PlayerSubmission};
use crate::schedule::{toggle_all_colors, ScheduleState, TeamSide};
use crate::store::ScheduleStore;

pub struct BracketTracker {
    store: ScheduleStore,
    schedule: Option<ScheduleState>,
}

impl BracketTracker {
    /// Reads the save slot; a missing or corrupted save starts empty
    pub fn load(store: ScheduleStore) -> Self {
        let schedule = store.load();
        if let Some(ref schedule) = schedule {
            info!(
                "Loaded {}-game schedule for {}",
                schedule.total_games,
                schedule.players.join(", ")
            );
        }
        Self { store, schedule }
    }

    pub fn store(&self) -> &ScheduleStore {
        &self.store
    }

    pub fn schedule(&self) -> Option<&ScheduleState> {
        self.schedule.as_ref()
    }

    /// Validates the players and replaces any existing schedule
    pub fn submit(&mut self, submission: &PlayerSubmission) -> Result<&ScheduleState, BracketError> {
        let players = validate_submission(submission)?;
        info!(
            "Generating {}-game schedule for {}",
            submission.total_games,
            players.join(", ")
        );

        let schedule: &ScheduleState = self
            .schedule
            .insert(ScheduleState::new(players, submission.total_games));
        self.store.save(schedule)?;
        Ok(schedule)
    }

    pub fn reset(&mut self) -> Result<(), BracketError> {
        self.schedule = None;
        self.store.clear()?;
        info!("Schedule reset");
        Ok(())
    }

    pub fn toggle_colors(&mut self) -> Result<&ScheduleState, BracketError> {
        let current = self.schedule.as_ref().ok_or(BracketError::NoSchedule)?;
        let toggled = toggle_all_colors(current);
        let schedule: &ScheduleState = self.schedule.insert(toggled);
        self.store.save(schedule)?;
        Ok(schedule)
    }

    /// Toggles the winner of a displayed game and returns its new winner
    pub fn mark_winner(&mut self, game_id: u32, side: TeamSide) -> Result<Option<TeamSide>, BracketError> {
        let schedule = self.schedule.as_mut().ok_or(BracketError::NoSchedule)?;
        let winner = schedule
            .mark_winner(game_id, side)
            .ok_or(BracketError::UnknownGame(game_id))?
            .winner;
        self.store.save(schedule)?;

        match winner {
            Some(side) => info!("Game {} won by {}", game_id, side),
            None => info!("Game {} unmarked", game_id),
        }
        Ok(winner)
    }

    pub fn standings(&self) -> Result<Vec<(String, u32)>, BracketError> {
        self.schedule
            .as_ref()
            .map(ScheduleState::standings)
            .ok_or(BracketError::NoSchedule)
    }
}
