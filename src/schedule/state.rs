use serde::{Serialize, Deserialize};
use super::generator::generate_schedule;
use super::tally::calculate_wins;
use super::types::{Game, GameCount, TeamSide};

/// Everything needed to redisplay a tournament; persisted after each change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleState {
    pub players: [String; 4],
    pub games: Vec<Game>,
    pub total_games: GameCount,
    /// Full 12-game plan backing the 6-game view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_games: Option<Vec<Game>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showing_first_half: Option<bool>,
}

impl ScheduleState {
    /// Fresh schedule for already-validated players
    pub fn new(players: [String; 4], total_games: GameCount) -> Self {
        let games = generate_schedule(&players, total_games);
        let (all_games, showing_first_half) = match total_games {
            GameCount::Six => (Some(generate_schedule(&players, GameCount::Twelve)), Some(true)),
            GameCount::Twelve => (None, None),
        };

        Self {
            players,
            games,
            total_games,
            all_games,
            showing_first_half,
        }
    }

    pub fn game(&self, game_id: u32) -> Option<&Game> {
        self.games.iter().find(|g| g.id == game_id)
    }

    /// Checks the shape a generated schedule always has.
    ///
    /// Displayed ids are consecutive and start at 1, or at 7 when the second
    /// half of the cached plan is shown. A cached plan holds ids 1 to 12.
    pub fn check_structure(&self) -> Result<(), String> {
        let expected = self.total_games.games();
        if self.games.len() != expected {
            return Err(format!(
                "{} games displayed for a {}-game plan",
                self.games.len(),
                self.total_games
            ));
        }

        let full_plan = GameCount::Twelve.games();
        let first_id = match &self.all_games {
            Some(all_games) => {
                if all_games.len() != full_plan || !has_sequential_ids(all_games, 1) {
                    return Err(format!(
                        "cached plan must hold games 1 to {}, found {} games",
                        full_plan,
                        all_games.len()
                    ));
                }
                self.games.first().map(|g| g.id).unwrap_or(1)
            }
            None => 1,
        };

        if (first_id != 1 && first_id != 7) || !has_sequential_ids(&self.games, first_id) {
            return Err("displayed game ids are not sequential".to_string());
        }
        Ok(())
    }

    pub fn is_showing_first_half(&self) -> bool {
        self.showing_first_half.unwrap_or(true)
    }

    /// Games the tally runs over: the cached full plan when there is one
    pub fn scored_games(&self) -> &[Game] {
        self.all_games.as_deref().unwrap_or(&self.games)
    }

    /// Toggles `side` as the winner of a displayed game.
    ///
    /// Marking the current winner again clears it. The cached plan receives
    /// the same value. Returns `None` when the game is not on display.
    pub fn mark_winner(&mut self, game_id: u32, side: TeamSide) -> Option<&Game> {
        let index = self.games.iter().position(|g| g.id == game_id)?;
        let current = self.games[index].winner;
        let winner = if current == Some(side) { None } else { Some(side) };

        if let Some(all_games) = self.all_games.as_mut() {
            for game in all_games.iter_mut().filter(|g| g.id == game_id) {
                game.winner = winner;
            }
        }

        self.games[index].winner = winner;
        Some(&self.games[index])
    }

    /// Win counts in player order
    pub fn standings(&self) -> Vec<(String, u32)> {
        let wins = calculate_wins(self.scored_games(), &self.players);
        self.players
            .iter()
            .map(|p| (p.clone(), wins.get(p).copied().unwrap_or(0)))
            .collect()
    }
}

fn has_sequential_ids(games: &[Game], first_id: u32) -> bool {
    games.iter().zip(first_id..).all(|(game, id)| game.id == id)
}
