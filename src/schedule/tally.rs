use std::collections::HashMap;
use super::types::Game;

/// Counts individual wins: both members of the winning team get one per game.
/// Every player in `players` is present in the result, even with zero wins.
pub fn calculate_wins(games: &[Game], players: &[String]) -> HashMap<String, u32> {
    let mut wins: HashMap<String, u32> = players.iter().map(|p| (p.clone(), 0)).collect();

    for game in games {
        if let Some(side) = game.winner {
            for player in game.team(side) {
                *wins.entry(player.clone()).or_insert(0) += 1;
            }
        }
    }

    wins
}
