use std::collections::HashMap;
use super::generator::generate_schedule;
use super::state::ScheduleState;
use super::types::{Game, GameCount, TeamSide};

/// Flips every board in a 12-game schedule, or swaps halves of the cached
/// full plan in a 6-game schedule. Recorded winners survive either way.
pub fn toggle_all_colors(schedule: &ScheduleState) -> ScheduleState {
    match schedule.total_games {
        GameCount::Twelve => {
            let mut toggled = schedule.clone();
            toggled.games.iter_mut().for_each(Game::flip_colors);
            toggled
        }
        GameCount::Six => switch_half(schedule),
    }
}

fn switch_half(schedule: &ScheduleState) -> ScheduleState {
    let winners = recorded_winners(&schedule.games);

    let (mut all_games, showing_first_half) = match &schedule.all_games {
        Some(cached) if cached.len() == GameCount::Twelve.games() => {
            (cached.clone(), schedule.is_showing_first_half())
        }
        // No usable cached plan: we are leaving the original 6-game view
        _ => (generate_schedule(&schedule.players, GameCount::Twelve), true),
    };
    apply_winners(&mut all_games, &winners);

    let half = if showing_first_half { 6..12 } else { 0..6 };
    let games = all_games[half].to_vec();

    ScheduleState {
        players: schedule.players.clone(),
        games,
        total_games: schedule.total_games,
        all_games: Some(all_games),
        showing_first_half: Some(!showing_first_half),
    }
}

fn recorded_winners(games: &[Game]) -> HashMap<u32, TeamSide> {
    games
        .iter()
        .filter_map(|g| g.winner.map(|w| (g.id, w)))
        .collect()
}

/// Copies winners onto matching ids; games without a recorded winner are left alone
fn apply_winners(games: &mut [Game], winners: &HashMap<u32, TeamSide>) {
    for game in games {
        if let Some(&winner) = winners.get(&game.id) {
            game.winner = Some(winner);
        }
    }
}
