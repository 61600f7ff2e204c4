use std::path::Path;
use csv::WriterBuilder;
use crate::display::team_label;
use crate::schedule::{Game, ScheduleState};

const HEADERS: [&str; 8] = ["game", "team1", "team2", "player1", "color1", "player2", "color2", "winner"];

fn game_record(game: &Game) -> [String; 8] {
    [
        game.id.to_string(),
        team_label(&game.team1),
        team_label(&game.team2),
        game.player1.clone(),
        game.color1.to_string(),
        game.player2.clone(),
        game.color2.to_string(),
        game.winner.map(|side| side.to_string()).unwrap_or_default(),
    ]
}

/// Writes the displayed games to a CSV file, replacing any existing file
///
/// # Arguments
/// * `schedule` - The schedule whose displayed games are exported
/// * `csv_path` - Destination file
pub fn export_schedule_to_csv(
    schedule: &ScheduleState,
    csv_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_path(csv_path)?;

    wtr.write_record(HEADERS)?;
    for game in &schedule.games {
        wtr.write_record(game_record(game))?;
    }

    wtr.flush()?;
    Ok(())
}
