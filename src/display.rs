use std::fs::File;
use std::io::Write;
use chrono::Local;
use rand::Rng;
use crate::schedule::{Color, Game, ScheduleState};

/// White and black glyphs of one chess piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSet {
    pub white: char,
    pub black: char,
}

impl PieceSet {
    pub fn glyph(&self, color: Color) -> char {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
}

pub const CHESS_PIECES: [PieceSet; 6] = [
    PieceSet { white: '♔', black: '♚' }, // King
    PieceSet { white: '♕', black: '♛' }, // Queen
    PieceSet { white: '♖', black: '♜' }, // Rook
    PieceSet { white: '♗', black: '♝' }, // Bishop
    PieceSet { white: '♘', black: '♞' }, // Knight
    PieceSet { white: '♙', black: '♟' }, // Pawn
];

/// Picks the glyph set used for a whole rendering
pub fn random_piece_set() -> PieceSet {
    let index = rand::thread_rng().gen_range(0..CHESS_PIECES.len());
    CHESS_PIECES[index]
}

pub fn team_label(team: &[String; 2]) -> String {
    team.join(" & ")
}

/// Renders one game as two board lines: front pair on top, partners below
pub fn format_game(game: &Game, pieces: PieceSet) -> String {
    let status = match game.winner {
        Some(side) => format!("  [won by {}]", team_label(game.team(side))),
        None => String::new(),
    };

    let top = format!(
        "{} {} vs {} {}",
        game.player1,
        pieces.glyph(game.color1),
        game.player2,
        pieces.glyph(game.color2)
    );
    let bottom = format!(
        "{} {} vs {} {}",
        game.partner1(),
        pieces.glyph(game.color1.opposite()),
        game.partner2(),
        pieces.glyph(game.color2.opposite())
    );

    format!(
        "Game {:>2}: {} vs {}{}\n          {}\n          {}",
        game.id,
        team_label(&game.team1),
        team_label(&game.team2),
        status,
        top,
        bottom
    )
}

/// Text of the whole displayed schedule, as printed and written to file
pub fn render_schedule(schedule: &ScheduleState, pieces: PieceSet) -> String {
    let mut out = String::new();
    out.push_str(&format!("Players: {}\n", schedule.players.join(", ")));
    out.push_str(&format!("Total Games: {}", schedule.total_games));
    if schedule.all_games.is_some() {
        let half = if schedule.is_showing_first_half() { "first" } else { "second" };
        out.push_str(&format!(" (showing {} half of the full plan)", half));
    }
    out.push('\n');

    for game in &schedule.games {
        out.push('\n');
        out.push_str(&format_game(game, pieces));
        out.push('\n');
    }
    out
}

pub fn render_standings(schedule: &ScheduleState) -> String {
    let mut out = String::from("Individual Wins\n");
    for (player, wins) in schedule.standings() {
        out.push_str(&format!("  {:<20} {}\n", player, wins));
    }
    out
}

/// Prints the displayed schedule
pub fn print_schedule(schedule: &ScheduleState) {
    println!("\n=== Bughouse Bracket ===");
    print!("{}", render_schedule(schedule, random_piece_set()));
}

pub fn print_standings(schedule: &ScheduleState) {
    println!();
    print!("{}", render_standings(schedule));
}

/// Writes a printable copy of the schedule and the win tally
pub fn write_schedule_to_file(
    schedule: &ScheduleState,
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = File::create(filename)?;

    writeln!(file, "** Bughouse Bracket **")?;
    writeln!(file, "Printed {}", Local::now().format("%Y-%m-%d %H:%M"))?;
    writeln!(file)?;
    write!(file, "{}", render_schedule(schedule, random_piece_set()))?;
    writeln!(file)?;
    write!(file, "{}", render_standings(schedule))?;

    Ok(())
}
