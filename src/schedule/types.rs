use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::error::ValidationError;

/// Two players sharing a side; stored in player enumeration order
pub type Team = [String; 2];

/// Board color held by a player in a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which team of a game won it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    Team1,
    Team2,
}

impl TeamSide {
    pub fn as_str(self) -> &'static str {
        match self {
            TeamSide::Team1 => "team1",
            TeamSide::Team2 => "team2",
        }
    }
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeamSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "team1" | "1" => Ok(TeamSide::Team1),
            "team2" | "2" => Ok(TeamSide::Team2),
            other => Err(format!("unknown team `{}` (expected team1 or team2)", other)),
        }
    }
}

/// Length of the tournament plan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GameCount {
    Six,
    #[default]
    Twelve,
}

impl GameCount {
    pub fn games(self) -> usize {
        match self {
            GameCount::Six => 6,
            GameCount::Twelve => 12,
        }
    }
}

impl TryFrom<u8> for GameCount {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            6 => Ok(GameCount::Six),
            12 => Ok(GameCount::Twelve),
            other => Err(ValidationError::GameCount(other.to_string())),
        }
    }
}

impl From<GameCount> for u8 {
    fn from(count: GameCount) -> Self {
        count.games() as u8
    }
}

impl FromStr for GameCount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| ValidationError::GameCount(s.trim().to_string()))?;
        GameCount::try_from(value)
    }
}

impl fmt::Display for GameCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.games())
    }
}

/// A single bughouse game between two teams
///
/// `player1` and `player2` face each other on the front board. Their partners
/// are implied and always hold the opposite color of their teammate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: u32,
    pub team1: Team,
    pub team2: Team,
    pub player1: String,
    pub player2: String,
    pub color1: Color,
    pub color2: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<TeamSide>,
}

impl Game {
    pub fn team(&self, side: TeamSide) -> &Team {
        match side {
            TeamSide::Team1 => &self.team1,
            TeamSide::Team2 => &self.team2,
        }
    }

    /// Teammate of `player1`, playing the other board
    pub fn partner1(&self) -> &str {
        other_member(&self.team1, &self.player1)
    }

    /// Teammate of `player2`, playing the other board
    pub fn partner2(&self) -> &str {
        other_member(&self.team2, &self.player2)
    }

    pub fn is_played(&self) -> bool {
        self.winner.is_some()
    }

    pub fn flip_colors(&mut self) {
        self.color1 = self.color1.opposite();
        self.color2 = self.color2.opposite();
    }
}

fn other_member<'a>(team: &'a Team, player: &str) -> &'a str {
    if team[0] == player {
        &team[1]
    } else {
        &team[0]
    }
}
