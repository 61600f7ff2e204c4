use std::collections::HashSet;
use serde::{Deserialize, Serialize};
use crate::error::ValidationError;
use crate::schedule::GameCount;

/// Player form as submitted by the CLI or the web page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSubmission {
    pub players: Vec<String>,
    #[serde(default)]
    pub total_games: GameCount,
}

/// Trims, collapses inner whitespace and title-cases every word
pub fn capitalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str().to_lowercase()),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Validates a submission and returns the four normalized names in input order
pub fn validate_submission(req: &PlayerSubmission) -> Result<[String; 4], ValidationError> {
    let players: Vec<String> = req
        .players
        .iter()
        .map(|name| capitalize_name(name))
        .filter(|name| !name.is_empty())
        .collect();

    let count = players.len();
    let distinct = players.iter().collect::<HashSet<_>>().len();
    let players: [String; 4] = players
        .try_into()
        .map_err(|_| ValidationError::PlayerCount(count))?;

    if distinct != count {
        return Err(ValidationError::DuplicateNames);
    }

    Ok(players)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(names: &[&str]) -> PlayerSubmission {
        PlayerSubmission {
            players: names.iter().map(|n| n.to_string()).collect(),
            total_games: GameCount::Twelve,
        }
    }

    #[test]
    fn test_capitalize_name() {
        assert_eq!(capitalize_name("  alice  "), "Alice");
        assert_eq!(capitalize_name("mary   ann\tSMITH"), "Mary Ann Smith");
        assert_eq!(capitalize_name("éva"), "Éva");
        assert_eq!(capitalize_name("   "), "");
    }

    #[test]
    fn test_validate_submission_normalizes_names() {
        let players = validate_submission(&submission(&["alice", "BOB", " carol ", "dave  jones"])).unwrap();
        assert_eq!(players, ["Alice", "Bob", "Carol", "Dave Jones"].map(String::from));
    }

    #[test]
    fn test_validate_submission_requires_four_names() {
        assert_eq!(
            validate_submission(&submission(&["alice", "bob", "", "dave"])),
            Err(ValidationError::PlayerCount(3))
        );
        assert_eq!(
            validate_submission(&submission(&["a", "b", "c", "d", "e"])),
            Err(ValidationError::PlayerCount(5))
        );
    }

    #[test]
    fn test_validate_submission_rejects_duplicates_after_normalizing() {
        assert_eq!(
            validate_submission(&submission(&["alice", "Bob", "ALICE", "dave"])),
            Err(ValidationError::DuplicateNames)
        );
        assert_eq!(
            validate_submission(&submission(&["ann lee", "Ann  Lee", "carol", "dave"])),
            Err(ValidationError::DuplicateNames)
        );
    }

    #[test]
    fn test_submission_defaults_to_twelve_games() {
        let req: PlayerSubmission = serde_json::from_str(r#"{"players": ["a", "b", "c", "d"]}"#).unwrap();
        assert_eq!(req.total_games, GameCount::Twelve);

        let req: PlayerSubmission = serde_json::from_str(r#"{"players": [], "totalGames": 6}"#).unwrap();
        assert_eq!(req.total_games, GameCount::Six);
    }
}
