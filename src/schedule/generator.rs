use super::types::{Color, Game, GameCount, Team};

/// One front-board pairing inside a matchup: (team1 index, team2 index, color of team1's player)
type Pairing = (usize, usize, Color);

const W: Color = Color::White;
const B: Color = Color::Black;

/// Per-matchup pairings for the 12-game plan, indexed by matchup discovery order.
/// The three tables intentionally differ; they are not derived from a single rule.
const TWELVE_GAME_PAIRINGS: [[Pairing; 4]; 3] = [
    [(0, 0, W), (0, 0, B), (0, 1, W), (1, 0, W)],
    [(0, 0, W), (0, 0, B), (1, 1, W), (1, 1, B)],
    [(0, 0, W), (0, 1, W), (1, 0, W), (1, 1, W)],
];

/// Pairings for the 6-game plan, all drawn from the first matchup.
/// team1's first player meets each opponent once, the second player twice.
const SIX_GAME_PAIRINGS: [Pairing; 6] = [
    (0, 0, W),
    (0, 1, W),
    (1, 0, W),
    (1, 1, W),
    (1, 0, B),
    (1, 1, B),
];

/// Every two-player team as index pairs, in lexicographic order
fn team_indices() -> Vec<[usize; 2]> {
    let mut teams = Vec::with_capacity(6);
    for i in 0..4 {
        for j in (i + 1)..4 {
            teams.push([i, j]);
        }
    }
    teams
}

/// Pairs of teams sharing no player, in discovery order
fn matchup_indices() -> Vec<([usize; 2], [usize; 2])> {
    let teams = team_indices();
    let mut matchups = Vec::with_capacity(3);
    for (i, first) in teams.iter().enumerate() {
        for second in &teams[i + 1..] {
            if first.iter().any(|p| second.contains(p)) {
                continue;
            }
            matchups.push((*first, *second));
        }
    }
    matchups
}

/// The three ways to split the players into two teams, as named teams
pub fn matchups(players: &[String; 4]) -> Vec<(Team, Team)> {
    let name_team = |team: [usize; 2]| -> Team { [players[team[0]].clone(), players[team[1]].clone()] };
    matchup_indices()
        .into_iter()
        .map(|(team1, team2)| (name_team(team1), name_team(team2)))
        .collect()
}

fn push_games(games: &mut Vec<Game>, team1: &Team, team2: &Team, pairings: &[Pairing]) {
    for &(front1, front2, color1) in pairings {
        let id = games.len() as u32 + 1;
        games.push(Game {
            id,
            team1: team1.clone(),
            team2: team2.clone(),
            player1: team1[front1].clone(),
            player2: team2[front2].clone(),
            color1,
            color2: color1.opposite(),
            winner: None,
        });
    }
}

/// Builds the game list for four distinct players.
///
/// Ids run from 1 to the plan length. The result depends only on player order.
pub fn generate_schedule(players: &[String; 4], total_games: GameCount) -> Vec<Game> {
    let matchups = matchups(players);
    let mut games = Vec::with_capacity(total_games.games());

    match total_games {
        GameCount::Twelve => {
            for ((team1, team2), pairings) in matchups.iter().zip(TWELVE_GAME_PAIRINGS.iter()) {
                push_games(&mut games, team1, team2, pairings);
            }
        }
        GameCount::Six => {
            let (team1, team2) = &matchups[0];
            push_games(&mut games, team1, team2, &SIX_GAME_PAIRINGS);
        }
    }

    games
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    fn players() -> [String; 4] {
        ["Alice", "Bob", "Carol", "Dave"].map(String::from)
    }

    fn front(game: &Game) -> (&str, &str, Color) {
        (game.player1.as_str(), game.player2.as_str(), game.color1)
    }

    #[test]
    fn test_matchups_follow_enumeration_order() {
        let found = matchups(&players());
        let names: Vec<String> = found
            .iter()
            .map(|(t1, t2)| format!("{}{} v {}{}", &t1[0][..1], &t1[1][..1], &t2[0][..1], &t2[1][..1]))
            .collect();
        assert_eq!(names, vec!["AB v CD", "AC v BD", "AD v BC"]);
    }

    #[test]
    fn test_twelve_games_have_sequential_ids_and_valid_boards() {
        let games = generate_schedule(&players(), GameCount::Twelve);
        assert_eq!(games.len(), 12);
        for (index, game) in games.iter().enumerate() {
            assert_eq!(game.id, index as u32 + 1);
            assert_ne!(game.color1, game.color2);
            assert!(game.team1.iter().all(|p| !game.team2.contains(p)));
            assert!(game.team1.contains(&game.player1));
            assert!(game.team2.contains(&game.player2));
        }
    }

    #[test]
    fn test_twelve_game_plan_matches_literal_tables() {
        let games = generate_schedule(&players(), GameCount::Twelve);
        let fronts: Vec<_> = games.iter().map(front).collect();
        assert_eq!(
            fronts,
            vec![
                ("Alice", "Carol", W),
                ("Alice", "Carol", B),
                ("Alice", "Dave", W),
                ("Bob", "Carol", W),
                ("Alice", "Bob", W),
                ("Alice", "Bob", B),
                ("Carol", "Dave", W),
                ("Carol", "Dave", B),
                ("Alice", "Bob", W),
                ("Alice", "Carol", W),
                ("Dave", "Bob", W),
                ("Dave", "Carol", W),
            ]
        );
        assert_eq!(games[4].team1, ["Alice".to_string(), "Carol".to_string()]);
        assert_eq!(games[11].team2, ["Bob".to_string(), "Carol".to_string()]);
    }

    #[test]
    fn test_six_game_plan_uses_first_matchup() {
        let games = generate_schedule(&players(), GameCount::Six);
        assert_eq!(games.len(), 6);
        assert_eq!(games[0].team1, ["Alice".to_string(), "Bob".to_string()]);
        assert_eq!(games[0].team2, ["Carol".to_string(), "Dave".to_string()]);
        assert_eq!(front(&games[0]), ("Alice", "Carol", W));
        assert_eq!(games[0].color2, B);
        assert!(games.iter().all(|g| g.team1 == games[0].team1 && g.team2 == games[0].team2));
    }

    #[test]
    fn test_six_game_plan_front_player_counts() {
        let games = generate_schedule(&players(), GameCount::Six);

        let alice: Vec<&Game> = games.iter().filter(|g| g.player1 == "Alice").collect();
        assert_eq!(alice.len(), 2);
        let alice_opponents: HashSet<&str> = alice.iter().map(|g| g.player2.as_str()).collect();
        assert_eq!(alice_opponents, HashSet::from(["Carol", "Dave"]));

        let bob: Vec<&Game> = games.iter().filter(|g| g.player1 == "Bob").collect();
        assert_eq!(bob.len(), 4);
        let mut colors_by_opponent: HashMap<&str, Vec<Color>> = HashMap::new();
        for game in bob {
            colors_by_opponent.entry(game.player2.as_str()).or_default().push(game.color1);
        }
        for opponent in ["Carol", "Dave"] {
            let colors = &colors_by_opponent[opponent];
            assert_eq!(colors.len(), 2);
            assert_ne!(colors[0], colors[1]);
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(
            generate_schedule(&players(), GameCount::Twelve),
            generate_schedule(&players(), GameCount::Twelve)
        );
    }
}
