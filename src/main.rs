use std::path::Path;

use bughouse_bracket::config::AppConfig;
use bughouse_bracket::display::{print_schedule, print_standings, write_schedule_to_file};
use bughouse_bracket::form::{export_schedule_to_csv, PlayerSubmission};
use bughouse_bracket::store::ScheduleStore;
use bughouse_bracket::tracker::BracketTracker;
use bughouse_bracket::{web, GameCount, TeamSide};
use log::info;

fn print_usage() {
    println!("Bughouse Bracket");
    println!();
    println!("Usage:");
    println!("  bughouse-bracket new <p1> <p2> <p3> <p4> [--games 6|12]");
    println!("  bughouse-bracket show");
    println!("  bughouse-bracket mark <game-id> <team1|team2>");
    println!("  bughouse-bracket toggle");
    println!("  bughouse-bracket wins");
    println!("  bughouse-bracket print [file]");
    println!("  bughouse-bracket export [file.csv]");
    println!("  bughouse-bracket reset");
    println!("  bughouse-bracket web [port]");
    println!();
    println!("Environment:");
    println!("  BUGHOUSE_SAVE_PATH  save slot (default bughouse-schedule.json)");
    println!("  BUGHOUSE_PORT       web port (default 8080)");
}

fn parse_new(args: &[String]) -> Result<PlayerSubmission, Box<dyn std::error::Error>> {
    let mut players = Vec::new();
    let mut total_games = GameCount::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                let value = args.get(i + 1).ok_or("--games needs a value (6 or 12)")?;
                total_games = value.parse()?;
                i += 1;
            }
            name => players.push(name.to_string()),
        }
        i += 1;
    }

    Ok(PlayerSubmission { players, total_games })
}

fn show(tracker: &BracketTracker) {
    match tracker.schedule() {
        Some(schedule) => print_schedule(schedule),
        None => {
            println!("No schedule yet.");
            println!();
            print_usage();
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut tracker = BracketTracker::load(ScheduleStore::new(&config.save_path));

    let Some(command) = args.first() else {
        show(&tracker);
        return Ok(());
    };
    let rest = &args[1..];

    match command.as_str() {
        "web" => {
            let port = rest
                .first()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(config.port);

            println!("Starting web server on port {}...", port);
            println!("Access the site at http://localhost:{}", port);
            web::start_server(port, tracker).await?;
        }
        "new" => {
            let submission = parse_new(rest)?;
            tracker.submit(&submission)?;
            show(&tracker);
        }
        "show" => show(&tracker),
        "mark" => {
            let (Some(id), Some(team)) = (rest.first(), rest.get(1)) else {
                return Err("usage: mark <game-id> <team1|team2>".into());
            };
            let game_id: u32 = id.parse().map_err(|_| format!("invalid game id `{}`", id))?;
            let side: TeamSide = team.parse()?;
            match tracker.mark_winner(game_id, side)? {
                Some(winner) => println!("Game {} marked as won by {}", game_id, winner),
                None => println!("Game {} unmarked", game_id),
            }
        }
        "toggle" => {
            tracker.toggle_colors()?;
            show(&tracker);
        }
        "wins" => match tracker.schedule() {
            Some(schedule) => print_standings(schedule),
            None => println!("No schedule yet."),
        },
        "print" => {
            let schedule = tracker.schedule().ok_or("no schedule to print")?;
            let filename = rest.first().map(String::as_str).unwrap_or("bughouse-schedule.txt");
            write_schedule_to_file(schedule, filename)?;
            info!("Schedule written to {}", filename);
            println!("Schedule saved to: {}", filename);
        }
        "export" => {
            let schedule = tracker.schedule().ok_or("no schedule to export")?;
            let filename = rest.first().map(String::as_str).unwrap_or("bughouse-schedule.csv");
            export_schedule_to_csv(schedule, Path::new(filename))?;
            println!("Schedule exported to: {}", filename);
        }
        "reset" => {
            tracker.reset()?;
            println!("Schedule cleared.");
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
        }
    }

    Ok(())
}
