pub mod types;
pub mod generator;
pub mod state;
pub mod tally;
pub mod toggle;

pub use types::{Color, Game, GameCount, Team, TeamSide};
pub use generator::{generate_schedule, matchups};
pub use state::ScheduleState;
pub use tally::calculate_wins;
pub use toggle::toggle_all_colors;
