//! Schedule generator and result tracker for four-player bughouse brackets.
//!
//! Four players rotate through every two-vs-two team split across a 6- or
//! 12-game plan. Winners are recorded per game and tallied per player.

pub mod config;
pub mod display;
pub mod error;
pub mod form;
pub mod schedule;
pub mod store;
pub mod tracker;
pub mod web;

pub use error::{BracketError, StoreError, ValidationError};
pub use schedule::{Color, Game, GameCount, ScheduleState, TeamSide};
pub use tracker::BracketTracker;
