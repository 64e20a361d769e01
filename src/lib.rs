//! Hot-seat console front end for Seasons Chess
//!
//! All rules live in the `seasons_engine` crate; this crate only parses
//! commands, renders the board and loads settings.

pub mod console;
pub mod core;
