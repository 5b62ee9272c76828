pub mod competition;
pub mod error;
pub mod game;
pub mod io;
pub mod team;
pub mod time;
pub mod types;
