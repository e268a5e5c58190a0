pub mod config;
pub mod input;
pub mod maze;
pub mod player;
