pub mod engine;
pub mod game;
pub mod input;
pub mod notice;
pub mod terminal;
