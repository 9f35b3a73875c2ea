pub mod config;
pub mod controller;
pub mod events;
pub mod text;
pub mod tui;
