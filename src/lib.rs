// Click-to-move chess against a random opponent
pub mod assets;
pub mod board;
pub mod config;
pub mod controller;
pub mod display;
pub mod gui;
pub mod opponent;
