//! Quizzical - a five-question trivia quiz for the terminal
//!
//! Questions come from the Open Trivia Database. Pick one answer per
//! question, check your answers, and see which ones you got right.

pub mod app;
pub mod config;
pub mod quiz;
pub mod theme;
pub mod trivia;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use theme::Theme;
