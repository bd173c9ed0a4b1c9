//! UI rendering components

pub mod landing;
pub mod layout;
pub mod quiz;

use ratatui::Frame;

use crate::app::state::{AppState, Screen};
use crate::theme::Theme;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AppState, theme: &Theme) {
    match &state.screen {
        Screen::Landing => {
            landing::draw(frame, &state.landing_animation, theme);
        }
        Screen::Quiz(screen) => {
            quiz::draw(frame, screen, theme);
        }
    }
}
