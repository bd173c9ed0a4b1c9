//! Application state definitions

use std::time::Instant;

use tokio_util::sync::CancellationToken;

use super::input::Action;
use crate::quiz::{FetchTicket, QuizController, QuizError, QuizPhase};
use crate::trivia::{RawQuestion, TriviaError};

/// Navigable locations of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Landing page
    Home,
    /// A quiz attempt
    Quiz,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Quiz => "/quiz",
        }
    }
}

/// Which screen is currently displayed
#[derive(Debug, Default)]
pub enum Screen {
    #[default]
    Landing,
    Quiz(QuizScreen),
}

/// Focus position inside the quiz
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizCursor {
    /// Focused question index
    pub question: usize,
    /// Focused answer index within that question
    pub answer: usize,
}

/// State of the quiz screen for one session
///
/// Dropping it cancels the session's in-flight fetch.
#[derive(Debug)]
pub struct QuizScreen {
    pub controller: QuizController,
    pub cursor: QuizCursor,
    /// Transient hint shown in the footer
    pub notice: Option<String>,
    cancel: CancellationToken,
}

impl QuizScreen {
    fn new() -> Self {
        Self {
            controller: QuizController::new(),
            cursor: QuizCursor::default(),
            notice: None,
            cancel: CancellationToken::new(),
        }
    }

    fn fetch_request(&self) -> FetchRequest {
        FetchRequest { ticket: self.controller.ticket(), cancel: self.cancel.clone() }
    }

    fn answer_count(&self, question: usize) -> usize {
        self.controller.questions().questions().get(question).map_or(0, |q| q.answers.len())
    }

    fn move_question(&mut self, delta: isize) {
        let total = self.controller.questions().len();
        if total == 0 {
            return;
        }
        let next = self.cursor.question.saturating_add_signed(delta).min(total - 1);
        if next != self.cursor.question {
            self.cursor.question = next;
            // Land on the current choice if there is one
            self.cursor.answer = self.controller.questions().questions()[next]
                .answers
                .iter()
                .position(|answer| answer.is_selected)
                .unwrap_or(0);
        }
    }

    fn move_answer(&mut self, delta: isize) {
        let count = self.answer_count(self.cursor.question);
        if count == 0 {
            return;
        }
        self.cursor.answer = self.cursor.answer.saturating_add_signed(delta).min(count - 1);
    }

    fn select_focused(&mut self) {
        let Some(question) = self.controller.questions().questions().get(self.cursor.question)
        else {
            return;
        };
        let Some(answer) = question.answers.get(self.cursor.answer) else {
            return;
        };
        let (question_id, option_id) = (question.id.clone(), answer.id.clone());

        match self.controller.select_answer(&question_id, &option_id) {
            Ok(()) => self.notice = None,
            Err(e) => tracing::warn!("Selection rejected: {}", e),
        }
    }

    fn submit(&mut self) {
        match self.controller.submit() {
            Ok(_) => self.notice = None,
            Err(e @ QuizError::IncompleteSelection { .. }) => {
                tracing::debug!("Submit ignored: {}", e);
                self.notice = Some(format!("{e}. Answer every question first."));
            }
            Err(e) => tracing::warn!("Submit rejected: {}", e),
        }
    }
}

impl Drop for QuizScreen {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// A fetch the app loop must start on behalf of a quiz session
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub ticket: FetchTicket,
    pub cancel: CancellationToken,
}

/// Side effect requested by a state transition
#[derive(Debug)]
pub enum Effect {
    None,
    Fetch(FetchRequest),
    Quit,
}

/// State for the landing animation
#[derive(Debug, Clone)]
pub struct LandingAnimation {
    /// When the animation started
    pub start_time: Instant,

    /// Current animation frame
    pub current_frame: usize,

    /// Whether animation is complete (ready for input)
    pub complete: bool,

    /// Speed multiplier; 0.0 skips the animation
    pub speed: f32,
}

impl Default for LandingAnimation {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl LandingAnimation {
    /// Frame timing constants
    pub const MS_PER_FRAME: u128 = 50;
    pub const TITLE_END_FRAME: usize = 18;
    pub const TAGLINE_END_FRAME: usize = 24;

    pub fn new(speed: f32) -> Self {
        let mut animation =
            Self { start_time: Instant::now(), current_frame: 0, complete: false, speed };
        animation.tick();
        animation
    }

    /// Advance the animation based on elapsed time
    pub fn tick(&mut self) {
        if self.speed <= 0.0 {
            self.set_frame(Self::TAGLINE_END_FRAME);
            return;
        }
        let elapsed_ms = self.start_time.elapsed().as_millis() as f64 * f64::from(self.speed);
        self.set_frame((elapsed_ms / Self::MS_PER_FRAME as f64) as usize);
    }

    fn set_frame(&mut self, frame: usize) {
        self.current_frame = frame;
        self.complete = frame >= Self::TAGLINE_END_FRAME;
    }

    /// How many characters of a `len`-character title to show
    pub fn title_chars(&self, len: usize) -> usize {
        if self.current_frame >= Self::TITLE_END_FRAME {
            len
        } else {
            len * self.current_frame / Self::TITLE_END_FRAME
        }
    }

    /// Whether to show the tagline
    pub fn show_tagline(&self) -> bool {
        self.current_frame >= Self::TITLE_END_FRAME
    }
}

/// Full application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Current screen
    pub screen: Screen,

    /// Landing animation state
    pub landing_animation: LandingAnimation,
}

impl AppState {
    pub fn new(animation_speed: f32) -> Self {
        Self { screen: Screen::Landing, landing_animation: LandingAnimation::new(animation_speed) }
    }

    /// Route of the current screen
    pub fn route(&self) -> Route {
        match self.screen {
            Screen::Landing => Route::Home,
            Screen::Quiz(_) => Route::Quiz,
        }
    }

    /// Current quiz session, if on the quiz screen
    pub fn quiz(&self) -> Option<&QuizScreen> {
        match &self.screen {
            Screen::Quiz(screen) => Some(screen),
            Screen::Landing => None,
        }
    }

    /// Switch screens; entering the quiz always starts a fresh session
    pub fn navigate(&mut self, route: Route) -> Effect {
        tracing::debug!("Navigating to {}", route.path());
        match route {
            Route::Home => {
                self.screen = Screen::Landing;
                self.landing_animation = LandingAnimation::new(self.landing_animation.speed);
                Effect::None
            }
            Route::Quiz => {
                let screen = QuizScreen::new();
                let request = screen.fetch_request();
                self.screen = Screen::Quiz(screen);
                Effect::Fetch(request)
            }
        }
    }

    /// Deliver a fetch result; stale results are dropped
    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<RawQuestion>, TriviaError>,
    ) -> bool {
        match &mut self.screen {
            Screen::Quiz(screen) => screen.controller.apply_fetch(ticket, result),
            Screen::Landing => {
                tracing::debug!("Discarding fetch result: quiz screen was left");
                false
            }
        }
    }

    /// Apply a user action to the current screen
    pub fn handle_action(&mut self, action: Action) -> Effect {
        if action == Action::Quit {
            return Effect::Quit;
        }

        let screen = match &mut self.screen {
            Screen::Landing => {
                return match action {
                    Action::Select => self.navigate(Route::Quiz),
                    _ => Effect::None,
                };
            }
            Screen::Quiz(screen) => screen,
        };

        let phase = screen.controller.phase();
        let finished = matches!(phase, QuizPhase::Error { .. } | QuizPhase::Revealed(_));
        let retryable = matches!(phase, QuizPhase::Error { retryable: true, .. });
        let in_progress = *phase == QuizPhase::InProgress;
        let revealed = matches!(phase, QuizPhase::Revealed(_));

        // A transient failure may clear up on a fresh session
        if retryable && action == Action::Select {
            return self.navigate(Route::Quiz);
        }
        // Enter on a finished quiz is "play again", which goes back to the landing page
        if action == Action::Back || (finished && action == Action::Select) {
            return self.navigate(Route::Home);
        }

        match action {
            Action::Up if in_progress || revealed => screen.move_question(-1),
            Action::Down if in_progress || revealed => screen.move_question(1),
            Action::Left if in_progress => screen.move_answer(-1),
            Action::Right if in_progress => screen.move_answer(1),
            Action::Select if in_progress => screen.select_focused(),
            Action::Submit if in_progress => screen.submit(),
            _ => {}
        }
        Effect::None
    }
}
