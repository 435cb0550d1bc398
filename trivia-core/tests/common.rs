#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use trivia_core::{
    ApiError, Control, GameController, GameSettings, GameView, LeaderboardDisplay, Layout,
    MessageArea, MessageKind, TriviaApi,
};
use trivia_types::{
    GuessRequest, GuessVerdict, ImageData, ImageId, LeaderboardEntry, ScoreSubmission,
};

/// Scripted backend. Each endpoint pops its next queued reply; an empty
/// queue falls back to a sensible default so long sessions need little setup.
#[derive(Default)]
pub struct MockApi {
    images: Mutex<VecDeque<Result<ImageData, ApiError>>>,
    verdicts: Mutex<VecDeque<Result<GuessVerdict, ApiError>>>,
    score_replies: Mutex<VecDeque<Result<(), ApiError>>>,
    leaderboards: Mutex<VecDeque<Result<Vec<LeaderboardEntry>, ApiError>>>,
    image_counter: Mutex<u32>,
    pub guess_requests: Mutex<Vec<GuessRequest>>,
    pub score_requests: Mutex<Vec<ScoreSubmission>>,
    pub image_calls: Mutex<u32>,
    pub leaderboard_calls: Mutex<u32>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_image(&self, reply: Result<ImageData, ApiError>) {
        self.images.lock().unwrap().push_back(reply);
    }

    pub fn push_verdict(&self, reply: Result<GuessVerdict, ApiError>) {
        self.verdicts.lock().unwrap().push_back(reply);
    }

    pub fn push_score_reply(&self, reply: Result<(), ApiError>) {
        self.score_replies.lock().unwrap().push_back(reply);
    }

    pub fn push_leaderboard(&self, reply: Result<Vec<LeaderboardEntry>, ApiError>) {
        self.leaderboards.lock().unwrap().push_back(reply);
    }

    pub fn guess_count(&self) -> usize {
        self.guess_requests.lock().unwrap().len()
    }

    pub fn score_count(&self) -> usize {
        self.score_requests.lock().unwrap().len()
    }

    pub fn image_call_count(&self) -> u32 {
        *self.image_calls.lock().unwrap()
    }

    pub fn leaderboard_call_count(&self) -> u32 {
        *self.leaderboard_calls.lock().unwrap()
    }
}

#[async_trait]
impl TriviaApi for MockApi {
    async fn fetch_image(&self) -> Result<ImageData, ApiError> {
        *self.image_calls.lock().unwrap() += 1;
        if let Some(reply) = self.images.lock().unwrap().pop_front() {
            return reply;
        }

        let mut counter = self.image_counter.lock().unwrap();
        *counter += 1;
        Ok(image(&format!("img{:03}", *counter)))
    }

    async fn submit_guess(&self, request: &GuessRequest) -> Result<GuessVerdict, ApiError> {
        self.guess_requests.lock().unwrap().push(request.clone());
        self.verdicts
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(correct(10)))
    }

    async fn submit_score(&self, submission: &ScoreSubmission) -> Result<(), ApiError> {
        self.score_requests.lock().unwrap().push(submission.clone());
        self.score_replies.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }

    async fn fetch_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError> {
        *self.leaderboard_calls.lock().unwrap() += 1;
        self.leaderboards
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// View that remembers the latest state of every region
pub struct RecordingView {
    pub image: Option<String>,
    pub messages: HashMap<MessageArea, (MessageKind, String)>,
    pub score: Option<i64>,
    pub turns: Option<u32>,
    pub leaderboard: Vec<String>,
    pub controls: HashMap<Control, bool>,
    pub layout: Option<Layout>,
    pub guess_input_clears: u32,
}

impl RecordingView {
    pub fn new() -> Self {
        Self {
            image: None,
            messages: HashMap::new(),
            score: None,
            turns: None,
            leaderboard: Vec::new(),
            controls: HashMap::new(),
            layout: None,
            guess_input_clears: 0,
        }
    }

    pub fn message(&self, area: MessageArea) -> Option<&str> {
        self.messages.get(&area).map(|(_, text)| text.as_str())
    }

    pub fn message_kind(&self, area: MessageArea) -> Option<MessageKind> {
        self.messages.get(&area).map(|(kind, _)| *kind)
    }

    pub fn is_enabled(&self, control: Control) -> bool {
        self.controls.get(&control).copied().unwrap_or(false)
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.layout, Some(Layout::GameOver { .. }))
    }
}

impl GameView for RecordingView {
    fn render_image(&mut self, path: &str) {
        self.image = Some(path.to_string());
    }

    fn render_message(&mut self, area: MessageArea, kind: MessageKind, text: &str) {
        self.messages.insert(area, (kind, text.to_string()));
    }

    fn render_status(&mut self, score: i64, turns_remaining: u32) {
        self.score = Some(score);
        self.turns = Some(turns_remaining);
    }

    fn render_leaderboard(&mut self, board: &LeaderboardDisplay) {
        self.leaderboard = board.lines();
    }

    fn set_controls_enabled(&mut self, control: Control, enabled: bool) {
        self.controls.insert(control, enabled);
    }

    fn clear_guess_input(&mut self) {
        self.guess_input_clears += 1;
    }

    fn set_layout(&mut self, layout: Layout) {
        self.layout = Some(layout);
    }
}

pub type TestController = GameController<MockApi, RecordingView>;

pub fn image(id: &str) -> ImageData {
    ImageData {
        path: format!("static/images/{}.jpg", id),
        id: ImageId::from(id),
    }
}

pub fn correct(score: i64) -> GuessVerdict {
    GuessVerdict {
        correct: true,
        score,
        correct_prompt: Some("A cat wearing a tiny hat".to_string()),
    }
}

pub fn incorrect(score: i64, prompt: &str) -> GuessVerdict {
    GuessVerdict {
        correct: false,
        score,
        correct_prompt: Some(prompt.to_string()),
    }
}

pub fn test_settings() -> GameSettings {
    GameSettings {
        total_turns: 7,
        next_image_delay: Duration::from_secs(2),
    }
}

/// Controller over a fresh mock, before the session is started
pub fn create_controller(api: MockApi) -> TestController {
    GameController::new(api, RecordingView::new(), test_settings())
}

/// Controller whose session is started and showing its first image
pub async fn create_started_controller(api: MockApi) -> TestController {
    let mut controller = create_controller(api);
    controller.start_session().await;
    controller
}

/// Play every remaining turn with the given guess, loading images between
/// turns the way the driver does after the advance delay.
pub async fn play_all_turns(controller: &mut TestController, guess: &str) {
    while controller.session().turns_remaining() > 0 {
        if !controller.session().can_guess() {
            assert!(controller.load_next_image().await, "image should load");
        }
        controller.submit_guess(guess).await;
    }
}
