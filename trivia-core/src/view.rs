use trivia_types::LeaderboardEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Info,
    Success, // correct guess, score accepted
    Error,   // validation and request failures
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageArea {
    /// Shown under the image while playing
    Main,
    /// Shown in the game-over section next to the name entry
    ScoreSubmit,
}

/// Input controls that get disabled while their request is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Guess input and its submit button
    Guess,
    /// Player-name input and the submit-score button
    ScoreSubmit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// Guess input, submit button and main message area visible
    Playing,
    /// Playable controls hidden, final score and name entry shown
    GameOver { final_score: i64 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum LeaderboardDisplay {
    Entries(Vec<LeaderboardEntry>),
    Empty,
    /// The backend answered with a failure status
    Unavailable,
    /// The request never produced a usable answer
    Failed,
}

impl LeaderboardDisplay {
    /// Lines to render, top rank first
    pub fn lines(&self) -> Vec<String> {
        match self {
            LeaderboardDisplay::Entries(entries) => entries
                .iter()
                .map(|entry| format!("{}: {}", entry.name, entry.score))
                .collect(),
            LeaderboardDisplay::Empty => vec!["No scores yet. Be the first!".to_string()],
            LeaderboardDisplay::Unavailable => vec!["Failed to load leaderboard.".to_string()],
            LeaderboardDisplay::Failed => vec!["Error loading leaderboard.".to_string()],
        }
    }
}

/// Rendering surface the controller drives.
///
/// Implementations only draw; every decision about what to show lives in the
/// controller, so any toolkit (terminal, web, test recorder) can sit behind it.
pub trait GameView {
    fn render_image(&mut self, path: &str);

    /// An empty `text` clears the area.
    fn render_message(&mut self, area: MessageArea, kind: MessageKind, text: &str);

    fn render_status(&mut self, score: i64, turns_remaining: u32);

    fn render_leaderboard(&mut self, board: &LeaderboardDisplay);

    fn set_controls_enabled(&mut self, control: Control, enabled: bool);

    fn clear_guess_input(&mut self);

    fn set_layout(&mut self, layout: Layout);
}
