use std::fmt;
use std::io::Write;

use trivia_core::{Control, GameView, LeaderboardDisplay, Layout, MessageArea, MessageKind};
use url::Url;

/// Line-oriented [`GameView`] that writes to any `Write` sink.
pub struct TerminalView<W> {
    out: W,
    image_base_url: Url,
    layout: Layout,
}

impl<W: Write> TerminalView<W> {
    /// `image_base_url` resolves the relative image paths the backend hands out.
    pub fn new(out: W, image_base_url: Url) -> Self {
        Self {
            out,
            image_base_url,
            layout: Layout::Playing,
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{}", args).and_then(|_| self.out.flush()) {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }

    /// Resolve the way a browser resolves an `<img src>` against the page.
    fn image_url(&self, path: &str) -> String {
        match self.image_base_url.join(path) {
            Ok(url) => url.into(),
            Err(e) => {
                tracing::warn!("Cannot resolve image path {:?}: {}", path, e);
                path.to_string()
            }
        }
    }
}

impl<W: Write> GameView for TerminalView<W> {
    fn render_image(&mut self, path: &str) {
        let url = self.image_url(path);
        self.line(format_args!("Image: {}", url));
    }

    fn render_message(&mut self, area: MessageArea, kind: MessageKind, text: &str) {
        // Nothing to erase on a terminal
        if text.is_empty() {
            return;
        }

        // The main area is hidden behind the game-over section
        if area == MessageArea::Main && matches!(self.layout, Layout::GameOver { .. }) {
            return;
        }

        let marker = match kind {
            MessageKind::Info => "--",
            MessageKind::Success => "OK",
            MessageKind::Error => "!!",
        };
        self.line(format_args!("[{}] {}", marker, text));
    }

    fn render_status(&mut self, score: i64, turns_remaining: u32) {
        self.line(format_args!("Score: {} | Turns left: {}", score, turns_remaining));
    }

    fn render_leaderboard(&mut self, board: &LeaderboardDisplay) {
        self.line(format_args!("Leaderboard:"));
        match board {
            LeaderboardDisplay::Entries(_) => {
                for (rank, entry) in board.lines().iter().enumerate() {
                    self.line(format_args!("  {}. {}", rank + 1, entry));
                }
            }
            _ => {
                for placeholder in board.lines() {
                    self.line(format_args!("  {}", placeholder));
                }
            }
        }
    }

    fn set_controls_enabled(&mut self, control: Control, enabled: bool) {
        if !enabled {
            return;
        }

        let game_over = matches!(self.layout, Layout::GameOver { .. });
        match (control, game_over) {
            (Control::Guess, false) => self.line(format_args!("Type your guess and press Enter.")),
            (Control::ScoreSubmit, true) => {
                self.line(format_args!("Enter your name to submit your score."))
            }
            _ => {}
        }
    }

    fn clear_guess_input(&mut self) {
        // Input is consumed line by line, there is no field to reset
    }

    fn set_layout(&mut self, layout: Layout) {
        match &layout {
            Layout::Playing => self.line(format_args!("=== New game ===")),
            Layout::GameOver { final_score } => {
                self.line(format_args!("=== Game over ==="));
                self.line(format_args!("Final score: {}", final_score));
            }
        }
        self.layout = layout;
    }
}
