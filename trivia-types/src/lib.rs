pub mod errors;
pub mod image;
pub mod leaderboard;

// Re-export all types
pub use errors::*;
pub use image::*;
pub use leaderboard::*;
