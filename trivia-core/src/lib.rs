pub mod api;
pub mod controller;
pub mod errors;
pub mod session;
pub mod view;

// Re-export main components
pub use api::*;
pub use controller::*;
pub use errors::*;
pub use session::*;
pub use view::*;
