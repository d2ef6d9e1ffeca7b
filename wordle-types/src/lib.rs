pub mod errors;
pub mod game;
pub mod player;

// Re-export all types
pub use errors::*;
pub use game::*;
pub use player::*;
