pub mod options;
pub mod player;
pub mod slot;

pub use crate::options::{PlayOptions, SearchStrategy};
pub use crate::player::Player;
pub use crate::slot::MoveSlot;
