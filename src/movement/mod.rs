//! Movement module - shared body, heading, and obstacle collision.
//!
//! Players and enemies both move through `move_body`, which resolves each
//! axis separately against every static obstacle.

mod collision;
mod components;

pub use collision::{inflate, move_body, overlaps};
pub use components::*;
