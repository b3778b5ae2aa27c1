//! Ticket value types: candidate games and the winning draw.
//!
//! Both are immutable ascending sequences of unique pool numbers. A
//! [`Game`] holds a configured pick size (6-10 numbers); a [`Draw`] always
//! holds exactly six. Once created they never change - scoring reads them,
//! nothing writes them.

pub mod draw;
pub mod game;

pub use draw::Draw;
pub use game::Game;
