//! Table state: piles and the arena that holds them.

pub mod pile;
pub mod arena;

pub use pile::Pile;
pub use arena::{Table, TableSnapshot, TableView};
