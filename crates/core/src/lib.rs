//! Core deck and tournament logic. Keep this crate free of IO and platform concerns.

pub mod bracket;
pub mod cards;
pub mod deck;
pub mod probability;
pub mod universe;

pub use bracket::*;
pub use cards::*;
pub use deck::*;
pub use probability::*;
pub use universe::*;
