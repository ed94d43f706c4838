//! Domain Models - The vocabulary of the roster
//!
//! Races and items are Value Objects; a Character is the only Entity.

pub mod character;
pub mod item;
pub mod race;
