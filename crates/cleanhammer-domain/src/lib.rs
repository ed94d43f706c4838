//! # Cleanhammer Domain Layer
//!
//! Races, items and characters, plus the one rule that governs them:
//! a greenskin may only befriend other greenskins.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/  - Race, Item (values) and Character (aggregate)    ││
//! │  │  error   - Rejections raised by the rules above             ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No I/O and no async live here. Ports and use cases sit one layer up
//! in `cleanhammer-usecase`.

pub mod error;
pub mod model;

// Re-export commonly used types
pub use error::{InsufficientFundsError, InvalidCharacterError, OwnershipError};

pub use model::{
    character::{is_greenskin_with_non_greenskin_friend, Character, CharacterId, FriendRef},
    item::{Item, ItemKind},
    race::{MainRaceName, Race},
};
