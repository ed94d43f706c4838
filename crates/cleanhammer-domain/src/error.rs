//! Domain errors
//!
//! Each error is a rejected operation. None of them leave a
//! character half-built or half-modified.

use thiserror::Error;

/// Error thrown when a character would break the friendship rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidCharacterError {
    #[error("Greenskins can only befriend other greenskins! '{character}' cannot befriend '{friend}'")]
    GreenskinFriendship { character: String, friend: String },

    #[error("Character '{character}' cannot befriend itself")]
    SelfFriendship { character: String },
}

/// Error thrown when a seller tries to sell an item it does not hold
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Character {seller} cannot sell what it doesn't own. Tried to sell item: {item}")]
pub struct OwnershipError {
    pub seller: String,
    pub item: String,
}

/// Error thrown when a buyer cannot pay for an item
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Character {buyer} does not have enough gold to buy {item} (costs {price}, has {available})")]
pub struct InsufficientFundsError {
    pub buyer: String,
    pub item: String,
    pub price: u64,
    pub available: u64,
}
