//! CreateCharacter - Hand a validated character to storage
//!
//! The character has already passed its invariants in
//! [`Character::create`]; this use case adds no rule of its own.

use cleanhammer_domain::Character;

use crate::port::{CreateCharacterPort, PortError};

pub struct CreateCharacter<P> {
    character_port: P,
}

impl<P: CreateCharacterPort> CreateCharacter<P> {
    pub fn new(character_port: P) -> Self {
        Self { character_port }
    }

    /// One write attempt, no retry. The port's answer comes back as-is.
    pub async fn create_character(&self, character: Character) -> Result<Character, PortError> {
        self.character_port.create_character(character).await
    }
}
