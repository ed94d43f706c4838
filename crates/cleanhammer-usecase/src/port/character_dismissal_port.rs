use async_trait::async_trait;
use cleanhammer_domain::Character;

use super::PortError;

/// Remove a character from the roster
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterDismissalPort: Send + Sync {
    /// Fails with [`PortError::NotFound`] when the store has no such character
    async fn dismiss_character(&self, character: &Character) -> Result<(), PortError>;
}
