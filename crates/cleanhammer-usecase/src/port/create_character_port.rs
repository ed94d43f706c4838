use async_trait::async_trait;
use cleanhammer_domain::Character;

use super::PortError;

/// Persist a freshly created character
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreateCharacterPort: Send + Sync {
    /// Store `character` and hand back what was stored
    async fn create_character(&self, character: Character) -> Result<Character, PortError>;
}
