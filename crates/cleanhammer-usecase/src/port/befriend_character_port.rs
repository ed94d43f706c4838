use async_trait::async_trait;
use cleanhammer_domain::Character;

use super::PortError;

/// Record that one stored character counts another as a friend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BefriendCharacterPort: Send + Sync {
    /// Only `character` gains a handle; the friend is left untouched
    async fn befriend(&self, character: &Character, friend: &Character) -> Result<(), PortError>;
}
