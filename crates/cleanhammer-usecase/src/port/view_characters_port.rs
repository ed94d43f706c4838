use async_trait::async_trait;
use cleanhammer_domain::Character;

use super::PortError;

/// Read the whole roster
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ViewCharactersPort: Send + Sync {
    /// Finite snapshot of the roster, in whatever order the store keeps it
    async fn view_characters(&self) -> Result<Vec<Character>, PortError>;
}
