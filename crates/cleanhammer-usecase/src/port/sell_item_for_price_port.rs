use async_trait::async_trait;
use cleanhammer_domain::{Character, Item};

use super::PortError;

/// Carry out an item sale between two characters
///
/// Implementations move `item` from `from` to `to` and the item's worth
/// in gold from `to` to `from`, all four changes or none of them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SellItemForPricePort: Send + Sync {
    /// Returns whether the transfer was committed
    async fn sell_item(&self, from: &Character, to: &Character, item: &Item)
        -> Result<bool, PortError>;
}
