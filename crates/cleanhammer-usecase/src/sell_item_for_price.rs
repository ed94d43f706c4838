//! SellItemForPrice - Guard a sale, then let the adapter carry it out
//!
//! Per attempt:
//!
//! ```text
//! Proposed ─┬─> Rejected(ownership)
//!           ├─> Rejected(funds)
//!           └─> Delegated ─┬─> Committed  (port returns true)
//!                          └─> Failed     (port returns false or errors)
//! ```
//!
//! This use case never touches gold or inventories. The checks run on
//! the values it is given, so a rejection has no side effects at all.

use cleanhammer_domain::{Character, InsufficientFundsError, Item, OwnershipError};
use thiserror::Error;

use crate::port::{PortError, SellItemForPricePort};

/// Why a sale did not go through
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaleError {
    #[error(transparent)]
    Ownership(#[from] OwnershipError),

    #[error(transparent)]
    InsufficientFunds(#[from] InsufficientFundsError),

    #[error(transparent)]
    Port(#[from] PortError),
}

pub struct SellItemForPrice<P> {
    sale_port: P,
}

impl<P: SellItemForPricePort> SellItemForPrice<P> {
    pub fn new(sale_port: P) -> Self {
        Self { sale_port }
    }

    /// Sell `item` from `from` to `to` at the item's worth
    ///
    /// Ownership is checked before funds; the port is only called once
    /// both pass.
    pub async fn sell_item(
        &self,
        from: &Character,
        to: &Character,
        item: &Item,
    ) -> Result<bool, SaleError> {
        from.ensure_owns(item)?;
        to.ensure_can_afford(item)?;

        Ok(self.sale_port.sell_item(from, to, item).await?)
    }
}
