//! # Cleanhammer Use Case Layer
//!
//! One struct per business operation. Each one checks its
//! preconditions, then makes a single call through its port.
//!
//! ```text
//! caller ──> CreateCharacter  ──> CreateCharacterPort    ──> adapter
//!        ──> ViewCharacters   ──> ViewCharactersPort     ──> adapter
//!        ──> DismissCharacter ──> CharacterDismissalPort ──> adapter
//!        ──> SellItemForPrice ──> SellItemForPricePort   ──> adapter
//!        ──> BefriendCharacter ─> BefriendCharacterPort  ──> adapter
//! ```
//!
//! Nothing here logs, retries or holds state between calls.

pub use cleanhammer_domain;

pub mod befriend_character;
pub mod create_character;
pub mod dismiss_character;
pub mod port;
pub mod sell_item_for_price;
pub mod view_characters;

pub use befriend_character::{BefriendCharacter, BefriendError};
pub use create_character::CreateCharacter;
pub use dismiss_character::DismissCharacter;
pub use port::{
    BefriendCharacterPort, CharacterDismissalPort, CreateCharacterPort, PortError,
    SellItemForPricePort, ViewCharactersPort,
};
pub use sell_item_for_price::{SaleError, SellItemForPrice};
pub use view_characters::ViewCharacters;
