//! Ports - The narrow capabilities each use case needs
//!
//! Use cases state WHAT they need from storage; adapters decide HOW.
//!
//! ```text
//! Use Case Layer              │  Adapter Layer
//! ────────────────────────────┼────────────────────────
//! trait CreateCharacterPort   │  InMemoryRoster
//!   fn create_character()     │  JsonFileRoster
//! ```
//!
//! Every port is async and `Send + Sync` so an adapter is free to
//! block on disk or the network. The use case awaits exactly one call.

pub mod befriend_character_port;
pub mod character_dismissal_port;
pub mod create_character_port;
pub mod error;
pub mod sell_item_for_price_port;
pub mod view_characters_port;

pub use befriend_character_port::BefriendCharacterPort;
pub use character_dismissal_port::CharacterDismissalPort;
pub use create_character_port::CreateCharacterPort;
pub use error::PortError;
pub use sell_item_for_price_port::SellItemForPricePort;
pub use view_characters_port::ViewCharactersPort;
