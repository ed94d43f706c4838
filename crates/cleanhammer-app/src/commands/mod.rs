//! CLI Commands
//!
//! Every command talks to the roster through the use cases only.
//! Characters are addressed by name at this level.

pub mod befriend;
pub mod create;
pub mod demo;
pub mod dismiss;
pub mod list;
pub mod sell;

pub use befriend::BefriendCommand;
pub use create::CreateCommand;
pub use dismiss::DismissCommand;
pub use sell::SellCommand;

use anyhow::anyhow;
use cleanhammer_domain::{Character, Item};
use cleanhammer_usecase::{
    BefriendCharacterPort, CharacterDismissalPort, CreateCharacterPort, SellItemForPricePort,
    ViewCharacters, ViewCharactersPort,
};
use tracing::warn;

/// Any adapter that can back every command
pub trait Roster:
    CreateCharacterPort
    + ViewCharactersPort
    + CharacterDismissalPort
    + SellItemForPricePort
    + BefriendCharacterPort
    + Clone
    + 'static
{
}

impl<T> Roster for T where
    T: CreateCharacterPort
        + ViewCharactersPort
        + CharacterDismissalPort
        + SellItemForPricePort
        + BefriendCharacterPort
        + Clone
        + 'static
{
}

/// First character on the roster with this name
///
/// Names are not unique; when several characters share one, the
/// earliest recruit is picked and a warning is logged.
pub(crate) async fn find_by_name<R: Roster>(roster: &R, name: &str) -> anyhow::Result<Character> {
    let mut matches = ViewCharacters::new(roster.clone())
        .view_all_characters()
        .await?
        .into_iter()
        .filter(|c| c.name() == name);

    let found = matches
        .next()
        .ok_or_else(|| anyhow!("No character named '{}' on the roster", name))?;
    let others = matches.count();
    if others > 0 {
        warn!(
            name,
            id = %found.id(),
            others,
            "Several characters share this name, using the first"
        );
    }
    Ok(found)
}

/// Parse `NAME:KIND:WORTH`, e.g. `Ring of Ashes:ring:50`
pub(crate) fn parse_item(spec: &str) -> Result<Item, String> {
    let mut parts = spec.rsplitn(3, ':');
    let (Some(worth), Some(kind), Some(name)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected NAME:KIND:WORTH, got '{}'", spec));
    };

    let worth = worth
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("invalid worth '{}': {}", worth, e))?;
    let name = name.trim();
    if name.is_empty() {
        return Err("item name cannot be empty".to_string());
    }

    Ok(Item::new(name, kind.trim().parse()?, worth))
}
