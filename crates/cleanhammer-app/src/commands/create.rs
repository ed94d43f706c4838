//! cleanhammer create command

use anyhow::Context;
use clap::Args;
use cleanhammer_domain::{Character, Item, MainRaceName, Race};
use cleanhammer_usecase::CreateCharacter;

use super::{find_by_name, parse_item, Roster};

#[derive(Debug, Args)]
pub struct CreateCommand {
    /// Character name
    #[arg(short, long)]
    pub name: String,

    /// Main race: elf, dwarf, mankind or greenskin
    #[arg(short, long)]
    pub race: MainRaceName,

    /// Subrace, e.g. "Wood" or "Orc"
    #[arg(short, long, default_value = "")]
    pub subrace: String,

    /// Starting gold
    #[arg(short, long, default_value_t = 0)]
    pub gold: u64,

    /// Owned item as NAME:KIND:WORTH (repeatable)
    #[arg(short, long = "item", value_parser = parse_item)]
    pub items: Vec<Item>,

    /// Name of a character already on the roster to befriend (repeatable)
    #[arg(short, long = "friend")]
    pub friends: Vec<String>,
}

impl CreateCommand {
    pub async fn run<R: Roster>(self, roster: R) -> anyhow::Result<Character> {
        let mut friends = Vec::with_capacity(self.friends.len());
        for name in &self.friends {
            friends.push(find_by_name(&roster, name).await?);
        }

        let character = Character::create(
            Race::new(self.race, self.subrace),
            self.name,
            self.items,
            &friends,
            self.gold,
        )?;

        let created = CreateCharacter::new(roster)
            .create_character(character)
            .await
            .context("Failed to store character")?;

        println!("Created {} ({})", created.name(), created.id());
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cleanhammer_adapter::InMemoryRoster;
    use cleanhammer_domain::InvalidCharacterError;

    fn command(name: &str, race: MainRaceName, friends: &[&str]) -> CreateCommand {
        CreateCommand {
            name: name.to_string(),
            race,
            subrace: "Any".to_string(),
            gold: 0,
            items: vec![],
            friends: friends.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_greenskin_with_human_friend_is_refused() {
        let roster = InMemoryRoster::new();
        command("Karl", MainRaceName::Mankind, &[])
            .run(roster.clone())
            .await
            .unwrap();

        let err = command("Grok", MainRaceName::Greenskin, &["Karl"])
            .run(roster.clone())
            .await
            .unwrap_err();

        assert!(err.downcast_ref::<InvalidCharacterError>().is_some());
        assert_eq!(roster.snapshot().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_elf_befriends_existing_greenskin() {
        let roster = InMemoryRoster::new();
        let grok = command("Grok", MainRaceName::Greenskin, &[])
            .run(roster.clone())
            .await
            .unwrap();

        let elrin = command("Elrin", MainRaceName::Elf, &["Grok"])
            .run(roster.clone())
            .await
            .unwrap();

        assert!(elrin.is_friend_of(grok.id()));
    }

    #[tokio::test]
    async fn test_unknown_friend_is_an_error() {
        let roster = InMemoryRoster::new();
        assert!(command("Elrin", MainRaceName::Elf, &["Nobody"])
            .run(roster.clone())
            .await
            .is_err());
        assert!(roster.snapshot().unwrap().is_empty());
    }
}
