//! cleanhammer dismiss command

use clap::Args;
use cleanhammer_usecase::DismissCharacter;

use super::{find_by_name, Roster};

#[derive(Debug, Args)]
pub struct DismissCommand {
    /// Name of the character to send away
    #[arg(short, long)]
    pub name: String,
}

impl DismissCommand {
    pub async fn run<R: Roster>(self, roster: R) -> anyhow::Result<()> {
        let character = find_by_name(&roster, &self.name).await?;
        DismissCharacter::new(roster)
            .dismiss_character(&character)
            .await?;

        println!("{} has left the roster", character.name());
        Ok(())
    }
}
