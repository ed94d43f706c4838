//! cleanhammer befriend command

use clap::Args;
use cleanhammer_usecase::BefriendCharacter;

use super::{find_by_name, Roster};

#[derive(Debug, Args)]
pub struct BefriendCommand {
    /// Character gaining a friend
    #[arg(short, long)]
    pub name: String,

    /// Character to befriend
    #[arg(short, long)]
    pub friend: String,

    /// Also record the friendship the other way round
    #[arg(short, long)]
    pub mutual: bool,
}

impl BefriendCommand {
    pub async fn run<R: Roster>(self, roster: R) -> anyhow::Result<()> {
        let character = find_by_name(&roster, &self.name).await?;
        let friend = find_by_name(&roster, &self.friend).await?;
        let befriend = BefriendCharacter::new(roster);

        befriend.befriend(&character, &friend).await?;
        println!("{} now counts {} as a friend", character.name(), friend.name());

        if self.mutual {
            befriend.befriend(&friend, &character).await?;
            println!("{} now counts {} as a friend", friend.name(), character.name());
        }
        Ok(())
    }
}
