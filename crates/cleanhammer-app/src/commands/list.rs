//! cleanhammer list command

use std::collections::HashMap;

use cleanhammer_domain::Character;
use cleanhammer_usecase::ViewCharacters;

use super::Roster;

/// Print the roster in the order the store keeps it
pub async fn run<R: Roster>(roster: R) -> anyhow::Result<Vec<Character>> {
    let characters = ViewCharacters::new(roster).view_all_characters().await?;

    if characters.is_empty() {
        println!("The roster is empty.");
        return Ok(characters);
    }

    let names: HashMap<_, _> = characters.iter().map(|c| (c.id(), c.name())).collect();

    for character in &characters {
        println!(
            "{} - {} - {} gold",
            character.name(),
            character.race(),
            character.gold_owned()
        );
        for item in character.items_owned() {
            println!("    item:   {}", item);
        }
        for friend in character.friends() {
            let name = names.get(friend.id()).copied().unwrap_or("<unknown>");
            println!("    friend: {} ({})", name, friend.main_race_name());
        }
    }
    Ok(characters)
}
