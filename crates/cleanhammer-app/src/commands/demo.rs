//! cleanhammer demo command
//!
//! Walks through the roster rules against whatever adapter it is given:
//! friendships across races, a refused greenskin friendship, a
//! mutual friendship, a sale, a refused resale and a dismissal.

use cleanhammer_domain::{Character, Item, ItemKind, MainRaceName, Race};
use cleanhammer_usecase::{
    BefriendCharacter, CreateCharacter, DismissCharacter, SaleError, SellItemForPrice,
    ViewCharacters,
};
use tracing::{info, warn};

use super::{find_by_name, Roster};

pub async fn run<R: Roster>(roster: R) -> anyhow::Result<()> {
    let create = CreateCharacter::new(roster.clone());
    let view = ViewCharacters::new(roster.clone());
    let dismiss = DismissCharacter::new(roster.clone());
    let sell = SellItemForPrice::new(roster.clone());
    let befriend = BefriendCharacter::new(roster.clone());

    info!("Cleanhammer roster demo");

    // ========================================
    // Recruit
    // ========================================

    let ring = Item::new("Ring of Ashes", ItemKind::Ring, 50);

    let grok = create
        .create_character(Character::create(
            Race::new(MainRaceName::Greenskin, "Orc"),
            "Grok",
            vec![Item::new("Choppa", ItemKind::Sword, 5)],
            &[],
            3,
        )?)
        .await?;
    let karl = create
        .create_character(Character::create(
            Race::new(MainRaceName::Mankind, "Imperial"),
            "Karl",
            vec![],
            &[],
            100,
        )?)
        .await?;
    let elrin = create
        .create_character(Character::create(
            Race::new(MainRaceName::Elf, "Wood"),
            "Elrin",
            vec![ring.clone()],
            &[grok.clone(), karl.clone()],
            0,
        )?)
        .await?;
    info!(
        "Recruited {}, {} and {} ({} friends)",
        grok.name(),
        karl.name(),
        elrin.name(),
        elrin.friends().len()
    );

    // A greenskin may not keep company with men
    match Character::create(
        Race::new(MainRaceName::Greenskin, "Orc"),
        "Gorbag",
        vec![],
        &[karl.clone()],
        0,
    ) {
        Ok(_) => warn!("Gorbag was accepted, which should never happen"),
        Err(e) => info!("Refused: {}", e),
    }

    // Elrin already counts Karl as a friend; Karl returns the favour
    let karl = befriend.befriend(&karl, &elrin).await?;
    info!("{} and {} are now friends both ways", karl.name(), elrin.name());

    // ========================================
    // Trade
    // ========================================

    let sold = sell.sell_item(&elrin, &karl, &ring).await?;
    info!("{} sells {} to {}: {}", elrin.name(), ring, karl.name(), sold);

    let elrin = find_by_name(&roster, "Elrin").await?;
    let karl = find_by_name(&roster, "Karl").await?;
    match sell.sell_item(&elrin, &karl, &ring).await {
        Err(SaleError::Ownership(e)) => info!("Refused: {}", e),
        other => warn!("Unexpected resale outcome: {:?}", other),
    }

    // ========================================
    // Farewell
    // ========================================

    dismiss.dismiss_character(&grok).await?;
    info!("{} has left the roster", grok.name());

    for character in view.view_all_characters().await? {
        info!(
            "  {} - {} - {} gold, {} items, {} friends",
            character.name(),
            character.race(),
            character.gold_owned(),
            character.items_owned().len(),
            character.friends().len()
        );
    }

    info!("Demo complete");
    Ok(())
}
