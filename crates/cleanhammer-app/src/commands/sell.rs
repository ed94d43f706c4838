//! cleanhammer sell command

use anyhow::bail;
use clap::Args;
use cleanhammer_domain::Item;
use cleanhammer_usecase::SellItemForPrice;

use super::{find_by_name, parse_item, Roster};

#[derive(Debug, Args)]
pub struct SellCommand {
    /// Character giving up the item
    #[arg(short, long)]
    pub seller: String,

    /// Character paying for it
    #[arg(short, long)]
    pub buyer: String,

    /// Item as NAME:KIND:WORTH
    #[arg(short, long, value_parser = parse_item)]
    pub item: Item,
}

impl SellCommand {
    pub async fn run<R: Roster>(self, roster: R) -> anyhow::Result<()> {
        let seller = find_by_name(&roster, &self.seller).await?;
        let buyer = find_by_name(&roster, &self.buyer).await?;

        let sold = SellItemForPrice::new(roster)
            .sell_item(&seller, &buyer, &self.item)
            .await?;
        if !sold {
            bail!(
                "{} could not sell {} to {}",
                seller.name(),
                self.item.name(),
                buyer.name()
            );
        }

        println!(
            "{} sold {} to {} for {} gold",
            seller.name(),
            self.item.name(),
            buyer.name(),
            self.item.worth_in_gold()
        );
        Ok(())
    }
}
