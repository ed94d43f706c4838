//! Item - Something a character can own and sell
//!
//! Item is a Value Object. It has no identity of its own: two items
//! with the same name, kind and worth are the same item as far as
//! ownership checks are concerned.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemKind {
    Sword,
    Hammer,
    Bow,
    Ring,
    Amulet,
}

impl ItemKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ItemKind::Sword => "Sword",
            ItemKind::Hammer => "Hammer",
            ItemKind::Bow => "Bow",
            ItemKind::Ring => "Ring",
            ItemKind::Amulet => "Amulet",
        }
    }

    pub fn all() -> &'static [ItemKind] {
        &[
            ItemKind::Sword,
            ItemKind::Hammer,
            ItemKind::Bow,
            ItemKind::Ring,
            ItemKind::Amulet,
        ]
    }
}

impl core::str::FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemKind::all()
            .iter()
            .find(|k| k.display_name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("unknown item kind '{}'", s))
    }
}

impl core::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    name: String,
    item_kind: ItemKind,
    /// Price in gold pieces
    worth_in_gold: u64,
}

impl Item {
    pub fn new(name: impl Into<String>, item_kind: ItemKind, worth_in_gold: u64) -> Self {
        Self {
            name: name.into(),
            item_kind,
            worth_in_gold,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn item_kind(&self) -> ItemKind {
        self.item_kind
    }

    pub fn worth_in_gold(&self) -> u64 {
        self.worth_in_gold
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} [{}, {}g]", self.name, self.item_kind, self.worth_in_gold)
    }
}
