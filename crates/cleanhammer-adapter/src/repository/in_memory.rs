//! In-Memory Roster
//!
//! Keeps every character in a single vector behind one `RwLock`. A
//! sale takes the write guard once, so both purses and both
//! inventories change together or not at all.
//!
//! Every friend handle on the roster points at a stored character of
//! the race the handle claims. Seeding and inserting both check this.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use cleanhammer_domain::{Character, CharacterId, InvalidCharacterError, Item};
use cleanhammer_usecase::port::{
    BefriendCharacterPort, CharacterDismissalPort, CreateCharacterPort, PortError,
    SellItemForPricePort, ViewCharactersPort,
};
use tracing::{debug, info, warn};

/// In-memory roster, in insertion order
///
/// Thread-safe implementation using RwLock. Clones share the same
/// underlying roster.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoster {
    characters: Arc<RwLock<Vec<Character>>>,
}

impl InMemoryRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the roster, e.g. from a loaded document
    ///
    /// Fails on a repeated id, or on a friend handle that is missing
    /// from `characters` or names the wrong race.
    pub fn with_characters(characters: Vec<Character>) -> Result<Self, PortError> {
        for (index, character) in characters.iter().enumerate() {
            if characters[..index].iter().any(|c| c.id() == character.id()) {
                return Err(PortError::Conflict {
                    id: character.id().to_string(),
                });
            }
            check_friends(character, &characters)?;
        }

        Ok(Self {
            characters: Arc::new(RwLock::new(characters)),
        })
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Character>>, PortError> {
        self.characters.read().map_err(|_| PortError::Persistence {
            message: "Failed to acquire read lock".to_string(),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Character>>, PortError> {
        self.characters.write().map_err(|_| PortError::Persistence {
            message: "Failed to acquire write lock".to_string(),
        })
    }

    /// Copy of the current roster
    pub fn snapshot(&self) -> Result<Vec<Character>, PortError> {
        Ok(self.read()?.clone())
    }

    pub(crate) fn replace(&self, characters: Vec<Character>) -> Result<(), PortError> {
        *self.write()? = characters;
        Ok(())
    }

    pub(crate) fn insert(&self, character: Character) -> Result<Character, PortError> {
        let mut roster = self.write()?;

        if roster.iter().any(|c| c.id() == character.id()) {
            return Err(PortError::Conflict {
                id: character.id().to_string(),
            });
        }
        check_friends(&character, &roster)?;

        info!(id = %character.id(), name = character.name(), "Character created");
        roster.push(character.clone());
        Ok(character)
    }

    pub(crate) fn remove(&self, id: &CharacterId) -> Result<(), PortError> {
        let mut roster = self.write()?;

        let index = position(&roster, id)?;
        let dismissed = roster.remove(index);

        // No dangling handles to the dismissed character
        for character in roster.iter_mut() {
            if character.forget_friend(id) {
                debug!(id = %character.id(), forgotten = %id, "Friend handle pruned");
            }
        }

        info!(id = %id, name = dismissed.name(), "Character dismissed");
        Ok(())
    }

    /// Add a handle to `friend` on the stored `id`
    pub(crate) fn link(&self, id: &CharacterId, friend: &CharacterId) -> Result<(), PortError> {
        let mut roster = self.write()?;

        let index = position(&roster, id)?;
        let friend_index = position(&roster, friend)?;
        if index == friend_index {
            let character = &roster[index];
            return Err(rejected(
                character,
                InvalidCharacterError::SelfFriendship {
                    character: character.name().to_string(),
                },
            ));
        }

        let (character, friend) = pair_mut(roster.as_mut_slice(), index, friend_index);
        character
            .befriend(friend)
            .map_err(|e| rejected(character, e))?;

        info!(character = character.name(), friend = friend.name(), "Friendship recorded");
        Ok(())
    }

    pub(crate) fn transfer(
        &self,
        from: &CharacterId,
        to: &CharacterId,
        item: &Item,
    ) -> Result<bool, PortError> {
        let mut roster = self.write()?;

        let seller_index = position(&roster, from)?;
        let buyer_index = position(&roster, to)?;

        if seller_index == buyer_index {
            warn!(id = %from, "Character cannot sell to itself");
            return Ok(false);
        }

        let (seller, buyer) = pair_mut(roster.as_mut_slice(), seller_index, buyer_index);

        // Re-check against the stored state; the caller may hold stale copies
        if buyer.pay_for(item).is_err() {
            warn!(buyer = buyer.name(), item = item.name(), "Stale sale: buyer can no longer pay");
            return Ok(false);
        }
        let Some(sold) = seller.take_item(item) else {
            buyer.credit_gold(item.worth_in_gold());
            warn!(seller = seller.name(), item = item.name(), "Stale sale: item no longer owned");
            return Ok(false);
        };

        seller.credit_gold(sold.worth_in_gold());
        info!(
            seller = seller.name(),
            buyer = buyer.name(),
            item = sold.name(),
            price = sold.worth_in_gold(),
            "Item sold"
        );
        buyer.receive_item(sold);
        Ok(true)
    }
}

fn position(roster: &[Character], id: &CharacterId) -> Result<usize, PortError> {
    roster
        .iter()
        .position(|c| c.id() == id)
        .ok_or_else(|| PortError::NotFound { id: id.to_string() })
}

/// Each handle on `character` must resolve to a stored character of the claimed race
fn check_friends(character: &Character, roster: &[Character]) -> Result<(), PortError> {
    for handle in character.friends() {
        let friend = &roster[position(roster, handle.id())?];
        let actual = friend.race().main_race_name();
        if actual != handle.main_race_name() {
            return Err(PortError::Rejected {
                id: character.id().to_string(),
                reason: format!(
                    "friend {} is recorded as {} but is {}",
                    handle.id(),
                    handle.main_race_name(),
                    actual
                ),
            });
        }
    }
    Ok(())
}

fn rejected(character: &Character, err: InvalidCharacterError) -> PortError {
    PortError::Rejected {
        id: character.id().to_string(),
        reason: err.to_string(),
    }
}

/// Two distinct mutable borrows into the roster
fn pair_mut(
    roster: &mut [Character],
    first: usize,
    second: usize,
) -> (&mut Character, &mut Character) {
    if first < second {
        let (left, right) = roster.split_at_mut(second);
        (&mut left[first], &mut right[0])
    } else {
        let (left, right) = roster.split_at_mut(first);
        (&mut right[0], &mut left[second])
    }
}

#[async_trait]
impl CreateCharacterPort for InMemoryRoster {
    async fn create_character(&self, character: Character) -> Result<Character, PortError> {
        self.insert(character)
    }
}

#[async_trait]
impl ViewCharactersPort for InMemoryRoster {
    async fn view_characters(&self) -> Result<Vec<Character>, PortError> {
        self.snapshot()
    }
}

#[async_trait]
impl CharacterDismissalPort for InMemoryRoster {
    async fn dismiss_character(&self, character: &Character) -> Result<(), PortError> {
        self.remove(character.id())
    }
}

#[async_trait]
impl BefriendCharacterPort for InMemoryRoster {
    async fn befriend(&self, character: &Character, friend: &Character) -> Result<(), PortError> {
        self.link(character.id(), friend.id())
    }
}

#[async_trait]
impl SellItemForPricePort for InMemoryRoster {
    async fn sell_item(
        &self,
        from: &Character,
        to: &Character,
        item: &Item,
    ) -> Result<bool, PortError> {
        self.transfer(from.id(), to.id(), item)
    }
}
