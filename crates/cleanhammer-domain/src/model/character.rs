//! Character - A member of the roster
//!
//! Character is an Entity (has identity) and an aggregate: its friends
//! and inventory only change through the methods below, and every
//! change to the friend list re-checks the greenskin-friendship rule.
//!
//! Friends are stored as [`FriendRef`] handles (id + main race), never
//! as embedded characters. A befriends B and B befriends A is just two
//! handles, so cyclic friendships cost nothing.

use serde::{Deserialize, Serialize};

use super::item::Item;
use super::race::{MainRaceName, Race};
use crate::error::{InsufficientFundsError, InvalidCharacterError, OwnershipError};

/// Unique identifier for a Character
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(String);

impl CharacterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random identity
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-owning handle to a befriended character
///
/// Keeps the friend's main race alongside its id, which is all the
/// friendship rule ever needs to know about the other side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendRef {
    id: CharacterId,
    main_race_name: MainRaceName,
}

impl FriendRef {
    pub fn new(id: CharacterId, main_race_name: MainRaceName) -> Self {
        Self { id, main_race_name }
    }

    pub fn of(character: &Character) -> Self {
        Self::new(character.id.clone(), character.race.main_race_name())
    }

    pub fn id(&self) -> &CharacterId {
        &self.id
    }

    pub fn main_race_name(&self) -> MainRaceName {
        self.main_race_name
    }
}

/// True when a greenskin has at least one friend who is not a greenskin
pub fn is_greenskin_with_non_greenskin_friend(race: &Race, friends: &[FriendRef]) -> bool {
    race.main_race_name().is_greenskin()
        && friends.iter().any(|f| !f.main_race_name().is_greenskin())
}

fn guard_friendship(
    name: &str,
    race: &Race,
    friend_label: &str,
    friend_race: MainRaceName,
) -> Result<(), InvalidCharacterError> {
    if race.main_race_name().is_greenskin() && !friend_race.is_greenskin() {
        return Err(InvalidCharacterError::GreenskinFriendship {
            character: name.to_string(),
            friend: friend_label.to_string(),
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "CharacterDocument")]
pub struct Character {
    /// Unique identifier (Entity identity)
    id: CharacterId,
    race: Race,
    name: String,
    items_owned: Vec<Item>,
    /// Unique by id, in the order they were befriended
    friends: Vec<FriendRef>,
    gold_owned: u64,
}

impl Character {
    /// Create a brand new character with a fresh identity
    ///
    /// Fails if a greenskin is given a non-greenskin friend. Nothing is
    /// returned on failure.
    pub fn create(
        race: Race,
        name: impl Into<String>,
        items_owned: Vec<Item>,
        friends: &[Character],
        gold_owned: u64,
    ) -> Result<Self, InvalidCharacterError> {
        let name = name.into();
        for friend in friends {
            guard_friendship(&name, &race, friend.name(), friend.race.main_race_name())?;
        }

        Self::restore(
            CharacterId::generate(),
            race,
            name,
            items_owned,
            friends.iter().map(FriendRef::of).collect(),
            gold_owned,
        )
    }

    /// Rebuild a character that already has an identity (e.g. from storage)
    ///
    /// Runs the same checks as [`Character::create`]. Duplicate friend
    /// handles collapse to the first occurrence.
    pub fn restore(
        id: CharacterId,
        race: Race,
        name: impl Into<String>,
        items_owned: Vec<Item>,
        friends: Vec<FriendRef>,
        gold_owned: u64,
    ) -> Result<Self, InvalidCharacterError> {
        let name = name.into();

        let mut unique: Vec<FriendRef> = Vec::with_capacity(friends.len());
        for friend in friends {
            if friend.id == id {
                return Err(InvalidCharacterError::SelfFriendship { character: name });
            }
            guard_friendship(&name, &race, friend.id.as_str(), friend.main_race_name)?;
            if !unique.iter().any(|f| f.id == friend.id) {
                unique.push(friend);
            }
        }

        Ok(Self {
            id,
            race,
            name,
            items_owned,
            friends: unique,
            gold_owned,
        })
    }

    // ========== Getters ==========

    pub fn id(&self) -> &CharacterId {
        &self.id
    }

    pub fn race(&self) -> &Race {
        &self.race
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items_owned(&self) -> &[Item] {
        &self.items_owned
    }

    pub fn friends(&self) -> &[FriendRef] {
        &self.friends
    }

    pub fn gold_owned(&self) -> u64 {
        self.gold_owned
    }

    // ========== Friendship ==========

    pub fn is_friend_of(&self, id: &CharacterId) -> bool {
        self.friends.iter().any(|f| &f.id == id)
    }

    /// Add `other` as a friend
    ///
    /// Re-checks the friendship rule for the new pair. On error the
    /// friend list is left untouched. Befriending an existing friend
    /// is a no-op.
    pub fn befriend(&mut self, other: &Character) -> Result<(), InvalidCharacterError> {
        if other.id == self.id {
            return Err(InvalidCharacterError::SelfFriendship {
                character: self.name.clone(),
            });
        }
        guard_friendship(&self.name, &self.race, other.name(), other.race.main_race_name())?;

        if !self.is_friend_of(&other.id) {
            self.friends.push(FriendRef::of(other));
        }
        Ok(())
    }

    /// Drop the handle to `id`, returning whether it was a friend
    pub fn forget_friend(&mut self, id: &CharacterId) -> bool {
        let before = self.friends.len();
        self.friends.retain(|f| &f.id != id);
        self.friends.len() != before
    }

    // ========== Trade ==========

    pub fn owns(&self, item: &Item) -> bool {
        self.items_owned.contains(item)
    }

    pub fn can_afford(&self, item: &Item) -> bool {
        self.gold_owned >= item.worth_in_gold()
    }

    pub fn ensure_owns(&self, item: &Item) -> Result<(), OwnershipError> {
        if self.owns(item) {
            Ok(())
        } else {
            Err(OwnershipError {
                seller: self.name.clone(),
                item: item.name().to_string(),
            })
        }
    }

    pub fn ensure_can_afford(&self, item: &Item) -> Result<(), InsufficientFundsError> {
        if self.can_afford(item) {
            Ok(())
        } else {
            Err(InsufficientFundsError {
                buyer: self.name.clone(),
                item: item.name().to_string(),
                price: item.worth_in_gold(),
                available: self.gold_owned,
            })
        }
    }

    /// Remove one copy of `item` from the inventory
    pub fn take_item(&mut self, item: &Item) -> Option<Item> {
        let index = self.items_owned.iter().position(|owned| owned == item)?;
        Some(self.items_owned.remove(index))
    }

    pub fn receive_item(&mut self, item: Item) {
        self.items_owned.push(item);
    }

    /// Pay the price of `item`; fails without touching the purse
    pub fn pay_for(&mut self, item: &Item) -> Result<(), InsufficientFundsError> {
        self.ensure_can_afford(item)?;
        self.gold_owned -= item.worth_in_gold();
        Ok(())
    }

    pub fn credit_gold(&mut self, amount: u64) {
        self.gold_owned = self.gold_owned.saturating_add(amount);
    }
}

impl PartialEq for Character {
    fn eq(&self, other: &Self) -> bool {
        // Entity equality: same ID = same entity
        self.id == other.id
    }
}

impl Eq for Character {}

/// Raw stored shape of a character, validated on the way in
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CharacterDocument {
    id: CharacterId,
    race: Race,
    name: String,
    #[serde(default)]
    items_owned: Vec<Item>,
    #[serde(default)]
    friends: Vec<FriendRef>,
    #[serde(default)]
    gold_owned: u64,
}

impl TryFrom<CharacterDocument> for Character {
    type Error = InvalidCharacterError;

    fn try_from(doc: CharacterDocument) -> Result<Self, Self::Error> {
        Character::restore(
            doc.id,
            doc.race,
            doc.name,
            doc.items_owned,
            doc.friends,
            doc.gold_owned,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::item::ItemKind;

    fn orc(name: &str) -> Character {
        Character::create(Race::new(MainRaceName::Greenskin, "Orc"), name, vec![], &[], 0).unwrap()
    }

    fn imperial(name: &str) -> Character {
        Character::create(Race::new(MainRaceName::Mankind, "Imperial"), name, vec![], &[], 0)
            .unwrap()
    }

    #[test]
    fn test_greenskin_cannot_be_created_with_human_friend() {
        let karl = imperial("Karl");

        let result = Character::create(
            Race::new(MainRaceName::Greenskin, "Orc"),
            "Grok",
            vec![],
            &[karl],
            0,
        );

        assert_eq!(
            result.unwrap_err(),
            InvalidCharacterError::GreenskinFriendship {
                character: "Grok".to_string(),
                friend: "Karl".to_string(),
            }
        );
    }

    #[test]
    fn test_elf_can_befriend_greenskin() {
        let grok = orc("Grok");

        let elrin = Character::create(
            Race::new(MainRaceName::Elf, "Wood"),
            "Elrin",
            vec![],
            &[grok.clone()],
            0,
        )
        .unwrap();

        assert!(elrin.is_friend_of(grok.id()));
        assert_eq!(elrin.friends().len(), 1);
    }

    #[test]
    fn test_non_greenskins_accept_any_friends() {
        let friends = vec![orc("Grok"), imperial("Karl"), orc("Snaga")];

        for race in [MainRaceName::Elf, MainRaceName::Dwarf, MainRaceName::Mankind] {
            let character =
                Character::create(Race::new(race, "Any"), "Host", vec![], &friends, 0).unwrap();
            assert_eq!(character.friends().len(), 3);
        }
    }

    #[test]
    fn test_greenskins_befriend_greenskins() {
        let grok = orc("Grok");
        let mut snaga = orc("Snaga");

        snaga.befriend(&grok).unwrap();
        assert!(snaga.is_friend_of(grok.id()));
    }

    #[test]
    fn test_befriend_rejects_non_greenskin_and_leaves_friends_untouched() {
        let mut grok = orc("Grok");
        let snaga = orc("Snaga");
        grok.befriend(&snaga).unwrap();

        let err = grok.befriend(&imperial("Karl")).unwrap_err();

        assert!(matches!(err, InvalidCharacterError::GreenskinFriendship { .. }));
        assert_eq!(grok.friends(), &[FriendRef::of(&snaga)]);
    }

    #[test]
    fn test_befriend_self_is_rejected() {
        let mut karl = imperial("Karl");
        let same = karl.clone();

        assert!(matches!(
            karl.befriend(&same),
            Err(InvalidCharacterError::SelfFriendship { .. })
        ));
        assert!(karl.friends().is_empty());
    }

    #[test]
    fn test_cyclic_friendship() {
        let mut a = imperial("Karl");
        let mut b = Character::create(Race::new(MainRaceName::Dwarf, "Hill"), "Thorek", vec![], &[], 0)
            .unwrap();

        a.befriend(&b).unwrap();
        b.befriend(&a).unwrap();
        // befriending twice keeps the friend list unique
        a.befriend(&b).unwrap();

        assert_eq!(a.friends().len(), 1);
        assert!(a.is_friend_of(b.id()));
        assert!(b.is_friend_of(a.id()));
    }

    #[test]
    fn test_restore_collapses_duplicate_friends() {
        let grok = orc("Grok");
        let handle = FriendRef::of(&grok);

        let karl = Character::restore(
            CharacterId::new("karl"),
            Race::new(MainRaceName::Mankind, "Imperial"),
            "Karl",
            vec![],
            vec![handle.clone(), handle],
            0,
        )
        .unwrap();

        assert_eq!(karl.friends().len(), 1);
    }

    #[test]
    fn test_forget_friend() {
        let grok = orc("Grok");
        let mut snaga = orc("Snaga");
        snaga.befriend(&grok).unwrap();

        assert!(snaga.forget_friend(grok.id()));
        assert!(!snaga.forget_friend(grok.id()));
        assert!(snaga.friends().is_empty());
    }

    #[test]
    fn test_predicate_matches_rule() {
        let race = Race::new(MainRaceName::Greenskin, "Goblin");
        let human = FriendRef::new(CharacterId::new("karl"), MainRaceName::Mankind);
        let greenskin = FriendRef::new(CharacterId::new("grok"), MainRaceName::Greenskin);

        assert!(is_greenskin_with_non_greenskin_friend(
            &race,
            &[greenskin.clone(), human.clone()]
        ));
        assert!(!is_greenskin_with_non_greenskin_friend(&race, &[greenskin]));
        assert!(!is_greenskin_with_non_greenskin_friend(
            &Race::new(MainRaceName::Elf, "High"),
            &[human]
        ));
    }

    #[test]
    fn test_trade_helpers() {
        let ring = Item::new("Ring of Ashes", ItemKind::Ring, 50);
        let mut seller = Character::create(
            Race::new(MainRaceName::Elf, "Wood"),
            "Elrin",
            vec![ring.clone()],
            &[],
            10,
        )
        .unwrap();
        let mut buyer = imperial("Karl");

        assert!(seller.ensure_owns(&ring).is_ok());
        assert!(buyer.ensure_owns(&ring).is_err());

        let err = buyer.pay_for(&ring).unwrap_err();
        assert_eq!(err.price, 50);
        assert_eq!(err.available, 0);
        assert_eq!(buyer.gold_owned(), 0);

        buyer.credit_gold(70);
        buyer.pay_for(&ring).unwrap();
        assert_eq!(buyer.gold_owned(), 20);

        let taken = seller.take_item(&ring).unwrap();
        buyer.receive_item(taken);
        assert!(!seller.owns(&ring));
        assert!(buyer.owns(&ring));
        assert!(seller.take_item(&ring).is_none());
    }

    #[test]
    fn test_json_round_trip_keeps_friend_handles() {
        let grok = orc("Grok");
        let mut snaga = orc("Snaga");
        snaga.befriend(&grok).unwrap();

        let json = serde_json::to_value(&snaga).unwrap();
        assert_eq!(json["friends"][0]["id"], grok.id().as_str());
        assert_eq!(json["friends"][0]["mainRaceName"], "GREENSKIN");

        let back: Character = serde_json::from_value(json).unwrap();
        assert_eq!(back, snaga);
        assert_eq!(back.friends(), snaga.friends());
    }

    #[test]
    fn test_cyclic_friendship_survives_json_round_trip() {
        let mut karl = imperial("Karl");
        let mut thorek =
            Character::create(Race::new(MainRaceName::Dwarf, "Hill"), "Thorek", vec![], &[], 0)
                .unwrap();
        karl.befriend(&thorek).unwrap();
        thorek.befriend(&karl).unwrap();

        let json = serde_json::to_string(&vec![karl.clone(), thorek.clone()]).unwrap();
        let back: Vec<Character> = serde_json::from_str(&json).unwrap();

        assert_eq!(back, vec![karl.clone(), thorek.clone()]);
        assert_eq!(back[0].friends(), &[FriendRef::of(&thorek)]);
        assert_eq!(back[1].friends(), &[FriendRef::of(&karl)]);
    }

    #[test]
    fn test_invalid_document_fails_to_load() {
        let json = serde_json::json!({
            "id": "grok",
            "race": { "mainRaceName": "GREENSKIN", "subrace": "Orc" },
            "name": "Grok",
            "friends": [{ "id": "karl", "mainRaceName": "MANKIND" }]
        });

        let result: Result<Character, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }
}
