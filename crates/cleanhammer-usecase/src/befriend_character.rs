//! BefriendCharacter - Let one stored character count another as a friend
//!
//! The friendship rule is checked on the copies handed in before the
//! port is called, so a refused friendship never reaches storage.
//! Friendship is one-way; a mutual pair takes two calls.

use cleanhammer_domain::{Character, InvalidCharacterError};
use thiserror::Error;

use crate::port::{BefriendCharacterPort, PortError};

/// Why a friendship was not recorded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BefriendError {
    #[error(transparent)]
    Invalid(#[from] InvalidCharacterError),

    #[error(transparent)]
    Port(#[from] PortError),
}

pub struct BefriendCharacter<P> {
    befriend_port: P,
}

impl<P: BefriendCharacterPort> BefriendCharacter<P> {
    pub fn new(befriend_port: P) -> Self {
        Self { befriend_port }
    }

    /// Returns `character` as it looks with `friend` added
    pub async fn befriend(
        &self,
        character: &Character,
        friend: &Character,
    ) -> Result<Character, BefriendError> {
        let mut updated = character.clone();
        updated.befriend(friend)?;

        self.befriend_port.befriend(character, friend).await?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::befriend_character_port::MockBefriendCharacterPort;
    use cleanhammer_domain::{MainRaceName, Race};

    fn character(race: MainRaceName, name: &str) -> Character {
        Character::create(Race::new(race, "Any"), name, vec![], &[], 0).unwrap()
    }

    #[tokio::test]
    async fn test_greenskin_and_human_never_reach_port() {
        let mut port = MockBefriendCharacterPort::new();
        port.expect_befriend().never();

        let grok = character(MainRaceName::Greenskin, "Grok");
        let karl = character(MainRaceName::Mankind, "Karl");
        let err = BefriendCharacter::new(port)
            .befriend(&grok, &karl)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            BefriendError::Invalid(InvalidCharacterError::GreenskinFriendship {
                character: "Grok".to_string(),
                friend: "Karl".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_self_friendship_never_reaches_port() {
        let mut port = MockBefriendCharacterPort::new();
        port.expect_befriend().never();

        let karl = character(MainRaceName::Mankind, "Karl");
        let err = BefriendCharacter::new(port)
            .befriend(&karl, &karl)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            BefriendError::Invalid(InvalidCharacterError::SelfFriendship { .. })
        ));
    }

    #[tokio::test]
    async fn test_valid_friendship_is_delegated() {
        let elrin = character(MainRaceName::Elf, "Elrin");
        let grok = character(MainRaceName::Greenskin, "Grok");
        let (elrin_id, grok_id) = (elrin.id().clone(), grok.id().clone());

        let mut port = MockBefriendCharacterPort::new();
        port.expect_befriend()
            .withf(move |c, f| c.id() == &elrin_id && f.id() == &grok_id)
            .times(1)
            .returning(|_, _| Ok(()));

        let updated = BefriendCharacter::new(port)
            .befriend(&elrin, &grok)
            .await
            .unwrap();

        assert!(updated.is_friend_of(grok.id()));
        assert!(!grok.is_friend_of(elrin.id()));
    }

    #[tokio::test]
    async fn test_port_failure_is_propagated() {
        let mut port = MockBefriendCharacterPort::new();
        port.expect_befriend().times(1).returning(|_, f| {
            Err(PortError::NotFound {
                id: f.id().to_string(),
            })
        });

        let karl = character(MainRaceName::Mankind, "Karl");
        let thorek = character(MainRaceName::Dwarf, "Thorek");
        let err = BefriendCharacter::new(port)
            .befriend(&karl, &thorek)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            BefriendError::Port(PortError::NotFound {
                id: thorek.id().to_string()
            })
        );
    }
}
