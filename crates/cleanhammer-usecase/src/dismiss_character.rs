//! DismissCharacter - Send a character away from the roster

use cleanhammer_domain::Character;

use crate::port::{CharacterDismissalPort, PortError};

pub struct DismissCharacter<P> {
    dismissal_port: P,
}

impl<P: CharacterDismissalPort> DismissCharacter<P> {
    pub fn new(dismissal_port: P) -> Self {
        Self { dismissal_port }
    }

    /// Whether the character exists is the adapter's call
    pub async fn dismiss_character(&self, character: &Character) -> Result<(), PortError> {
        self.dismissal_port.dismiss_character(character).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::character_dismissal_port::MockCharacterDismissalPort;
    use cleanhammer_domain::{MainRaceName, Race};

    fn grok() -> Character {
        Character::create(Race::new(MainRaceName::Greenskin, "Orc"), "Grok", vec![], &[], 0)
            .unwrap()
    }

    #[tokio::test]
    async fn test_forwards_dismissal() {
        let character = grok();
        let id = character.id().clone();

        let mut port = MockCharacterDismissalPort::new();
        port.expect_dismiss_character()
            .withf(move |c| c.id() == &id)
            .times(1)
            .returning(|_| Ok(()));

        DismissCharacter::new(port)
            .dismiss_character(&character)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_not_found_is_propagated() {
        let mut port = MockCharacterDismissalPort::new();
        port.expect_dismiss_character().returning(|c| {
            Err(PortError::NotFound {
                id: c.id().to_string(),
            })
        });

        let character = grok();
        let err = DismissCharacter::new(port)
            .dismiss_character(&character)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            PortError::NotFound {
                id: character.id().to_string()
            }
        );
    }
}
