//! JSON Document Roster
//!
//! The whole roster lives in one JSON document:
//!
//! ```json
//! { "savedAt": "2026-10-18T12:00:00Z", "characters": [ ... ] }
//! ```
//!
//! Friends are stored as `{ "id", "mainRaceName" }` handles, never
//! embedded. Every mutation runs against an [`InMemoryRoster`] and the
//! full document is written back afterwards; if that write fails the
//! in-memory state is rolled back.
//!
//! A loaded document gets the same roster checks as a seeded
//! [`InMemoryRoster`], so a hand-edited file cannot smuggle in a
//! friend handle with the wrong race.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use cleanhammer_domain::{Character, Item};
use cleanhammer_usecase::port::{
    BefriendCharacterPort, CharacterDismissalPort, CreateCharacterPort, PortError,
    SellItemForPricePort, ViewCharactersPort,
};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use super::in_memory::InMemoryRoster;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RosterDocument {
    saved_at: DateTime<Utc>,
    characters: Vec<Character>,
}

fn persistence(context: &str, path: &Path, err: impl std::fmt::Display) -> PortError {
    PortError::Persistence {
        message: format!("{} {}: {}", context, path.display(), err),
    }
}

/// File-backed roster
///
/// Clones share the same roster and the same writer lock.
#[derive(Debug, Clone)]
pub struct JsonFileRoster {
    path: Arc<PathBuf>,
    roster: InMemoryRoster,
    writer: Arc<Mutex<()>>,
}

impl JsonFileRoster {
    /// Load the roster document at `path`; a missing file is an empty roster
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, PortError> {
        let path = path.into();

        let characters = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let document: RosterDocument = serde_json::from_slice(&bytes)
                    .map_err(|e| persistence("Failed to parse", &path, e))?;
                debug!(
                    path = %path.display(),
                    saved_at = %document.saved_at,
                    count = document.characters.len(),
                    "Roster loaded"
                );
                document.characters
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No roster yet, starting empty");
                Vec::new()
            }
            Err(e) => return Err(persistence("Failed to read", &path, e)),
        };

        let roster = InMemoryRoster::with_characters(characters)
            .map_err(|e| persistence("Inconsistent roster in", &path, e))?;

        Ok(Self {
            path: Arc::new(path),
            roster,
            writer: Arc::new(Mutex::new(())),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self) -> Result<(), PortError> {
        let document = RosterDocument {
            saved_at: Utc::now(),
            characters: self.roster.snapshot()?,
        };
        let bytes = serde_json::to_vec_pretty(&document)
            .map_err(|e| persistence("Failed to encode", &self.path, e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| persistence("Failed to create directory for", &self.path, e))?;
        }

        // Write aside, then swap in, so readers never see half a document
        let staging = self.path.with_extension("json.tmp");
        tokio::fs::write(&staging, bytes)
            .await
            .map_err(|e| persistence("Failed to write", &staging, e))?;
        tokio::fs::rename(&staging, self.path.as_path())
            .await
            .map_err(|e| persistence("Failed to replace", &self.path, e))?;

        debug!(path = %self.path.display(), count = document.characters.len(), "Roster saved");
        Ok(())
    }

    /// Apply `change` to the roster and write the document back
    async fn commit<T>(
        &self,
        change: impl FnOnce(&InMemoryRoster) -> Result<T, PortError>,
    ) -> Result<T, PortError> {
        let _writer = self.writer.lock().await;

        let before = self.roster.snapshot()?;
        let outcome = change(&self.roster)?;

        if let Err(e) = self.persist().await {
            self.roster.replace(before)?;
            return Err(e);
        }
        Ok(outcome)
    }
}

#[async_trait]
impl CreateCharacterPort for JsonFileRoster {
    async fn create_character(&self, character: Character) -> Result<Character, PortError> {
        self.commit(|roster| roster.insert(character)).await
    }
}

#[async_trait]
impl ViewCharactersPort for JsonFileRoster {
    async fn view_characters(&self) -> Result<Vec<Character>, PortError> {
        self.roster.snapshot()
    }
}

#[async_trait]
impl CharacterDismissalPort for JsonFileRoster {
    async fn dismiss_character(&self, character: &Character) -> Result<(), PortError> {
        self.commit(|roster| roster.remove(character.id())).await
    }
}

#[async_trait]
impl BefriendCharacterPort for JsonFileRoster {
    async fn befriend(&self, character: &Character, friend: &Character) -> Result<(), PortError> {
        self.commit(|roster| roster.link(character.id(), friend.id()))
            .await
    }
}

#[async_trait]
impl SellItemForPricePort for JsonFileRoster {
    async fn sell_item(
        &self,
        from: &Character,
        to: &Character,
        item: &Item,
    ) -> Result<bool, PortError> {
        self.commit(|roster| roster.transfer(from.id(), to.id(), item))
            .await
    }
}
