use crate::DatabaseResult;
use log::debug;
use serde::Deserialize;
use std::path::Path;

const STATIC_SNAPSHOT_JSON: &str = include_str!("../../data/snapshot.json");

#[derive(Debug, Deserialize)]
pub struct SnapshotEntity {
    pub in_bank: i32,
    pub squad: Vec<u32>,
    pub players: Vec<PlayerEntity>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerEntity {
    pub id: u32,
    #[serde(default)]
    pub first_name: String,
    pub second_name: String,
    pub team_id: u32,
    pub position: String,
    pub cost: i32,
    pub evaluation: f64,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    String::from("a")
}

pub struct SnapshotLoader;

impl SnapshotLoader {
    /// Loads the snapshot bundled with the binary.
    pub fn load() -> DatabaseResult<SnapshotEntity> {
        Self::parse(STATIC_SNAPSHOT_JSON)
    }

    pub fn load_from(path: impl AsRef<Path>) -> DatabaseResult<SnapshotEntity> {
        let path = path.as_ref();
        debug!("loading snapshot from {}", path.display());

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> DatabaseResult<SnapshotEntity> {
        let snapshot: SnapshotEntity = serde_json::from_str(content)?;

        debug!(
            "snapshot parsed: {} players, {} in squad",
            snapshot.players.len(),
            snapshot.squad.len()
        );

        Ok(snapshot)
    }
}
