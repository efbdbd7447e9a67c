//! Saving and restoring games.
//!
//! A snapshot holds the whole [`GameState`], RNG position included, so a
//! restored game continues exactly as the original would have. JSON is for
//! people and tools; the binary form is compact. Loading re-counts every
//! tile and refuses a snapshot that does not add up.

use crate::board::{capacity, FLOOR_CAPACITY};
use crate::core::{PlayerId, SnapshotError};

use super::state::{GameState, Phase};

impl GameState {
    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Restore from JSON.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let state: Self = serde_json::from_str(json)?;
        state.check_snapshot()?;
        Ok(state)
    }

    /// Serialize to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Restore from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let state: Self = bincode::deserialize(bytes)?;
        state.check_snapshot()?;
        Ok(state)
    }

    fn check_snapshot(&self) -> Result<(), SnapshotError> {
        self.config
            .validate()
            .map_err(|e| SnapshotError::Inconsistent(e.to_string()))?;

        if self.boards.player_count() != self.config.player_count {
            return Err(SnapshotError::Inconsistent(format!(
                "{} boards for {} players",
                self.boards.player_count(),
                self.config.player_count
            )));
        }
        if self.factories.len() != self.config.factory_count() {
            return Err(SnapshotError::Inconsistent(format!(
                "{} factories, config says {}",
                self.factories.len(),
                self.config.factory_count()
            )));
        }
        self.check_seated("current player", self.current_player)?;
        self.check_seated("round starter", self.round_starter)?;
        if let Some(holder) = self.marker_holder {
            self.check_seated("marker holder", holder)?;
        }

        match self.phase {
            Phase::Drafting | Phase::GameOver => {}
            phase => {
                return Err(SnapshotError::Inconsistent(format!(
                    "saved between phases ({phase:?})"
                )));
            }
        }
        if self.phase == Phase::Drafting && self.center.has_marker() == self.marker_holder.is_some() {
            return Err(SnapshotError::Inconsistent(
                "first player marker must be in the center or held by one player".to_string(),
            ));
        }

        self.check_boards()?;
        self.check_conservation()
    }

    fn check_seated(&self, role: &str, player: PlayerId) -> Result<(), SnapshotError> {
        if player.index() >= self.config.player_count {
            return Err(SnapshotError::Inconsistent(format!("{role} {player} is not seated")));
        }
        Ok(())
    }

    fn check_boards(&self) -> Result<(), SnapshotError> {
        for (player, board) in self.boards.iter() {
            for (index, line) in board.lines().iter().enumerate() {
                if line.count() > capacity(index) {
                    return Err(SnapshotError::Inconsistent(format!(
                        "{player} line {} holds {} tiles",
                        index + 1,
                        line.count()
                    )));
                }
                match line.color() {
                    None if !line.is_empty() => {
                        return Err(SnapshotError::Inconsistent(format!(
                            "{player} line {} has tiles but no color",
                            index + 1
                        )));
                    }
                    Some(color) if line.is_empty() || board.wall().has_color(index, color) => {
                        return Err(SnapshotError::Inconsistent(format!(
                            "{player} line {} cannot hold {color}",
                            index + 1
                        )));
                    }
                    _ => {}
                }
            }

            let floor = board.floor();
            if floor.len() > FLOOR_CAPACITY {
                return Err(SnapshotError::Inconsistent(format!(
                    "{player} floor holds {} slots",
                    floor.len()
                )));
            }
            if floor.has_marker() && self.marker_holder != Some(player) {
                return Err(SnapshotError::Inconsistent(format!(
                    "{player} has the first player marker on the floor without holding it"
                )));
            }
        }
        Ok(())
    }
}
