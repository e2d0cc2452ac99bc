//! Bookkeeping of who is currently in a game
//!
//! Owned by whoever hosts the games; boards and bots never look at it.

use std::collections::HashSet;

use crate::error::{Error, Result};

#[derive(Clone, Debug, Default)]
pub struct Lobby {
    in_game: HashSet<u64>,
}

impl Lobby {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks all `ids` as playing, or none of them if any already is
    pub fn join(&mut self, ids: &[u64]) -> Result<()> {
        if let Some(&id) = ids.iter().find(|id| self.in_game.contains(id)) {
            return Err(Error::AlreadyInGame { id });
        }
        self.in_game.extend(ids.iter().copied());
        Ok(())
    }

    /// Returns whether `id` was playing
    pub fn leave(&mut self, id: u64) -> bool {
        self.in_game.remove(&id)
    }

    pub fn is_playing(&self, id: u64) -> bool {
        self.in_game.contains(&id)
    }

    pub fn playing_count(&self) -> usize {
        self.in_game.len()
    }
}
