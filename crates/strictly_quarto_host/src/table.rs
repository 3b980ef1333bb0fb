//! Challenge lifecycle and move submission over a [`GameStore`].
//!
//! Every read-modify-write of a record runs under a lock scoped to its
//! game id, so two moves on the same game never interleave their
//! load, apply, store round trips. Different games proceed independently.
//! A lock is tracked only while some caller holds or awaits it.

use crate::error::{StoreError, TableError};
use crate::record::{GameId, TableRecord, game_id};
use crate::store::GameStore;
use rand::Rng;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use strictly_quarto::{Move, MoveError, MoveKind, Ruleset, new_game, try_play};
use tracing::{debug, info, instrument, warn};

type IdLock = Arc<Mutex<()>>;

/// Orchestrates challenges and games stored in `S`.
#[derive(Debug, Clone)]
pub struct TableService<S> {
    store: S,
    locks: Arc<Mutex<HashMap<GameId, IdLock>>>,
}

impl<S: GameStore> TableService<S> {
    /// Creates a service over a store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn lock_for(&self, id: &str) -> Result<IdLock, StoreError> {
        let mut locks = self.locks.lock()?;
        Ok(locks.entry(id.to_string()).or_default().clone())
    }

    /// Drops the map entry once no other caller holds a handle to it.
    ///
    /// Handles are only cloned under the map lock, so a count of two
    /// (the map's and `lock`) means nobody else can be waiting on it.
    fn release(&self, id: &str, lock: IdLock) -> Result<(), StoreError> {
        let mut locks = self.locks.lock()?;
        if Arc::strong_count(&lock) == 2 {
            locks.remove(id);
        }
        Ok(())
    }

    /// Runs `f` while holding the lock for `id`.
    fn serialized<T>(
        &self,
        id: &str,
        f: impl FnOnce() -> Result<T, TableError>,
    ) -> Result<T, TableError> {
        let lock = self.lock_for(id)?;
        let result = match lock.lock() {
            Ok(_guard) => f(),
            Err(err) => Err(StoreError::from(err).into()),
        };
        self.release(id, lock)?;
        result
    }

    fn load(&self, id: &str) -> Result<TableRecord, TableError> {
        self.store
            .get(id)?
            .ok_or_else(|| TableError::NotFound(id.to_string()))
    }

    fn load_pending(&self, id: &str) -> Result<TableRecord, TableError> {
        let record = self.load(id)?;
        if *record.accepted() {
            warn!(id, "Challenge already accepted");
            return Err(TableError::AlreadyAccepted(id.to_string()));
        }
        Ok(record)
    }

    /// Issues a challenge and returns the id of the new record.
    ///
    /// # Errors
    ///
    /// [`TableError::AlreadyExists`] if the pair already has a record.
    #[instrument(skip(self))]
    pub fn challenge(
        &self,
        challenger: &str,
        opponent: &str,
        channel: &str,
    ) -> Result<GameId, TableError> {
        let id = game_id(challenger, opponent);
        self.serialized(&id, || {
            if self.store.get(&id)?.is_some() {
                warn!(%id, "Challenge already exists");
                return Err(TableError::AlreadyExists(id.clone()));
            }

            let record = TableRecord::new(
                [challenger.to_string(), opponent.to_string()],
                channel.to_string(),
            );
            self.store.set(&id, record)?;
            info!(%id, "Challenge issued");
            Ok(())
        })?;
        Ok(id)
    }

    /// Picks the rules for a pending challenge.
    ///
    /// # Errors
    ///
    /// [`TableError::NotFound`] or [`TableError::AlreadyAccepted`].
    #[instrument(skip(self))]
    pub fn choose_rules(&self, id: &str, ruleset: Ruleset) -> Result<TableRecord, TableError> {
        self.serialized(id, || {
            let mut record = self.load_pending(id)?;
            record.set_ruleset(ruleset);
            self.store.set(id, record.clone())?;
            debug!(%ruleset, "Rules chosen");
            Ok(record)
        })
    }

    /// Accepts a challenge, seating the players in random order.
    ///
    /// # Errors
    ///
    /// [`TableError::NotFound`] or [`TableError::AlreadyAccepted`].
    #[instrument(skip(self, rng))]
    pub fn accept<R: Rng + ?Sized>(&self, id: &str, rng: &mut R) -> Result<TableRecord, TableError> {
        self.serialized(id, || {
            let mut record = self.load_pending(id)?;
            let [challenger, opponent] = record.players().clone();
            let (first, second) = if rng.random_bool(0.5) {
                (challenger, opponent)
            } else {
                (opponent, challenger)
            };
            info!(%id, %first, "Challenge accepted");

            record.start(new_game(first, second, *record.ruleset()));
            self.store.set(id, record.clone())?;
            Ok(record)
        })
    }

    /// Declines a challenge, deleting its record.
    ///
    /// # Errors
    ///
    /// [`TableError::NotFound`] if no record exists.
    #[instrument(skip(self))]
    pub fn decline(&self, id: &str) -> Result<(), TableError> {
        self.serialized(id, || {
            self.load(id)?;
            self.store.delete(id)?;
            info!(id, "Challenge declined");
            Ok(())
        })
    }

    /// The current record for `id`.
    ///
    /// # Errors
    ///
    /// [`TableError::NotFound`] if no record exists.
    #[instrument(skip(self))]
    pub fn status(&self, id: &str) -> Result<TableRecord, TableError> {
        self.load(id)
    }

    /// Applies a move to the game under `id` and stores the result.
    ///
    /// A failed claim is remembered in the record's `tried_for_victory`
    /// flag even though the move itself is rejected. Further claims are
    /// refused until the next accepted offer clears it.
    ///
    /// # Errors
    ///
    /// - [`TableError::NotFound`] if no record exists
    /// - [`TableError::NotAccepted`] if the challenge is still pending
    /// - [`TableError::GameOver`] if the game has finished
    /// - [`TableError::AlreadyTriedForVictory`] for a repeated failed claim
    /// - [`TableError::Rejected`] if the engine refuses the move
    #[instrument(skip(self, action), fields(action = %action))]
    pub fn submit(&self, id: &str, action: &Move) -> Result<TableRecord, TableError> {
        self.serialized(id, || {
            let mut record = self.load(id)?;
            let Some(game) = record.game().clone() else {
                return Err(TableError::NotAccepted(id.to_string()));
            };
            if game.game_over() {
                warn!(id, "Move on finished game");
                return Err(TableError::GameOver(id.to_string()));
            }
            if action.kind() == MoveKind::Claim && *record.tried_for_victory() {
                warn!(id, "Repeated claim");
                return Err(TableError::AlreadyTriedForVictory(id.to_string()));
            }

            match try_play(&game, action) {
                Ok(next) => {
                    let tried = match action.kind() {
                        MoveKind::OfferPiece(_) => false,
                        _ => *record.tried_for_victory(),
                    };
                    record.update(next, tried);
                    self.store.set(id, record.clone())?;
                    debug!(id, "Move stored");
                    Ok(record)
                }
                Err(MoveError::NoWinToClaim) => {
                    record.update(game, true);
                    self.store.set(id, record)?;
                    warn!(id, "Claim failed");
                    Err(TableError::Rejected(MoveError::NoWinToClaim))
                }
                Err(err) => {
                    warn!(id, error = %err, "Move rejected");
                    Err(err.into())
                }
            }
        })
    }
}
