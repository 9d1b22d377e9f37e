//! Staged-change log shared by the repositories of one unit of work.
//!
//! Repositories never write on their own. `add`, `update` and `delete` push a
//! [`StagedChange`] onto the session's log; [`Session::commit`] replays the log
//! in staging order inside a single transaction and reports how many rows the
//! store says it touched. Either every change lands or none does.

use std::fmt;
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use parking_lot::Mutex;
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};
use tracing::{debug, info, warn};

use crate::Result;

/// Outcome of applying one staged change inside the commit transaction.
pub(crate) struct Applied {
    pub(crate) rows: u64,
    /// Runs only after the transaction committed.
    pub(crate) on_commit: Option<Box<dyn FnOnce() + Send>>,
}

impl Applied {
    pub(crate) fn rows(rows: u64) -> Self {
        Self {
            rows,
            on_commit: None,
        }
    }
}

/// A mutation waiting for the next commit.
#[async_trait]
pub(crate) trait StagedChange: Send {
    /// Short label for logs, e.g. `insert projects`.
    fn describe(&self) -> String;

    async fn apply(self: Box<Self>, tx: &DatabaseTransaction) -> std::result::Result<Applied, DbErr>;
}

struct SessionInner {
    conn: DatabaseConnection,
    staged: Mutex<Vec<Box<dyn StagedChange>>>,
}

impl Drop for SessionInner {
    fn drop(&mut self) {
        let left = self.staged.get_mut().len();
        if left > 0 {
            debug!(discarded = left, "session dropped with unsaved changes");
        }
    }
}

/// Cheap-to-clone handle over a connection and its staged-change log.
///
/// Every clone shares the same log. Reads issued through the session always
/// see committed state, never the session's own staged changes.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("staged", &self.staged_len())
            .finish_non_exhaustive()
    }
}

impl Session {
    pub(crate) fn new(conn: DatabaseConnection) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                conn,
                staged: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Connection used for reads.
    #[must_use]
    pub fn conn(&self) -> &DatabaseConnection {
        &self.inner.conn
    }

    /// Number of changes waiting for the next commit.
    #[must_use]
    pub fn staged_len(&self) -> usize {
        self.inner.staged.lock().len()
    }

    /// Drop every staged change without touching the store.
    pub fn discard(&self) {
        let dropped = std::mem::take(&mut *self.inner.staged.lock());
        if !dropped.is_empty() {
            debug!(discarded = dropped.len(), "staged changes discarded");
        }
    }

    pub(crate) fn stage(&self, change: Box<dyn StagedChange>) {
        debug!(change = %change.describe(), "staged");
        self.inner.staged.lock().push(change);
    }

    /// Apply all staged changes in one transaction.
    ///
    /// Returns the number of rows the store reports as affected. The log is
    /// drained before the transaction starts, so a failed commit leaves the
    /// session empty and the store untouched.
    ///
    /// # Errors
    /// Returns an error if the transaction cannot be opened, any staged change
    /// fails, or the final commit fails. The transaction is rolled back first.
    pub async fn commit(&self) -> Result<u64> {
        let staged = std::mem::take(&mut *self.inner.staged.lock());
        if staged.is_empty() {
            debug!("commit with nothing staged");
            return Ok(0);
        }

        let total = staged.len();
        let tx = self.inner.conn.begin().await?;
        let mut affected = 0u64;
        let mut hooks = Vec::with_capacity(total);

        for change in staged {
            let what = change.describe();
            match change.apply(&tx).await {
                Ok(applied) => {
                    affected += applied.rows;
                    hooks.extend(applied.on_commit);
                }
                Err(err) => {
                    warn!(change = %what, error = %err, "staged change failed; rolling back");
                    if let Err(rb) = tx.rollback().await {
                        warn!(error = %rb, "rollback failed");
                    }
                    return Err(err.into());
                }
            }
        }

        tx.commit().await?;
        for hook in hooks {
            hook();
        }

        info!(changes = total, rows = affected, "unit of work committed");
        Ok(affected)
    }
}

/// Handle to a row staged for insertion.
///
/// Store-assigned values (identifiers, defaults) are only known once the
/// owning session commits; until then [`Pending::get`] yields `None`.
pub struct Pending<M> {
    slot: Arc<OnceLock<M>>,
}

impl<M> Pending<M> {
    pub(crate) fn new() -> Self {
        Self {
            slot: Arc::new(OnceLock::new()),
        }
    }

    pub(crate) fn slot(&self) -> Arc<OnceLock<M>> {
        Arc::clone(&self.slot)
    }

    /// The stored row, once committed.
    #[must_use]
    pub fn get(&self) -> Option<&M> {
        self.slot.get()
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl<M: Clone> Pending<M> {
    /// Owned copy of the stored row, once committed.
    #[must_use]
    pub fn cloned(&self) -> Option<M> {
        self.slot.get().cloned()
    }
}

impl<M> Clone for Pending<M> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<M: fmt::Debug> fmt::Debug for Pending<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pending").field(&self.slot.get()).finish()
    }
}
