//! Autosave coordinator.
//!
//! One task per session. The task idles until a dirty notification arrives,
//! then holds a debounce window that restarts on every further notification,
//! coalescing a burst of edits into a single write. When the window closes it
//! snapshots the document and revision under the session lock and writes the
//! snapshot to the document store.
//!
//! Completion rules:
//! - success with the revision unchanged: clear the dirty flag, back to idle;
//! - success but edits landed mid-write: leave the flag set; the edit that
//!   bumped the revision also queued a notification, so the loop immediately
//!   re-enters the debounce window and writes again (no lost updates);
//! - failure: leave the flag set, log, enter the error phase; the next edit
//!   or a manual save re-triggers. No automatic retry.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{mpsc, watch, Mutex};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::form::store::FormState;
use crate::persistence::DocumentStore;

/// Observable coordinator phase, reported alongside the document so clients
/// can show save status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AutosavePhase {
    Idle,
    PendingWrite,
    Writing,
    Error,
}

/// Handle held by the session. Dropping the handle stops the task.
pub struct AutosaveHandle {
    dirty_tx: mpsc::UnboundedSender<()>,
    phase_rx: watch::Receiver<AutosavePhase>,
}

impl AutosaveHandle {
    /// Signals that a mutation just dirtied the form state.
    pub fn notify_dirty(&self) {
        // The task only stops when the session is dropped; a send failure
        // then has nothing left to save.
        let _ = self.dirty_tx.send(());
    }

    pub fn phase(&self) -> AutosavePhase {
        *self.phase_rx.borrow()
    }
}

/// Spawns the autosave task for one session.
pub fn spawn(
    user_id: Uuid,
    form: Arc<Mutex<FormState>>,
    store: Arc<dyn DocumentStore>,
    delay: Duration,
) -> AutosaveHandle {
    let (dirty_tx, dirty_rx) = mpsc::unbounded_channel();
    let (phase_tx, phase_rx) = watch::channel(AutosavePhase::Idle);

    tokio::spawn(run(user_id, form, store, delay, dirty_rx, phase_tx));

    AutosaveHandle { dirty_tx, phase_rx }
}

async fn run(
    user_id: Uuid,
    form: Arc<Mutex<FormState>>,
    store: Arc<dyn DocumentStore>,
    delay: Duration,
    mut dirty_rx: mpsc::UnboundedReceiver<()>,
    phase_tx: watch::Sender<AutosavePhase>,
) {
    'idle: loop {
        if dirty_rx.recv().await.is_none() {
            break 'idle;
        }
        let _ = phase_tx.send(AutosavePhase::PendingWrite);

        // Debounce: every further notification restarts the window.
        loop {
            match tokio::time::timeout(delay, dirty_rx.recv()).await {
                Ok(Some(())) => continue,
                Ok(None) => break 'idle,
                Err(_) => break,
            }
        }

        let (snapshot, revision) = {
            let state = form.lock().await;
            if !state.is_dirty {
                // A manual save or reset beat us to it; nothing to write.
                let _ = phase_tx.send(AutosavePhase::Idle);
                continue 'idle;
            }
            (state.document.clone(), state.revision)
        };

        let _ = phase_tx.send(AutosavePhase::Writing);
        match store.write(user_id, &snapshot).await {
            Ok(()) => {
                let mut state = form.lock().await;
                if state.revision == revision {
                    state.is_dirty = false;
                    let _ = phase_tx.send(AutosavePhase::Idle);
                    debug!(user_id = %user_id, revision, "autosave write committed");
                } else {
                    // Stale snapshot: the mid-write edit already queued a
                    // dirty notification, so the outer loop will start a new
                    // debounce window right away.
                    let _ = phase_tx.send(AutosavePhase::PendingWrite);
                    debug!(
                        user_id = %user_id,
                        written = revision,
                        current = state.revision,
                        "edits landed during autosave write; rescheduling"
                    );
                }
            }
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "autosave write failed; document stays dirty");
                let _ = phase_tx.send(AutosavePhase::Error);
            }
        }
    }
    debug!(user_id = %user_id, "autosave task stopped");
}
