//! Live editor sessions, keyed by id, with idle eviction.
//!
//! Every read or write through the table refreshes the entry's last-touched
//! time. Entries untouched for longer than the idle TTL are dropped on the
//! next sweep, which runs on each insert and from a periodic task in `main`.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::editor::command::EditorCommand;
use crate::editor::session::{CommandError, EditorSession};

struct Entry {
    session: EditorSession,
    touched: Instant,
}

#[derive(Clone)]
pub struct SessionTable {
    entries: Arc<RwLock<HashMap<Uuid, Entry>>>,
    idle_ttl: Duration,
}

impl SessionTable {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl,
        }
    }

    pub async fn insert(&self, session: EditorSession) {
        let mut entries = self.entries.write().await;
        let now = Instant::now();
        evict_expired(&mut entries, now, self.idle_ttl);
        entries.insert(
            session.id,
            Entry {
                session,
                touched: now,
            },
        );
    }

    /// Copy of the session's current state.
    pub async fn get(&self, id: Uuid) -> Option<EditorSession> {
        let mut entries = self.entries.write().await;
        let entry = entries.get_mut(&id)?;
        entry.touched = Instant::now();
        Some(entry.session.clone())
    }

    /// Applies `command` under the write lock and stores the result. `None`
    /// when the session does not exist; a rejected command stores nothing.
    pub async fn apply(
        &self,
        id: Uuid,
        command: EditorCommand,
    ) -> Option<Result<EditorSession, CommandError>> {
        let mut entries = self.entries.write().await;
        let entry = entries.get_mut(&id)?;
        entry.touched = Instant::now();

        let result = entry.session.apply(command);
        if let Ok(next) = &result {
            entry.session = next.clone();
        }
        Some(result)
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.entries.write().await.remove(&id).is_some()
    }

    /// Drops sessions idle for longer than the TTL. Returns how many went.
    pub async fn evict_idle(&self) -> usize {
        let mut entries = self.entries.write().await;
        evict_expired(&mut entries, Instant::now(), self.idle_ttl)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Spawns a task that sweeps the table every `period`.
    pub fn spawn_sweeper(&self, period: Duration) -> tokio::task::JoinHandle<()> {
        let table = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                let evicted = table.evict_idle().await;
                if evicted > 0 {
                    info!(evicted, "Evicted idle editor sessions");
                }
            }
        })
    }
}

fn evict_expired(entries: &mut HashMap<Uuid, Entry>, now: Instant, ttl: Duration) -> usize {
    let before = entries.len();
    entries.retain(|id, entry| {
        let keep = now.duration_since(entry.touched) <= ttl;
        if !keep {
            debug!(session_id = %id, "Session idle past TTL");
        }
        keep
    });
    before - entries.len()
}
