use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::Serialize;
use tokio::sync::OnceCell;
use tokio::task::JoinHandle;

use super::roster::Roster;
use crate::api::source::PlayerSource;
use crate::domain::Title;
use crate::errors::GlanceError;

/// Process-wide store of titled rosters.
///
/// Each roster is fetched on first use and kept until the process exits.
/// Concurrent first callers share a single upstream request. A failed load
/// leaves the slot empty so the next caller retries.
pub struct PlayerDirectory<S> {
    source: Arc<S>,
    index_depth: usize,
    slots: [Slot; Title::COUNT],
}

#[derive(Default)]
struct Slot {
    roster: OnceCell<Arc<Roster>>,
    loading: AtomicBool,
    last_error: Mutex<Option<String>>,
}

impl Slot {
    fn last_error(&self) -> Option<String> {
        self.last_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_last_error(&self, error: Option<String>) {
        *self.last_error.lock().unwrap_or_else(PoisonError::into_inner) = error;
    }
}

/// Clears the loading flag even when the load future is dropped mid-fetch
struct LoadingGuard<'a>(&'a AtomicBool);

impl<'a> LoadingGuard<'a> {
    fn start(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterStatus {
    pub title: Title,
    pub loaded: bool,
    pub loading: bool,
    pub players: Option<usize>,
    pub loaded_at: Option<DateTime<Utc>>,
    /// Message of the most recent failed load, cleared by a successful one
    pub last_error: Option<String>,
}

impl<S: PlayerSource> PlayerDirectory<S> {
    pub fn new(source: Arc<S>, index_depth: usize) -> Self {
        Self {
            source,
            index_depth,
            slots: std::array::from_fn(|_| Slot::default()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Roster for `title`, loading it if this is the first request
    pub async fn roster(&self, title: Title) -> Result<Arc<Roster>, GlanceError> {
        let roster = self
            .slot(title)
            .roster
            .get_or_try_init(|| self.load(title))
            .await?;
        Ok(Arc::clone(roster))
    }

    /// Already loaded roster, without triggering a fetch
    pub fn loaded(&self, title: Title) -> Option<Arc<Roster>> {
        self.slot(title).roster.get().cloned()
    }

    /// Start loading `title` in the background. Failures are logged only.
    pub fn preload(self: &Arc<Self>, title: Title) -> JoinHandle<()> {
        let directory = Arc::clone(self);
        tokio::spawn(async move {
            if let Err(e) = directory.roster(title).await {
                warn!("Preloading {} roster failed: {}", title, e);
            }
        })
    }

    pub fn status(&self) -> Vec<RosterStatus> {
        Title::ALL
            .into_iter()
            .map(|title| {
                let slot = self.slot(title);
                let roster = slot.roster.get();
                RosterStatus {
                    title,
                    loaded: roster.is_some(),
                    loading: slot.loading.load(Ordering::SeqCst),
                    players: roster.map(|r| r.len()),
                    loaded_at: roster.map(|r| r.loaded_at()),
                    last_error: slot.last_error(),
                }
            })
            .collect()
    }

    async fn load(&self, title: Title) -> Result<Arc<Roster>, GlanceError> {
        let slot = self.slot(title);
        let _loading = LoadingGuard::start(&slot.loading);
        info!("Loading {} roster...", title);

        let players = match self.source.titled_players(title).await {
            Ok(players) => players,
            Err(e) => {
                slot.set_last_error(Some(e.to_string()));
                return Err(e);
            }
        };
        slot.set_last_error(None);

        let roster = Roster::new(title, players, self.index_depth);
        info!("Loaded {} {} players", roster.len(), title);
        Ok(Arc::new(roster))
    }

    fn slot(&self, title: Title) -> &Slot {
        &self.slots[title as usize]
    }
}
