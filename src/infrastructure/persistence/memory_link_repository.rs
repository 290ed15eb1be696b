//! In-process implementation of link repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;

use crate::domain::entities::{ClickCounters, Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Link repository backed by a map behind a single async lock.
///
/// Used for development without PostgreSQL and for HTTP tests. Each write takes
/// the write lock for the whole check-and-modify step, which gives the same
/// guarantees as the database: one winner per code and no lost increments.
/// Data does not survive a restart.
#[derive(Default)]
pub struct MemoryLinkRepository {
    inner: RwLock<Store>,
}

#[derive(Default)]
struct Store {
    links: HashMap<String, Stored>,
    next_seq: u64,
}

/// Insertion sequence breaks `created_at` ties when listing.
struct Stored {
    link: Link,
    seq: u64,
}

impl MemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut guard = self.inner.write().await;
        let store = &mut *guard;
        let seq = store.next_seq;

        match store.links.entry(new_link.code) {
            Entry::Occupied(entry) => Err(AppError::conflict(
                "Code already exists",
                json!({ "code": entry.key() }),
            )),
            Entry::Vacant(entry) => {
                let link = Link::new(entry.key().clone(), new_link.target, 0, None, Utc::now());
                entry.insert(Stored {
                    link: link.clone(),
                    seq,
                });
                store.next_seq += 1;
                Ok(link)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let store = self.inner.read().await;
        Ok(store.links.get(code).map(|stored| stored.link.clone()))
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let store = self.inner.read().await;

        let mut entries: Vec<&Stored> = store.links.values().collect();
        entries.sort_by(|a, b| {
            b.link
                .created_at
                .cmp(&a.link.created_at)
                .then(b.seq.cmp(&a.seq))
        });

        Ok(entries.into_iter().map(|stored| stored.link.clone()).collect())
    }

    async fn increment_click(&self, code: &str) -> Result<Option<ClickCounters>, AppError> {
        let mut store = self.inner.write().await;

        let Some(stored) = store.links.get_mut(code) else {
            return Ok(None);
        };

        let now = Utc::now();
        let last_clicked = stored.link.last_clicked.map_or(now, |prev| prev.max(now));

        stored.link.clicks += 1;
        stored.link.last_clicked = Some(last_clicked);

        Ok(Some(ClickCounters {
            clicks: stored.link.clicks,
            last_clicked,
        }))
    }

    async fn delete(&self, code: &str) -> Result<Option<Link>, AppError> {
        let mut store = self.inner.write().await;
        Ok(store.links.remove(code).map(|stored| stored.link))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
