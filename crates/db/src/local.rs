//! Local durable [`Store`] backed by a single JSON document.
//!
//! The whole document is held in memory behind a mutex and rewritten on
//! every mutation (temp file + rename). A mutation is only applied in memory
//! after the write succeeded, so a failed write leaves no trace.
//!
//! The default catalog is seeded on the first-ever menu read.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use ahlam_core::booking::{Booking, BookingStatus, NewBooking};
use ahlam_core::error::CoreError;
use ahlam_core::menu::{default_catalog, MenuItem, NewMenuItem};
use ahlam_core::store::{apply_transition, Store};
use ahlam_core::types::{new_record_id, now_millis, RecordId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Document {
    #[serde(default)]
    bookings: Vec<Booking>,
    /// `None` until the menu has been seeded or written.
    #[serde(default)]
    menu: Option<Vec<MenuItem>>,
}

#[derive(Debug)]
pub struct LocalStore {
    path: PathBuf,
    doc: Mutex<Document>,
}

fn io_unavailable(path: &Path, err: std::io::Error) -> CoreError {
    tracing::error!(path = %path.display(), error = %err, "Local store I/O error");
    CoreError::Unavailable(format!("local store at {} is not accessible", path.display()))
}

impl LocalStore {
    /// Open the store at `path`, creating an empty document if the file
    /// does not exist yet.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let path = path.into();
        let doc = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                CoreError::Internal(format!("corrupt local store {}: {e}", path.display()))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => Document::default(),
            Err(e) => return Err(io_unavailable(&path, e)),
        };
        tracing::info!(path = %path.display(), "Local store opened");
        Ok(Self {
            path,
            doc: Mutex::new(doc),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, doc: &Document) -> Result<(), CoreError> {
        let bytes = serde_json::to_vec_pretty(doc)
            .map_err(|e| CoreError::Internal(format!("failed to encode local store: {e}")))?;
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| io_unavailable(&tmp, e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| io_unavailable(&self.path, e))
    }

    /// Apply `change` to a copy of the document, persist it, and only then
    /// make it visible.
    async fn mutate<T>(
        &self,
        change: impl FnOnce(&mut Document) -> Result<T, CoreError>,
    ) -> Result<T, CoreError> {
        let mut doc = self.doc.lock().await;
        let mut next = doc.clone();
        let out = change(&mut next)?;
        self.persist(&next).await?;
        *doc = next;
        Ok(out)
    }
}

/// The menu, seeded with the default catalog if it was never written.
fn menu_of(doc: &mut Document) -> &mut Vec<MenuItem> {
    doc.menu.get_or_insert_with(|| {
        default_catalog()
            .into_iter()
            .map(|item| item.with_id(new_record_id()))
            .collect()
    })
}

#[async_trait]
impl Store for LocalStore {
    async fn list_bookings(&self) -> Result<Vec<Booking>, CoreError> {
        Ok(self.doc.lock().await.bookings.clone())
    }

    async fn find_booking(&self, id: RecordId) -> Result<Option<Booking>, CoreError> {
        let doc = self.doc.lock().await;
        Ok(doc.bookings.iter().find(|b| b.id == id).cloned())
    }

    async fn create_booking(&self, input: NewBooking) -> Result<Booking, CoreError> {
        let booking = input.into_booking(new_record_id(), now_millis());
        self.mutate(|doc| {
            doc.bookings.push(booking.clone());
            Ok(booking)
        })
        .await
    }

    async fn set_booking_status(
        &self,
        id: RecordId,
        expected: BookingStatus,
        status: BookingStatus,
    ) -> Result<Booking, CoreError> {
        self.mutate(|doc| {
            let booking = doc
                .bookings
                .iter_mut()
                .find(|b| b.id == id)
                .ok_or_else(|| CoreError::not_found("Booking", id))?;
            apply_transition(booking, expected, status)?;
            Ok(booking.clone())
        })
        .await
    }

    async fn list_menu_items(&self) -> Result<Vec<MenuItem>, CoreError> {
        {
            let doc = self.doc.lock().await;
            if let Some(menu) = &doc.menu {
                return Ok(menu.clone());
            }
        }
        tracing::info!(path = %self.path.display(), "Seeding default menu catalog");
        // Another caller may have seeded between the two locks.
        self.mutate(|doc| Ok(menu_of(doc).clone())).await
    }

    async fn create_menu_item(&self, input: NewMenuItem) -> Result<MenuItem, CoreError> {
        let item = input.with_id(new_record_id());
        self.mutate(|doc| {
            menu_of(doc).push(item.clone());
            Ok(item)
        })
        .await
    }

    async fn update_menu_item(&self, item: MenuItem) -> Result<MenuItem, CoreError> {
        self.mutate(|doc| {
            let slot = menu_of(doc)
                .iter_mut()
                .find(|existing| existing.id == item.id)
                .ok_or_else(|| CoreError::not_found("MenuItem", item.id))?;
            *slot = item.clone();
            Ok(item)
        })
        .await
    }

    async fn delete_menu_item(&self, id: RecordId) -> Result<(), CoreError> {
        {
            let doc = self.doc.lock().await;
            if let Some(menu) = &doc.menu {
                if menu.iter().all(|item| item.id != id) {
                    return Ok(());
                }
            }
        }
        self.mutate(|doc| {
            menu_of(doc).retain(|item| item.id != id);
            Ok(())
        })
        .await
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        tokio::fs::metadata(dir)
            .await
            .map(|_| ())
            .map_err(|e| io_unavailable(dir, e))
    }
}

#[cfg(test)]
mod tests {
    use ahlam_core::menu::MenuCategory;
    use ahlam_core::types::hhmm;
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    use super::*;

    fn new_booking() -> NewBooking {
        NewBooking {
            full_name: "Meena S".into(),
            email: "meena@example.com".into(),
            phone: "07700 900789".into(),
            date: NaiveDate::from_ymd_opt(2026, 10, 31).unwrap(),
            time: hhmm::parse("19:00").unwrap(),
            guests: 6,
        }
    }

    #[tokio::test]
    async fn first_menu_read_seeds_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let store = LocalStore::open(&path).await.unwrap();
        let seeded = store.list_menu_items().await.unwrap();
        assert_eq!(seeded.len(), default_catalog().len());

        let reopened = LocalStore::open(&path).await.unwrap();
        assert_eq!(reopened.list_menu_items().await.unwrap(), seeded);
    }

    #[tokio::test]
    async fn emptied_menu_is_not_reseeded() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path().join("store.json")).await.unwrap();
        for item in store.list_menu_items().await.unwrap() {
            store.delete_menu_item(item.id).await.unwrap();
        }
        assert!(store.list_menu_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn bookings_survive_reopen_with_status() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let store = LocalStore::open(&path).await.unwrap();
        let booking = store.create_booking(new_booking()).await.unwrap();
        store
            .set_booking_status(booking.id, BookingStatus::Pending, BookingStatus::Declined)
            .await
            .unwrap();

        let reopened = LocalStore::open(&path).await.unwrap();
        let found = reopened.find_booking(booking.id).await.unwrap().unwrap();
        assert_eq!(found.status, BookingStatus::Declined);
        assert_eq!(found.created_at, booking.created_at);
    }

    #[tokio::test]
    async fn lost_race_is_already_decided() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path().join("store.json")).await.unwrap();
        let booking = store.create_booking(new_booking()).await.unwrap();

        store
            .set_booking_status(booking.id, BookingStatus::Pending, BookingStatus::Confirmed)
            .await
            .unwrap();
        assert_matches!(
            store
                .set_booking_status(booking.id, BookingStatus::Pending, BookingStatus::Declined)
                .await,
            Err(CoreError::AlreadyDecided { .. })
        );
    }

    #[tokio::test]
    async fn failed_write_leaves_no_partial_state() {
        let dir = tempfile::tempdir().unwrap();
        // A directory at the temp-file location makes every write fail.
        let path = dir.path().join("store.json");
        std::fs::create_dir(path.with_extension("tmp")).unwrap();

        let store = LocalStore::open(&path).await.unwrap();
        assert_matches!(
            store.create_booking(new_booking()).await,
            Err(CoreError::Unavailable(_))
        );
        assert!(store.list_bookings().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_and_delete_menu_items() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path().join("store.json")).await.unwrap();
        let item = store
            .create_menu_item(NewMenuItem {
                name: "Kothu Parotta".into(),
                description: String::new(),
                price: "£8.00".into(),
                image: String::new(),
                category: MenuCategory::SouthIndianMain,
                is_vegan: false,
                is_chef_special: true,
            })
            .await
            .unwrap();

        let mut edited = item.clone();
        edited.price = "£8.50".into();
        store.update_menu_item(edited.clone()).await.unwrap();
        let menu = store.list_menu_items().await.unwrap();
        // Writing first still seeds the default catalog underneath.
        assert_eq!(menu.len(), default_catalog().len() + 1);
        assert!(menu.contains(&edited));

        store.delete_menu_item(item.id).await.unwrap();
        store.delete_menu_item(item.id).await.unwrap();
        let menu = store.list_menu_items().await.unwrap();
        assert!(menu.iter().all(|i| i.id != item.id));
        assert_eq!(menu.len(), default_catalog().len());
    }

    #[tokio::test]
    async fn deleting_unknown_item_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let store = LocalStore::open(&path).await.unwrap();
        store.list_menu_items().await.unwrap();

        std::fs::write(&path, b"sentinel").unwrap();
        store.delete_menu_item(new_record_id()).await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"sentinel");
        assert_eq!(
            store.list_menu_items().await.unwrap().len(),
            default_catalog().len()
        );
    }

    #[tokio::test]
    async fn deleting_before_first_read_persists_the_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let store = LocalStore::open(&path).await.unwrap();
        store.delete_menu_item(new_record_id()).await.unwrap();

        let reopened = LocalStore::open(&path).await.unwrap();
        assert_eq!(
            reopened.list_menu_items().await.unwrap(),
            store.list_menu_items().await.unwrap()
        );
    }

    #[tokio::test]
    async fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, b"{not json").unwrap();
        assert_matches!(LocalStore::open(&path).await, Err(CoreError::Internal(_)));
    }
}
