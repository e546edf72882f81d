use crate::analysis::PersonaProfile;
use crate::error::StoreError;
use crate::results::Page;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Persistence collaborator. The pipeline only saves and loads through
/// these calls and never sees storage details.
pub trait ContentStore: Send + Sync {
    fn save_page(&self, page: &Page, owner_id: &str) -> Result<(), StoreError>;

    /// Replaces any earlier profile for the owner
    fn save_profile(&self, profile: &PersonaProfile, owner_id: &str) -> Result<(), StoreError>;

    fn get_pages(&self, owner_id: &str) -> Result<Vec<Page>, StoreError>;
}

/// Process-local store
#[derive(Debug, Default)]
pub struct MemoryStore {
    pages: Mutex<HashMap<String, Vec<Page>>>,
    profiles: Mutex<HashMap<String, PersonaProfile>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(&self, owner_id: &str) -> Result<Option<PersonaProfile>, StoreError> {
        Ok(lock(&self.profiles)?.get(owner_id).cloned())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, StoreError> {
    mutex
        .lock()
        .map_err(|_| StoreError::Unavailable("store lock poisoned".into()))
}

impl ContentStore for MemoryStore {
    /// Pages are keyed by URL; saving the same URL again replaces it
    fn save_page(&self, page: &Page, owner_id: &str) -> Result<(), StoreError> {
        let mut pages = lock(&self.pages)?;
        let owned = pages.entry(owner_id.to_string()).or_default();
        match owned.iter_mut().find(|p| p.url == page.url) {
            Some(existing) => *existing = page.clone(),
            None => owned.push(page.clone()),
        }
        Ok(())
    }

    fn save_profile(&self, profile: &PersonaProfile, owner_id: &str) -> Result<(), StoreError> {
        lock(&self.profiles)?.insert(owner_id.to_string(), profile.clone());
        Ok(())
    }

    fn get_pages(&self, owner_id: &str) -> Result<Vec<Page>, StoreError> {
        Ok(lock(&self.pages)?
            .get(owner_id)
            .cloned()
            .unwrap_or_default())
    }
}
