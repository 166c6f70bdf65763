use gloo_console::error as console_error;
use gloo_storage::{errors::StorageError, LocalStorage, Storage};

use serde::{Deserialize, Serialize};
use tracing::debug;

use common::preferences::{Persist, PersistedPreferences, PreferenceStore};

pub const PREFERENCES_KEY: &str = "preferences";

pub fn set_local_storage<T>(key: &str, value: T) -> ()
where
    T: Serialize,
{
    let key = format!("portfolio_{}", key);

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

pub fn get_local_storage<T>(key: &str) -> anyhow::Result<T>
where
    T: for<'a> Deserialize<'a>,
{
    let key = format!("portfolio_{}", key);

    LocalStorage::get(key.clone()).map_err(|err| {
        console_error!(format!("Failed to fetch local storage {key}: {err}"));
        anyhow::Error::msg("Local storage failure, see console log")
    })
}

// like get_local_storage(), but a key that was never written is the normal first-visit
// case and falls back to the default without complaining
pub fn try_local_storage<T>(key: &str) -> T
where
    T: Default + for<'a> Deserialize<'a>,
{
    match LocalStorage::get(format!("portfolio_{}", key)) {
        Ok(val) => val,
        Err(StorageError::KeyNotFound(_)) => {
            debug!("no stored value for {key}, using defaults");
            T::default()
        }
        Err(_) => get_local_storage(key).unwrap_or_default(),
    }
}

// persistence hook for the preference store
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStoragePersist;

impl Persist for LocalStoragePersist {
    fn persist(&self, prefs: &PersistedPreferences) {
        set_local_storage(PREFERENCES_KEY, *prefs);
    }
}

pub type Preferences = PreferenceStore<LocalStoragePersist>;

pub fn load_preferences() -> Preferences {
    let saved: PersistedPreferences = try_local_storage(PREFERENCES_KEY);

    PreferenceStore::restore(LocalStoragePersist, saved)
}
