//! Session store registry.
//!
//! Replaces ambient singletons: one registry value owns at most one instance
//! of each store and is passed to whoever needs it. Each store is built on
//! first access using the registry config.

use crate::config::StoreConfig;
use crate::store::auth_store::AuthStore;
use crate::store::note_store::NoteStore;
use crate::store::transaction_store::TransactionStore;
use log::debug;

#[derive(Debug, Default)]
pub struct StoreRegistry {
    config: StoreConfig,
    auth: Option<AuthStore>,
    notes: Option<NoteStore>,
    transactions: Option<TransactionStore>,
}

impl StoreRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn auth(&mut self) -> &mut AuthStore {
        self.auth.get_or_insert_with(|| {
            debug!("event=store_init module=registry status=ok store=auth");
            AuthStore::new()
        })
    }

    pub fn notes(&mut self) -> &mut NoteStore {
        let seed = self.config.seed_defaults;
        self.notes.get_or_insert_with(|| {
            debug!("event=store_init module=registry status=ok store=note seed={seed}");
            if seed {
                NoteStore::new()
            } else {
                NoteStore::empty()
            }
        })
    }

    pub fn transactions(&mut self) -> &mut TransactionStore {
        let seed = self.config.seed_defaults;
        self.transactions.get_or_insert_with(|| {
            debug!("event=store_init module=registry status=ok store=transaction seed={seed}");
            if seed {
                TransactionStore::new()
            } else {
                TransactionStore::empty()
            }
        })
    }

    /// Returns which stores have been constructed so far.
    pub fn initialized(&self) -> InitializedStores {
        InitializedStores {
            auth: self.auth.is_some(),
            notes: self.notes.is_some(),
            transactions: self.transactions.is_some(),
        }
    }
}

/// Construction state of each store in a registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitializedStores {
    pub auth: bool,
    pub notes: bool,
    pub transactions: bool,
}

#[cfg(test)]
mod tests {
    use super::{InitializedStores, StoreRegistry};
    use crate::config::StoreConfig;

    #[test]
    fn stores_are_built_lazily() {
        let mut registry = StoreRegistry::new();
        assert_eq!(registry.initialized(), InitializedStores::default());

        registry.notes();
        assert_eq!(
            registry.initialized(),
            InitializedStores {
                notes: true,
                ..InitializedStores::default()
            }
        );
    }

    #[test]
    fn repeated_access_returns_same_store() {
        let mut registry = StoreRegistry::new();
        let first_id = registry.notes().notes()[0].id;
        assert_eq!(registry.notes().notes()[0].id, first_id);
        assert_eq!(registry.notes().len(), 1);
    }

    #[test]
    fn unseeded_config_builds_empty_stores() {
        let mut registry = StoreRegistry::with_config(StoreConfig {
            seed_defaults: false,
        });
        assert!(registry.notes().is_empty());
        assert!(registry.transactions().is_empty());
    }
}
