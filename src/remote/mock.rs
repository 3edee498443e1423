//! remote::mock
//!
//! In-memory config store for deterministic testing.
//!
//! # Example
//!
//! ```
//! use herofig::core::model::Config;
//! use herofig::remote::mock::MockStore;
//! use herofig::remote::ConfigStore;
//!
//! let store = MockStore::with_config([("A", "1")].into_iter().collect());
//!
//! store.set(&[("B", "2")].into_iter().collect()).unwrap();
//!
//! let remote = store.fetch().unwrap();
//! assert_eq!(remote.get("A"), Some("1"));
//! assert_eq!(remote.get("B"), Some("2"));
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use super::traits::{ConfigStore, StoreError};
use crate::core::model::Config;

/// Mock store for testing.
///
/// Clones share state, so a test can keep a handle while handing another
/// to the code under test.
#[derive(Debug, Clone, Default)]
pub struct MockStore {
    inner: Arc<Mutex<MockStoreInner>>,
}

#[derive(Debug, Default)]
struct MockStoreInner {
    vars: Config,
    fail_on: Option<FailOn>,
    operations: Vec<MockOperation>,
}

/// Which operation should fail.
#[derive(Debug, Clone)]
pub enum FailOn {
    Fetch(StoreError),
    Set(StoreError),
}

/// Recorded operation for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOperation {
    Fetch,
    Get { key: String },
    Set { vars: Config },
}

impl MockStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `vars`.
    pub fn with_config(vars: Config) -> Self {
        let store = Self::new();
        store.lock().vars = vars;
        store
    }

    /// Make the next matching operation fail with the given error.
    pub fn fail_on(&self, fail: FailOn) {
        self.lock().fail_on = Some(fail);
    }

    /// Operations performed so far.
    pub fn operations(&self) -> Vec<MockOperation> {
        self.lock().operations.clone()
    }

    /// Current remote contents.
    pub fn vars(&self) -> Config {
        self.lock().vars.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MockStoreInner> {
        // A poisoned lock only means another test thread panicked.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ConfigStore for MockStore {
    fn name(&self) -> String {
        "mock".to_string()
    }

    fn fetch(&self) -> Result<Config, StoreError> {
        let mut inner = self.lock();
        inner.operations.push(MockOperation::Fetch);
        if let Some(FailOn::Fetch(err)) = &inner.fail_on {
            let err = err.clone();
            inner.fail_on = None;
            return Err(err);
        }
        Ok(inner.vars.clone())
    }

    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut inner = self.lock();
        inner.operations.push(MockOperation::Get {
            key: key.to_string(),
        });
        if let Some(FailOn::Fetch(err)) = &inner.fail_on {
            let err = err.clone();
            inner.fail_on = None;
            return Err(err);
        }
        Ok(inner.vars.get(key).map(str::to_string))
    }

    fn set(&self, vars: &Config) -> Result<(), StoreError> {
        let mut inner = self.lock();
        inner.operations.push(MockOperation::Set { vars: vars.clone() });
        if let Some(FailOn::Set(err)) = &inner.fail_on {
            let err = err.clone();
            inner.fail_on = None;
            return Err(err);
        }
        inner.vars.extend(vars.clone());
        Ok(())
    }
}
