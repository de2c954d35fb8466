//! Per-user key-value session state.
//!
//! A [`Session`] is the only mutable state a quiz request touches. Sessions live in a
//! [`SessionStore`] keyed by a random id that the browser carries in a cookie.

mod store;

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

pub use store::{DEFAULT_SESSION_TTL, SessionStore};

#[derive(Debug, Error)]
#[error("failed to encode session value `{key}`: {source}")]
pub struct SessionError {
    key: String,
    #[source]
    source: serde_json::Error,
}

/// One user's session values.
#[derive(Debug, Default, Clone)]
pub struct Session {
    values: HashMap<String, Value>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, replacing whatever was there.
    pub fn set<T: Serialize + ?Sized>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<(), SessionError> {
        let key = key.into();
        match serde_json::to_value(value) {
            Ok(value) => {
                self.values.insert(key, value);
                Ok(())
            }
            Err(source) => Err(SessionError { key, source }),
        }
    }

    /// Read `key`, falling back to `default` when it is absent or holds a value of
    /// another shape.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.values
            .get(key)
            .and_then(|value| T::deserialize(value).ok())
            .unwrap_or(default)
    }

    /// Remove `key` and return its value. A value of the wrong shape is dropped and
    /// reported as absent.
    pub fn pop<T: DeserializeOwned>(&mut self, key: &str) -> Option<T> {
        self.values
            .remove(key)
            .and_then(|value| serde_json::from_value(value).ok())
    }

    pub fn pop_or<T: DeserializeOwned>(&mut self, key: &str, default: T) -> T {
        self.pop(key).unwrap_or(default)
    }

    /// Run `f` against a staged copy and keep its writes only when it returns `Ok`.
    pub fn transaction<T, E>(
        &mut self,
        f: impl FnOnce(&mut Session) -> Result<T, E>,
    ) -> Result<T, E> {
        let mut staged = self.clone();
        let value = f(&mut staged)?;
        *self = staged;
        Ok(value)
    }

    /// Remove `key`, reporting whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.values.remove(key).is_some()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
