//! Session Module
//!
//! Open / read / close over one controller connection.
//!
//! ## Responsibilities
//! - Open the configured controller service (or wrap a caller's connection)
//! - Read a key and decode it to a number
//! - Release the connection on close
//!
//! A `Session` does not serialize access. Share one connection across
//! threads through `SharedSession`.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::Config;
use crate::error::{Result, SmcError};
use crate::transport::{read_key, KeyReading, StructuredCall, SystemConnection};

/// A controller session
#[derive(Debug)]
pub struct Session<C: StructuredCall> {
    conn: C,
}

impl Session<SystemConnection> {
    /// Open the service named in `config`
    ///
    /// Fails with `SmcError::ConnectionUnavailable` when the service cannot
    /// be matched or opened, and always off macOS.
    pub fn open(config: &Config) -> Result<Self> {
        config.validate()?;
        let conn = SystemConnection::open(&config.service_name)?;
        tracing::debug!("Session opened on {}", config.service_name);
        Ok(Self { conn })
    }
}

impl<C: StructuredCall> Session<C> {
    /// Wrap an already-open connection
    pub fn with_connection(conn: C) -> Self {
        Self { conn }
    }

    /// Read `key` and decode it
    ///
    /// Unknown encodings decode to `0.0`; only transport failures are errors.
    pub fn read(&self, key: &str) -> Result<f64> {
        Ok(self.read_raw(key)?.value())
    }

    /// Read `key` without decoding
    pub fn read_raw(&self, key: &str) -> Result<KeyReading> {
        read_key(&self.conn, key)
    }

    /// Read several keys in order, one independent result per key
    pub fn read_many<'k, I>(&self, keys: I) -> Vec<(String, Result<f64>)>
    where
        I: IntoIterator<Item = &'k str>,
    {
        keys.into_iter()
            .map(|key| (key.to_string(), self.read(key)))
            .collect()
    }

    /// The underlying connection
    pub fn connection(&self) -> &C {
        &self.conn
    }

    /// Move the session behind a mutex for use from several threads
    pub fn into_shared(self) -> SharedSession<C> {
        SharedSession {
            inner: Arc::new(Mutex::new(self)),
        }
    }

    /// Release the connection
    pub fn close(self) -> Result<()> {
        let status = self.conn.close();
        if !status.is_success() {
            return Err(SmcError::Close(status));
        }
        tracing::debug!("Session closed");
        Ok(())
    }
}

/// A session shared between threads
///
/// Each read holds the lock across both phases, so key-info / read-bytes
/// pairs from different callers never interleave on the connection.
#[derive(Debug)]
pub struct SharedSession<C: StructuredCall> {
    inner: Arc<Mutex<Session<C>>>,
}

impl<C: StructuredCall> Clone for SharedSession<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: StructuredCall> SharedSession<C> {
    pub fn read(&self, key: &str) -> Result<f64> {
        self.inner.lock().read(key)
    }

    pub fn read_raw(&self, key: &str) -> Result<KeyReading> {
        self.inner.lock().read_raw(key)
    }

    /// Read several keys under a single lock acquisition
    pub fn read_many<'k, I>(&self, keys: I) -> Vec<(String, Result<f64>)>
    where
        I: IntoIterator<Item = &'k str>,
    {
        self.inner.lock().read_many(keys)
    }

    /// Take the session back once every other handle is gone
    ///
    /// Returns `None` while clones are still alive.
    pub fn into_inner(self) -> Option<Session<C>> {
        Arc::try_unwrap(self.inner).ok().map(Mutex::into_inner)
    }
}
