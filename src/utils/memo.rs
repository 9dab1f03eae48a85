//! Per-instance memoization of derived values
//!
//! A [`Memoized`] field lives on the struct that owns it, so every instance
//! has its own cache and nothing is shared between instances.

use std::fmt;
use std::future::Future;

use log::debug;
use tokio::sync::OnceCell;

/// Lazily computed value, stored on first successful access.
///
/// Later accesses return the stored value without running the computation
/// again, even when the computation would produce something different. A
/// failed computation stores nothing, so the next access retries it.
/// Concurrent first accesses run the computation once.
pub struct Memoized<T> {
    name: &'static str,
    cell: OnceCell<T>,
}

impl<T> Memoized<T> {
    /// Create an empty cache. `name` only appears in debug logs.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            cell: OnceCell::new(),
        }
    }

    /// Return the cached value, computing it with `compute` if absent.
    pub async fn get_or_try_init<E, F, Fut>(&self, compute: F) -> Result<&T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.cell.get() {
            debug!("Memo hit: {}", self.name);
            return Ok(value);
        }

        self.cell
            .get_or_try_init(|| {
                debug!("Memo miss: computing {}", self.name);
                compute()
            })
            .await
    }

    /// Return the cached value without computing it.
    #[allow(dead_code)]
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Whether a value has been stored.
    #[allow(dead_code)]
    pub fn is_cached(&self) -> bool {
        self.cell.initialized()
    }
}

impl<T: fmt::Debug> fmt::Debug for Memoized<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("name", &self.name)
            .field("value", &self.cell.get())
            .finish()
    }
}
