//! Load state for plant pages.
//!
//! DESIGN
//! ======
//! A page-scoped `RwSignal<LoadState<T>>` replaces the loader data of the
//! original router: the page starts `Loading`, then holds either the data or
//! the fetch error, and never renders a form against missing data.

#[cfg(test)]
#[path = "plants_test.rs"]
mod plants_test;

use crate::error::DataFetchError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(DataFetchError),
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, DataFetchError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Mutate loaded data in place; no-op while loading or failed.
    pub fn update_ready(&mut self, f: impl FnOnce(&mut T)) {
        if let Self::Ready(value) = self {
            f(value);
        }
    }
}

/// User-facing message for a failed plant fetch.
pub fn fetch_error_message(error: &DataFetchError) -> String {
    if error.is_not_found() {
        "This plant could not be found. It may have been deleted.".to_owned()
    } else {
        format!("Could not load plant data: {error}")
    }
}
