//! Calendar date in the browser.

use chrono::NaiveDate;

/// Today's date in the user's local time zone; `None` outside the browser.
pub fn today() -> Option<NaiveDate> {
    #[cfg(feature = "hydrate")]
    {
        Some(chrono::Local::now().date_naive())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
