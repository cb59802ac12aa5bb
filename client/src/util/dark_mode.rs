//! Dark mode initialization and toggle.
//!
//! Reads the stored theme from `localStorage` and toggles the `dark` class on
//! the `<html>` element, which the stylesheet keys dark colors off. Requires
//! a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! no-op so server rendering stays deterministic (always light).

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "plantcare_theme";

/// Interpret a stored theme value. Unknown values mean "no preference".
#[cfg(any(test, feature = "hydrate"))]
fn parse_stored(value: &str) -> Option<bool> {
    match value {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

fn stored_value(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Read the dark mode preference.
///
/// Returns the stored theme if present, else the system preference.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Some(stored) = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|v| parse_stored(&v))
        {
            return stored;
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Add or remove the `dark` class on `<html>`.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let classes = el.class_list();
            let _ = if enabled { classes.add_1("dark") } else { classes.remove_1("dark") };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, stored_value(next));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = stored_value(next);
    }
    next
}
