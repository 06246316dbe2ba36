//! Browser glue for the theme controller.
//!
//! Reads and writes the preference in `localStorage`, probes
//! `prefers-color-scheme`, and sets a `data-theme` attribute on `<html>`.
//!
//! TRADE-OFFS
//! ==========
//! Everything here is hydrate-only. SSR builds get a host that stores
//! nothing and knows nothing, which keeps server rendering deterministic.

#[cfg(test)]
#[path = "theme_host_test.rs"]
mod theme_host_test;

use crate::state::theme::{ResolvedTheme, ThemeError, ThemeHost, ThemeMode};

/// `localStorage` key holding the persisted [`ThemeMode`].
pub const STORAGE_KEY: &str = "nexem-theme";

/// Attribute on the document element that style rules key on.
pub const THEME_ATTRIBUTE: &str = "data-theme";

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// [`ThemeHost`] backed by the browser window.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, ThemeError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(ThemeError::StorageUnavailable)
}

impl ThemeHost for BrowserHost {
    fn stored_preference(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage().ok()?.get_item(STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn persist_preference(&self, mode: ThemeMode) -> Result<(), ThemeError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(STORAGE_KEY, mode.as_str())
                .map_err(|e| ThemeError::StorageWrite(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = mode;
            Ok(())
        }
    }

    fn system_prefers_dark(&self) -> Option<bool> {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()?
                .match_media(DARK_QUERY)
                .ok()
                .flatten()
                .map(|mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn apply(&self, resolved: ResolvedTheme) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let _ = el.set_attribute(THEME_ATTRIBUTE, resolved.as_str());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = resolved;
        }
    }
}

/// Call `on_change` whenever the OS color scheme flips.
pub fn watch_system_preference(on_change: impl Fn(bool) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;
        use wasm_bindgen::closure::Closure;

        let Some(query) = web_sys::window().and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
        else {
            return;
        };
        let callback = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
            move |ev: web_sys::MediaQueryListEvent| on_change(ev.matches()),
        );
        query.set_onchange(Some(callback.as_ref().unchecked_ref()));
        // Lives as long as the page.
        callback.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_change;
    }
}

/// Inline `<head>` script that sets the theme attribute before first paint.
///
/// Mirrors [`ThemeMode::resolve`]: a stored `light`/`dark` wins, anything
/// else follows the OS preference.
pub fn bootstrap_script() -> String {
    format!(
        "(function(){{try{{var m=localStorage.getItem('{STORAGE_KEY}');\
var d=m==='dark'||(m!=='light'&&window.matchMedia('{DARK_QUERY}').matches);\
document.documentElement.setAttribute('{THEME_ATTRIBUTE}',d?'dark':'light');}}catch(e){{}}}})();"
    )
}
