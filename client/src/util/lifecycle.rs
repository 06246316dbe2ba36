//! One-shot post-mount scheduling.

use leptos::prelude::*;

/// Run `f` exactly once after the first client render.
///
/// Effects never run during SSR, so on the server this is a no-op. `f`
/// must not read signals it expects to re-trigger it; the closure is
/// consumed on the first run either way.
pub fn after_first_render(f: impl FnOnce() + 'static) {
    let mut pending = Some(f);
    Effect::new(move || {
        if let Some(f) = pending.take() {
            f();
        }
    });
}
