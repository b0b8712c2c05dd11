//! Viewport queries.

/// Width of the browser viewport in CSS pixels, when there is one.
pub fn viewport_width() -> Option<f64> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Breakpoint above which the map is drawn at the larger scale.
pub const WIDE_VIEWPORT_PX: f64 = 1200.0;

pub fn is_wide_viewport() -> bool {
    viewport_width().is_some_and(|w| w > WIDE_VIEWPORT_PX)
}
