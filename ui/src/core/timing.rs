//! Timer helpers for delayed UI transitions (flash messages, fade-outs).

/// Fade-out before a page transition.
pub const TRANSITION_MS: u32 = 500;
/// How long the contact form confirmation stays visible.
pub const FLASH_MS: u32 = 4_000;

pub async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
    }
}
