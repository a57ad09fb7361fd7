//! `navigator.clipboard`-backed clipboard writes.

use site_host::{ClipboardFuture, ClipboardService};

/// Clipboard adapter over the async Clipboard API.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebClipboard;

impl ClipboardService for WebClipboard {
    fn write_text<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a, Result<(), String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                use wasm_bindgen_futures::JsFuture;

                let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
                let clipboard = window.navigator().clipboard();
                JsFuture::from(clipboard.write_text(text))
                    .await
                    .map_err(|e| format!("clipboard write failed: {e:?}"))?;
                Ok(())
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = text;
                Err("clipboard requires a wasm32 target".to_string())
            }
        })
    }
}
