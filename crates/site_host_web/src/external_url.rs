//! `window.open`-backed external navigation.

use site_host::{ExternalUrlFuture, ExternalUrlService};

/// Opens external URLs in a new browsing context.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebExternalUrlService;

impl WebExternalUrlService {
    fn open(self, url: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
            window
                .open_with_url_and_target(url, "_blank")
                .map_err(|e| format!("window.open failed: {e:?}"))?
                .ok_or_else(|| "popup blocked".to_string())?;
            Ok(())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = url;
            Err("external navigation requires a wasm32 target".to_string())
        }
    }
}

impl ExternalUrlService for WebExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        let service = *self;
        Box::pin(async move { service.open(url) })
    }
}
