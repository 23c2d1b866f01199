//! Clipboard access through `navigator.clipboard`

use tracing::warn;
use wasm_bindgen_futures::JsFuture;

/// Place `text` on the clipboard.
///
/// Returns `false` when there is no clipboard (insecure context, no window)
/// or the browser rejects the write.
pub async fn copy_text(text: &str) -> bool {
    let Some(window) = web_sys::window() else {
        warn!("No window available, cannot copy");
        return false;
    };

    let clipboard = window.navigator().clipboard();
    if clipboard.is_undefined() {
        warn!("Clipboard API unavailable");
        return false;
    }

    match JsFuture::from(clipboard.write_text(text)).await {
        Ok(_) => true,
        Err(e) => {
            warn!("Clipboard write rejected: {:?}", e);
            false
        }
    }
}
