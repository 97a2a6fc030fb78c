//! Shared animation stylesheet for notifications.

use super::js_error;
use anyhow::anyhow;
use web_sys::Document;

const STYLE_ID: &str = "pagepulse-notification-keyframes";

const NOTIFICATION_KEYFRAMES: &str = r"
@keyframes slideIn {
    from {
        transform: translateX(100%);
        opacity: 0;
    }
    to {
        transform: translateX(0);
        opacity: 1;
    }
}

@keyframes slideOut {
    from {
        transform: translateX(0);
        opacity: 1;
    }
    to {
        transform: translateX(100%);
        opacity: 0;
    }
}
";

/// Append the keyframes used by the toast host to `<head>`, once per page.
pub(crate) fn install_keyframes(document: &Document) -> anyhow::Result<()> {
    if document.get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }
    let head = document
        .head()
        .ok_or_else(|| anyhow!("document has no <head>"))?;
    let style = document.create_element("style").map_err(js_error)?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(NOTIFICATION_KEYFRAMES));
    head.append_child(&style).map_err(js_error)?;
    Ok(())
}
