/// Shows a blocking browser notice.
pub fn notify(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("Could not show notice {:?}: {:?}", message, e);
            }
        }
        None => log::warn!("No window for notice {:?}", message),
    }
}
