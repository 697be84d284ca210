use crate::services::logging::Logger;

/// The anchor every "book now" surface jumps to.
pub const BOOKING_SECTION_ID: &str = "booking";

/// Bring the booking section into view after a surface publishes a prefill.
pub fn scroll_to_booking() {
    let document = web_sys::window().and_then(|window| window.document());
    if let Some(document) = document {
        if let Some(element) = document.get_element_by_id(BOOKING_SECTION_ID) {
            element.scroll_into_view();
        } else {
            // The section is always rendered, so this is a wiring bug.
            Logger::error_with_component("scroll", "booking section missing from the page");
        }
        return;
    }
    Logger::warn_with_component("scroll", "no document to scroll");
}
