use std::rc::Rc;

use shared::{PrefillBus, PrefillRequest};
use yew::prelude::*;

use crate::services::logging::Logger;
use crate::services::scroll::scroll_to_booking;

/// Access the prefill channel from any surface.
///
/// Panics when no [`PrefillProvider`] is above the caller, for the same
/// reason [`use_doctor_status`] does: a silently disconnected publisher
/// would swallow clicks without a trace.
///
/// [`PrefillProvider`]: crate::context::prefill::PrefillProvider
/// [`use_doctor_status`]: crate::hooks::use_doctor_status::use_doctor_status
#[hook]
pub fn use_prefill_bus() -> PrefillBus {
    use_context::<PrefillBus>().expect("use_prefill_bus must be used within a PrefillProvider")
}

/// Publisher side of the channel: a callback that sends the request and then
/// scrolls the booking section into view, which is what every "book now"
/// button on the page wants.
#[hook]
pub fn use_prefill_publisher() -> Callback<PrefillRequest> {
    let bus = use_prefill_bus();
    Callback::from(move |request: PrefillRequest| {
        Logger::debug_with_component("prefill", &format!("publishing {:?}", request));
        bus.publish(request);
        scroll_to_booking();
    })
}

/// Subscribe the calling surface as the channel's single consumer for its
/// mounted lifetime. Unmounting unsubscribes, so requests published while
/// the form is away are dropped instead of reaching a dead handler.
///
/// `on_request` is captured at mount; hand it a reducer dispatch so the
/// handler never observes a stale draft.
#[hook]
pub fn use_prefill_subscription(on_request: Callback<PrefillRequest>) {
    let bus = use_prefill_bus();
    use_effect_with(bus, move |bus| {
        let bus = bus.clone();
        let handler = move |request: PrefillRequest| on_request.emit(request);
        bus.subscribe(Rc::new(handler));
        Logger::debug_with_component("prefill", "booking form subscribed");

        move || {
            bus.unsubscribe();
            Logger::debug_with_component("prefill", "booking form unsubscribed");
        }
    });
}
