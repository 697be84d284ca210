use yew::prelude::*;

use crate::hooks::use_doctor_status::use_doctor_status;
use crate::services::scroll::scroll_to_booking;

/// Compact availability pill shown in the top bar.
///
/// Pure reader: it renders whatever the availability store holds and never
/// mutates it. The hint line tells closed-hours visitors they can still book.
#[function_component(DoctorStatusBadge)]
pub fn doctor_status_badge() -> Html {
    let doctor_status = use_doctor_status();
    let status = &doctor_status.status;
    let schedule = &doctor_status.schedule;

    let status_text = if status.is_available {
        "Dr. Arjun · In Clinic"
    } else {
        "Dr. Arjun · Out of Clinic"
    };
    let sub_text = if status.is_available {
        "● Available Now"
    } else {
        "✕ Not Available"
    };
    let hint = if status.is_available {
        format!(
            "Clinic Hours: {}. Next Available: Right Now ✓",
            schedule.hours_label(),
        )
    } else {
        format!(
            "Next Available: Tomorrow {}. You can still book in advance.",
            schedule.open_label(),
        )
    };

    let onclick = Callback::from(|_| scroll_to_booking());

    html! {
        <div
            class={classes!(
                "status-badge",
                if status.is_available { "status-badge-open" } else { "status-badge-closed" },
            )}
            title={hint}
            {onclick}
        >
            <span class="status-dot"></span>
            <div class="status-badge-text">
                <span class="status-badge-line">{status_text}</span>
                <span class="status-badge-sub">{sub_text}</span>
            </div>
        </div>
    }
}
