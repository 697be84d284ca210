use shared::DOCTOR_NAME;
use web_sys::UrlSearchParams;
use yew::prelude::*;

use crate::hooks::use_doctor_status::use_doctor_status;
use crate::services::logging::Logger;

// The panel only renders when the page was opened with ?admin=true.
fn admin_flag_enabled() -> bool {
    let search = match web_sys::window() {
        Some(window) => window.location().search().unwrap_or_default(),
        None => return false,
    };
    match UrlSearchParams::new_with_str(&search) {
        Ok(params) => params.get("admin").as_deref() == Some("true"),
        Err(_) => false,
    }
}

/// Hidden operator panel for flipping the doctor's availability by hand.
///
/// Flipping here pins the status: the schedule stops driving it for the
/// rest of the page's lifetime, which the footer line makes visible.
#[function_component(AdminStatusToggle)]
pub fn admin_status_toggle() -> Html {
    let visible = use_state(admin_flag_enabled);
    let doctor_status = use_doctor_status();

    if !*visible {
        return html! {};
    }

    let status = &doctor_status.status;
    let onclick = {
        let toggle_manual = doctor_status.toggle_manual.clone();
        Callback::from(move |_| {
            Logger::info_with_component("admin-toggle", "operator flipped availability");
            toggle_manual.emit(());
        })
    };

    html! {
        <div class="admin-panel">
            <div class="admin-panel-header">
                <span>{"🔧"}</span>
                <h3>{"Doctor Status Control"}</h3>
            </div>

            <div class="admin-panel-row">
                <div class="admin-panel-doctor">
                    <span class="admin-panel-name">{DOCTOR_NAME}</span>
                    <span class="admin-panel-state">
                        {if status.is_available { "🟢 In Clinic" } else { "🔴 Out of Clinic" }}
                    </span>
                </div>
                <button class="admin-panel-switch" {onclick}>
                    {if status.is_available { "Mark Out of Clinic" } else { "Mark In Clinic" }}
                </button>
            </div>

            <div class="admin-panel-footer">
                <span>
                    {if status.is_manual { "Manual Override Active" } else { "Auto-Schedule Mode" }}
                </span>
                <span>
                    {format!("Updated: {}", status.last_updated.format("%H:%M"))}
                </span>
            </div>
        </div>
    }
}
