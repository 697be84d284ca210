use chrono::Local;
use shared::{ClinicSchedule, DoctorStatus};
use yew::prelude::*;

use crate::context::doctor_status::{DoctorStatusHandle, StatusAction};

/// Read and command surface over the availability store.
#[derive(Clone, PartialEq)]
pub struct UseDoctorStatusResult {
    /// Current availability snapshot
    pub status: DoctorStatus,
    /// The schedule rule the store runs on
    pub schedule: ClinicSchedule,
    /// Flip availability by hand and pin it until the page reloads
    pub toggle_manual: Callback<()>,
}

/// Access the doctor availability state from any surface.
///
/// Panics when no [`DoctorStatusProvider`] is above the caller; rendering a
/// status surface outside the provider is a wiring bug that must abort
/// loudly rather than show a made-up status.
///
/// [`DoctorStatusProvider`]: crate::context::doctor_status::DoctorStatusProvider
#[hook]
pub fn use_doctor_status() -> UseDoctorStatusResult {
    let store = use_context::<DoctorStatusHandle>()
        .expect("use_doctor_status must be used within a DoctorStatusProvider");

    let toggle_manual = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(StatusAction::ToggleManual(Local::now())))
    };

    UseDoctorStatusResult {
        status: store.status.clone(),
        schedule: store.schedule.clone(),
        toggle_manual,
    }
}
