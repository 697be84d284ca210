use std::rc::Rc;

use chrono::{DateTime, Local};
use shared::{ClinicSchedule, DoctorStatus};
use yew::prelude::*;

use crate::hooks::use_periodic_tick::{use_periodic_tick, PeriodicTickConfig};
use crate::services::logging::Logger;

/// Commands accepted by the availability store.
pub enum StatusAction {
    /// Re-evaluate the schedule rule against the current wall clock.
    RefreshSchedule(DateTime<Local>),
    /// Operator override: flip availability and pin it until reload.
    ToggleManual(DateTime<Local>),
}

/// The availability store: the weekly schedule rule plus the live status.
///
/// All transition logic lives on [`DoctorStatus`]; the reducer only decides
/// whether a new snapshot is published. A no-op refresh returns the same
/// `Rc`, which the eq-gated store treats as no change, so a quiet minute
/// tick re-renders nothing.
#[derive(Clone, PartialEq)]
pub struct StatusStore {
    pub schedule: ClinicSchedule,
    pub status: DoctorStatus,
}

impl Reducible for StatusStore {
    type Action = StatusAction;

    fn reduce(self: Rc<Self>, action: StatusAction) -> Rc<Self> {
        match action {
            StatusAction::RefreshSchedule(now) => {
                let mut status = self.status.clone();
                if status.apply_schedule(&self.schedule, now) {
                    Logger::info_with_component(
                        "doctor-status",
                        &format!("schedule flipped availability to {}", status.is_available),
                    );
                    Rc::new(Self {
                        schedule: self.schedule.clone(),
                        status,
                    })
                } else {
                    self
                }
            }
            StatusAction::ToggleManual(now) => {
                let mut status = self.status.clone();
                status.toggle_manual(now);
                Logger::info_with_component(
                    "doctor-status",
                    &format!("manual override, availability now {}", status.is_available),
                );
                Rc::new(Self {
                    schedule: self.schedule.clone(),
                    status,
                })
            }
        }
    }
}

pub type DoctorStatusHandle = UseReducerHandle<StatusStore>;

#[derive(Properties, PartialEq)]
pub struct DoctorStatusProviderProps {
    #[prop_or_default]
    pub children: Html,
}

/// Owns the page-wide availability state and the minute ticker that keeps it
/// aligned with the clinic schedule. Every descendant reads the same store.
#[function_component(DoctorStatusProvider)]
pub fn doctor_status_provider(props: &DoctorStatusProviderProps) -> Html {
    let store = use_reducer_eq(|| StatusStore {
        schedule: ClinicSchedule::default(),
        status: DoctorStatus::startup(Local::now()),
    });

    // One immediate evaluation at mount, then once a minute. The dispatch
    // handle stays valid for the life of the store, so the tick callback
    // never goes stale.
    let on_tick = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(StatusAction::RefreshSchedule(Local::now())))
    };
    use_periodic_tick(PeriodicTickConfig::minutely(), on_tick);

    html! {
        <ContextProvider<DoctorStatusHandle> context={store}>
            {props.children.clone()}
        </ContextProvider<DoctorStatusHandle>>
    }
}
