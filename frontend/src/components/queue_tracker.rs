use std::rc::Rc;

use shared::{QueueConfig, QueueStatus, TokenLookup};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_periodic_tick::{use_periodic_tick, PeriodicTickConfig};
use crate::services::logging::Logger;
use crate::services::scroll::scroll_to_booking;

/// Commands accepted by the queue store.
enum QueueAction {
    Advance,
}

/// Simulated queue state plus its tunables.
#[derive(Clone, PartialEq)]
struct QueueStore {
    config: QueueConfig,
    status: QueueStatus,
}

impl Reducible for QueueStore {
    type Action = QueueAction;

    fn reduce(self: Rc<Self>, action: QueueAction) -> Rc<Self> {
        match action {
            QueueAction::Advance => {
                let mut status = self.status.clone();
                status.advance(&self.config);
                Rc::new(Self {
                    config: self.config.clone(),
                    status,
                })
            }
        }
    }
}

/// Live queue display: now-serving counter that advances on a timer, the
/// visitor's own token, a wait estimate, and a phone-number token lookup.
#[function_component(QueueTracker)]
pub fn queue_tracker() -> Html {
    let store = use_reducer(|| QueueStore {
        config: QueueConfig::default(),
        status: QueueStatus::default(),
    });

    // The advance timer belongs to this surface; leaving the page stops it.
    let on_tick = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(QueueAction::Advance))
    };
    use_periodic_tick(
        PeriodicTickConfig::every_ms(store.config.advance_interval_ms),
        on_tick,
    );

    let dialog_open = use_state(|| false);
    let phone = use_state(String::new);
    let lookup = use_state(|| Option::<TokenLookup>::None);
    let lookup_error = use_state(|| Option::<String>::None);

    let open_dialog = {
        let dialog_open = dialog_open.clone();
        Callback::from(move |_| dialog_open.set(true))
    };
    let close_dialog = {
        let dialog_open = dialog_open.clone();
        let lookup = lookup.clone();
        let lookup_error = lookup_error.clone();
        let phone = phone.clone();
        Callback::from(move |_| {
            dialog_open.set(false);
            lookup.set(None);
            lookup_error.set(None);
            phone.set(String::new());
        })
    };
    let reset_lookup = {
        let lookup = lookup.clone();
        let phone = phone.clone();
        Callback::from(move |_| {
            lookup.set(None);
            phone.set(String::new());
        })
    };
    let on_phone_change = {
        let phone = phone.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            phone.set(input.value());
        })
    };
    let on_check = {
        let phone = phone.clone();
        let lookup = lookup.clone();
        let lookup_error = lookup_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match TokenLookup::mock_for_phone(&phone) {
                Some(found) => {
                    Logger::debug_with_component(
                        "queue-tracker",
                        &format!("token lookup for {} -> #{}", *phone, found.token),
                    );
                    lookup_error.set(None);
                    lookup.set(Some(found));
                }
                None => {
                    lookup_error.set(Some("Enter a valid 10-digit phone number".to_string()));
                }
            }
        })
    };
    let book_slot = Callback::from(|_| scroll_to_booking());

    let status = &store.status;
    let config = &store.config;

    html! {
        <section id="queue" class="queue-section">
            <span class="live-pill">{"Live"}</span>
            <h2>{"Check Your Turn — From Anywhere"}</h2>

            <div class="queue-card">
                <div class="queue-token queue-token-serving">
                    <p>{"Now Serving"}</p>
                    <span>{format!("#{}", status.now_serving)}</span>
                </div>
                <div class="queue-token queue-token-yours">
                    <p>{"Your Token"}</p>
                    <span>{format!("#{}", status.your_token)}</span>
                </div>

                <p class="queue-estimate">
                    {format!(
                        "{} patients ahead · Est. ~{} min",
                        status.patients_ahead(),
                        status.estimated_wait_minutes(config),
                    )}
                </p>

                <div class="queue-progress">
                    <div class="queue-progress-labels">
                        <span>{"Progress"}</span>
                        <span>{format!("{}%", status.progress_percent())}</span>
                    </div>
                    <div class="queue-progress-track">
                        <div
                            class="queue-progress-fill"
                            style={format!("width: {}%", status.progress_percent())}
                        />
                    </div>
                    <p>{format!("Total today: {}", status.today_total)}</p>
                </div>

                <div class="queue-actions">
                    <button class="btn-pill-primary" onclick={open_dialog}>{"Check My Token"}</button>
                    <button class="btn-pill-outline" onclick={book_slot}>{"Book a Slot"}</button>
                </div>

                <p class="queue-refresh-note">
                    {format!("Updates every {}s", config.advance_interval_ms / 1000)}
                </p>
            </div>

            {if *dialog_open {
                html! {
                    <div class="queue-dialog">
                        <h3>{"Check Your Token Status"}</h3>
                        <p>{"Enter your phone number to see your current position in the queue."}</p>

                        {if let Some(found) = lookup.as_ref() {
                            html! {
                                <div class="queue-dialog-result">
                                    <div class="queue-dialog-token">{format!("#{}", found.token)}</div>
                                    <div>{"Your Token Number"}</div>
                                    <p>
                                        {"Position in Queue: "}
                                        <strong>{found.position}</strong>
                                    </p>
                                    <p class="queue-dialog-note">{"Please reach the clinic 15 mins before."}</p>
                                    <button onclick={reset_lookup}>{"Check Another"}</button>
                                </div>
                            }
                        } else {
                            html! {
                                <form onsubmit={on_check}>
                                    <label for="queue-phone">{"Phone Number"}</label>
                                    <input
                                        type="tel"
                                        id="queue-phone"
                                        placeholder="Enter 10-digit number"
                                        maxlength="10"
                                        value={(*phone).clone()}
                                        onchange={on_phone_change}
                                    />
                                    {if let Some(error) = lookup_error.as_ref() {
                                        html! { <p class="field-error">{error}</p> }
                                    } else { html! {} }}
                                    <button type="submit">{"Check Status"}</button>
                                </form>
                            }
                        }}

                        <button class="queue-dialog-close" onclick={close_dialog}>{"Close"}</button>
                    </div>
                }
            } else { html! {} }}

            <div class="queue-stats">
                {mini_stat("Today", status.today_total)}
                {mini_stat("Done", status.completed)}
                {mini_stat("Remaining", status.remaining())}
            </div>
        </section>
    }
}

fn mini_stat(label: &'static str, value: u32) -> Html {
    html! {
        <div class="queue-stat-card">
            <div class="queue-stat-value">{value}</div>
            <div class="queue-stat-label">{label}</div>
        </div>
    }
}
