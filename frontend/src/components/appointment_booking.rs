use std::rc::Rc;

use chrono::Local;
use gloo::timers::future::TimeoutFuture;
use shared::{
    BookingConfig, BookingConfirmation, BookingField, BookingForm, BookingValidation,
    PaymentMethod, PrefillRequest, TIME_SLOTS, TREATMENTS,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::use_prefill::use_prefill_subscription;
use crate::services::logging::Logger;
use crate::services::scroll::BOOKING_SECTION_ID;

/// Commands accepted by the draft store.
enum DraftAction {
    /// Merge an incoming prefill request into the draft.
    ApplyPrefill(PrefillRequest),
    /// Replace the draft with an edited copy (field handlers).
    Replace(BookingForm),
}

/// The booking draft lives in a reducer so the prefill handler installed at
/// mount always merges into the current draft, never a stale snapshot.
#[derive(Clone, PartialEq)]
struct DraftStore {
    form: BookingForm,
}

impl Reducible for DraftStore {
    type Action = DraftAction;

    fn reduce(self: Rc<Self>, action: DraftAction) -> Rc<Self> {
        match action {
            DraftAction::ApplyPrefill(request) => {
                let mut form = self.form.clone();
                form.apply_prefill(&request);
                Rc::new(Self { form })
            }
            DraftAction::Replace(form) => Rc::new(Self { form }),
        }
    }
}

/// The appointment form: the single consumer of the prefill channel.
///
/// Validation runs on submit; a passing form goes through a simulated
/// server round trip and lands on the confirmation screen.
#[function_component(AppointmentBooking)]
pub fn appointment_booking() -> Html {
    let config = BookingConfig::default();
    let draft = use_reducer(|| DraftStore {
        form: BookingForm::default(),
    });
    let validation = use_state(|| Option::<BookingValidation>::None);
    let submitting = use_state(|| false);
    let confirmation = use_state(|| Option::<BookingConfirmation>::None);

    {
        let draft = draft.clone();
        use_prefill_subscription(Callback::from(move |request: PrefillRequest| {
            // Empty requests only scroll; skip the no-op dispatch.
            if !request.is_empty() {
                draft.dispatch(DraftAction::ApplyPrefill(request));
            }
        }));
    }

    let on_name_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut form = draft.form.clone();
            form.name = input.value();
            draft.dispatch(DraftAction::Replace(form));
        })
    };
    let on_phone_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut form = draft.form.clone();
            form.phone = input.value();
            draft.dispatch(DraftAction::Replace(form));
        })
    };
    let on_email_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut form = draft.form.clone();
            form.email = input.value();
            draft.dispatch(DraftAction::Replace(form));
        })
    };
    let on_age_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut form = draft.form.clone();
            form.age = input.value();
            draft.dispatch(DraftAction::Replace(form));
        })
    };
    let on_treatment_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut form = draft.form.clone();
            form.treatment = select.value();
            draft.dispatch(DraftAction::Replace(form));
        })
    };
    let on_date_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut form = draft.form.clone();
            form.date = input.value();
            draft.dispatch(DraftAction::Replace(form));
        })
    };
    let on_time_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut form = draft.form.clone();
            form.time = select.value();
            draft.dispatch(DraftAction::Replace(form));
        })
    };
    let pick_payment = |method: PaymentMethod| {
        let draft = draft.clone();
        Callback::from(move |_: Event| {
            let mut form = draft.form.clone();
            form.payment = method;
            draft.dispatch(DraftAction::Replace(form));
        })
    };
    let on_problem_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            let mut form = draft.form.clone();
            form.problem = textarea.value();
            draft.dispatch(DraftAction::Replace(form));
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let validation = validation.clone();
        let submitting = submitting.clone();
        let confirmation = confirmation.clone();
        let config = config.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let result = draft.form.validate(Local::now().date_naive());
            if !result.is_valid {
                Logger::debug_with_component(
                    "booking",
                    &format!("submit blocked, {} field(s) invalid", result.errors.len()),
                );
                validation.set(Some(result));
                return;
            }
            validation.set(None);
            submitting.set(true);

            let form = draft.form.clone();
            let submitting = submitting.clone();
            let confirmation = confirmation.clone();
            let token = config.confirmation_token;
            let delay = config.submit_delay_ms;
            spawn_local(async move {
                // Simulated server round trip.
                TimeoutFuture::new(delay).await;
                let confirmed = form.confirm(token);
                Logger::info_with_component(
                    "booking",
                    &format!("appointment confirmed, token #{}", confirmed.token),
                );
                submitting.set(false);
                confirmation.set(Some(confirmed));
            });
        })
    };

    let error_for = |field: BookingField| -> Html {
        match validation.as_ref().and_then(|v| v.message_for(field)) {
            Some(message) => html! { <p class="field-error">{message}</p> },
            None => html! {},
        }
    };

    let form = &draft.form;
    let today = Local::now().date_naive().to_string();

    html! {
        <section id={BOOKING_SECTION_ID} class="booking-section">
            {if let Some(confirmed) = confirmation.as_ref() {
                confirmation_view(confirmed)
            } else {
                html! {
                    <div class="booking-card">
                        <h2>{"Book Your Appointment"}</h2>
                        <p class="booking-subtitle">{"Fill in the details and we'll confirm via WhatsApp"}</p>

                        <form onsubmit={on_submit}>
                            <div class="booking-grid">
                                <div class="form-group">
                                    <input
                                        type="text"
                                        placeholder="Full Name *"
                                        value={form.name.clone()}
                                        onchange={on_name_change}
                                    />
                                    {error_for(BookingField::Name)}
                                </div>
                                <div class="form-group">
                                    <input
                                        type="tel"
                                        placeholder="Phone Number *"
                                        maxlength="10"
                                        value={form.phone.clone()}
                                        onchange={on_phone_change}
                                    />
                                    {error_for(BookingField::Phone)}
                                </div>
                                <div class="form-group">
                                    <input
                                        type="email"
                                        placeholder="Email (Optional)"
                                        value={form.email.clone()}
                                        onchange={on_email_change}
                                    />
                                    {error_for(BookingField::Email)}
                                </div>
                                <div class="form-group">
                                    <input
                                        type="number"
                                        placeholder="Age *"
                                        min="1"
                                        max="120"
                                        value={form.age.clone()}
                                        onchange={on_age_change}
                                    />
                                    {error_for(BookingField::Age)}
                                </div>
                            </div>

                            <div class="form-group">
                                <select onchange={on_treatment_change}>
                                    <option value="" selected={form.treatment.is_empty()}>
                                        {"Select Treatment *"}
                                    </option>
                                    {for TREATMENTS.iter().map(|name| html! {
                                        <option value={*name} selected={form.treatment == *name}>
                                            {*name}
                                        </option>
                                    })}
                                </select>
                                {error_for(BookingField::Treatment)}
                            </div>

                            {if !form.doctor.is_empty() {
                                html! {
                                    <div class="booking-doctor-banner">
                                        {format!("Selected Doctor: {}", form.doctor)}
                                    </div>
                                }
                            } else { html! {} }}

                            <div class="booking-grid">
                                <div class="form-group">
                                    <input
                                        type="date"
                                        min={today}
                                        value={form.date.clone()}
                                        onchange={on_date_change}
                                    />
                                    {error_for(BookingField::Date)}
                                </div>
                                <div class="form-group">
                                    <select onchange={on_time_change}>
                                        <option value="" selected={form.time.is_empty()}>
                                            {"Select Time Slot *"}
                                        </option>
                                        {for TIME_SLOTS.iter().map(|slot| html! {
                                            <option value={*slot} selected={form.time == *slot}>
                                                {*slot}
                                            </option>
                                        })}
                                    </select>
                                    {error_for(BookingField::Time)}
                                </div>
                            </div>

                            <div class="booking-payment">
                                <label>
                                    <input
                                        type="radio"
                                        name="payment"
                                        checked={form.payment == PaymentMethod::Online}
                                        onchange={pick_payment(PaymentMethod::Online)}
                                    />
                                    {PaymentMethod::Online.label()}
                                </label>
                                <label>
                                    <input
                                        type="radio"
                                        name="payment"
                                        checked={form.payment == PaymentMethod::AtClinic}
                                        onchange={pick_payment(PaymentMethod::AtClinic)}
                                    />
                                    {PaymentMethod::AtClinic.label()}
                                </label>
                            </div>

                            {if form.payment == PaymentMethod::Online {
                                html! {
                                    <p class="booking-payment-note">
                                        {"Note: Pay securely after booking confirmation."}
                                    </p>
                                }
                            } else { html! {} }}

                            <div class="form-group booking-problem">
                                <textarea
                                    rows="3"
                                    placeholder="Describe your problem (Optional)..."
                                    maxlength={config.max_problem_length.to_string()}
                                    value={form.problem.clone()}
                                    oninput={on_problem_input}
                                />
                                <span class="booking-problem-count">
                                    {format!("{}/{}", form.problem.chars().count(), config.max_problem_length)}
                                </span>
                                {error_for(BookingField::Problem)}
                            </div>

                            <button type="submit" class="btn-pill-primary booking-submit" disabled={*submitting}>
                                {if *submitting { "Booking..." } else { "Book My Appointment →" }}
                            </button>

                            <div class="booking-trust">
                                <span>{"🔒 Secure"}</span>
                                <span>{"📲 WhatsApp Confirm"}</span>
                                <span>{"🎟 Instant Token"}</span>
                            </div>
                        </form>
                    </div>
                }
            }}
        </section>
    }
}

fn confirmation_view(confirmed: &BookingConfirmation) -> Html {
    html! {
        <div class="booking-confirmed">
            <h3>{"Booking Confirmed! 🎉"}</h3>
            <p class="booking-confirmed-token">
                {"Your Token: "}
                <strong>{format!("#{}", confirmed.token)}</strong>
            </p>

            <div class="booking-confirmed-summary">
                <p><strong>{"Doctor: "}</strong>{&confirmed.doctor}</p>
                <p><strong>{"Date: "}</strong>{format!("{} at {}", confirmed.date, confirmed.time)}</p>
                <p><strong>{"Treatment: "}</strong>{&confirmed.treatment}</p>
            </div>

            <div class="booking-confirmed-actions">
                <a
                    class="btn-pill-primary"
                    href={confirmed.calendar_url.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {"Add to Calendar"}
                </a>
                <a
                    class="btn-pill-outline"
                    href={confirmed.whatsapp_url.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {"Share on WhatsApp"}
                </a>
            </div>
        </div>
    }
}
