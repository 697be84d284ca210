use shared::PrefillRequest;
use yew::prelude::*;

use crate::hooks::use_prefill::use_prefill_publisher;

/// Promotional cards. The happy-hours offer prefills the 11 AM slot; the
/// online offer publishes an empty request, which only scrolls the visitor
/// down to the untouched form.
#[function_component(SpecialOffers)]
pub fn special_offers() -> Html {
    let publish = use_prefill_publisher();

    let book_happy_hours = {
        let publish = publish.clone();
        Callback::from(move |_| {
            publish.emit(PrefillRequest {
                time: Some("11:00 AM".to_string()),
                ..Default::default()
            });
        })
    };
    let book_online = {
        Callback::from(move |_| {
            publish.emit(PrefillRequest::default());
        })
    };

    html! {
        <section id="offers" class="offers-section">
            <h2>{"Special Offers"}</h2>

            <div class="offers-grid">
                <div class="offer-card offer-card-happy">
                    <h3>{"Happy Hours"}</h3>
                    <p>{"10% off all treatments between 11 AM – 2 PM. Walk-ins welcome!"}</p>
                    <button class="btn-pill-primary" onclick={book_happy_hours}>
                        {"Book Happy Hours →"}
                    </button>
                </div>

                <div class="offer-card offer-card-online">
                    <h3>{"Book Online & Save 5%"}</h3>
                    <p>{"Get an instant 5% discount when you book your appointment online."}</p>
                    <button class="btn-pill-primary" onclick={book_online}>
                        {"Book Online →"}
                    </button>
                </div>
            </div>
        </section>
    }
}
