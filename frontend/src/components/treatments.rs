use shared::PrefillRequest;
use yew::prelude::*;

use crate::hooks::use_prefill::use_prefill_publisher;

struct TreatmentCard {
    name: &'static str,
    desc: &'static str,
    duration: &'static str,
    price: &'static str,
    icon: &'static str,
}

const CATALOG: [TreatmentCard; 9] = [
    TreatmentCard {
        name: "Teeth Cleaning",
        desc: "Professional scaling and polishing for healthy gums",
        duration: "30 min",
        price: "₹500",
        icon: "🦷",
    },
    TreatmentCard {
        name: "Filling",
        desc: "Composite resin fillings for cavities",
        duration: "45 min",
        price: "₹800",
        icon: "🔧",
    },
    TreatmentCard {
        name: "Root Canal",
        desc: "Painless endodontic treatment to save your tooth",
        duration: "90 min",
        price: "₹3,000",
        icon: "💉",
    },
    TreatmentCard {
        name: "Extraction",
        desc: "Safe and painless tooth removal procedure",
        duration: "30 min",
        price: "₹500",
        icon: "🏥",
    },
    TreatmentCard {
        name: "Braces",
        desc: "Metal and ceramic braces for alignment",
        duration: "12–18 mo",
        price: "₹25,000",
        icon: "😁",
    },
    TreatmentCard {
        name: "Whitening",
        desc: "Brighten your smile with laser whitening",
        duration: "60 min",
        price: "₹5,000",
        icon: "✨",
    },
    TreatmentCard {
        name: "Implants",
        desc: "Permanent titanium implants for missing teeth",
        duration: "2–3 mo",
        price: "₹20,000",
        icon: "🔩",
    },
    TreatmentCard {
        name: "Veneers",
        desc: "Custom porcelain veneers for a perfect look",
        duration: "2 visits",
        price: "₹8,000",
        icon: "💎",
    },
    TreatmentCard {
        name: "Kids Dentistry",
        desc: "Gentle, child-friendly dental care",
        duration: "30 min",
        price: "₹300",
        icon: "👶",
    },
];

/// Treatment catalog. Every card's booking button publishes a prefill
/// carrying just that treatment's name.
#[function_component(Treatments)]
pub fn treatments() -> Html {
    let publish = use_prefill_publisher();

    html! {
        <section id="treatments" class="treatments-section">
            <h2>{"Our Treatments"}</h2>

            <div class="treatments-grid">
                {for CATALOG.iter().map(|card| {
                    let book = {
                        let publish = publish.clone();
                        let name = card.name;
                        Callback::from(move |_| {
                            publish.emit(PrefillRequest {
                                treatment: Some(name.to_string()),
                                ..Default::default()
                            });
                        })
                    };
                    html! {
                        <div class="treatment-card">
                            <span class="treatment-icon">{card.icon}</span>
                            <h3>{card.name}</h3>
                            <p>{card.desc}</p>
                            <div class="treatment-meta">
                                <span>{card.duration}</span>
                                <span class="treatment-price">{card.price}</span>
                            </div>
                            <button class="btn-pill-primary" onclick={book}>{"Book This"}</button>
                        </div>
                    }
                })}
            </div>
        </section>
    }
}
