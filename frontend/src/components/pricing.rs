use shared::PrefillRequest;
use yew::prelude::*;

use crate::hooks::use_prefill::use_prefill_publisher;

struct PricingPackage {
    name: &'static str,
    price: &'static str,
    desc: &'static str,
    /// Treatment the booking form gets prefilled with for this card.
    treatment: &'static str,
    popular: bool,
}

const PACKAGES: [PricingPackage; 3] = [
    PricingPackage {
        name: "Basic",
        price: "₹499",
        desc: "Consultation + Checkup",
        treatment: "Consultation",
        popular: false,
    },
    PricingPackage {
        name: "Complete",
        price: "₹1,499",
        desc: "Full Care Package",
        treatment: "Full Exam Package",
        popular: true,
    },
    PricingPackage {
        name: "Premium",
        price: "₹9,999",
        desc: "Annual Smile Plan",
        treatment: "Smile Makeover Package",
        popular: false,
    },
];

/// Package pricing. Each card maps to one of the form's package treatments
/// and publishes it on "Book Now".
#[function_component(Pricing)]
pub fn pricing() -> Html {
    let publish = use_prefill_publisher();

    html! {
        <section id="pricing" class="pricing-section">
            <h2>{"Transparent Pricing"}</h2>
            <p class="pricing-subtitle">{"No Hidden Charges"}</p>

            <div class="pricing-grid">
                {for PACKAGES.iter().map(|package| {
                    let book = {
                        let publish = publish.clone();
                        let treatment = package.treatment;
                        Callback::from(move |_| {
                            publish.emit(PrefillRequest {
                                treatment: Some(treatment.to_string()),
                                ..Default::default()
                            });
                        })
                    };
                    html! {
                        <div class={classes!("pricing-card", package.popular.then_some("pricing-card-popular"))}>
                            {if package.popular {
                                html! { <span class="pricing-badge">{"MOST POPULAR"}</span> }
                            } else { html! {} }}
                            <h3>{package.name}</h3>
                            <p class="pricing-desc">{package.desc}</p>
                            <div class="pricing-amount">{package.price}</div>
                            <button class="btn-pill-primary" onclick={book}>{"Book Now"}</button>
                        </div>
                    }
                })}
            </div>
        </section>
    }
}
