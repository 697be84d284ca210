use shared::{PrefillRequest, DOCTOR_NAME};
use yew::prelude::*;

use crate::hooks::use_prefill::use_prefill_publisher;

const DEGREES: [(&str, &str); 3] = [
    ("BDS", "Bachelor of Dental Surgery, Manipal University"),
    ("MDS", "Master of Dental Surgery, Saveetha Dental College"),
    ("Fellowship", "Fellowship in Advanced Implantology, ICOI, USA"),
];

const ACHIEVEMENTS: [&str; 5] = [
    "15+ Years of Clinical Excellence",
    "Member of the Indian Dental Association",
    "Published in International Journals",
    "Trained 50+ Junior Dentists",
    "Pioneer in Painless Dentistry",
];

/// Doctor introduction. Its booking button publishes a prefill that locks
/// the doctor field in before the visitor reaches the form.
#[function_component(AboutDoctor)]
pub fn about_doctor() -> Html {
    let publish = use_prefill_publisher();

    let book_with_doctor = {
        Callback::from(move |_| {
            publish.emit(PrefillRequest {
                doctor: Some(DOCTOR_NAME.to_string()),
                ..Default::default()
            });
        })
    };

    html! {
        <section id="doctor" class="doctor-section">
            <h2>{DOCTOR_NAME}</h2>
            <h3>{"Prosthodontist & Implantologist"}</h3>
            <p class="doctor-bio">
                {"With over 15 years of experience, Dr. Mehta combines clinical precision \
                  with a gentle, patient-first approach. He has treated 5,000+ patients and \
                  specializes in painless procedures, cosmetic dentistry, and dental implants."}
            </p>

            <div class="doctor-degrees">
                {for DEGREES.iter().map(|(short, long)| html! {
                    <span class="doctor-degree" title={*long}>{*short}</span>
                })}
            </div>

            <ul class="doctor-achievements">
                {for ACHIEVEMENTS.iter().map(|achievement| html! {
                    <li>{*achievement}</li>
                })}
            </ul>

            <button class="btn-pill-primary" onclick={book_with_doctor}>
                {"Book With Doctor →"}
            </button>
        </section>
    }
}
