use yew::prelude::*;

mod components;
mod context;
mod hooks;
mod services;

use components::{
    AboutDoctor, AdminStatusToggle, AppointmentBooking, DoctorStatusBadge, Pricing, QueueTracker,
    SpecialOffers, Treatments,
};
use context::doctor_status::DoctorStatusProvider;
use context::prefill::PrefillProvider;

#[function_component(App)]
fn app() -> Html {
    html! {
        <DoctorStatusProvider>
            <PrefillProvider>
                <AdminStatusToggle />
                <header class="topbar">
                    <span class="brand">{"DentCare"}</span>
                    <DoctorStatusBadge />
                </header>
                <main>
                    <QueueTracker />
                    <Treatments />
                    <AboutDoctor />
                    <AppointmentBooking />
                    <Pricing />
                    <SpecialOffers />
                </main>
            </PrefillProvider>
        </DoctorStatusProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
