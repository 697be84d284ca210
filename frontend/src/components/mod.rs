pub mod about_doctor;
pub mod admin_status_toggle;
pub mod appointment_booking;
pub mod doctor_status_badge;
pub mod pricing;
pub mod queue_tracker;
pub mod special_offers;
pub mod treatments;

pub use about_doctor::AboutDoctor;
pub use admin_status_toggle::AdminStatusToggle;
pub use appointment_booking::AppointmentBooking;
pub use doctor_status_badge::DoctorStatusBadge;
pub use pricing::Pricing;
pub use queue_tracker::QueueTracker;
pub use special_offers::SpecialOffers;
pub use treatments::Treatments;
