pub mod doctor_status;
pub mod prefill;
