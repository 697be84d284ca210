pub mod use_doctor_status;
pub mod use_periodic_tick;
pub mod use_prefill;
