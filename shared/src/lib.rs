//! Core domain types for the DentCare clinic site.
//!
//! Everything here is plain data plus pure logic: the availability rules,
//! the booking prefill channel, form validation, and the simulated queue.
//! Keeping browser APIs out means the whole crate tests natively.

use chrono::{DateTime, Datelike, Local, NaiveDate, Timelike};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// The resident dentist shown across the site.
pub const DOCTOR_NAME: &str = "Dr. Arjun Mehta";

/// Doctor shown on a confirmation when none was chosen.
pub const FALLBACK_DOCTOR: &str = "Assigned Specialist";

/// Longest accepted problem description, in characters.
pub const MAX_PROBLEM_LENGTH: usize = 300;

/// Treatments offered by the booking form, individual procedures first,
/// packages last.
pub const TREATMENTS: [&str; 12] = [
    "Teeth Cleaning",
    "Filling",
    "Root Canal",
    "Extraction",
    "Braces",
    "Whitening",
    "Implants",
    "Veneers",
    "Kids Dentistry",
    "Consultation",
    "Full Exam Package",
    "Smile Makeover Package",
];

/// Bookable slots. There is no 1:00 PM slot, the clinic breaks for lunch.
pub const TIME_SLOTS: [&str; 10] = [
    "9:00 AM",
    "10:00 AM",
    "11:00 AM",
    "12:00 PM",
    "2:00 PM",
    "3:00 PM",
    "4:00 PM",
    "5:00 PM",
    "6:00 PM",
    "7:00 PM",
];

/// Weekly opening rule for the clinic.
///
/// The clinic is open every day except `closed_day`, from `open_hour`
/// (inclusive) to `close_hour` (exclusive), in local time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClinicSchedule {
    /// Day of week the clinic stays closed (0 = Sunday, 1 = Monday, etc.)
    pub closed_day: u8,
    /// First hour of the day the clinic is open (24-hour clock)
    pub open_hour: u32,
    /// First hour of the day the clinic is closed again (24-hour clock)
    pub close_hour: u32,
}

impl Default for ClinicSchedule {
    fn default() -> Self {
        Self {
            closed_day: 0,
            open_hour: 9,
            close_hour: 20,
        }
    }
}

impl ClinicSchedule {
    /// Whether the clinic is open at the given local time.
    pub fn is_open_at(&self, now: DateTime<Local>) -> bool {
        if now.weekday().num_days_from_sunday() == self.closed_day as u32 {
            return false;
        }
        let hour = now.hour();
        hour >= self.open_hour && hour < self.close_hour
    }

    /// Get a human-readable name for the closed day
    pub fn closed_day_name(&self) -> &'static str {
        match self.closed_day {
            0 => "Sunday",
            1 => "Monday",
            2 => "Tuesday",
            3 => "Wednesday",
            4 => "Thursday",
            5 => "Friday",
            6 => "Saturday",
            _ => "Unknown",
        }
    }

    /// Opening hour as shown to visitors, e.g. "9AM".
    pub fn open_label(&self) -> String {
        hour_label(self.open_hour)
    }

    /// Closing hour as shown to visitors, e.g. "8PM".
    pub fn close_label(&self) -> String {
        hour_label(self.close_hour)
    }

    /// Full opening hours line, e.g. "9AM – 8PM".
    pub fn hours_label(&self) -> String {
        format!("{} – {}", self.open_label(), self.close_label())
    }
}

fn hour_label(hour: u32) -> String {
    match hour {
        0 => "12AM".to_string(),
        1..=11 => format!("{}AM", hour),
        12 => "12PM".to_string(),
        _ => format!("{}PM", hour - 12),
    }
}

/// Live availability of the doctor, shared by every surface that shows
/// open/closed state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoctorStatus {
    /// Whether the doctor is currently taking patients
    pub is_available: bool,
    /// Whether an operator has pinned the value by hand
    pub is_manual: bool,
    /// When `is_available` last changed
    pub last_updated: DateTime<Local>,
}

impl DoctorStatus {
    /// Initial state at page load. Unavailable until the first schedule
    /// evaluation runs.
    pub fn startup(now: DateTime<Local>) -> Self {
        Self {
            is_available: false,
            is_manual: false,
            last_updated: now,
        }
    }

    /// Re-evaluate the schedule rule against the given time.
    ///
    /// Does nothing while a manual override is active. Returns `true` only
    /// when availability actually flipped; `last_updated` is stamped on a
    /// flip and left untouched otherwise.
    pub fn apply_schedule(&mut self, schedule: &ClinicSchedule, now: DateTime<Local>) -> bool {
        if self.is_manual {
            return false;
        }
        let open = schedule.is_open_at(now);
        if open == self.is_available {
            return false;
        }
        self.is_available = open;
        self.last_updated = now;
        true
    }

    /// Operator override: invert availability and pin it.
    ///
    /// Once pinned, the schedule never touches this status again for the
    /// lifetime of the page. Toggling an already-pinned status inverts it
    /// once more and keeps the pin.
    pub fn toggle_manual(&mut self, now: DateTime<Local>) {
        self.is_manual = true;
        self.is_available = !self.is_available;
        self.last_updated = now;
    }
}

/// One-shot instruction asking the booking form to pre-populate fields.
///
/// Absent fields mean "leave whatever the visitor already entered alone".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PrefillRequest {
    pub treatment: Option<String>,
    pub doctor: Option<String>,
    pub time: Option<String>,
}

impl PrefillRequest {
    /// A request carrying no fields still gets delivered, so the form can
    /// react (scroll into view) without changing the draft.
    pub fn is_empty(&self) -> bool {
        self.treatment.is_none() && self.doctor.is_none() && self.time.is_none()
    }
}

type PrefillHandler = Rc<dyn Fn(PrefillRequest)>;

/// Single-consumer channel carrying [`PrefillRequest`]s from any surface
/// on the page to the booking form.
///
/// At most one subscriber is registered at a time; subscribing replaces the
/// previous handler. Publishing with no subscriber drops the request, which
/// is the correct outcome while the form is not mounted.
#[derive(Clone, Default)]
pub struct PrefillBus {
    subscriber: Rc<RefCell<Option<PrefillHandler>>>,
}

impl PrefillBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handler that receives every subsequent publish.
    pub fn subscribe(&self, handler: PrefillHandler) {
        *self.subscriber.borrow_mut() = Some(handler);
    }

    /// Drop the current handler. Publishes after this are discarded.
    pub fn unsubscribe(&self) {
        self.subscriber.borrow_mut().take();
    }

    /// Deliver a request to the current subscriber, if any.
    pub fn publish(&self, request: PrefillRequest) {
        // Clone the handler out first so it runs with the cell unborrowed;
        // the handler is then free to publish or (un)subscribe itself.
        let handler = self.subscriber.borrow().as_ref().map(Rc::clone);
        if let Some(handler) = handler {
            handler(request);
        }
    }

    pub fn has_subscriber(&self) -> bool {
        self.subscriber.borrow().is_some()
    }
}

impl PartialEq for PrefillBus {
    // Two handles are equal when they are views of the same channel.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.subscriber, &other.subscriber)
    }
}

impl fmt::Debug for PrefillBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefillBus")
            .field("has_subscriber", &self.has_subscriber())
            .finish()
    }
}

/// How the visitor wants to pay.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentMethod {
    Online,
    AtClinic,
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Online
    }
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Online => "Online Payment",
            PaymentMethod::AtClinic => "Pay At Clinic",
        }
    }
}

/// Tunables for the booking form flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingConfig {
    /// Longest accepted problem description, in characters
    pub max_problem_length: usize,
    /// Simulated server round trip before a booking confirms
    pub submit_delay_ms: u32,
    /// Queue token handed out with the confirmation
    pub confirmation_token: u32,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            max_problem_length: MAX_PROBLEM_LENGTH,
            submit_delay_ms: 1500,
            confirmation_token: 18,
        }
    }
}

/// The booking form draft exactly as entered by the visitor.
///
/// `date` holds the ISO 8601 value (`YYYY-MM-DD`) produced by the date
/// input; `age` stays a string until validation so partial input survives
/// re-renders.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookingForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub age: String,
    pub treatment: String,
    pub date: String,
    pub time: String,
    pub payment: PaymentMethod,
    pub problem: String,
    pub doctor: String,
}

impl BookingForm {
    /// Merge a prefill request into the draft.
    ///
    /// Absent and empty fields leave the corresponding draft field alone, so
    /// a partial request never wipes what the visitor already typed.
    pub fn apply_prefill(&mut self, request: &PrefillRequest) {
        if let Some(treatment) = &request.treatment {
            if !treatment.is_empty() {
                self.treatment = treatment.clone();
            }
        }
        if let Some(doctor) = &request.doctor {
            if !doctor.is_empty() {
                self.doctor = doctor.clone();
            }
        }
        if let Some(time) = &request.time {
            if !time.is_empty() {
                self.time = time.clone();
            }
        }
    }

    /// Check every field against the booking rules.
    ///
    /// `today` is the visitor's current local date; it anchors the past-date
    /// check without reaching for the clock in here.
    pub fn validate(&self, today: NaiveDate) -> BookingValidation {
        let mut errors = Vec::new();

        if self.name.chars().count() < 3 {
            errors.push(BookingValidationError::NameTooShort);
        }
        if !is_valid_phone(&self.phone) {
            errors.push(BookingValidationError::InvalidPhone);
        }
        if !self.email.is_empty() && !is_valid_email(&self.email) {
            errors.push(BookingValidationError::InvalidEmail);
        }
        match self.age.trim().parse::<u32>() {
            Ok(age) if (1..=120).contains(&age) => {}
            _ => errors.push(BookingValidationError::InvalidAge),
        }
        if self.treatment.is_empty() {
            errors.push(BookingValidationError::MissingTreatment);
        }
        match NaiveDate::parse_from_str(&self.date, "%Y-%m-%d") {
            Ok(date) => {
                // Sunday wins over the past-date message when both apply.
                if date.weekday().num_days_from_sunday() == 0 {
                    errors.push(BookingValidationError::ClosedDay);
                } else if date < today {
                    errors.push(BookingValidationError::PastDate);
                }
            }
            Err(_) => errors.push(BookingValidationError::MissingDate),
        }
        if self.time.is_empty() {
            errors.push(BookingValidationError::MissingTime);
        }
        let problem_length = self.problem.chars().count();
        if problem_length > MAX_PROBLEM_LENGTH {
            errors.push(BookingValidationError::ProblemTooLong(problem_length));
        }

        BookingValidation {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Build the confirmation summary for a successful submission.
    pub fn confirm(&self, token: u32) -> BookingConfirmation {
        let doctor = if self.doctor.is_empty() {
            FALLBACK_DOCTOR.to_string()
        } else {
            self.doctor.clone()
        };
        BookingConfirmation {
            token,
            doctor,
            treatment: self.treatment.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            calendar_url: self.calendar_url(),
            whatsapp_url: self.whatsapp_url(),
        }
    }

    /// Google Calendar template link for the booked appointment.
    pub fn calendar_url(&self) -> String {
        let title = format!("DentCare Appointment: {}", self.treatment);
        let doctor = if self.doctor.is_empty() {
            "Common Doctor"
        } else {
            &self.doctor
        };
        let details = format!("With {}. Problem: {}", doctor, self.problem);
        let date = self.date.replace('-', "");
        format!(
            "https://calendar.google.com/calendar/render?action=TEMPLATE&text={}&details={}&dates={}/{}",
            urlencoding::encode(&title),
            urlencoding::encode(&details),
            date,
            date,
        )
    }

    /// WhatsApp share link announcing the booked appointment.
    pub fn whatsapp_url(&self) -> String {
        let message = format!(
            "I have booked an appointment at DentCare for {} on {} at {}.",
            self.treatment, self.date, self.time,
        );
        format!("https://wa.me/?text={}", urlencoding::encode(&message))
    }
}

fn is_valid_phone(value: &str) -> bool {
    value.len() == 10 && value.chars().all(|c| c.is_ascii_digit())
}

// Lightweight local@domain.tld shape check, no whitespace anywhere.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

/// Which form field a validation error belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BookingField {
    Name,
    Phone,
    Email,
    Age,
    Treatment,
    Date,
    Time,
    Problem,
}

/// Specific validation errors for the booking form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum BookingValidationError {
    NameTooShort,
    InvalidPhone,
    InvalidEmail,
    InvalidAge,
    MissingTreatment,
    MissingDate,
    PastDate,
    ClosedDay,
    MissingTime,
    ProblemTooLong(usize),
}

impl BookingValidationError {
    /// The field this error should be shown under.
    pub fn field(&self) -> BookingField {
        match self {
            BookingValidationError::NameTooShort => BookingField::Name,
            BookingValidationError::InvalidPhone => BookingField::Phone,
            BookingValidationError::InvalidEmail => BookingField::Email,
            BookingValidationError::InvalidAge => BookingField::Age,
            BookingValidationError::MissingTreatment => BookingField::Treatment,
            BookingValidationError::MissingDate
            | BookingValidationError::PastDate
            | BookingValidationError::ClosedDay => BookingField::Date,
            BookingValidationError::MissingTime => BookingField::Time,
            BookingValidationError::ProblemTooLong(_) => BookingField::Problem,
        }
    }

    /// Visitor-facing message for this error.
    pub fn message(&self) -> String {
        match self {
            BookingValidationError::NameTooShort => {
                "Name must be at least 3 characters".to_string()
            }
            BookingValidationError::InvalidPhone => {
                "Enter a valid 10-digit phone number".to_string()
            }
            BookingValidationError::InvalidEmail => "Enter a valid email".to_string(),
            BookingValidationError::InvalidAge => "Age must be between 1 and 120".to_string(),
            BookingValidationError::MissingTreatment => "Please select a treatment".to_string(),
            BookingValidationError::MissingDate => "Please select a date".to_string(),
            BookingValidationError::PastDate => "Cannot book past dates".to_string(),
            BookingValidationError::ClosedDay => "We are closed on Sundays".to_string(),
            BookingValidationError::MissingTime => "Please select a time slot".to_string(),
            BookingValidationError::ProblemTooLong(length) => {
                format!(
                    "Description is {} characters, the limit is {}",
                    length, MAX_PROBLEM_LENGTH
                )
            }
        }
    }
}

/// Validation result for the booking form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingValidation {
    pub is_valid: bool,
    pub errors: Vec<BookingValidationError>,
}

impl BookingValidation {
    /// Message to show under the given field, if it has an error.
    pub fn message_for(&self, field: BookingField) -> Option<String> {
        self.errors
            .iter()
            .find(|error| error.field() == field)
            .map(|error| error.message())
    }
}

/// Summary shown to the visitor once a booking goes through.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingConfirmation {
    pub token: u32,
    pub doctor: String,
    pub treatment: String,
    pub date: String,
    pub time: String,
    pub calendar_url: String,
    pub whatsapp_url: String,
}

/// Tunables for the simulated live queue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueueConfig {
    /// How often the now-serving token advances
    pub advance_interval_ms: u32,
    /// Highest token before the counter wraps back to 1
    pub max_token: u32,
    /// Average consultation length used for the wait estimate
    pub minutes_per_patient: u32,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            advance_interval_ms: 30_000,
            max_token: 50,
            minutes_per_patient: 15,
        }
    }
}

/// Snapshot of the simulated walk-in queue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueueStatus {
    /// Token currently being served
    pub now_serving: u32,
    /// The visitor's own token
    pub your_token: u32,
    /// Patients booked in today
    pub today_total: u32,
    /// Consultations already finished
    pub completed: u32,
}

impl Default for QueueStatus {
    fn default() -> Self {
        Self {
            now_serving: 12,
            your_token: 18,
            today_total: 27,
            completed: 18,
        }
    }
}

impl QueueStatus {
    /// Move the queue forward by one patient, wrapping past `max_token`.
    pub fn advance(&mut self, config: &QueueConfig) {
        self.now_serving = if self.now_serving < config.max_token {
            self.now_serving + 1
        } else {
            1
        };
    }

    /// Patients still ahead of the visitor. Zero once their token is up.
    pub fn patients_ahead(&self) -> u32 {
        self.your_token.saturating_sub(self.now_serving)
    }

    /// Rough wait estimate for the visitor's token.
    pub fn estimated_wait_minutes(&self, config: &QueueConfig) -> u32 {
        self.patients_ahead() * config.minutes_per_patient
    }

    /// Patients booked today that have not been seen yet.
    pub fn remaining(&self) -> u32 {
        self.today_total.saturating_sub(self.completed)
    }

    /// Share of today's patients already seen, as a rounded percentage.
    pub fn progress_percent(&self) -> u32 {
        if self.today_total == 0 {
            return 0;
        }
        (self.completed * 100 + self.today_total / 2) / self.today_total
    }
}

/// Result of the token lookup offered next to the queue display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenLookup {
    pub token: u32,
    pub position: u32,
}

impl TokenLookup {
    /// Mock lookup while there is no backend: any well-formed phone number
    /// maps to the same canned token and position.
    pub fn mock_for_phone(phone: &str) -> Option<TokenLookup> {
        if is_valid_phone(phone) {
            Some(TokenLookup {
                token: 25,
                position: 7,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn local(y: i32, mo: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, mo, d, h, min, 0).unwrap()
    }

    // 2025-06-16 is a Monday, 2025-06-15 a Sunday.
    const MON: (i32, u32, u32) = (2025, 6, 16);
    const SUN: (i32, u32, u32) = (2025, 6, 15);

    #[test]
    fn test_schedule_open_within_hours() {
        let schedule = ClinicSchedule::default();
        assert!(schedule.is_open_at(local(MON.0, MON.1, MON.2, 9, 0)));
        assert!(schedule.is_open_at(local(MON.0, MON.1, MON.2, 14, 30)));
        assert!(schedule.is_open_at(local(MON.0, MON.1, MON.2, 19, 59)));
    }

    #[test]
    fn test_schedule_closed_outside_hours() {
        let schedule = ClinicSchedule::default();
        assert!(!schedule.is_open_at(local(MON.0, MON.1, MON.2, 8, 59)));
        assert!(!schedule.is_open_at(local(MON.0, MON.1, MON.2, 20, 0)));
        assert!(!schedule.is_open_at(local(MON.0, MON.1, MON.2, 23, 0)));
        assert!(!schedule.is_open_at(local(MON.0, MON.1, MON.2, 0, 30)));
    }

    #[test]
    fn test_schedule_closed_all_sunday() {
        let schedule = ClinicSchedule::default();
        assert!(!schedule.is_open_at(local(SUN.0, SUN.1, SUN.2, 12, 0)));
        assert!(!schedule.is_open_at(local(SUN.0, SUN.1, SUN.2, 9, 0)));
    }

    #[test]
    fn test_schedule_labels() {
        let schedule = ClinicSchedule::default();
        assert_eq!(schedule.open_label(), "9AM");
        assert_eq!(schedule.close_label(), "8PM");
        assert_eq!(schedule.hours_label(), "9AM – 8PM");
        assert_eq!(schedule.closed_day_name(), "Sunday");
    }

    #[test]
    fn test_apply_schedule_flips_and_stamps() {
        let schedule = ClinicSchedule::default();
        let t0 = local(MON.0, MON.1, MON.2, 8, 0);
        let t1 = local(MON.0, MON.1, MON.2, 10, 0);
        let mut status = DoctorStatus::startup(t0);

        assert!(status.apply_schedule(&schedule, t1));
        assert!(status.is_available);
        assert!(!status.is_manual);
        assert_eq!(status.last_updated, t1);
    }

    #[test]
    fn test_apply_schedule_noop_keeps_last_updated() {
        let schedule = ClinicSchedule::default();
        let t1 = local(MON.0, MON.1, MON.2, 10, 0);
        let t2 = local(MON.0, MON.1, MON.2, 10, 30);
        let mut status = DoctorStatus::startup(local(MON.0, MON.1, MON.2, 8, 0));
        status.apply_schedule(&schedule, t1);

        // Still open half an hour later, so nothing may change.
        assert!(!status.apply_schedule(&schedule, t2));
        assert!(status.is_available);
        assert_eq!(status.last_updated, t1);
    }

    #[test]
    fn test_apply_schedule_closes_after_hours() {
        let schedule = ClinicSchedule::default();
        let mut status = DoctorStatus::startup(local(MON.0, MON.1, MON.2, 8, 0));
        status.apply_schedule(&schedule, local(MON.0, MON.1, MON.2, 10, 0));

        let t_close = local(MON.0, MON.1, MON.2, 20, 0);
        assert!(status.apply_schedule(&schedule, t_close));
        assert!(!status.is_available);
        assert_eq!(status.last_updated, t_close);
    }

    #[test]
    fn test_toggle_manual_pins_the_status() {
        let schedule = ClinicSchedule::default();
        let mut status = DoctorStatus::startup(local(MON.0, MON.1, MON.2, 8, 0));
        status.apply_schedule(&schedule, local(MON.0, MON.1, MON.2, 10, 0));

        let t_toggle = local(MON.0, MON.1, MON.2, 10, 5);
        status.toggle_manual(t_toggle);
        assert!(!status.is_available);
        assert!(status.is_manual);
        assert_eq!(status.last_updated, t_toggle);

        // Schedule says open, but the pin holds and the stamp stays put.
        assert!(!status.apply_schedule(&schedule, local(MON.0, MON.1, MON.2, 11, 0)));
        assert!(!status.is_available);
        assert_eq!(status.last_updated, t_toggle);
    }

    #[test]
    fn test_toggle_manual_twice_stays_manual() {
        let mut status = DoctorStatus::startup(local(MON.0, MON.1, MON.2, 8, 0));
        let t1 = local(MON.0, MON.1, MON.2, 9, 0);
        let t2 = local(MON.0, MON.1, MON.2, 9, 30);

        status.toggle_manual(t1);
        assert!(status.is_available);
        status.toggle_manual(t2);
        assert!(!status.is_available);
        assert!(status.is_manual);
        assert_eq!(status.last_updated, t2);
    }

    #[test]
    fn test_prefill_merge_keeps_unset_fields() {
        let mut form = BookingForm {
            treatment: "Braces".to_string(),
            doctor: DOCTOR_NAME.to_string(),
            ..Default::default()
        };
        let request = PrefillRequest {
            time: Some("11:00 AM".to_string()),
            ..Default::default()
        };
        form.apply_prefill(&request);

        assert_eq!(form.treatment, "Braces");
        assert_eq!(form.doctor, DOCTOR_NAME);
        assert_eq!(form.time, "11:00 AM");
    }

    #[test]
    fn test_prefill_merge_ignores_empty_strings() {
        let mut form = BookingForm {
            treatment: "Braces".to_string(),
            ..Default::default()
        };
        let request = PrefillRequest {
            treatment: Some(String::new()),
            ..Default::default()
        };
        form.apply_prefill(&request);
        assert_eq!(form.treatment, "Braces");
    }

    #[test]
    fn test_prefill_merge_overwrites_set_fields() {
        let mut form = BookingForm {
            treatment: "Braces".to_string(),
            ..Default::default()
        };
        let request = PrefillRequest {
            treatment: Some("Whitening".to_string()),
            doctor: Some(DOCTOR_NAME.to_string()),
            ..Default::default()
        };
        form.apply_prefill(&request);
        assert_eq!(form.treatment, "Whitening");
        assert_eq!(form.doctor, DOCTOR_NAME);
    }

    #[test]
    fn test_bus_delivers_to_subscriber() {
        let bus = PrefillBus::new();
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();
        bus.subscribe(Rc::new(move |request| sink.borrow_mut().push(request)));

        bus.publish(PrefillRequest {
            treatment: Some("Filling".to_string()),
            ..Default::default()
        });

        let received = received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].treatment.as_deref(), Some("Filling"));
    }

    #[test]
    fn test_bus_publish_without_subscriber_is_dropped() {
        let bus = PrefillBus::new();
        // Must not panic, the request just disappears.
        bus.publish(PrefillRequest::default());
        assert!(!bus.has_subscriber());
    }

    #[test]
    fn test_bus_unsubscribe_stops_delivery() {
        let bus = PrefillBus::new();
        let count = Rc::new(RefCell::new(0u32));
        let sink = count.clone();
        bus.subscribe(Rc::new(move |_| *sink.borrow_mut() += 1));

        bus.publish(PrefillRequest::default());
        bus.unsubscribe();
        bus.publish(PrefillRequest::default());

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_bus_resubscribe_replaces_handler() {
        let bus = PrefillBus::new();
        let first = Rc::new(RefCell::new(0u32));
        let second = Rc::new(RefCell::new(0u32));

        let sink = first.clone();
        bus.subscribe(Rc::new(move |_| *sink.borrow_mut() += 1));
        let sink = second.clone();
        bus.subscribe(Rc::new(move |_| *sink.borrow_mut() += 1));

        bus.publish(PrefillRequest::default());
        assert_eq!(*first.borrow(), 0);
        assert_eq!(*second.borrow(), 1);
    }

    #[test]
    fn test_bus_handler_may_publish_again() {
        let bus = PrefillBus::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let sink = log.clone();
        let inner_bus = bus.clone();
        bus.subscribe(Rc::new(move |request: PrefillRequest| {
            let first_round = request.time.is_none();
            sink.borrow_mut().push(request);
            if first_round {
                inner_bus.publish(PrefillRequest {
                    time: Some("9:00 AM".to_string()),
                    ..Default::default()
                });
            }
        }));

        bus.publish(PrefillRequest::default());
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_bus_clones_share_the_channel() {
        let bus = PrefillBus::new();
        let handle = bus.clone();
        let count = Rc::new(RefCell::new(0u32));
        let sink = count.clone();
        handle.subscribe(Rc::new(move |_| *sink.borrow_mut() += 1));

        bus.publish(PrefillRequest::default());
        assert_eq!(*count.borrow(), 1);
        assert_eq!(bus, handle);
        assert_ne!(bus, PrefillBus::new());
    }

    fn valid_form() -> BookingForm {
        BookingForm {
            name: "Asha Rao".to_string(),
            phone: "9876543210".to_string(),
            email: "asha@example.com".to_string(),
            age: "34".to_string(),
            treatment: "Teeth Cleaning".to_string(),
            date: "2025-06-20".to_string(),
            time: "10:00 AM".to_string(),
            payment: PaymentMethod::Online,
            problem: "Mild sensitivity".to_string(),
            doctor: String::new(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 16).unwrap()
    }

    #[test]
    fn test_validate_accepts_complete_form() {
        let validation = valid_form().validate(today());
        assert!(validation.is_valid);
        assert!(validation.errors.is_empty());
    }

    #[test]
    fn test_validate_name_and_phone() {
        let mut form = valid_form();
        form.name = "Al".to_string();
        form.phone = "98765".to_string();
        let validation = form.validate(today());

        assert!(!validation.is_valid);
        assert!(validation.errors.contains(&BookingValidationError::NameTooShort));
        assert!(validation.errors.contains(&BookingValidationError::InvalidPhone));
        assert_eq!(
            validation.message_for(BookingField::Phone),
            Some("Enter a valid 10-digit phone number".to_string()),
        );
    }

    #[test]
    fn test_validate_phone_rejects_non_digits() {
        let mut form = valid_form();
        form.phone = "98765abc10".to_string();
        assert!(!form.validate(today()).is_valid);
    }

    #[test]
    fn test_validate_email_is_optional() {
        let mut form = valid_form();
        form.email = String::new();
        assert!(form.validate(today()).is_valid);

        form.email = "not-an-email".to_string();
        let validation = form.validate(today());
        assert!(validation.errors.contains(&BookingValidationError::InvalidEmail));
    }

    #[test]
    fn test_validate_age_bounds() {
        for bad in ["", "0", "121", "abc", "-3"] {
            let mut form = valid_form();
            form.age = bad.to_string();
            assert!(
                form.validate(today()).errors.contains(&BookingValidationError::InvalidAge),
                "age {:?} should be rejected",
                bad,
            );
        }
        let mut form = valid_form();
        form.age = "1".to_string();
        assert!(form.validate(today()).is_valid);
        form.age = "120".to_string();
        assert!(form.validate(today()).is_valid);
    }

    #[test]
    fn test_validate_rejects_past_dates() {
        let mut form = valid_form();
        form.date = "2025-06-10".to_string();
        let validation = form.validate(today());
        assert!(validation.errors.contains(&BookingValidationError::PastDate));
    }

    #[test]
    fn test_validate_rejects_sundays() {
        let mut form = valid_form();
        form.date = "2025-06-22".to_string();
        let validation = form.validate(today());
        assert!(validation.errors.contains(&BookingValidationError::ClosedDay));
        assert_eq!(
            validation.message_for(BookingField::Date),
            Some("We are closed on Sundays".to_string()),
        );
    }

    #[test]
    fn test_validate_past_sunday_reports_closed_day() {
        // Both rules match; the closed-day message is the one shown.
        let mut form = valid_form();
        form.date = "2025-06-15".to_string();
        let validation = form.validate(today());
        assert!(validation.errors.contains(&BookingValidationError::ClosedDay));
        assert!(!validation.errors.contains(&BookingValidationError::PastDate));
    }

    #[test]
    fn test_validate_today_is_bookable() {
        let mut form = valid_form();
        form.date = "2025-06-16".to_string();
        assert!(form.validate(today()).is_valid);
    }

    #[test]
    fn test_validate_missing_selections() {
        let mut form = valid_form();
        form.treatment = String::new();
        form.date = String::new();
        form.time = String::new();
        let validation = form.validate(today());

        assert!(validation.errors.contains(&BookingValidationError::MissingTreatment));
        assert!(validation.errors.contains(&BookingValidationError::MissingDate));
        assert!(validation.errors.contains(&BookingValidationError::MissingTime));
    }

    #[test]
    fn test_validate_problem_length() {
        let mut form = valid_form();
        form.problem = "x".repeat(301);
        let validation = form.validate(today());
        assert!(validation
            .errors
            .contains(&BookingValidationError::ProblemTooLong(301)));

        form.problem = "x".repeat(300);
        assert!(form.validate(today()).is_valid);
    }

    #[test]
    fn test_confirm_uses_fallback_doctor() {
        let confirmation = valid_form().confirm(18);
        assert_eq!(confirmation.token, 18);
        assert_eq!(confirmation.doctor, FALLBACK_DOCTOR);
        assert_eq!(confirmation.treatment, "Teeth Cleaning");

        let mut form = valid_form();
        form.doctor = DOCTOR_NAME.to_string();
        assert_eq!(form.confirm(18).doctor, DOCTOR_NAME);
    }

    #[test]
    fn test_calendar_url_encodes_fields() {
        let mut form = valid_form();
        form.treatment = "Root Canal".to_string();
        form.problem = "Sharp pain in left molar".to_string();
        let url = form.calendar_url();

        assert!(url.starts_with("https://calendar.google.com/calendar/render?action=TEMPLATE"));
        assert!(url.contains("text=DentCare%20Appointment%3A%20Root%20Canal"));
        assert!(url.contains("With%20Common%20Doctor"));
        assert!(url.contains("&dates=20250620/20250620"));
    }

    #[test]
    fn test_whatsapp_url_encodes_message() {
        let url = valid_form().whatsapp_url();
        assert!(url.starts_with("https://wa.me/?text="));
        assert!(url.contains("Teeth%20Cleaning"));
        assert!(url.contains("2025-06-20"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn test_queue_advances_and_wraps() {
        let config = QueueConfig::default();
        let mut status = QueueStatus::default();

        status.advance(&config);
        assert_eq!(status.now_serving, 13);

        status.now_serving = 50;
        status.advance(&config);
        assert_eq!(status.now_serving, 1);
    }

    #[test]
    fn test_queue_wait_estimate() {
        let config = QueueConfig::default();
        let status = QueueStatus::default();
        assert_eq!(status.patients_ahead(), 6);
        assert_eq!(status.estimated_wait_minutes(&config), 90);
    }

    #[test]
    fn test_queue_ahead_saturates_at_zero() {
        let status = QueueStatus {
            now_serving: 20,
            ..Default::default()
        };
        assert_eq!(status.patients_ahead(), 0);
        assert_eq!(status.estimated_wait_minutes(&QueueConfig::default()), 0);
    }

    #[test]
    fn test_queue_progress() {
        let status = QueueStatus::default();
        assert_eq!(status.remaining(), 9);
        assert_eq!(status.progress_percent(), 67);

        let empty = QueueStatus {
            today_total: 0,
            completed: 0,
            ..Default::default()
        };
        assert_eq!(empty.progress_percent(), 0);
    }

    #[test]
    fn test_token_lookup_requires_valid_phone() {
        let found = TokenLookup::mock_for_phone("9876543210").unwrap();
        assert_eq!(found.token, 25);
        assert_eq!(found.position, 7);

        assert!(TokenLookup::mock_for_phone("12345").is_none());
        assert!(TokenLookup::mock_for_phone("987654321x").is_none());
    }

    #[test]
    fn test_catalog_constants() {
        assert_eq!(TREATMENTS.len(), 12);
        assert_eq!(TIME_SLOTS.len(), 10);
        // Lunch hour is never offered.
        assert!(!TIME_SLOTS.contains(&"1:00 PM"));
        assert!(TREATMENTS.contains(&"Smile Makeover Package"));
    }
}
