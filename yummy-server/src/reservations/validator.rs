//! Reservation request validation
//!
//! Shape-only validation: required fields, well-formed email, a parseable
//! calendar date and party size bounds. Real-world table availability is
//! deliberately out of scope.

use chrono::NaiveDate;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    MAX_GUESTS, MIN_GUESTS, Reservation, ReservationCreate, ReservationStatus,
};
use shared::util::{now_millis, snowflake_id};
use validator::ValidateEmail;

use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};

/// Validate a reservation request and produce a pending reservation
pub fn validate(input: ReservationCreate) -> AppResult<Reservation> {
    validate_required_text(&input.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&input.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&input.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&input.date, "date", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&input.time, "time", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&input.special_requests, "special_requests", MAX_NOTE_LEN)?;

    let email = input.email.trim().to_lowercase();
    if !email.validate_email() {
        return Err(AppError::validation("email is not a valid email address"));
    }

    let date = NaiveDate::parse_from_str(input.date.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::new(ErrorCode::ReservationDateInvalid).with_detail("date", input.date.clone())
    })?;

    if !(MIN_GUESTS..=MAX_GUESTS).contains(&input.guests) {
        return Err(
            AppError::new(ErrorCode::PartySizeOutOfRange).with_detail("guests", input.guests)
        );
    }

    let now = now_millis();
    Ok(Reservation {
        id: snowflake_id(),
        name: input.name.trim().to_string(),
        phone: input.phone.trim().to_string(),
        email,
        date,
        time: input.time.trim().to_string(),
        guests: input.guests,
        special_requests: input.special_requests.filter(|s| !s.trim().is_empty()),
        status: ReservationStatus::Pending,
        created_at: now,
        updated_at: now,
    })
}
