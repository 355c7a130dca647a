//!
//! Field checks shared by all input dtos.
//!
//! Every check runs before any storage access, so a rejected request
//! never touches the database.
//!

use crate::error::Error;
use time::{macros::format_description, Date};

pub fn required(value: Option<String>, message: &'static str) -> Result<String, Error> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::Validation(message)),
    }
}

///
/// Show dates are compared by plain string equality in the inventory,
/// so only the canonical `DD-MM-YYYY` form is accepted.
///
pub fn show_date(value: Option<String>, message: &'static str) -> Result<String, Error> {
    let value = required(value, message)?;

    let format = format_description!("[day]-[month]-[year]");
    if value.len() != 10 || Date::parse(&value, format).is_err() {
        return Err(Error::Validation("date must be in DD-MM-YYYY format"));
    }

    Ok(value)
}

///
/// Seat codes are a row made of uppercase letters followed by a seat number, e.g. `A1`, `AA12`.
/// Duplicates are collapsed, the first occurrence keeps its position.
///
pub fn seat_codes(value: Option<Vec<String>>, message: &'static str) -> Result<Vec<String>, Error> {
    let seats = match value {
        Some(seats) if !seats.is_empty() => seats,
        _ => return Err(Error::Validation(message)),
    };

    let mut unique_seats: Vec<String> = Vec::with_capacity(seats.len());
    for seat in seats {
        if !is_seat_code(&seat) {
            return Err(Error::Validation("seat code must be a row letter followed by a number"));
        }
        if !unique_seats.contains(&seat) {
            unique_seats.push(seat);
        }
    }

    Ok(unique_seats)
}

fn is_seat_code(seat: &str) -> bool {
    let row_len = seat
        .chars()
        .take_while(|c| c.is_ascii_uppercase())
        .count();
    let number = &seat[row_len..];

    row_len > 0 && !number.is_empty() && number.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn required_missing() {
        let result = required(None, "name is required");

        assert!(matches!(result, Err(Error::Validation("name is required"))));
    }

    #[test]
    fn required_blank() {
        let result = required(Some("   ".to_string()), "name is required");

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn required_value_unchanged() {
        let result = required(Some(" PVR Saket".to_string()), "name is required").unwrap();

        assert_eq!(result, " PVR Saket");
    }

    #[test]
    fn show_date_canonical_ok() {
        let result = show_date(Some("01-06-2025".to_string()), "date is required").unwrap();

        assert_eq!(result, "01-06-2025");
    }

    #[test]
    fn show_date_not_padded() {
        let result = show_date(Some("1-6-2025".to_string()), "date is required");

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn show_date_iso_format() {
        let result = show_date(Some("2025-06-01".to_string()), "date is required");

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn show_date_not_calendar_date() {
        let result = show_date(Some("31-02-2025".to_string()), "date is required");

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn seat_codes_duplicates_collapsed() {
        let seats = vec!["A2".to_string(), "A1".to_string(), "A2".to_string()];

        let result = seat_codes(Some(seats), "selectedSeats is required").unwrap();

        assert_eq!(result, vec!["A2".to_string(), "A1".to_string()]);
    }

    #[test]
    fn seat_codes_empty() {
        let result = seat_codes(Some(Vec::new()), "selectedSeats is required");

        assert!(matches!(
            result,
            Err(Error::Validation("selectedSeats is required"))
        ));
    }

    #[test]
    fn seat_codes_malformed() {
        for seat in ["1A", "A", "a1", "A-1", "", "Ä1"] {
            let result = seat_codes(Some(vec![seat.to_string()]), "selectedSeats is required");

            assert!(matches!(result, Err(Error::Validation(_))), "{seat}");
        }
    }

    #[test]
    fn seat_codes_multi_letter_rows() {
        let result = seat_codes(
            Some(vec!["AA12".to_string(), "N15".to_string()]),
            "selectedSeats is required",
        )
        .unwrap();

        assert_eq!(result.len(), 2);
    }
}
