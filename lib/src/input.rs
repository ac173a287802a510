// lib/src/input.rs

//! Turning raw text (command-line flags, interactive input) into typed field
//! changes.

use chrono::NaiveDate;

use intake_models::{Field, IntakeError, IntakeResult, ReferenceId, Sex};

use crate::cascade::FieldChange;

/// Birthday formats accepted from text: the date-picker format first, then ISO.
const DATE_FORMATS: [&str; 2] = ["%d/%m/%Y", "%Y-%m-%d"];

pub fn parse_date(raw: &str) -> IntakeResult<NaiveDate> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| {
            IntakeError::InvalidInput(format!(
                "'{}' is not a date (expected dd/mm/yyyy or yyyy-mm-dd)",
                raw
            ))
        })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Builds the change for `field` from raw text. Blank text clears selects and
/// the birthday; free-text fields keep the text as typed.
pub fn parse_change(field: Field, raw: &str) -> IntakeResult<FieldChange> {
    let blank = raw.trim().is_empty();
    let change = match field {
        Field::Name => FieldChange::Name(raw.to_string()),
        Field::Contact => FieldChange::Contact(raw.to_string()),
        _ if blank => FieldChange::clear(field),
        Field::Birthday => FieldChange::Birthday(Some(parse_date(raw)?)),
        Field::Sex => FieldChange::Sex(Some(raw.parse::<Sex>()?)),
        Field::City => FieldChange::City(Some(raw.parse::<ReferenceId>()?)),
        Field::Speciality => FieldChange::Speciality(Some(raw.parse::<ReferenceId>()?)),
        Field::Doctor => FieldChange::Doctor(Some(raw.parse::<ReferenceId>()?)),
    };
    Ok(change)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_both_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2010, 6, 2).unwrap();
        assert_eq!(parse_date("02/06/2010").unwrap(), expected);
        assert_eq!(parse_date("2010-06-02").unwrap(), expected);
        assert!(parse_date("June 2nd").is_err());
        assert_eq!(format_date(expected), "02/06/2010");
    }

    #[test]
    fn blank_select_input_clears() {
        assert_eq!(parse_change(Field::City, "  ").unwrap(), FieldChange::City(None));
        assert_eq!(parse_change(Field::Birthday, "").unwrap(), FieldChange::Birthday(None));
    }

    #[test]
    fn typed_input_becomes_typed_changes() {
        assert_eq!(
            parse_change(Field::Doctor, "7").unwrap(),
            FieldChange::Doctor(Some(ReferenceId(7)))
        );
        assert_eq!(
            parse_change(Field::Sex, "female").unwrap(),
            FieldChange::Sex(Some(Sex::Female))
        );
        assert_eq!(
            parse_change(Field::Name, "John Smith").unwrap(),
            FieldChange::Name("John Smith".to_string())
        );
        assert!(parse_change(Field::City, "Warsaw").is_err());
    }
}
