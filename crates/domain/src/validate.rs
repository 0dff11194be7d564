//! Person payload validation, run before anything touches storage.
//!
//! Rules enforced:
//! 1. `fname` and `lname` must be present and non-blank.
//! 2. `age` must be present, numeric, integral and not negative.
//!
//! Every rule is checked; messages are collected in field order rather than
//! stopping at the first failure.

use crate::{
    models::{AgeInput, NewPerson, PersonInput},
    ValidationError,
};

/// Validate a raw payload and return the canonical `NewPerson`.
///
/// # Errors
/// [`ValidationError`] with one message per failed rule.
pub fn validate_new_person(input: &PersonInput) -> Result<NewPerson, ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_name(input.fname.as_deref(), "fname"));
    errors.extend(validate_name(input.lname.as_deref(), "lname"));

    let age = match validate_age(input.age.as_ref()) {
        Ok(age) => Some(age),
        Err(message) => {
            errors.push(message);
            None
        }
    };

    match (errors.is_empty(), age) {
        (true, Some(age)) => Ok(NewPerson {
            fname: canonical_name(input.fname.as_deref()),
            lname: canonical_name(input.lname.as_deref()),
            age,
        }),
        _ => Err(ValidationError(errors)),
    }
}

/// Check a name field. Returns an empty vector when the value is usable.
pub fn validate_name(value: Option<&str>, field: &str) -> Vec<String> {
    match value.map(str::trim) {
        Some(name) if !name.is_empty() => Vec::new(),
        _ => vec![format!("Missing parameter '{field}'!")],
    }
}

/// Check an age field and return it as a `u32`.
pub fn validate_age(value: Option<&AgeInput>) -> Result<u32, String> {
    const MISSING: &str = "Missing parameter 'age'!";
    const NOT_A_NUMBER: &str = "Parameter 'age' must be a valid number!";
    const NEGATIVE: &str = "Parameter 'age' must be a positive number!";

    let number = match value {
        None => return Err(MISSING.into()),
        Some(AgeInput::Number(n)) => n.as_f64().ok_or(NOT_A_NUMBER)?,
        Some(AgeInput::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Err(MISSING.into());
            }
            text.parse::<f64>().map_err(|_| NOT_A_NUMBER)?
        }
    };

    if !number.is_finite() {
        return Err(NOT_A_NUMBER.into());
    }
    if number < 0.0 {
        return Err(NEGATIVE.into());
    }
    if number.fract() != 0.0 || number > f64::from(u32::MAX) {
        return Err(NOT_A_NUMBER.into());
    }

    Ok(number as u32)
}

fn canonical_name(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_owned()
}

/// Filter free-form age text the way the table's input boxes do: keep the
/// first run of digits and drop redundant leading zeros (a lone `0` stays).
pub fn sanitize_age_input(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();

    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() && !digits.is_empty() {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

// ============================================================
// Unit tests
// ============================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn input(fname: Option<&str>, lname: Option<&str>, age: Option<AgeInput>) -> PersonInput {
        PersonInput {
            fname: fname.map(str::to_owned),
            lname: lname.map(str::to_owned),
            age,
        }
    }

    #[test]
    fn valid_payload_is_canonicalised() {
        let person = validate_new_person(&input(Some(" Ada "), Some("Lovelace"), Some("28".into())))
            .expect("should be valid");
        assert_eq!(
            person,
            NewPerson { fname: "Ada".into(), lname: "Lovelace".into(), age: 28 }
        );
    }

    #[test]
    fn age_zero_is_valid() {
        let person = validate_new_person(&PersonInput::new("Baby", "Doe", 0u32)).expect("valid");
        assert_eq!(person.age, 0);

        let person = validate_new_person(&PersonInput::new("Baby", "Doe", "0")).expect("valid");
        assert_eq!(person.age, 0);
    }

    #[test]
    fn empty_first_name_mentions_fname() {
        let err = validate_new_person(&PersonInput::new("", "X", 5u32)).unwrap_err();
        assert_eq!(err.messages(), ["Missing parameter 'fname'!"]);
    }

    #[test]
    fn blank_last_name_mentions_lname() {
        let err = validate_new_person(&PersonInput::new("X", "   ", 5u32)).unwrap_err();
        assert_eq!(err.messages(), ["Missing parameter 'lname'!"]);
    }

    #[test]
    fn all_errors_are_collected_in_field_order() {
        let err = validate_new_person(&PersonInput::default()).unwrap_err();
        assert_eq!(
            err.messages(),
            [
                "Missing parameter 'fname'!",
                "Missing parameter 'lname'!",
                "Missing parameter 'age'!",
            ]
        );
    }

    #[test]
    fn negative_age_is_rejected_as_not_positive() {
        for age in [AgeInput::from("-1"), AgeInput::Number((-40i64).into())] {
            let err = validate_new_person(&input(Some("A"), Some("B"), Some(age))).unwrap_err();
            assert_eq!(err.messages(), ["Parameter 'age' must be a positive number!"]);
        }
    }

    #[test]
    fn non_numeric_age_is_rejected_as_not_a_number() {
        for raw in ["abc", "12abc", "NaN", "inf"] {
            let err = validate_new_person(&PersonInput::new("A", "B", raw)).unwrap_err();
            assert_eq!(
                err.messages(),
                ["Parameter 'age' must be a valid number!"],
                "age input {raw:?}"
            );
        }
    }

    #[test]
    fn fractional_or_huge_age_is_not_a_valid_number() {
        for raw in ["2.5", "99999999999"] {
            let err = validate_new_person(&PersonInput::new("A", "B", raw)).unwrap_err();
            assert_eq!(err.messages(), ["Parameter 'age' must be a valid number!"]);
        }
    }

    #[test]
    fn blank_age_text_counts_as_missing() {
        let err = validate_new_person(&PersonInput::new("A", "B", "  ")).unwrap_err();
        assert_eq!(err.messages(), ["Missing parameter 'age'!"]);
    }

    #[test]
    fn age_input_deserialises_from_number_or_string() {
        let from_number: PersonInput =
            serde_json::from_str(r#"{"fname":"A","lname":"B","age":7}"#).unwrap();
        let from_text: PersonInput =
            serde_json::from_str(r#"{"fname":"A","lname":"B","age":"7"}"#).unwrap();
        assert_eq!(validate_new_person(&from_number).unwrap().age, 7);
        assert_eq!(validate_new_person(&from_text).unwrap().age, 7);
    }

    #[test]
    fn malformed_shapes_fail_to_deserialise() {
        assert!(serde_json::from_str::<PersonInput>(r#"{"fname":1}"#).is_err());
        assert!(serde_json::from_str::<PersonInput>(r#"{"age":true}"#).is_err());
        assert!(serde_json::from_str::<PersonInput>(r#"[1,2]"#).is_err());
    }

    #[test]
    fn sanitize_keeps_first_digit_run() {
        assert_eq!(sanitize_age_input("a12b34"), "12");
        assert_eq!(sanitize_age_input("007"), "7");
        assert_eq!(sanitize_age_input("000"), "0");
        assert_eq!(sanitize_age_input("abc"), "");
    }
}
