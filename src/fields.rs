// ⌨️ Field Core - Keystroke normalization + validation
// Every text-change event runs normalize-then-validate for exactly one field.
//
// normalize() decides what the field stores, validate() decides what the user
// is told. Digit/letter fields are validated against the ATTEMPTED input so a
// rejected or truncated keystroke still surfaces an inline error.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::trace;

pub const CARD_NUMBER_MAX_DIGITS: usize = 16;
pub const CVV_MAX_DIGITS: usize = 3;
pub const EXPIRY_MAX_DIGITS: usize = 4;
pub const AMOUNT_MAX_DECIMALS: usize = 2;

static DIGITS_ONLY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]*$").unwrap());

static LETTERS_ONLY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z\s]*$").unwrap());
static NOT_LETTERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z\s]").unwrap());

/// Personal names: any script, plus apostrophes, hyphens and periods ("O'Brien", "José")
static NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{M}\s'.-]*$").unwrap());
static NOT_NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{M}\s'.-]").unwrap());

/// Progressive MM/YY: a valid month, an optional slash, then up to two year digits
static EXPIRY_PROGRESSIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0[1-9]|1[0-2])/?[0-9]{0,2}$").unwrap());

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// Virtual payment address, e.g. "name.surname@okbank"
static UPI_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]{2,256}@[A-Za-z]{2,64}$").unwrap());

static AMOUNT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]*(\.[0-9]*)?$").unwrap());

// ============================================================================
// FIELD KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    CardNumber,
    CardHolder,
    ExpiryDate,
    Cvv,
    UpiId,
    Email,
    Password,
    FullName,
    Amount,
}

impl FieldKind {
    pub const ALL: [FieldKind; 9] = [
        FieldKind::CardNumber,
        FieldKind::CardHolder,
        FieldKind::ExpiryDate,
        FieldKind::Cvv,
        FieldKind::UpiId,
        FieldKind::Email,
        FieldKind::Password,
        FieldKind::FullName,
        FieldKind::Amount,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::CardNumber => "card_number",
            FieldKind::CardHolder => "card_holder",
            FieldKind::ExpiryDate => "expiry_date",
            FieldKind::Cvv => "cvv",
            FieldKind::UpiId => "upi_id",
            FieldKind::Email => "email",
            FieldKind::Password => "password",
            FieldKind::FullName => "full_name",
            FieldKind::Amount => "amount",
        }
    }

    /// Whether the validator looks at the raw keystroke rather than the stored value
    pub fn inspects_raw_input(&self) -> bool {
        matches!(
            self,
            FieldKind::CardNumber
                | FieldKind::CardHolder
                | FieldKind::FullName
                | FieldKind::Cvv
                | FieldKind::Amount
        )
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field kind '{0}' (expected one of: card_number, card_holder, expiry_date, cvv, upi_id, email, password, full_name, amount)")]
pub struct UnknownFieldKind(pub String);

impl FromStr for FieldKind {
    type Err = UnknownFieldKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "cardnumber" | "card" => Ok(FieldKind::CardNumber),
            "cardholder" | "holder" => Ok(FieldKind::CardHolder),
            "expirydate" | "expiry" => Ok(FieldKind::ExpiryDate),
            "cvv" => Ok(FieldKind::Cvv),
            "upiid" | "upi" => Ok(FieldKind::UpiId),
            "email" => Ok(FieldKind::Email),
            "password" => Ok(FieldKind::Password),
            "fullname" | "name" => Ok(FieldKind::FullName),
            "amount" => Ok(FieldKind::Amount),
            _ => Err(UnknownFieldKind(s.to_string())),
        }
    }
}

// ============================================================================
// ERROR CODE
// ============================================================================

/// Inline classification of a field value. "No error" is `None` at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
pub enum ErrorCode {
    #[error("Only numbers are allowed.")]
    NonNumeric,
    #[error("Value is too long.")]
    TooLong,
    #[error("Invalid month. Use MM/YY format.")]
    InvalidMonth,
    #[error("Invalid format.")]
    InvalidFormat,
    #[error("Only letters and spaces are allowed.")]
    NonAlpha,
}

impl ErrorCode {
    /// Message shown under the field, specialised per field kind where it reads better
    pub fn message(&self, kind: FieldKind) -> String {
        match (self, kind) {
            (ErrorCode::TooLong, FieldKind::CardNumber) => "Card number must be 16 digits.".to_string(),
            (ErrorCode::TooLong, FieldKind::Cvv) => "CVV must be 3 digits.".to_string(),
            (ErrorCode::InvalidFormat, FieldKind::ExpiryDate) => "Invalid format. Use MM/YY.".to_string(),
            (ErrorCode::InvalidFormat, FieldKind::Email) => "Enter a valid email address.".to_string(),
            (ErrorCode::InvalidFormat, FieldKind::UpiId) => {
                "Enter a valid UPI ID (e.g. name@bank).".to_string()
            }
            (ErrorCode::NonNumeric, FieldKind::Amount) => "Enter a valid amount.".to_string(),
            (ErrorCode::TooLong, FieldKind::Amount) => {
                format!("Use at most {} decimal places.", AMOUNT_MAX_DECIMALS)
            }
            (ErrorCode::NonAlpha, FieldKind::FullName) => {
                "Names may use letters, spaces, apostrophes, hyphens or periods.".to_string()
            }
            _ => self.to_string(),
        }
    }
}

// ============================================================================
// VALIDATION RESULT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub kind: FieldKind,
    pub normalized_value: String,
    pub error: Option<ErrorCode>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    pub fn message(&self) -> Option<String> {
        self.error.map(|code| code.message(self.kind))
    }
}

// ============================================================================
// NORMALIZER
// ============================================================================

/// Canonical stored value for `next`, given the previously accepted value.
pub fn normalize(kind: FieldKind, previous: &str, next: &str) -> String {
    match kind {
        FieldKind::CardNumber => digits_only(next, CARD_NUMBER_MAX_DIGITS),
        FieldKind::Cvv => digits_only(next, CVV_MAX_DIGITS),
        FieldKind::CardHolder => reject_keystroke(&LETTERS_ONLY, &NOT_LETTERS, previous, next),
        FieldKind::FullName => reject_keystroke(&NAME_CHARS, &NOT_NAME_CHARS, previous, next),
        FieldKind::ExpiryDate => normalize_expiry(previous, next),
        FieldKind::Email | FieldKind::UpiId => next.chars().filter(|c| !c.is_whitespace()).collect(),
        FieldKind::Password => next.to_string(),
        FieldKind::Amount => normalize_amount(next),
    }
}

/// Keep `next` when it is clean, otherwise fall back to `previous`. The
/// previous value is not trusted either: anything outside the allowed set is
/// stripped from it.
fn reject_keystroke(allowed: &Regex, disallowed: &Regex, previous: &str, next: &str) -> String {
    if allowed.is_match(next) {
        next.to_string()
    } else {
        disallowed.replace_all(previous, "").into_owned()
    }
}

fn digits_only(input: &str, max_len: usize) -> String {
    input.chars().filter(char::is_ascii_digit).take(max_len).collect()
}

fn normalize_expiry(previous: &str, next: &str) -> String {
    let digits = digits_only(next, EXPIRY_MAX_DIGITS);

    if digits.len() > 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else if digits.len() == 2 && !erased_separator(previous, next) {
        format!("{}/", digits)
    } else {
        digits
    }
}

/// True when this keystroke removed the auto-inserted slash ("12/" -> "12").
fn erased_separator(previous: &str, next: &str) -> bool {
    previous.ends_with('/') && next.len() < previous.len() && !next.contains('/')
}

fn normalize_amount(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut seen_dot = false;
    let mut decimals = 0;

    for c in input.chars() {
        if c.is_ascii_digit() {
            if seen_dot {
                if decimals == AMOUNT_MAX_DECIMALS {
                    continue;
                }
                decimals += 1;
            }
            out.push(c);
        } else if c == '.' && !seen_dot {
            seen_dot = true;
            out.push(c);
        }
    }

    out
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Classify `value` for `kind`. See [`FieldKind::inspects_raw_input`] for which
/// value callers should pass; [`process`] does that selection.
pub fn validate(kind: FieldKind, value: &str) -> Option<ErrorCode> {
    match kind {
        FieldKind::CardNumber => check_digits(value, CARD_NUMBER_MAX_DIGITS),
        FieldKind::Cvv => check_digits(value, CVV_MAX_DIGITS),
        FieldKind::CardHolder => (!LETTERS_ONLY.is_match(value)).then_some(ErrorCode::NonAlpha),
        FieldKind::FullName => (!NAME_CHARS.is_match(value)).then_some(ErrorCode::NonAlpha),
        FieldKind::ExpiryDate => validate_expiry(value),
        FieldKind::Email => check_format(&EMAIL, value),
        FieldKind::UpiId => check_format(&UPI_ID, value),
        FieldKind::Amount => validate_amount(value),
        FieldKind::Password => None,
    }
}

fn check_digits(value: &str, max_len: usize) -> Option<ErrorCode> {
    if !DIGITS_ONLY.is_match(value) {
        Some(ErrorCode::NonNumeric)
    } else if value.len() > max_len {
        Some(ErrorCode::TooLong)
    } else {
        None
    }
}

/// Extra fractional digits are dropped by normalization but still reported
fn validate_amount(value: &str) -> Option<ErrorCode> {
    if !AMOUNT.is_match(value) {
        return Some(ErrorCode::NonNumeric);
    }
    let decimals = value.split_once('.').map_or(0, |(_, fraction)| fraction.len());
    (decimals > AMOUNT_MAX_DECIMALS).then_some(ErrorCode::TooLong)
}

fn check_format(pattern: &Regex, value: &str) -> Option<ErrorCode> {
    if value.is_empty() || pattern.is_match(value) {
        None
    } else {
        Some(ErrorCode::InvalidFormat)
    }
}

fn validate_expiry(value: &str) -> Option<ErrorCode> {
    if value.is_empty() {
        return None;
    }

    let month = value.split('/').next().unwrap_or("");
    let month_is_digits = month.bytes().all(|b| b.is_ascii_digit());

    // Month range wins over the generic format check
    if month.len() >= 2 && month_is_digits {
        match month.parse::<u64>() {
            Ok(mm) if (1..=12).contains(&mm) => {}
            _ => return Some(ErrorCode::InvalidMonth),
        }
    }

    // A lone first digit is still being typed
    if value.len() < 2 && month_is_digits {
        return None;
    }

    if EXPIRY_PROGRESSIVE.is_match(value) {
        None
    } else {
        Some(ErrorCode::InvalidFormat)
    }
}

// ============================================================================
// KEYSTROKE PIPELINE
// ============================================================================

/// Normalize then validate one text-change event as a single step.
pub fn process(kind: FieldKind, previous: &str, raw: &str) -> ValidationResult {
    let normalized_value = normalize(kind, previous, raw);
    let inspected = if kind.inspects_raw_input() {
        raw
    } else {
        normalized_value.as_str()
    };
    let error = validate(kind, inspected);

    trace!(field = %kind, ?error, "processed keystroke");

    ValidationResult {
        kind,
        normalized_value,
        error,
    }
}

/// Value after a backspace. Erasing an expiry's trailing slash also drops the
/// digit before it, otherwise normalization would put the slash straight back.
pub fn erase(kind: FieldKind, value: &str) -> String {
    let mut out = value.to_string();
    let removed = out.pop();
    if kind == FieldKind::ExpiryDate && removed == Some('/') {
        out.pop();
    }
    out
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn typed(kind: FieldKind, input: &str) -> String {
        normalize(kind, "", input)
    }

    #[test]
    fn test_card_number_keeps_only_sixteen_digits() {
        assert_eq!(typed(FieldKind::CardNumber, "4111-1111-1111-1111"), "4111111111111111");
        assert_eq!(typed(FieldKind::CardNumber, "41111111111111112222"), "4111111111111111");
    }

    #[test]
    fn test_cvv_keeps_only_three_digits() {
        assert_eq!(typed(FieldKind::Cvv, "1234"), "123");
        assert_eq!(typed(FieldKind::Cvv, "x9y8z7w6"), "987");
    }

    #[test]
    fn test_card_holder_rejects_keystroke() {
        assert_eq!(normalize(FieldKind::CardHolder, "JOHN", "JOHN "), "JOHN ");
        assert_eq!(normalize(FieldKind::CardHolder, "JOHN", "JOHN1"), "JOHN");
        assert_eq!(normalize(FieldKind::CardHolder, "JOHN", "JOHN."), "JOHN");

        let mut accepted = String::new();
        for c in "Jo3hn D0e!".chars() {
            let mut next = accepted.clone();
            next.push(c);
            accepted = normalize(FieldKind::CardHolder, &accepted, &next);
            assert!(!accepted.chars().any(|c| c.is_ascii_digit() || c.is_ascii_punctuation()));
        }
        assert_eq!(accepted, "John De");
    }

    #[test]
    fn test_expiry_auto_inserts_slash() {
        assert_eq!(typed(FieldKind::ExpiryDate, "1"), "1");
        assert_eq!(typed(FieldKind::ExpiryDate, "12"), "12/");
        assert_eq!(typed(FieldKind::ExpiryDate, "13"), "13/");
        assert_eq!(typed(FieldKind::ExpiryDate, "1225"), "12/25");
        assert_eq!(typed(FieldKind::ExpiryDate, "12/2599"), "12/25");
        assert_eq!(validate(FieldKind::ExpiryDate, "13/"), Some(ErrorCode::InvalidMonth));
    }

    #[test]
    fn test_expiry_deleting_slash_keeps_month() {
        assert_eq!(normalize(FieldKind::ExpiryDate, "12/", "12"), "12");
        assert_eq!(normalize(FieldKind::ExpiryDate, "1", "12"), "12/");
    }

    #[test]
    fn test_card_holder_scrubs_dirty_previous() {
        assert_eq!(normalize(FieldKind::CardHolder, "J0HN", "J0HN"), "JHN");

        let result = process(FieldKind::CardHolder, "J0HN", "J0HN D");
        assert_eq!(result.normalized_value, "JHN");
        assert_eq!(result.error, Some(ErrorCode::NonAlpha));
    }

    #[test]
    fn test_full_name_allows_real_names() {
        assert_eq!(validate(FieldKind::FullName, "Siobhán O'Brien-Smith Jr."), None);
        assert_eq!(typed(FieldKind::FullName, "José"), "José");
        assert_eq!(normalize(FieldKind::FullName, "Ann", "Ann2"), "Ann");

        let result = process(FieldKind::FullName, "Ann", "Ann_");
        assert_eq!(result.error, Some(ErrorCode::NonAlpha));
        assert_eq!(
            result.message().as_deref(),
            Some("Names may use letters, spaces, apostrophes, hyphens or periods.")
        );
        // Card holders stay on the embossable character set
        assert_eq!(validate(FieldKind::CardHolder, "O'BRIEN"), Some(ErrorCode::NonAlpha));
    }

    fn field_kind() -> impl Strategy<Value = FieldKind> {
        prop::sample::select(FieldKind::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn test_card_number_is_digits_within_limit(previous in ".{0,24}", raw in ".{0,40}") {
            let out = normalize(FieldKind::CardNumber, &previous, &raw);
            prop_assert!(out.chars().all(|c| c.is_ascii_digit()));
            prop_assert!(out.len() <= CARD_NUMBER_MAX_DIGITS);
        }

        #[test]
        fn test_cvv_is_digits_within_limit(previous in ".{0,8}", raw in ".{0,16}") {
            let out = normalize(FieldKind::Cvv, &previous, &raw);
            prop_assert!(out.chars().all(|c| c.is_ascii_digit()));
            prop_assert!(out.len() <= CVV_MAX_DIGITS);
        }

        #[test]
        fn test_card_holder_never_keeps_digits_or_punctuation(previous in ".{0,24}", raw in ".{0,24}") {
            let out = normalize(FieldKind::CardHolder, &previous, &raw);
            prop_assert!(
                !out.chars().any(|c| c.is_ascii_digit() || c.is_ascii_punctuation()),
                "{:?} / {:?} -> {:?}", previous, raw, out
            );
            prop_assert!(LETTERS_ONLY.is_match(&out));
        }

        #[test]
        fn test_full_name_stays_in_name_charset(previous in ".{0,24}", raw in ".{0,24}") {
            let out = normalize(FieldKind::FullName, &previous, &raw);
            prop_assert!(NAME_CHARS.is_match(&out));
        }

        #[test]
        fn test_normalize_is_idempotent(kind in field_kind(), x in ".{0,24}") {
            let once = normalize(kind, &x, &x);
            let twice = normalize(kind, &x, &once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn test_normalize_is_idempotent_on_digit_input(kind in field_kind(), x in "[0-9/. ]{0,24}") {
            let once = normalize(kind, &x, &x);
            let twice = normalize(kind, &x, &once);
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_cvv_validation() {
        assert_eq!(validate(FieldKind::Cvv, "12"), None);
        assert_eq!(validate(FieldKind::Cvv, "123"), None);
        assert_eq!(validate(FieldKind::Cvv, ""), None);
        assert_eq!(validate(FieldKind::Cvv, "1234"), Some(ErrorCode::TooLong));
        assert_eq!(validate(FieldKind::Cvv, "12a"), Some(ErrorCode::NonNumeric));
    }

    #[test]
    fn test_card_number_validation() {
        assert_eq!(validate(FieldKind::CardNumber, "abc"), Some(ErrorCode::NonNumeric));
        assert_eq!(validate(FieldKind::CardNumber, "4111111111111111"), None);
        assert_eq!(
            validate(FieldKind::CardNumber, "41111111111111112222"),
            Some(ErrorCode::TooLong)
        );
    }

    #[test]
    fn test_pasted_long_number_truncates_but_reports() {
        let result = process(FieldKind::CardNumber, "", "41111111111111112222");
        assert_eq!(result.normalized_value, "4111111111111111");
        assert_eq!(result.error, Some(ErrorCode::TooLong));
        assert_eq!(result.message().as_deref(), Some("Card number must be 16 digits."));
    }

    #[test]
    fn test_card_holder_validation() {
        assert_eq!(validate(FieldKind::CardHolder, "JOHN DOE"), None);
        assert_eq!(validate(FieldKind::CardHolder, "JOHN_DOE"), Some(ErrorCode::NonAlpha));

        let result = process(FieldKind::CardHolder, "JOHN", "JOHN1");
        assert_eq!(result.normalized_value, "JOHN");
        assert_eq!(result.error, Some(ErrorCode::NonAlpha));
    }

    #[test]
    fn test_expiry_validation() {
        assert_eq!(validate(FieldKind::ExpiryDate, ""), None);
        assert_eq!(validate(FieldKind::ExpiryDate, "3"), None);
        assert_eq!(validate(FieldKind::ExpiryDate, "0"), None);
        assert_eq!(validate(FieldKind::ExpiryDate, "12/"), None);
        assert_eq!(validate(FieldKind::ExpiryDate, "12/25"), None);
        assert_eq!(validate(FieldKind::ExpiryDate, "12"), None);
        assert_eq!(validate(FieldKind::ExpiryDate, "00/"), Some(ErrorCode::InvalidMonth));
        assert_eq!(validate(FieldKind::ExpiryDate, "34/1"), Some(ErrorCode::InvalidMonth));
        assert_eq!(validate(FieldKind::ExpiryDate, "1/"), Some(ErrorCode::InvalidFormat));
        assert_eq!(validate(FieldKind::ExpiryDate, "12-25"), Some(ErrorCode::InvalidFormat));
    }

    #[test]
    fn test_expiry_process_inspects_normalized_value() {
        let result = process(FieldKind::ExpiryDate, "1", "13");
        assert_eq!(result.normalized_value, "13/");
        assert_eq!(result.error, Some(ErrorCode::InvalidMonth));

        let result = process(FieldKind::ExpiryDate, "12/2", "12/25");
        assert!(result.is_valid());
    }

    #[test]
    fn test_email_and_upi_formats() {
        assert_eq!(validate(FieldKind::Email, ""), None);
        assert_eq!(validate(FieldKind::Email, "a@b.com"), None);
        assert_eq!(validate(FieldKind::Email, "a@b"), Some(ErrorCode::InvalidFormat));

        assert_eq!(validate(FieldKind::UpiId, "john.doe@okaxis"), None);
        assert_eq!(validate(FieldKind::UpiId, "john"), Some(ErrorCode::InvalidFormat));
        assert_eq!(validate(FieldKind::UpiId, "j@okaxis"), Some(ErrorCode::InvalidFormat));

        let result = process(FieldKind::UpiId, "", " john@upi ");
        assert_eq!(result.normalized_value, "john@upi");
        assert!(result.is_valid());
    }

    #[test]
    fn test_amount_normalization() {
        assert_eq!(typed(FieldKind::Amount, "1,250.505"), "1250.50");
        assert_eq!(typed(FieldKind::Amount, "1.2.3"), "1.23");

        let result = process(FieldKind::Amount, "12", "12x");
        assert_eq!(result.normalized_value, "12");
        assert_eq!(result.error, Some(ErrorCode::NonNumeric));
        assert!(process(FieldKind::Amount, "", "99.5").is_valid());
    }

    #[test]
    fn test_amount_extra_decimals_truncate_but_report() {
        let result = process(FieldKind::Amount, "1.23", "1.234");
        assert_eq!(result.normalized_value, "1.23");
        assert_eq!(result.error, Some(ErrorCode::TooLong));
        assert_eq!(result.message().as_deref(), Some("Use at most 2 decimal places."));

        assert_eq!(validate(FieldKind::Amount, "1.23"), None);
        assert_eq!(validate(FieldKind::Amount, "12."), None);
    }

    #[test]
    fn test_erase_expiry_separator() {
        assert_eq!(erase(FieldKind::ExpiryDate, "12/"), "1");
        assert_eq!(erase(FieldKind::ExpiryDate, "12/2"), "12/");
        assert_eq!(erase(FieldKind::Cvv, "12"), "1");
        assert_eq!(erase(FieldKind::Cvv, ""), "");
    }

    #[test]
    fn test_field_kind_from_str() {
        assert_eq!("card-number".parse::<FieldKind>().unwrap(), FieldKind::CardNumber);
        assert_eq!("CVV".parse::<FieldKind>().unwrap(), FieldKind::Cvv);
        assert_eq!("expiry_date".parse::<FieldKind>().unwrap(), FieldKind::ExpiryDate);
        assert!("iban".parse::<FieldKind>().is_err());

        for kind in FieldKind::ALL {
            assert_eq!(kind.as_str().parse::<FieldKind>().unwrap(), kind);
        }
    }
}
