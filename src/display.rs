// 💳 Card preview helpers
// Presentation-only formatting layered on top of normalized field values.

pub const CARD_NUMBER_PLACEHOLDER: &str = "•••• •••• •••• ••••";
pub const CARD_HOLDER_PLACEHOLDER: &str = "FULL NAME";
pub const EXPIRY_PLACEHOLDER: &str = "MM/YY";
pub const CVV_PLACEHOLDER: &str = "•••";

/// Group digits into blocks of four: "4111111111111111" -> "4111 1111 1111 1111"
pub fn group_card_number(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    chars
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn card_number_preview(digits: &str) -> String {
    if digits.is_empty() {
        CARD_NUMBER_PLACEHOLDER.to_string()
    } else {
        group_card_number(digits)
    }
}

/// Only the last four digits stay visible
pub fn masked_card_number(digits: &str) -> String {
    let visible = digits.len().saturating_sub(4);
    let masked: String = digits
        .chars()
        .enumerate()
        .map(|(i, c)| if i < visible { '•' } else { c })
        .collect();
    group_card_number(&masked)
}

pub fn card_holder_preview(name: &str) -> String {
    if name.trim().is_empty() {
        CARD_HOLDER_PLACEHOLDER.to_string()
    } else {
        name.to_uppercase()
    }
}

pub fn expiry_preview(expiry: &str) -> &str {
    if expiry.is_empty() {
        EXPIRY_PLACEHOLDER
    } else {
        expiry
    }
}

pub fn cvv_preview(cvv: &str) -> &str {
    if cvv.is_empty() {
        CVV_PLACEHOLDER
    } else {
        cvv
    }
}

pub fn format_money(currency_symbol: &str, amount: f64) -> String {
    format!("{}{:.2}", currency_symbol, amount)
}

/// Password fields render as bullets
pub fn secret(value: &str) -> String {
    "•".repeat(value.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_card_number() {
        assert_eq!(group_card_number("4111111111111111"), "4111 1111 1111 1111");
        assert_eq!(group_card_number("411111"), "4111 11");
        assert_eq!(group_card_number(""), "");
    }

    #[test]
    fn test_previews_fall_back_to_placeholders() {
        assert_eq!(card_number_preview(""), CARD_NUMBER_PLACEHOLDER);
        assert_eq!(card_holder_preview("  "), CARD_HOLDER_PLACEHOLDER);
        assert_eq!(card_holder_preview("john doe"), "JOHN DOE");
        assert_eq!(expiry_preview(""), "MM/YY");
        assert_eq!(expiry_preview("12/25"), "12/25");
        assert_eq!(cvv_preview(""), "•••");
    }

    #[test]
    fn test_masked_card_number() {
        assert_eq!(masked_card_number("4111111111111234"), "•••• •••• •••• 1234");
        assert_eq!(masked_card_number("12"), "12");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money("₹", 150.0), "₹150.00");
        assert_eq!(format_money("$", 15.5), "$15.50");
        assert_eq!(secret("abc"), "•••");
    }
}
