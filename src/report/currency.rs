//! Dollar amount formatting

pub const TOO_LARGE: &str = "amount too large to display";
pub const NOT_A_NUMBER: &str = "not a number";

/// Format as dollars with thousands separators and two decimals.
///
/// `1234567.891` -> `"$1,234,567.89"`, `-5.0` -> `"-$5.00"`
///
/// Long horizons at high rates overflow to infinity; those amounts read
/// [`TOO_LARGE`] instead of a dollar figure.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return NOT_A_NUMBER.to_string();
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{}{}", sign, TOO_LARGE);
    }

    let fixed = format!("{:.2}", amount.abs());
    let (digits, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}
