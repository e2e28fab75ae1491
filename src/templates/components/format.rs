// Display helpers for card values (en-US style).
use thousands::Separable;

/// `$1,295,000`, no cents.
pub fn usd(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{sign}${}", rounded.unsigned_abs().separate_with_commas())
}

/// `1,640`, keeps up to three decimals for non-whole values.
pub fn number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    rounded.separate_with_commas()
}
