// src/domain/money.rs

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses an amount as written in the Granatum export.
///
/// Accepts the locale form (`1.234,56`, `10,00`) and a plain decimal (`10.5`).
pub fn parse_brl_amount(raw: &str) -> Result<Decimal, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("empty amount".to_string());
    }

    let normalized = if trimmed.contains(',') {
        trimmed.replace('.', "").replace(',', ".")
    } else {
        trimmed.to_string()
    };

    Decimal::from_str(&normalized).map_err(|e| format!("invalid amount '{raw}': {e}"))
}

/// Two decimals, no grouping: `1234.50`.
pub fn format_plain(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

/// Two decimals with comma thousands separators: `1,234.50`.
pub fn format_grouped(amount: Decimal) -> String {
    let plain = format_plain(amount);
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{frac_part}")
}
