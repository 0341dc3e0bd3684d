//! Display helpers. The calculator returns unrounded values; rounding to
//! whole rubles happens here.

/// Grouping separator used by the ru-RU locale (no-break space).
const GROUP_SEPARATOR: char = '\u{a0}';

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Whole rubles with thousands grouping, e.g. `111 222 ₽`.
pub fn format_rubles(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    format!("{} ₽", group_thousands(value.round() as i64))
}

/// Millions with one decimal, as on catalog cards: `8.5 млн ₽`.
pub fn format_millions(value: f64) -> String {
    format!("{:.1} млн ₽", value / 1_000_000.0)
}

/// Millions with two decimals, as in the loan summary: `1.67 млн ₽`.
pub fn format_millions_precise(value: f64) -> String {
    format!("{:.2} млн ₽", value / 1_000_000.0)
}

pub fn format_mileage(km: u32) -> String {
    format!("{} км", group_thousands(km as i64))
}

pub fn format_term(months: u32) -> String {
    format!("{months} месяцев ({:.1} года)", months as f64 / 12.0)
}
