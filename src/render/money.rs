//! Brazilian real formatting, as `Intl.NumberFormat("pt-BR", {currency: "BRL"})`
//! prints it: `R$ 1.234,50` with a non-breaking space after the symbol.

use bigdecimal::{BigDecimal, RoundingMode};

pub const CURRENCY_SYMBOL: &str = "R$";
const NBSP: char = '\u{a0}';

pub fn format_brl(amount: &BigDecimal) -> String {
    let (cents, _) = amount
        .with_scale_round(2, RoundingMode::HalfUp)
        .as_bigint_and_exponent();
    let digits = cents.to_string();
    let (negative, digits) = match digits.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, digits.as_str()),
    };

    let padded = format!("{:0>3}", digits);
    let (units, fraction) = padded.split_at(padded.len() - 2);

    let mut out = String::with_capacity(padded.len() + 8);
    if negative {
        out.push('-');
    }
    out.push_str(CURRENCY_SYMBOL);
    out.push(NBSP);
    out.push_str(&group_thousands(units));
    out.push(',');
    out.push_str(fraction);
    out
}

fn group_thousands(units: &str) -> String {
    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, ch) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
