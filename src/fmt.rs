use rust_decimal::{Decimal, RoundingStrategy};

fn group_thousands(int_part: &str) -> String {
    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    with_commas.chars().rev().collect()
}

/// Statement amount with two decimals: 12.5 -> "12.50".
pub fn amount(val: Decimal) -> String {
    let mut rounded = val.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    if rounded.is_zero() {
        return "0.00".to_string();
    }
    rounded.rescale(2);
    rounded.to_string()
}

/// Total rounded to whole dollars (half to even) with thousands separators.
pub fn whole_dollars(val: Decimal) -> String {
    let rounded = val.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
    if rounded.is_zero() {
        return "0".to_string();
    }
    let digits = group_thousands(&rounded.abs().trunc().to_string());
    if rounded.is_sign_negative() {
        format!("-{digits}")
    } else {
        digits
    }
}
