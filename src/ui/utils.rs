/// Formats a price with "Trader Precision".
/// - Large (>1000): 2 decimals (95123.50)
/// - Medium (1-1000): 4 decimals (12.4829)
/// - Small (0.0001-1): 8 decimals (0.00000231)
/// - Dust (<0.0001): scientific (1.0100e-9)
pub fn format_price(price: f64) -> String {
    if price == 0.0 {
        return "0".to_string();
    }

    let abs_price = price.abs();

    if abs_price >= 1000.0 {
        format!("{:.2}", price)
    } else if abs_price >= 1.0 {
        format!("{:.4}", price)
    } else if abs_price >= 1e-4 {
        format!("{:.8}", price)
    } else {
        format!("{:.4e}", price)
    }
}

/// Balances and quantities: up to 8 decimals, trailing zeros trimmed.
pub fn format_amount(amount: f64) -> String {
    if amount != 0.0 && amount.abs() < 1e-8 {
        return format!("{:.4e}", amount);
    }
    let s = format!("{:.8}", amount);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
