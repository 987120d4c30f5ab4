//! Price formatting for display. Amounts stay integers everywhere else.

/// Group digits in threes: `12000` → `"12,000"`.
pub fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `5000, "D"` → `"5,000 D"`.
pub fn format_price(amount: u64, suffix: &str) -> String {
    if suffix.is_empty() {
        group_thousands(amount)
    } else {
        format!("{} {}", group_thousands(amount), suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(5000), "5,000");
        assert_eq!(group_thousands(12000), "12,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_format_price_suffix() {
        assert_eq!(format_price(3500, "D"), "3,500 D");
        assert_eq!(format_price(3500, ""), "3,500");
    }
}
