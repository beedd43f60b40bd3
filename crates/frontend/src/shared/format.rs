/// Utilities for number formatting on the landing page
///
/// Keeps display formatting consistent between the stats bar, the feed and
/// the prize cards.

/// Format an integer with comma thousands separators.
/// Example: 8427 -> "8,427"
pub fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Zero-pad a time unit to two digits for the countdown blocks.
/// Example: 7 -> "07"
pub fn pad2(n: u32) -> String {
    format!("{:02}", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(8_427), "8,427");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_pad2() {
        assert_eq!(pad2(0), "00");
        assert_eq!(pad2(7), "07");
        assert_eq!(pad2(59), "59");
    }
}
