/// Formato de precio: $12.99
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn format_minutes(minutes: u32) -> String {
    format!("{} min", minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(12.99), "$12.99");
        assert_eq!(format_price(5.0), "$5.00");
        assert_eq!(format_price(12.99 + 5.0 + 5.0), "$22.99");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(25), "25 min");
    }
}
