//! Record ID generation
//!
//! All IDs use the format: `{6-char-hex}-{type}-{slug}`
//! Example: `019a42-employee-maria-lopez`

/// Generate a record ID from type and title
pub fn generate_id(record_type: &str, title: &str) -> String {
    let uuid = uuid::Uuid::now_v7();
    let hex_prefix = &uuid.to_string()[..6];
    format!("{}-{}-{}", hex_prefix, record_type, slugify(title))
}

/// Slugify a title for use in IDs
fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_format() {
        let id = generate_id("employee", "Maria Lopez");
        assert!(id.contains("-employee-maria-lopez"));
        assert_eq!(id.chars().take_while(|c| *c != '-').count(), 6);
    }

    #[test]
    fn test_slugify_collapses_punctuation() {
        assert_eq!(slugify("Grill -- station #2"), "grill-station-2");
        assert_eq!(slugify("  Cashier  "), "cashier");
    }

    #[test]
    fn test_generate_id_unique() {
        let a = generate_id("task", "Line");
        let b = generate_id("task", "Line");
        assert_ne!(a, b);
    }
}
