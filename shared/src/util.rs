//! Small helpers: timestamps and identifier generation

/// Get the current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a random document ID (UUID v4, hyphen-free)
///
/// Matches the short opaque ids the hosted document store hands out.
pub fn new_doc_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Generate a human-facing reference code: `PREFIX-NNNN`
///
/// Four random digits (1000-9999) after the prefix, e.g. `ORC-4821`.
/// Short enough to read over the phone; uniqueness is best-effort and
/// the document ID remains the real key.
pub fn reference_code(prefix: &str) -> String {
    use rand::Rng;
    let digits: u16 = rand::thread_rng().gen_range(1000..=9999);
    format!("{}-{}", prefix, digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_code_format() {
        for _ in 0..100 {
            let code = reference_code("ORC");
            let (prefix, digits) = code.split_once('-').unwrap();
            assert_eq!(prefix, "ORC");
            let n: u16 = digits.parse().unwrap();
            assert!((1000..=9999).contains(&n));
        }
    }

    #[test]
    fn test_doc_id_is_opaque() {
        let id = new_doc_id();
        assert_eq!(id.len(), 32);
        assert!(!id.contains('-'));
    }
}
