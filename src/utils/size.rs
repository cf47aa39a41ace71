/// Formats a byte count with a truncated decimal suffix (K, M, G).
///
/// Sizes below 1000 are printed as plain bytes. Division truncates, so
/// 1999 bytes is "1K", not "2K".
pub fn human_readable_size(bytes: u64) -> String {
    const K: u64 = 1_000;
    const M: u64 = 1_000_000;
    const G: u64 = 1_000_000_000;

    match bytes {
        n if n < K => n.to_string(),
        n if n < M => format!("{}K", n / K),
        n if n < G => format!("{}M", n / M),
        n => format!("{}G", n / G),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_have_no_suffix() {
        assert_eq!(human_readable_size(0), "0");
        assert_eq!(human_readable_size(999), "999");
    }

    #[test]
    fn test_suffix_boundaries() {
        assert_eq!(human_readable_size(1_000), "1K");
        assert_eq!(human_readable_size(999_999), "999K");
        assert_eq!(human_readable_size(1_000_000), "1M");
        assert_eq!(human_readable_size(999_999_999), "999M");
        assert_eq!(human_readable_size(1_000_000_000), "1G");
    }

    #[test]
    fn test_division_truncates() {
        assert_eq!(human_readable_size(1_500), "1K");
        assert_eq!(human_readable_size(204_800), "204K");
        assert_eq!(human_readable_size(1_999_999), "1M");
        assert_eq!(human_readable_size(2_000_000_000), "2G");
        assert_eq!(human_readable_size(u64::MAX), "18446744073G");
    }
}
