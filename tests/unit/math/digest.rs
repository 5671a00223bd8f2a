//! Tests for hex digests

#[cfg(test)]
mod tests {
    use soupcensus::math::digest::md5_hex;

    // Tests the digest of known inputs
    // Verified by printing bytes without zero padding
    #[test]
    fn test_md5_known_values() {
        assert_eq!(md5_hex(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(md5_hex("abc"), "900150983cd24fb0d6963f7d28e17f72");
    }
}
