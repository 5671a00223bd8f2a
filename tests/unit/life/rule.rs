//! Tests for rule parsing and neighbour-count queries

#[cfg(test)]
mod tests {
    use soupcensus::SearchError;
    use soupcensus::life::rule::Rule;

    // Tests the common notations all parse to Conway's rule
    // Verified by requiring the slash separator
    #[test]
    fn test_parse_notations() {
        for text in ["B3/S23", "b3s23", "B3S23", " b3/s23 "] {
            assert_eq!(Rule::parse(text).unwrap(), Rule::conway());
        }
        assert_eq!(Rule::default(), Rule::conway());
    }

    // Tests birth and survival queries follow the bitmasks
    // Verified by swapping the birth and survival masks
    #[test]
    fn test_births_and_survival() {
        let highlife = Rule::parse("B36/S23").unwrap();
        assert!(highlife.births(3));
        assert!(highlife.births(6));
        assert!(!highlife.births(2));
        assert!(highlife.survives(2));
        assert!(!highlife.survives(6));
        assert!(!highlife.births(9));
        assert_eq!(highlife.min_birth(), Some(3));
    }

    // Tests malformed rules and B0 are rejected
    // Verified by accepting the digit 9
    #[test]
    fn test_parse_rejects_invalid() {
        for text in ["", "S23", "B3", "B39/S23", "B3/S2x", "23/3"] {
            assert!(Rule::parse(text).is_err(), "accepted {text}");
        }
        assert!(matches!(
            Rule::parse("B03/S23"),
            Err(SearchError::InvalidRule { .. })
        ));
    }

    // Tests both output notations
    // Verified by printing counts in descending order
    #[test]
    fn test_formatting() {
        let rule = Rule::parse("b63s32").unwrap();
        assert_eq!(rule.slashed(), "B36/S23");
        assert_eq!(rule.alphanumeric(), "B36S23");
        assert_eq!(rule.to_string(), "B36/S23");
        assert_eq!("B2/S".parse::<Rule>().unwrap().alphanumeric(), "B2S");
    }

    // Tests glider support follows the survival and birth conditions
    // Verified by ignoring B4
    #[test]
    fn test_gliders_exist() {
        assert!(Rule::conway().gliders_exist());
        assert!(Rule::parse("B36/S23").unwrap().gliders_exist());
        assert!(!Rule::parse("B34/S23").unwrap().gliders_exist());
        assert!(!Rule::parse("B3/S234").unwrap().gliders_exist());
        assert!(!Rule::parse("B3/S3").unwrap().gliders_exist());
    }
}
