//! Tests for object code formatting and parsing

#[cfg(test)]
mod tests {
    use soupcensus::analysis::code::{GrowthClass, ObjectCode, Oversized};

    // Tests every descriptor form survives formatting and parsing
    // Verified by dropping the secondary period from linear-growth codes
    #[test]
    fn test_descriptor_forms() {
        for text in [
            "xs4_33",
            "xp2_7",
            "xq4_153",
            "yl144_1_16_afb5f3db909e60548f086e22ee3353ac",
            "zz_REPLICATOR",
            "zz_QUADRATIC",
            "PATHOLOGICAL",
            "ov_s52",
            "ov_p30",
            "ov_q7",
            "USS_1_2_3",
        ] {
            let code: ObjectCode = text.parse().unwrap();
            assert_eq!(code.to_string(), text);
        }
    }

    // Tests parsed fields land in the right variant
    // Verified by parsing xp codes as spaceships
    #[test]
    fn test_parse_fields() {
        assert_eq!(
            "xp15_4r4z4r4".parse::<ObjectCode>().unwrap(),
            ObjectCode::Oscillator {
                period: 15,
                shape: "4r4z4r4".to_string()
            }
        );
        assert_eq!(
            "USS_2_0_1".parse::<ObjectCode>().unwrap(),
            ObjectCode::SpaceshipUnion {
                light: 2,
                middle: 0,
                heavy: 1
            }
        );
        assert_eq!(
            "zz_LINEAR".parse::<ObjectCode>().unwrap(),
            ObjectCode::PowerLawGrowth(GrowthClass::Linear)
        );
        assert_eq!(
            "ov_s40".parse::<ObjectCode>().unwrap(),
            ObjectCode::Oversized(Oversized::StillLife(40))
        );
    }

    // Tests malformed codes are rejected
    // Verified by accepting any prefix before the underscore
    #[test]
    fn test_parse_rejects_malformed() {
        for text in ["", "xs4", "xr4_33", "xs4_", "xs4_3A", "zz_SLOW", "USS_1_2", "ov_x3", "xsfour_33"] {
            assert!(text.parse::<ObjectCode>().is_err(), "accepted {text}");
        }
    }

    // Tests signed periods choose the still life, oscillator or spaceship form
    // Verified by treating period 1 as an oscillator
    #[test]
    fn test_bounded_constructor() {
        assert_eq!(ObjectCode::bounded(1, 4, "33".into()).to_string(), "xs4_33");
        assert_eq!(ObjectCode::bounded(2, 3, "7".into()).to_string(), "xp2_7");
        assert_eq!(ObjectCode::bounded(-4, 5, "153".into()).to_string(), "xq4_153");
    }

    // Tests the standard spaceship constructors
    // Verified by transposing the middle and heavyweight shapes
    #[test]
    fn test_standard_ships() {
        assert_eq!(ObjectCode::glider().to_string(), "xq4_153");
        assert_eq!(ObjectCode::lwss().to_string(), "xq4_6frc");
        assert_eq!(ObjectCode::mwss().to_string(), "xq4_27dee6");
        assert_eq!(ObjectCode::hwss().to_string(), "xq4_27deee6");
    }

    // Tests shape and period accessors only answer for canonised codes
    // Verified by reporting a period for linear growth
    #[test]
    fn test_accessors() {
        let block: ObjectCode = "xs4_33".parse().unwrap();
        assert_eq!(block.shape(), Some("33"));
        assert_eq!(block.period(), Some(1));

        let uss: ObjectCode = "USS_1_0_0".parse().unwrap();
        assert_eq!(uss.shape(), None);
        assert_eq!(uss.period(), None);
    }
}
