use gridlight_enums::{BlockType, EnumError, ConstantEnum, ControlType, DragBehavior, GridView};
use proptest::prelude::*;

fn check_value<E: ConstantEnum>(v: u8) -> Result<(), TestCaseError> {
    match E::from_value(v) {
        Some(m) => {
            prop_assert_eq!(m.value(), v);
            prop_assert!(E::ALL.contains(&m));
            prop_assert_eq!(E::from_name(m.name()), Some(m));
        }
        None => prop_assert!(E::ALL.iter().all(|m| m.value() != v)),
    }
    Ok(())
}

proptest! {
    // from_value is defined exactly on the contract values and inverts value()
    #[test]
    fn from_value_matches_all(v in any::<u8>()) {
        check_value::<BlockType>(v)?;
        check_value::<GridView>(v)?;
        check_value::<ControlType>(v)?;
        check_value::<DragBehavior>(v)?;
    }

    // TryFrom agrees with from_value, including the error case
    #[test]
    fn try_from_agrees_with_from_value(v in any::<u8>()) {
        prop_assert_eq!(BlockType::try_from(v).ok(), BlockType::from_value(v));
        prop_assert_eq!(DragBehavior::try_from(v).ok(), DragBehavior::from_value(v));
    }

    // Decimal strings parse exactly when the value is a member
    #[test]
    fn decimal_strings_parse_to_members(v in -1000i64..1000) {
        let parsed = v.to_string().parse::<ControlType>().ok();
        let expected = u8::try_from(v).ok().and_then(ControlType::from_value);
        prop_assert_eq!(parsed, expected);
    }

    // Arbitrary lowercase identifiers are never member names
    #[test]
    fn lowercase_words_are_rejected(s in "[a-z_]{1,20}") {
        prop_assert!(s.parse::<DragBehavior>().is_err());
        prop_assert!(s.parse::<GridView>().is_err());
    }

    // Any decimal integer, however wide, is reported as a value, never a name
    #[test]
    fn wide_decimals_never_read_as_names(v in any::<i128>()) {
        match v.to_string().parse::<BlockType>() {
            Ok(m) => prop_assert_eq!(i128::from(m.value()), v),
            Err(e) => prop_assert!(matches!(e, EnumError::UnknownValue { .. }), "{:?}", e),
        }
    }
}
