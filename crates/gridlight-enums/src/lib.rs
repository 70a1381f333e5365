//! Fixed-discriminant enumerations shared by the grid lighting/elevation editor.
//!
//! Every member carries a stable integer value that other code stores and
//! compares, so the discriminants here are a compatibility contract:
//!
//! ```text
//! BlockType:     NORMAL=1, LIGHT=2, WALL=3
//! GridView:      LIGHT=1, ELEVATION=2
//! ControlType:   LIGHT=1, WALL=2, INCREASE_ELEVATION=3, DECREASE_ELEVATION=4
//! DragBehavior:  NONE=0, ADD_LIGHT=1, REMOVE_LIGHT=2, ADD_WALL=3, REMOVE_WALL=4, INCREASE_ELEVATION=5
//! ```
#![forbid(unsafe_code)]

use core::num::IntErrorKind;

#[macro_use]
mod macros;

pub mod block;
pub mod control;
pub mod drag;
pub mod error;
pub mod table;
pub mod view;

pub use block::BlockType;
pub use control::ControlType;
pub use drag::DragBehavior;
pub use error::EnumError;
pub use table::TableKind;
pub use view::GridView;

/// Common surface of the constant enumerations.
pub trait ConstantEnum:
    Copy + Eq + Ord + core::hash::Hash + core::fmt::Debug + Send + Sync + 'static
{
    /// Name of the enumeration as it appears in exported tables.
    const TABLE: &'static str;
    /// Every member, ordered by value.
    const ALL: &'static [Self];

    fn value(self) -> u8;

    /// Symbolic name, e.g. `INCREASE_ELEVATION`.
    fn name(self) -> &'static str;

    fn from_value(value: u8) -> Option<Self>;

    /// Exact, case-sensitive inverse of [`ConstantEnum::name`].
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.name() == name)
    }
}

/// Parses either a symbolic member name or a decimal value.
pub fn parse_member<E: ConstantEnum>(s: &str) -> Result<E, EnumError> {
    let s = s.trim();
    if let Some(m) = E::from_name(s) {
        return Ok(m);
    }
    let value = match s.parse::<i64>() {
        Ok(value) => value,
        // Integers past i64 are still values, saturated for the report.
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => {
                return Err(EnumError::UnknownName {
                    table: E::TABLE,
                    name: s.to_string(),
                });
            }
        },
    };
    u8::try_from(value)
        .ok()
        .and_then(E::from_value)
        .ok_or(EnumError::UnknownValue {
            table: E::TABLE,
            value,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_member_accepts_names_and_values() {
        assert_eq!(parse_member::<BlockType>("WALL").unwrap(), BlockType::Wall);
        assert_eq!(parse_member::<BlockType>(" 2 ").unwrap(), BlockType::Light);
        assert_eq!(
            parse_member::<DragBehavior>("0").unwrap(),
            DragBehavior::None
        );
    }

    #[test]
    fn parse_member_rejects_unknowns() {
        assert_eq!(
            parse_member::<GridView>("light"),
            Err(EnumError::UnknownName {
                table: "GridView",
                name: "light".into()
            })
        );
        assert_eq!(
            parse_member::<GridView>("3"),
            Err(EnumError::UnknownValue {
                table: "GridView",
                value: 3
            })
        );
        assert_eq!(
            parse_member::<ControlType>("-1"),
            Err(EnumError::UnknownValue {
                table: "ControlType",
                value: -1
            })
        );
        assert_eq!(
            parse_member::<ControlType>("300"),
            Err(EnumError::UnknownValue {
                table: "ControlType",
                value: 300
            })
        );
    }

    #[test]
    fn oversized_integers_are_values_not_names() {
        assert_eq!(
            parse_member::<BlockType>("99999999999999999999"),
            Err(EnumError::UnknownValue {
                table: "BlockType",
                value: i64::MAX
            })
        );
        assert_eq!(
            parse_member::<DragBehavior>("-99999999999999999999"),
            Err(EnumError::UnknownValue {
                table: "DragBehavior",
                value: i64::MIN
            })
        );
        assert_eq!(
            TableKind::GridView.lookup("18446744073709551617"),
            Err(EnumError::UnknownValue {
                table: "GridView",
                value: i64::MAX
            })
        );
    }

    fn assert_unique<E: ConstantEnum>() {
        let mut values: Vec<u8> = E::ALL.iter().map(|m| m.value()).collect();
        let len = values.len();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), len, "duplicate value in {}", E::TABLE);
    }

    fn assert_sorted<E: ConstantEnum>() {
        assert!(
            E::ALL.windows(2).all(|w| w[0].value() < w[1].value()),
            "{} members out of value order",
            E::TABLE
        );
    }

    #[test]
    fn values_unique_and_ordered_in_every_table() {
        assert_unique::<BlockType>();
        assert_unique::<GridView>();
        assert_unique::<ControlType>();
        assert_unique::<DragBehavior>();
        assert_sorted::<BlockType>();
        assert_sorted::<GridView>();
        assert_sorted::<ControlType>();
        assert_sorted::<DragBehavior>();
    }

    #[test]
    fn names_unique_in_every_table() {
        for kind in TableKind::ALL {
            let mut names: Vec<&str> = kind.members().into_iter().map(|(n, _)| n).collect();
            let len = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), len, "duplicate name in {kind}");
        }
    }
}
