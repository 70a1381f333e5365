// Declares a `#[repr(u8)]` enum and wires it to `ConstantEnum`, conversions,
// `FromStr`, `Display` and serde (as the integer value).
macro_rules! constant_enum {
    (
        $(#[$meta:meta])*
        pub enum $ty:ident as $table:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal => $name:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(u8)]
        #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $ty {
            $(
                $(#[$vmeta])*
                $variant = $value
            ),+
        }

        impl $crate::ConstantEnum for $ty {
            const TABLE: &'static str = $table;
            const ALL: &'static [Self] = &[$($ty::$variant),+];

            #[inline]
            fn value(self) -> u8 {
                self as u8
            }

            fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }

            fn from_value(value: u8) -> Option<Self> {
                match value {
                    $($value => Some($ty::$variant),)+
                    _ => Option::None,
                }
            }
        }

        impl From<$ty> for u8 {
            #[inline]
            fn from(m: $ty) -> u8 {
                m as u8
            }
        }

        impl TryFrom<u8> for $ty {
            type Error = $crate::EnumError;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                <$ty as $crate::ConstantEnum>::from_value(value).ok_or(
                    $crate::EnumError::UnknownValue {
                        table: $table,
                        value: i64::from(value),
                    },
                )
            }
        }

        impl core::str::FromStr for $ty {
            type Err = $crate::EnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $crate::parse_member::<$ty>(s)
            }
        }

        impl core::fmt::Display for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str($crate::ConstantEnum::name(*self))
            }
        }

        impl ::serde::Serialize for $ty {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_u8(*self as u8)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $ty {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <u8 as ::serde::Deserialize>::deserialize(deserializer)?;
                <$ty as TryFrom<u8>>::try_from(value).map_err(::serde::de::Error::custom)
            }
        }
    };
}
