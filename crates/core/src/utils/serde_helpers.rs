//! Serde helpers for config values written by hand

/// Derive `Deserialize` for a fieldless enum from its lowercase spellings,
/// accepting any capitalization.
///
/// `Transport` uses it so `.techlint.json` may say `"path"`, `"Path"` or
/// `"STDIN"`. Unknown values are rejected with the list of accepted spellings.
macro_rules! deserialize_lowercase_variants {
    ($enum_type:ty, $($variant:ident => $str_val:literal),+ $(,)?) => {
        impl<'de> serde::Deserialize<'de> for $enum_type {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                match s.to_lowercase().as_str() {
                    $(
                        $str_val => Ok(Self::$variant),
                    )+
                    _ => Err(serde::de::Error::custom(format!(
                        "unknown variant '{}', expected one of: {}",
                        s,
                        [$($str_val),+].join(", ")
                    ))),
                }
            }
        }
    };
}

pub(crate) use deserialize_lowercase_variants;
