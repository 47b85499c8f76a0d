/// Generate `as_str`, `Display`, `From<T> for String`, and `TryFrom<String> for T`
/// for a closed enum of wire names.
///
/// The enum must already carry its derives. Add `#[serde(into = "String", try_from = "String")]`
/// to get Serialize/Deserialize through these impls.
macro_rules! string_enum {
    ($name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $str,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> Self {
                v.as_str().to_string()
            }
        }

        impl TryFrom<String> for $name {
            type Error = String;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                match s.as_str() {
                    $($str => Ok($name::$variant),)+
                    other => Err(format!("unknown {}: {other}", stringify!($name))),
                }
            }
        }
    };
}
