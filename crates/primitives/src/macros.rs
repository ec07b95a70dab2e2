/// Generates conversions and formatting for a newtype wrapping one of the
/// buffer types.
///
/// This must be a newtype a la `struct Foo(Buf32);`.
#[macro_export]
macro_rules! impl_buf_wrapper {
    ($wrapper:ident, $name:ident, $len:expr) => {
        impl ::std::convert::From<$name> for $wrapper {
            fn from(value: $name) -> Self {
                Self(value)
            }
        }

        impl ::std::convert::From<$wrapper> for $name {
            fn from(value: $wrapper) -> Self {
                value.0
            }
        }

        impl ::std::convert::From<[u8; $len]> for $wrapper {
            fn from(value: [u8; $len]) -> Self {
                Self($name::from(value))
            }
        }

        impl ::std::convert::AsRef<[u8; $len]> for $wrapper {
            fn as_ref(&self) -> &[u8; $len] {
                self.0.as_ref()
            }
        }

        impl ::std::str::FromStr for $wrapper {
            type Err = $crate::errors::ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<$name>().map(Self)
            }
        }

        impl ::core::fmt::Debug for $wrapper {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(&self.0, f)
            }
        }

        impl ::core::fmt::Display for $wrapper {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

pub(crate) mod internal {
    // Crate-internal impls.

    /// Generates the foundational API for a fixed-size byte buffer type.
    ///
    /// Provides constructors (`new`, `zero`), accessors (`as_slice`, `as_bytes`,
    /// `is_zero`), the `LEN` constant, standard conversion traits (`AsRef`,
    /// `From`, `TryFrom`), and `Default`.
    macro_rules! impl_buf_core {
        ($name:ident, $len:expr) => {
            impl $name {
                pub const LEN: usize = $len;

                pub const fn new(data: [u8; $len]) -> Self {
                    Self(data)
                }

                pub const fn as_slice(&self) -> &[u8] {
                    &self.0
                }

                pub const fn as_bytes(&self) -> &[u8] {
                    self.0.as_slice()
                }

                pub const fn zero() -> Self {
                    Self::new([0; $len])
                }

                pub const fn is_zero(&self) -> bool {
                    let mut i = 0;
                    while i < $len {
                        if self.0[i] != 0 {
                            return false;
                        }
                        i += 1;
                    }
                    true
                }
            }

            impl ::std::convert::AsRef<[u8; $len]> for $name {
                fn as_ref(&self) -> &[u8; $len] {
                    &self.0
                }
            }

            impl ::std::convert::From<[u8; $len]> for $name {
                fn from(data: [u8; $len]) -> Self {
                    Self(data)
                }
            }

            impl ::std::convert::From<$name> for [u8; $len] {
                fn from(buf: $name) -> Self {
                    buf.0
                }
            }

            impl<'a> ::std::convert::TryFrom<&'a [u8]> for $name {
                type Error = &'a [u8];

                fn try_from(value: &'a [u8]) -> Result<Self, Self::Error> {
                    if value.len() == $len {
                        let mut arr = [0; $len];
                        arr.copy_from_slice(value);
                        Ok(Self(arr))
                    } else {
                        Err(value)
                    }
                }
            }

            impl ::std::default::Default for $name {
                fn default() -> Self {
                    Self([0; $len])
                }
            }
        };
    }

    /// Generates strict hex parsing through `FromStr`.
    ///
    /// Input must be exactly `2 * LEN` hex characters with no prefix.
    macro_rules! impl_buf_hex {
        ($name:ident, $len:expr) => {
            impl ::std::str::FromStr for $name {
                type Err = $crate::errors::ParseError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    if s.len() != $len * 2 {
                        return Err($crate::errors::ParseError::InvalidLength {
                            expected: $len * 2,
                            actual: s.len(),
                        });
                    }

                    let mut arr = [0u8; $len];
                    ::hex::decode_to_slice(s, &mut arr)?;
                    Ok(Self(arr))
                }
            }

            impl $name {
                /// Full lowercase hex encoding of the buffer.
                pub fn to_hex(&self) -> String {
                    ::hex::encode(self.0)
                }
            }
        };
    }

    /// Generates `Debug` (full hex) and `Display` (truncated hex) formatting.
    macro_rules! impl_buf_fmt {
        ($name:ident, $len:expr) => {
            impl ::std::fmt::Debug for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    // twice as large, required by the hex::encode_to_slice.
                    let mut buf = [0; $len * 2];
                    ::hex::encode_to_slice(self.0, &mut buf).map_err(|_| ::std::fmt::Error)?;
                    f.write_str(::core::str::from_utf8(&buf).map_err(|_| ::std::fmt::Error)?)
                }
            }

            impl ::std::fmt::Display for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    // fmt only first and last bits of data.
                    let mut buf = [0; 6];
                    ::hex::encode_to_slice(&self.0[..3], &mut buf)
                        .map_err(|_| ::std::fmt::Error)?;
                    f.write_str(::core::str::from_utf8(&buf).map_err(|_| ::std::fmt::Error)?)?;
                    f.write_str("..")?;
                    ::hex::encode_to_slice(&self.0[$len - 3..], &mut buf)
                        .map_err(|_| ::std::fmt::Error)?;
                    f.write_str(::core::str::from_utf8(&buf).map_err(|_| ::std::fmt::Error)?)
                }
            }
        };
    }

    /// Generates serde impls that go through the hex string form.
    macro_rules! impl_buf_serde {
        ($name:ident, $len:expr) => {
            impl ::serde::Serialize for $name {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: ::serde::Serializer,
                {
                    serializer.serialize_str(&::hex::encode(self.0))
                }
            }

            impl<'de> ::serde::Deserialize<'de> for $name {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: ::serde::Deserializer<'de>,
                {
                    struct BufVisitor;

                    impl<'de> ::serde::de::Visitor<'de> for BufVisitor {
                        type Value = $name;

                        fn expecting(
                            &self,
                            formatter: &mut ::std::fmt::Formatter<'_>,
                        ) -> ::std::fmt::Result {
                            write!(formatter, "a hex string representing {} bytes", $len)
                        }

                        fn visit_str<E>(self, v: &str) -> Result<$name, E>
                        where
                            E: ::serde::de::Error,
                        {
                            v.parse::<$name>().map_err(E::custom)
                        }
                    }

                    deserializer.deserialize_str(BufVisitor)
                }
            }
        };
    }

    pub(crate) use impl_buf_core;
    pub(crate) use impl_buf_fmt;
    pub(crate) use impl_buf_hex;
    pub(crate) use impl_buf_serde;
}
