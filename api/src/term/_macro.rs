/// Generate a validated wrapper type around `Arc<str>`.
///
/// The generated type provides `new` (validating with the given predicate),
/// `new_unchecked`, `as_str`, and the usual conversion traits.
/// Equality, ordering and hashing are those of the underlying `str`.
macro_rules! wrap {
    ($(#[$attr:meta])* $wid:ident, $err:ident, $check:expr) => {
        $(#[$attr])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $wid(std::sync::Arc<str>);

        impl $wid {
            #[doc = concat!("Build a new [`", stringify!($wid), "`], checking that `txt` is valid.")]
            pub fn new<T: Into<std::sync::Arc<str>>>(txt: T) -> Result<Self, $err> {
                let txt = txt.into();
                let check: fn(&str) -> bool = $check;
                if check(&txt) {
                    Ok($wid(txt))
                } else {
                    Err($err(txt.to_string()))
                }
            }

            #[doc = concat!("Build a new [`", stringify!($wid), "`] without checking `txt`.")]
            ///
            /// Values that do not pass the check of `new` are still rendered and compared
            /// consistently, but may not be parsable back by a strict RDF parser.
            pub fn new_unchecked<T: Into<std::sync::Arc<str>>>(txt: T) -> Self {
                $wid(txt.into())
            }

            /// Gets a reference to the underlying `str`.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::ops::Deref for $wid {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $wid {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::borrow::Borrow<str> for $wid {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $wid {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl PartialEq<str> for $wid {
            fn eq(&self, other: &str) -> bool {
                &*self.0 == other
            }
        }

        impl PartialEq<&str> for $wid {
            fn eq(&self, other: &&str) -> bool {
                &*self.0 == *other
            }
        }
    };
}
