/// Define, in the current module, one `&'static str` constant per IRI of a namespace,
/// plus the constant `PREFIX`.
///
/// Suffixes that are not valid Rust identifiers are given after a `;`,
/// as pairs `identifier, "suffix"`.
///
/// A test module checks that every generated IRI is valid,
/// so that terms can be built from them with the unchecked constructors.
#[macro_export]
macro_rules! namespace {
    ($iri_prefix:literal, $($suffix:ident),*; $($r_id:ident, $r_sf:literal),*) => {
        /// Prefix used in this namespace.
        pub const PREFIX: &str = $iri_prefix;
        $(
            $crate::ns_iri!($iri_prefix, $suffix);
        )*
        $(
            $crate::ns_iri!($iri_prefix, $r_id, $r_sf);
        )*

    };
    ($iri_prefix:literal, $($suffix:ident),*) => {
        $crate::namespace!($iri_prefix, $($suffix),*;);
    };
}

/// Define one IRI constant of a namespace (used by [`namespace!`](macro.namespace.html)).
#[macro_export]
macro_rules! ns_iri {
    ($prefix:literal, $ident:ident) => {
        #[doc = concat!("`", $prefix, stringify!($ident), "`")]
        #[allow(non_upper_case_globals)]
        pub const $ident: &str = concat!($prefix, stringify!($ident));
    };
    ($prefix:literal, $ident:ident, $suffix:literal) => {
        #[doc = concat!("`", $prefix, $suffix, "`")]
        #[allow(non_upper_case_globals)]
        pub const $ident: &str = concat!($prefix, $suffix);
    };
}
