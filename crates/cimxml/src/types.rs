//! CIM value types and the wire-format type-name table.

use core::fmt;

/// Scalar CIM data types as spelled in `TYPE`/`PARAMTYPE` attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CimTypeKind {
    Boolean,
    String,
    Char16,
    UInt8,
    SInt8,
    UInt16,
    SInt16,
    UInt32,
    SInt32,
    UInt64,
    SInt64,
    DateTime,
    Real32,
    Real64,
    /// Object-path valued. Spelled `"reference"` on the wire but kept out of
    /// the scalar name table; the grammar recognizes it separately.
    Reference,
    /// Explicit null/unset. Distinct from "no TYPE attribute present", which
    /// is `Option::<CimType>::None` everywhere in this crate.
    Null,
}

/// A CIM type: a scalar kind plus a composable array flag.
///
/// Array-ness is not a separate type space; `uint32` and `uint32[]` share
/// the same [`CimTypeKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CimType {
    pub kind: CimTypeKind,
    pub array: bool,
}

impl CimType {
    #[must_use]
    pub const fn scalar(kind: CimTypeKind) -> Self {
        CimType { kind, array: false }
    }

    #[must_use]
    pub const fn array_of(kind: CimTypeKind) -> Self {
        CimType { kind, array: true }
    }

    /// The same kind with the array flag set.
    #[must_use]
    pub const fn into_array(self) -> Self {
        CimType { kind: self.kind, array: true }
    }
}

/// Wire names of the scalar types. `"reference"` is deliberately absent.
const TYPE_NAMES: &[(&str, CimTypeKind)] = &[
    ("boolean", CimTypeKind::Boolean),
    ("string", CimTypeKind::String),
    ("char16", CimTypeKind::Char16),
    ("uint8", CimTypeKind::UInt8),
    ("sint8", CimTypeKind::SInt8),
    ("uint16", CimTypeKind::UInt16),
    ("sint16", CimTypeKind::SInt16),
    ("uint32", CimTypeKind::UInt32),
    ("sint32", CimTypeKind::SInt32),
    ("uint64", CimTypeKind::UInt64),
    ("sint64", CimTypeKind::SInt64),
    ("datetime", CimTypeKind::DateTime),
    ("real32", CimTypeKind::Real32),
    ("real64", CimTypeKind::Real64),
];

impl CimTypeKind {
    /// Case-insensitive lookup of a `TYPE`/`PARAMTYPE` attribute value.
    ///
    /// Returns `None` for unknown names; callers treat that the same as an
    /// absent attribute ("no declared type").
    #[must_use]
    pub fn from_wire(name: &str) -> Option<Self> {
        for (n, kind) in TYPE_NAMES {
            if name.eq_ignore_ascii_case(n) {
                return Some(*kind);
            }
        }
        if name.eq_ignore_ascii_case("reference") {
            return Some(CimTypeKind::Reference);
        }
        None
    }

    /// The canonical wire spelling, used by the request encoder.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CimTypeKind::Boolean => "boolean",
            CimTypeKind::String => "string",
            CimTypeKind::Char16 => "char16",
            CimTypeKind::UInt8 => "uint8",
            CimTypeKind::SInt8 => "sint8",
            CimTypeKind::UInt16 => "uint16",
            CimTypeKind::SInt16 => "sint16",
            CimTypeKind::UInt32 => "uint32",
            CimTypeKind::SInt32 => "sint32",
            CimTypeKind::UInt64 => "uint64",
            CimTypeKind::SInt64 => "sint64",
            CimTypeKind::DateTime => "datetime",
            CimTypeKind::Real32 => "real32",
            CimTypeKind::Real64 => "real64",
            CimTypeKind::Reference => "reference",
            CimTypeKind::Null => "null",
        }
    }
}

impl fmt::Display for CimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.as_str())?;
        if self.array {
            f.write_str("[]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("boolean", CimTypeKind::Boolean)]
    #[case("string", CimTypeKind::String)]
    #[case("STRING", CimTypeKind::String)]
    #[case("Uint32", CimTypeKind::UInt32)]
    #[case("sint64", CimTypeKind::SInt64)]
    #[case("DateTime", CimTypeKind::DateTime)]
    #[case("real64", CimTypeKind::Real64)]
    #[case("reference", CimTypeKind::Reference)]
    #[case("REFERENCE", CimTypeKind::Reference)]
    fn from_wire_is_case_insensitive(#[case] name: &str, #[case] kind: CimTypeKind) {
        assert_eq!(CimTypeKind::from_wire(name), Some(kind));
    }

    #[rstest]
    #[case("")]
    #[case("int")]
    #[case("uint128")]
    #[case("stringy")]
    fn from_wire_rejects_unknown_names(#[case] name: &str) {
        assert_eq!(CimTypeKind::from_wire(name), None);
    }

    #[test]
    fn scalar_names_round_trip() {
        for (name, kind) in TYPE_NAMES {
            assert_eq!(kind.as_str(), *name);
            assert_eq!(CimTypeKind::from_wire(name), Some(*kind));
        }
    }

    #[test]
    fn display_marks_arrays() {
        assert_eq!(CimType::scalar(CimTypeKind::UInt8).to_string(), "uint8");
        assert_eq!(CimType::array_of(CimTypeKind::UInt8).to_string(), "uint8[]");
    }
}
