//! Canonical JSON bytes: the single serialization-for-hashing path.
//!
//! Canonical form is compact JSON with object keys in byte order and integer
//! numbers only. `serde_json::Map` is a `BTreeMap` (the `preserve_order`
//! feature is never enabled in this workspace), so compact serialization
//! already yields sorted keys; this module adds the integer-only check.

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A JSON number was not an integer (float, NaN, Infinity).
    NonIntegerNumber { raw: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerNumber { raw } => {
                write!(f, "non-integer number in canonical JSON: {raw}")
            }
        }
    }
}

impl std::error::Error for CanonError {}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number in `value` is not
/// representable as `i64` or `u64`.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    reject_non_integers(value)?;
    Ok(value.to_string().into_bytes())
}

fn reject_non_integers(value: &serde_json::Value) -> Result<(), CanonError> {
    match value {
        serde_json::Value::Number(n) if !(n.is_i64() || n.is_u64()) => {
            Err(CanonError::NonIntegerNumber { raw: n.to_string() })
        }
        serde_json::Value::Array(items) => items.iter().try_for_each(reject_non_integers),
        serde_json::Value::Object(map) => map.values().try_for_each(reject_non_integers),
        _ => Ok(()),
    }
}
