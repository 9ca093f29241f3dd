//! Compilation boundary: `compile(payload) -> PuzzleV1`.
//!
//! Payload format (JSON, pegs listed bottom to top):
//!
//! ```json
//! {"capacity": 4, "pegs": [[2, 9, 2, 1], [5, 1, 3, 7], []]}
//! ```
//!
//! Pure function: identical inputs produce identical output. Fail-closed:
//! no partial puzzle is produced.

use crate::carrier::nut::Nut;
use crate::carrier::pegstate::PegStateV1;
use crate::carrier::puzzle::{PuzzleError, PuzzleV1};

/// Typed compilation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileFailure {
    /// Payload is not valid JSON.
    InvalidJson { detail: String },
    /// A required field is missing or has the wrong JSON type.
    SchemaMismatch { detail: String },
    /// A nut code is not an integer in `0..=255`.
    InvalidNutCode { peg: usize, index: usize },
    /// The decoded instance violates a puzzle invariant.
    ConstraintViolation(PuzzleError),
}

impl std::fmt::Display for CompileFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidJson { detail } => write!(f, "invalid puzzle JSON: {detail}"),
            Self::SchemaMismatch { detail } => write!(f, "puzzle schema mismatch: {detail}"),
            Self::InvalidNutCode { peg, index } => {
                write!(f, "peg {peg} position {index}: nut code must be 0..=255")
            }
            Self::ConstraintViolation(e) => write!(f, "puzzle constraint violated: {e}"),
        }
    }
}

impl std::error::Error for CompileFailure {}

impl From<PuzzleError> for CompileFailure {
    fn from(e: PuzzleError) -> Self {
        Self::ConstraintViolation(e)
    }
}

/// Compile a JSON puzzle payload.
///
/// # Errors
///
/// Returns [`CompileFailure`] on malformed JSON, schema mismatch, an
/// out-of-range nut code, or a capacity violation.
pub fn compile(payload_bytes: &[u8]) -> Result<PuzzleV1, CompileFailure> {
    let value: serde_json::Value =
        serde_json::from_slice(payload_bytes).map_err(|e| CompileFailure::InvalidJson {
            detail: e.to_string(),
        })?;
    compile_value(&value)
}

/// Compile an already-parsed payload.
///
/// # Errors
///
/// Same as [`compile`], minus JSON syntax errors.
pub fn compile_value(value: &serde_json::Value) -> Result<PuzzleV1, CompileFailure> {
    let obj = value.as_object().ok_or_else(|| CompileFailure::SchemaMismatch {
        detail: "payload must be a JSON object".into(),
    })?;

    let capacity = obj
        .get("capacity")
        .and_then(serde_json::Value::as_u64)
        .ok_or_else(|| CompileFailure::SchemaMismatch {
            detail: "`capacity` must be a non-negative integer".into(),
        })?;
    let capacity = usize::try_from(capacity).map_err(|_| CompileFailure::SchemaMismatch {
        detail: format!("`capacity` {capacity} does not fit in usize"),
    })?;

    let raw_pegs = obj
        .get("pegs")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| CompileFailure::SchemaMismatch {
            detail: "`pegs` must be an array of arrays".into(),
        })?;

    let mut pegs = Vec::with_capacity(raw_pegs.len());
    for (peg_idx, raw_peg) in raw_pegs.iter().enumerate() {
        let raw_nuts = raw_peg
            .as_array()
            .ok_or_else(|| CompileFailure::SchemaMismatch {
                detail: format!("peg {peg_idx} must be an array"),
            })?;
        let peg = raw_nuts
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                raw.as_u64()
                    .and_then(|code| u8::try_from(code).ok())
                    .map(Nut::new)
                    .ok_or(CompileFailure::InvalidNutCode {
                        peg: peg_idx,
                        index,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        pegs.push(peg);
    }

    Ok(PuzzleV1::new(capacity, PegStateV1::new(pegs))?)
}
