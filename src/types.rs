use serde::Serialize;

/// How one alignment step relates a reference token to a candidate token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EditOp {
    Match,
    Substitution,
    Insertion,
    Deletion,
}

/// Outcome of aligning a candidate token sequence against a reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignmentResult {
    /// Minimum number of single-token edits turning the reference into the
    /// candidate.
    pub distance: usize,
    /// `distance / |reference|`. Can exceed 1.0 when insertions dominate.
    pub error_rate: f64,
    /// `1.0 - error_rate`; negative whenever the distance exceeds the
    /// reference length.
    pub accuracy: f64,
    pub substitutions: usize,
    pub deletions: usize,
    pub insertions: usize,
}
