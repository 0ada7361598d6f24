use crate::error::AlignmentError;
use crate::types::{AlignmentResult, EditOp};

/// Word-level Wagner–Fischer alignment of `candidate` against `reference`.
///
/// Fills an (n+1)×(m+1) distance table, records which edit produced each
/// cell, then walks the recorded edits back from the final cell to count
/// substitutions, insertions and deletions along one minimal path. Tokens
/// are compared verbatim; callers normalize beforehand (see
/// [`tokenization`](crate::alignment::tokenization)).
///
/// The reference sequence is the denominator of the error rate and must be
/// non-empty. The candidate may be empty, which aligns as deletions of the
/// whole reference.
pub fn align<T: PartialEq>(
    reference: &[T],
    candidate: &[T],
) -> Result<AlignmentResult, AlignmentError> {
    if reference.is_empty() {
        return Err(AlignmentError::invalid_input(
            "reference sequence is empty, word error rate is undefined",
        ));
    }

    let rows = reference.len() + 1;
    let cols = candidate.len() + 1;

    // Flat (rows × cols) arenas indexed i * cols + j.
    let mut dist = vec![0usize; rows * cols];
    let mut backtrace = vec![EditOp::Match; rows * cols];

    // Row 0 grows by consuming candidate tokens, column 0 by consuming
    // reference tokens; the tags keep the walk below in bounds.
    for j in 1..cols {
        dist[j] = j;
        backtrace[j] = EditOp::Insertion;
    }
    for i in 1..rows {
        dist[i * cols] = i;
        backtrace[i * cols] = EditOp::Deletion;
    }

    for i in 1..rows {
        for j in 1..cols {
            let cell = i * cols + j;
            if reference[i - 1] == candidate[j - 1] {
                dist[cell] = dist[cell - cols - 1];
                backtrace[cell] = EditOp::Match;
            } else {
                let sub = dist[cell - cols - 1] + 1;
                let ins = dist[cell - 1] + 1;
                let del = dist[cell - cols] + 1;
                let best = sub.min(ins).min(del);
                // Tie precedence: substitution, then insertion, then deletion.
                backtrace[cell] = if best == sub {
                    EditOp::Substitution
                } else if best == ins {
                    EditOp::Insertion
                } else {
                    EditOp::Deletion
                };
                dist[cell] = best;
            }
        }
    }

    let distance = dist[rows * cols - 1];

    let mut i = reference.len();
    let mut j = candidate.len();
    let mut substitutions = 0usize;
    let mut deletions = 0usize;
    let mut insertions = 0usize;

    // Walk the recorded edits back toward the origin. The walk takes at
    // least one step and ends as soon as either index hits the table edge,
    // so boundary edits beyond that point stay in the distance but are not
    // individually classified.
    loop {
        match backtrace[i * cols + j] {
            EditOp::Match => {
                i -= 1;
                j -= 1;
            }
            EditOp::Substitution => {
                substitutions += 1;
                i -= 1;
                j -= 1;
            }
            EditOp::Insertion => {
                insertions += 1;
                j -= 1;
            }
            EditOp::Deletion => {
                deletions += 1;
                i -= 1;
            }
        }
        if i == 0 || j == 0 {
            break;
        }
    }

    let error_rate = distance as f64 / reference.len() as f64;
    let accuracy = 1.0 - error_rate;

    tracing::debug!(
        distance,
        substitutions,
        deletions,
        insertions,
        error_rate,
        "aligned candidate against reference"
    );

    Ok(AlignmentResult {
        distance,
        error_rate,
        accuracy,
        substitutions,
        deletions,
        insertions,
    })
}
