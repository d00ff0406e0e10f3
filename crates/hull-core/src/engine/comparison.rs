use serde::Serialize;
use std::collections::HashSet;
use tracing::instrument;

/// Vertex indices of a candidate hull partitioned by whether the same
/// prototype structure also appears on the reference hull.
///
/// Agreement is purely label membership; no geometric closeness is involved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HullComparison {
    /// Candidate hull vertices whose prototype label occurs on the reference
    /// hull.
    pub agree: Vec<usize>,
    /// Candidate hull vertices whose prototype label does not.
    pub disagree: Vec<usize>,
}

/// Classifies every candidate hull vertex against the reference hull labels.
///
/// `labels` is the candidate dataset's full label sequence, indexed by the
/// entries of `hull_indices`; the output partitions `hull_indices` in walk
/// order.
#[instrument(skip_all, fields(candidate_vertices = hull_indices.len()))]
pub fn classify(
    labels: &[String],
    hull_indices: &[usize],
    reference_hull_labels: &[String],
) -> HullComparison {
    let reference: HashSet<&str> = reference_hull_labels
        .iter()
        .map(String::as_str)
        .collect();

    let mut comparison = HullComparison::default();
    for &index in hull_indices {
        if reference.contains(labels[index].as_str()) {
            comparison.agree.push(index);
        } else {
            comparison.disagree.push(index);
        }
    }
    comparison
}
