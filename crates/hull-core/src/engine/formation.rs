use super::error::HullError;
use super::references::ResolvedReferences;
use crate::core::models::point::CompositionPoint;
use crate::core::models::record::StructureRecord;
use crate::core::models::species::SpeciesList;
use crate::core::prototype::decode_stoichiometry;
use serde::Serialize;
use tracing::instrument;

/// A composition point paired with the prototype label it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledPoint {
    pub label: String,
    pub point: CompositionPoint,
}

/// Normalizes every record into a composition point, preserving input order.
///
/// Each record's prototype label is decoded into stoichiometric counts, the
/// counts are mapped onto the full species index space, and the record energy
/// is converted into a per-atom formation energy relative to the resolved
/// elemental references.
///
/// # Errors
///
/// Returns [`HullError::MalformedPrototypeLabel`] if a label fails to decode,
/// and [`HullError::DegenerateRecord`] if the decoded counts and the record's
/// species sequence disagree in length, if a record species is outside the
/// requested list, or if the counts sum to zero atoms.
#[instrument(skip_all, fields(records = records.len()))]
pub fn build(
    records: &[StructureRecord],
    species: &SpeciesList,
    references: &ResolvedReferences,
) -> Result<Vec<LabeledPoint>, HullError> {
    let mut points = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let counts = decode_stoichiometry(&record.prototype_label)?;
        if counts.len() != record.species.len() {
            return Err(degenerate(
                index,
                record,
                format!(
                    "label encodes {} species but the record lists {}",
                    counts.len(),
                    record.species.len()
                ),
            ));
        }

        let mut stoichiometry = vec![0u32; species.len()];
        for (name, &count) in record.species.iter().zip(&counts) {
            let Some(k) = species.index_of(name) else {
                return Err(degenerate(
                    index,
                    record,
                    format!("species '{name}' is not in the requested species list"),
                ));
            };
            stoichiometry[k] = count;
        }

        let total: u32 = stoichiometry.iter().sum();
        if total == 0 {
            return Err(degenerate(
                index,
                record,
                "stoichiometric counts sum to zero atoms".to_string(),
            ));
        }
        let total = f64::from(total);

        let fractions: Vec<f64> = stoichiometry[1..]
            .iter()
            .map(|&count| f64::from(count) / total)
            .collect();
        let weighted_reference: f64 = references
            .energies
            .iter()
            .zip(&stoichiometry)
            .map(|(energy, &count)| energy * f64::from(count))
            .sum();
        let formation_energy =
            (record.binding_energy_per_formula - weighted_reference) / total;

        points.push(LabeledPoint {
            label: record.prototype_label.clone(),
            point: CompositionPoint::new(fractions, formation_energy),
        });
    }

    Ok(points)
}

fn degenerate(index: usize, record: &StructureRecord, reason: String) -> HullError {
    HullError::DegenerateRecord {
        index,
        label: record.prototype_label.clone(),
        reason,
    }
}
