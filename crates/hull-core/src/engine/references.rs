use super::error::HullError;
use crate::core::models::record::StructureRecord;
use crate::core::models::species::SpeciesList;
use serde::Serialize;
use tracing::{debug, instrument};

/// The lowest-energy elemental record found for one species.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElementalReference {
    /// Per-formula energy of the winning record.
    pub energy: f64,
    /// Position of the winning record in the input sequence.
    pub record_index: usize,
}

/// Per-species elemental references, indexed like the species list.
///
/// A species with no elemental record, or whose lowest elemental energy is
/// not below zero, has an empty slot; [`ReferenceTable::require_all`] turns
/// empty slots into explicit errors before anything downstream can consume
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTable {
    slots: Vec<Option<ElementalReference>>,
}

impl ReferenceTable {
    pub fn get(&self, species_index: usize) -> Option<&ElementalReference> {
        self.slots.get(species_index).and_then(Option::as_ref)
    }

    /// Converts the table into dense energy and record-index vectors.
    ///
    /// # Errors
    ///
    /// Returns [`HullError::MissingElementalReference`] for the first species
    /// with an empty slot.
    pub fn require_all(&self, species: &SpeciesList) -> Result<ResolvedReferences, HullError> {
        let mut energies = Vec::with_capacity(self.slots.len());
        let mut record_indices = Vec::with_capacity(self.slots.len());
        for (k, slot) in self.slots.iter().enumerate() {
            match slot {
                Some(reference) => {
                    energies.push(reference.energy);
                    record_indices.push(reference.record_index);
                }
                None => {
                    return Err(HullError::MissingElementalReference {
                        species: species.names()[k].clone(),
                    });
                }
            }
        }
        Ok(ResolvedReferences {
            energies,
            record_indices,
        })
    }
}

/// Dense per-species reference energies and their source record indices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedReferences {
    pub energies: Vec<f64>,
    pub record_indices: Vec<usize>,
}

/// Scans `records` for the lowest-energy elemental record of each requested
/// species.
///
/// Only records with exactly one species participate. A candidate wins its
/// slot on a strictly lower energy, so ties keep the earliest record, and
/// only energies below zero qualify at all: an unbound elemental state is no
/// reference. Elemental records for species outside the requested list are
/// ignored here and diagnosed during formation-energy building.
#[instrument(skip_all, fields(records = records.len()))]
pub fn resolve(records: &[StructureRecord], species: &SpeciesList) -> ReferenceTable {
    let mut slots: Vec<Option<ElementalReference>> = vec![None; species.len()];

    for (i, record) in records.iter().enumerate() {
        if !record.is_elemental() {
            continue;
        }
        let Some(k) = species.index_of(&record.species[0]) else {
            continue;
        };
        let energy = record.binding_energy_per_formula;
        let current = slots[k].map_or(0.0, |reference| reference.energy);
        if energy < current {
            slots[k] = Some(ElementalReference {
                energy,
                record_index: i,
            });
        }
    }

    debug!(
        resolved = slots.iter().filter(|slot| slot.is_some()).count(),
        requested = species.len(),
        "elemental reference resolution complete"
    );
    ReferenceTable { slots }
}
