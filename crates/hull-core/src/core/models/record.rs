use serde::{Deserialize, Serialize};

/// A raw crystal-structure record as supplied by an external data source.
///
/// Records are immutable inputs to the pipeline. Every index-valued output
/// (reference record indices, hull vertex indices, classification results)
/// refers to a record's position in the input sequence, which must therefore
/// be preserved unmodified through every stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureRecord {
    /// The AFLOW-style prototype label, whose leading underscore-delimited
    /// segment encodes the reduced chemical formula (e.g. `"AB3_cP4_221_a_c"`).
    pub prototype_label: String,
    /// The species present in this structure, in the same order as the
    /// species placeholders of the prototype label.
    pub species: Vec<String>,
    /// The binding potential energy per formula unit, prior to reference
    /// subtraction or per-atom normalization.
    pub binding_energy_per_formula: f64,
}

impl StructureRecord {
    pub fn new(
        prototype_label: impl Into<String>,
        species: impl IntoIterator<Item = impl Into<String>>,
        binding_energy_per_formula: f64,
    ) -> Self {
        Self {
            prototype_label: prototype_label.into(),
            species: species.into_iter().map(Into::into).collect(),
            binding_energy_per_formula,
        }
    }

    /// Returns `true` if this record contains exactly one species.
    ///
    /// Only elemental records participate in reference-energy resolution.
    pub fn is_elemental(&self) -> bool {
        self.species.len() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_elemental_requires_exactly_one_species() {
        let elemental = StructureRecord::new("A_cF4_225_a", ["Fe"], -4.0);
        let compound = StructureRecord::new("AB_cP2_221_b_a", ["Fe", "Ni"], -9.0);
        let empty = StructureRecord::new("A_cF4_225_a", Vec::<String>::new(), 0.0);

        assert!(elemental.is_elemental());
        assert!(!compound.is_elemental());
        assert!(!empty.is_elemental());
    }
}
