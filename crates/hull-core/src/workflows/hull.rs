use crate::core::geometry::{MonotoneChain, PlanarHull};
use crate::core::models::point::CompositionPoint;
use crate::core::models::record::StructureRecord;
use crate::core::models::species::SpeciesList;
use crate::core::source::StructureSource;
use crate::engine::comparison::{self, HullComparison};
use crate::engine::error::HullError;
use crate::engine::formation;
use crate::engine::lower_hull;
use crate::engine::references;
use nalgebra::Point2;
use serde::Serialize;
use tracing::{info, instrument};

/// A binary phase diagram: every composition point, its prototype label, the
/// elemental reference records, and the ordered lower-hull boundary.
///
/// All index-valued fields refer to positions in the input record sequence.
/// The type is plain serializable data so external renderers can consume it
/// without depending on how it was computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HullDiagram {
    /// The requested species, in index order.
    pub species: Vec<String>,
    /// One prototype label per input record.
    pub labels: Vec<String>,
    /// One composition point per input record.
    pub points: Vec<CompositionPoint>,
    /// The record index of each species' elemental reference.
    pub reference_record_indices: Vec<usize>,
    /// Indices of the stable-boundary vertices, walked from the first
    /// species' elemental reference to the second's.
    pub lower_hull: Vec<usize>,
}

impl HullDiagram {
    /// The prototype labels sitting on the lower hull, in walk order.
    pub fn lower_hull_labels(&self) -> Vec<String> {
        self.lower_hull
            .iter()
            .map(|&i| self.labels[i].clone())
            .collect()
    }
}

/// A candidate model's diagram validated against a reference diagram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelValidation {
    pub reference: HullDiagram,
    pub candidate: HullDiagram,
    pub comparison: HullComparison,
}

/// Builds a binary hull diagram from a record set using the default
/// monotone-chain hull.
pub fn build(
    records: &[StructureRecord],
    species: &SpeciesList,
) -> Result<HullDiagram, HullError> {
    build_with_hull(records, species, &MonotoneChain)
}

/// Builds a binary hull diagram with an explicit hull implementation.
///
/// The pipeline runs end to end in input-record order: elemental reference
/// resolution, formation-energy normalization, then the lower-hull boundary
/// walk between the two elemental endpoints.
///
/// # Errors
///
/// Any condition of [`HullError`] raised by a stage aborts the computation;
/// an empty record set is [`HullError::NoData`], and a species list that is
/// not binary is rejected before any records are touched.
#[instrument(skip_all, fields(records = records.len()))]
pub fn build_with_hull(
    records: &[StructureRecord],
    species: &SpeciesList,
    hull: &impl PlanarHull,
) -> Result<HullDiagram, HullError> {
    species.require_binary()?;
    if records.is_empty() {
        return Err(HullError::NoData);
    }

    let resolved = references::resolve(records, species).require_all(species)?;
    let labeled = formation::build(records, species, &resolved)?;

    let xy: Vec<Point2<f64>> = labeled
        .iter()
        .map(|lp| {
            let fractions = lp.point.mole_fractions();
            Point2::new(fractions[0], lp.point.formation_energy())
        })
        .collect();
    let endpoints = (resolved.record_indices[0], resolved.record_indices[1]);
    let lower_hull = lower_hull::extract(&xy, endpoints, hull)?;

    info!(
        records = records.len(),
        stable_vertices = lower_hull.len(),
        "hull diagram built"
    );

    let (labels, points): (Vec<String>, Vec<CompositionPoint>) = labeled
        .into_iter()
        .map(|lp| (lp.label, lp.point))
        .unzip();
    Ok(HullDiagram {
        species: species.names().to_vec(),
        labels,
        points,
        reference_record_indices: resolved.record_indices,
        lower_hull,
    })
}

/// Classifies a candidate diagram's lower-hull vertices against a reference
/// diagram by prototype-label membership.
pub fn compare(candidate: &HullDiagram, reference: &HullDiagram) -> HullComparison {
    let reference_labels = reference.lower_hull_labels();
    comparison::classify(&candidate.labels, &candidate.lower_hull, &reference_labels)
}

/// Fetches records from `source` and builds the hull diagram for them.
///
/// # Errors
///
/// A provider failure surfaces as [`HullError::Source`]; everything else is
/// as in [`build`].
pub fn build_from_source<S: StructureSource>(
    source: &S,
    species: &SpeciesList,
    model: Option<&str>,
) -> Result<HullDiagram, HullError> {
    let records = source
        .fetch(species, model)
        .map_err(|e| HullError::Source(Box::new(e)))?;
    build(&records, species)
}

/// Builds the reference and candidate diagrams for `model` and classifies the
/// candidate's hull against the reference's.
#[instrument(skip(source, species))]
pub fn validate_model<S: StructureSource>(
    source: &S,
    species: &SpeciesList,
    model: &str,
) -> Result<ModelValidation, HullError> {
    let reference = build_from_source(source, species, None)?;
    let candidate = build_from_source(source, species, Some(model))?;
    let comparison = compare(&candidate, &reference);

    info!(
        agree = comparison.agree.len(),
        disagree = comparison.disagree.len(),
        "model validated against reference hull"
    );
    Ok(ModelValidation {
        reference,
        candidate,
        comparison,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn species_ab() -> SpeciesList {
        SpeciesList::new(["A", "B"]).unwrap()
    }

    fn elemental(species: &str, energy: f64) -> StructureRecord {
        StructureRecord::new("A_cF4_225_a", [species], energy)
    }

    fn compound(label: &str, energy: f64) -> StructureRecord {
        StructureRecord::new(label, ["A", "B"], energy)
    }

    #[test]
    fn unstable_compound_leaves_a_direct_elemental_path() {
        // Formation energy of AB is (-5 - (-2 + -4)) / 2 = +0.5, above the
        // baseline, so the hull path skips it.
        let records = vec![
            elemental("A", -2.0),
            elemental("B", -4.0),
            compound("AB_cP2_221_b_a", -5.0),
        ];

        let diagram = build(&records, &species_ab()).unwrap();
        assert_eq!(diagram.reference_record_indices, vec![0, 1]);
        let (fraction, energy) = diagram.points[2].binary_xy().unwrap();
        assert!((fraction - 0.5).abs() < 1e-12);
        assert!((energy - 0.5).abs() < 1e-12);
        assert_eq!(diagram.lower_hull, vec![0, 1]);
    }

    #[test]
    fn stable_compound_joins_the_lower_hull() {
        // Formation energy of AB is (-7 - (-2 + -4)) / 2 = -0.5.
        let records = vec![
            elemental("A", -2.0),
            elemental("B", -4.0),
            compound("AB_cP2_221_b_a", -7.0),
        ];

        let diagram = build(&records, &species_ab()).unwrap();
        assert_eq!(diagram.lower_hull, vec![0, 2, 1]);
        assert_eq!(
            diagram.lower_hull_labels(),
            vec!["A_cF4_225_a", "AB_cP2_221_b_a", "A_cF4_225_a"]
        );
    }

    #[test]
    fn empty_record_set_is_no_data() {
        let err = build(&[], &species_ab()).unwrap_err();
        assert!(matches!(err, HullError::NoData));
    }

    #[test]
    fn non_binary_species_list_is_rejected_before_any_work() {
        let species = SpeciesList::new(["A", "B", "C"]).unwrap();
        let err = build(&[elemental("A", -2.0)], &species).unwrap_err();
        assert!(matches!(err, HullError::InvalidSpeciesList { .. }));
    }

    #[test]
    fn missing_elemental_reference_aborts_before_formation_energies() {
        let records = vec![elemental("A", -2.0), compound("AB_cP2_221_b_a", -7.0)];
        let err = build(&records, &species_ab()).unwrap_err();
        assert!(
            matches!(err, HullError::MissingElementalReference { species } if species == "B")
        );
    }

    #[test]
    fn compare_partitions_candidate_vertices_by_label() {
        let reference = build(
            &[
                elemental("A", -2.0),
                elemental("B", -4.0),
                compound("AB_cP2_221_b_a", -7.0),
            ],
            &species_ab(),
        )
        .unwrap();
        // The candidate model stabilizes a different compound prototype.
        let candidate = build(
            &[
                elemental("A", -2.0),
                elemental("B", -4.0),
                compound("AB2_cP3_221_a_c", -11.2),
            ],
            &species_ab(),
        )
        .unwrap();

        let comparison = compare(&candidate, &reference);
        assert_eq!(comparison.agree, vec![0, 1]);
        assert_eq!(comparison.disagree, vec![2]);
    }

    struct StaticSource {
        reference: Vec<StructureRecord>,
        candidate: Vec<StructureRecord>,
    }

    impl StructureSource for StaticSource {
        type Error = Infallible;

        fn fetch(
            &self,
            _species: &SpeciesList,
            model: Option<&str>,
        ) -> Result<Vec<StructureRecord>, Self::Error> {
            Ok(match model {
                None => self.reference.clone(),
                Some(_) => self.candidate.clone(),
            })
        }
    }

    #[test]
    fn validate_model_builds_both_diagrams_and_classifies() {
        let source = StaticSource {
            reference: vec![
                elemental("A", -2.0),
                elemental("B", -4.0),
                compound("AB_cP2_221_b_a", -7.0),
            ],
            candidate: vec![
                elemental("A", -2.1),
                elemental("B", -3.9),
                compound("AB_cP2_221_b_a", -6.8),
            ],
        };

        let validation = validate_model(&source, &species_ab(), "model-x").unwrap();
        assert_eq!(validation.candidate.lower_hull, vec![0, 2, 1]);
        assert_eq!(validation.comparison.agree, vec![0, 2, 1]);
        assert!(validation.comparison.disagree.is_empty());
    }
}
