use serde::Serialize;

/// A point in composition-energy space.
///
/// For a species list of length `n`, the point carries the mole fractions of
/// species `1..n` (the species at position 0 is the omitted coordinate) and
/// the per-atom formation energy. In the binary case the point is exactly
/// (mole fraction of species 1, formation energy).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositionPoint {
    mole_fractions: Vec<f64>,
    formation_energy: f64,
}

impl CompositionPoint {
    pub fn new(mole_fractions: Vec<f64>, formation_energy: f64) -> Self {
        Self {
            mole_fractions,
            formation_energy,
        }
    }

    /// Mole fractions of every species except the first, in species-list order.
    pub fn mole_fractions(&self) -> &[f64] {
        &self.mole_fractions
    }

    /// The per-atom formation energy relative to the elemental references.
    pub fn formation_energy(&self) -> f64 {
        self.formation_energy
    }

    /// The full coordinate vector, energy last, as consumed by renderers.
    pub fn coords(&self) -> Vec<f64> {
        let mut coords = self.mole_fractions.clone();
        coords.push(self.formation_energy);
        coords
    }

    /// The (mole fraction, formation energy) pair for a binary-system point.
    pub fn binary_xy(&self) -> Option<(f64, f64)> {
        match self.mole_fractions.as_slice() {
            [fraction] => Some((*fraction, self.formation_energy)),
            _ => None,
        }
    }
}
