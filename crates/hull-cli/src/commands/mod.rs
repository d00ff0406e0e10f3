pub mod compare;
pub mod hull;

use crate::error::{CliError, Result};
use kimhull::core::models::species::SpeciesList;

/// Validates the species arguments into a binary species list.
pub(crate) fn binary_species_list(species: &[String]) -> Result<SpeciesList> {
    let list = SpeciesList::new(species.iter().cloned())
        .map_err(|e| CliError::Argument(e.to_string()))?;
    list.require_binary()
        .map_err(|e| CliError::Argument(e.to_string()))?;
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn accepts_exactly_two_unique_species() {
        let list = binary_species_list(&owned(&["Fe", "Ni"])).unwrap();
        assert_eq!(list.names(), &["Fe", "Ni"]);
    }

    #[test]
    fn rejects_duplicates_and_wrong_arity() {
        assert!(matches!(
            binary_species_list(&owned(&["Fe"])),
            Err(CliError::Argument(_))
        ));
        assert!(matches!(
            binary_species_list(&owned(&["Fe", "Fe"])),
            Err(CliError::Argument(_))
        ));
        assert!(matches!(
            binary_species_list(&owned(&["Fe", "Ni", "Cr"])),
            Err(CliError::Argument(_))
        ));
    }
}
