//! Stoichiometry decoding for AFLOW-style prototype labels.
//!
//! The leading underscore-delimited segment of a prototype label is a reduced
//! chemical formula: an alternation of alphabetic species placeholders and
//! optional decimal digit runs, e.g. `"AB3"` in `"AB3_cP4_221_a_c"`.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrototypeError {
    #[error("prototype label '{label}' has a count digit before any species placeholder")]
    LeadingDigit { label: String },
    #[error("prototype label '{label}' has unexpected character '{character}' in its reduced formula")]
    UnexpectedCharacter { label: String, character: char },
    #[error("prototype label '{label}' has an empty reduced formula")]
    EmptyFormula { label: String },
}

/// Decodes the reduced-formula segment of a prototype label into one
/// stoichiometric count per species placeholder, in label order.
///
/// A bare placeholder with no following digits denotes a count of one, so
/// `"AB3"` decodes to `[1, 3]` and `"A2B5C"` to `[2, 5, 1]`. Digit runs
/// accumulate positionally, so `"A12B"` decodes to `[12, 1]`.
///
/// # Errors
///
/// Returns [`PrototypeError`] if a digit appears before any placeholder, if
/// the reduced formula contains any other character class, or if it is empty.
pub fn decode_stoichiometry(label: &str) -> Result<Vec<u32>, PrototypeError> {
    let formula = label.split('_').next().unwrap_or("");
    let mut counts = Vec::new();
    // The running count is zero right after a placeholder; zero finalizes as
    // an implicit one.
    let mut current: Option<u32> = None;

    for character in formula.chars() {
        if character.is_ascii_alphabetic() {
            if let Some(count) = current {
                counts.push(count.max(1));
            }
            current = Some(0);
        } else if let Some(digit) = character.to_digit(10) {
            match current.as_mut() {
                Some(count) => *count = *count * 10 + digit,
                None => {
                    return Err(PrototypeError::LeadingDigit {
                        label: label.to_string(),
                    });
                }
            }
        } else {
            return Err(PrototypeError::UnexpectedCharacter {
                label: label.to_string(),
                character,
            });
        }
    }

    match current {
        Some(count) => counts.push(count.max(1)),
        None => {
            return Err(PrototypeError::EmptyFormula {
                label: label.to_string(),
            });
        }
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_implicit_unit_counts() {
        assert_eq!(decode_stoichiometry("AB3_cP4_221_a_c").unwrap(), vec![1, 3]);
        assert_eq!(decode_stoichiometry("A2B5C_oS16_65_bej_i_q").unwrap(), vec![2, 5, 1]);
        assert_eq!(decode_stoichiometry("A_cF4_225_a").unwrap(), vec![1]);
        assert_eq!(decode_stoichiometry("AB_cP2_221_b_a").unwrap(), vec![1, 1]);
    }

    #[test]
    fn decodes_multi_digit_counts() {
        assert_eq!(decode_stoichiometry("A12B_x").unwrap(), vec![12, 1]);
        assert_eq!(decode_stoichiometry("A3B107_y").unwrap(), vec![3, 107]);
    }

    #[test]
    fn decodes_labels_without_structural_suffix() {
        assert_eq!(decode_stoichiometry("AB2").unwrap(), vec![1, 2]);
    }

    #[test]
    fn rejects_digit_before_any_placeholder() {
        assert_eq!(
            decode_stoichiometry("2AB_zz").unwrap_err(),
            PrototypeError::LeadingDigit {
                label: "2AB_zz".to_string()
            }
        );
    }

    #[test]
    fn rejects_unexpected_characters() {
        assert_eq!(
            decode_stoichiometry("A-B_zz").unwrap_err(),
            PrototypeError::UnexpectedCharacter {
                label: "A-B_zz".to_string(),
                character: '-'
            }
        );
    }

    #[test]
    fn rejects_empty_reduced_formula() {
        assert_eq!(
            decode_stoichiometry("_cP4_221_a_c").unwrap_err(),
            PrototypeError::EmptyFormula {
                label: "_cP4_221_a_c".to_string()
            }
        );
        assert!(matches!(
            decode_stoichiometry("").unwrap_err(),
            PrototypeError::EmptyFormula { .. }
        ));
    }
}
