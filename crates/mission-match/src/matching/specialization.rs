//! Static adjacency between nursing specializations.
//!
//! A mission whose specialization the nurse does not hold can still earn partial credit when
//! one of the nurse's specializations sits next to it in this table. The relation is directed:
//! the row is keyed by the mission's required specialization.

use super::domain::normalize_label;

const RELATED_SPECIALIZATIONS: &[(&str, &[&str])] = &[
    ("urgences", &["cardiologie", "pneumologie", "neurologie"]),
    ("reanimation", &["urgences", "cardiologie", "pneumologie", "anesthesie"]),
    ("cardiologie", &["urgences", "reanimation", "pneumologie"]),
    ("pneumologie", &["cardiologie", "urgences", "infectiologie"]),
    ("neurologie", &["urgences", "geriatrie", "reanimation"]),
    ("pediatrie", &["neonatologie", "urgences"]),
    ("neonatologie", &["pediatrie", "maternite"]),
    ("maternite", &["neonatologie", "pediatrie"]),
    ("geriatrie", &["medecine_interne", "neurologie"]),
    ("medecine_interne", &["geriatrie", "cardiologie", "infectiologie"]),
    ("infectiologie", &["medecine_interne", "pneumologie"]),
    ("chirurgie", &["bloc_operatoire", "anesthesie"]),
    ("bloc_operatoire", &["chirurgie", "anesthesie"]),
    ("anesthesie", &["bloc_operatoire", "reanimation"]),
    ("oncologie", &["hematologie", "soins_palliatifs"]),
    ("hematologie", &["oncologie"]),
    ("soins_palliatifs", &["oncologie", "geriatrie"]),
    ("psychiatrie", &["addictologie"]),
    ("addictologie", &["psychiatrie"]),
];

/// Specializations adjacent to `specialization`; empty when it is not in the table.
pub fn related_to(specialization: &str) -> &'static [&'static str] {
    let key = normalize_label(specialization);
    RELATED_SPECIALIZATIONS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, related)| *related)
        .unwrap_or(&[])
}

/// The first held specialization that is adjacent to `required`, unless `required` is held
/// outright.
pub fn partial_match<'a, S>(candidate_specs: &'a [S], required: &str) -> Option<&'a str>
where
    S: AsRef<str>,
{
    let required_key = normalize_label(required);
    if candidate_specs
        .iter()
        .any(|held| normalize_label(held.as_ref()) == required_key)
    {
        return None;
    }

    let related = related_to(&required_key);
    candidate_specs
        .iter()
        .map(AsRef::as_ref)
        .find(|held| related.contains(&normalize_label(held).as_str()))
}

pub fn is_partial_match<S>(candidate_specs: &[S], required: &str) -> bool
where
    S: AsRef<str>,
{
    partial_match(candidate_specs, required).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(
            related_to("  URGENCES "),
            &["cardiologie", "pneumologie", "neurologie"]
        );
    }

    #[test]
    fn unmapped_specialization_has_no_neighbours() {
        assert!(related_to("dermatologie").is_empty());
        assert!(!is_partial_match(&["cardiologie"], "dermatologie"));
    }

    #[test]
    fn adjacent_specialization_is_partial() {
        let held = vec!["Pneumologie".to_string()];
        assert_eq!(partial_match(&held, "urgences"), Some("Pneumologie"));
    }

    #[test]
    fn exact_holding_is_not_partial() {
        assert!(!is_partial_match(&["urgences", "cardiologie"], "Urgences"));
    }

    #[test]
    fn unrelated_specialization_is_not_partial() {
        assert!(!is_partial_match(&["psychiatrie"], "urgences"));
    }
}
