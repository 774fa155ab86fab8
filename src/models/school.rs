// SPDX-License-Identifier: MIT

//! Canonical school-context lists used to validate profile completion.

/// German federal states.
pub const REGIONS: &[&str] = &[
    "Baden-Württemberg",
    "Bayern",
    "Berlin",
    "Brandenburg",
    "Bremen",
    "Hamburg",
    "Hessen",
    "Mecklenburg-Vorpommern",
    "Niedersachsen",
    "Nordrhein-Westfalen",
    "Rheinland-Pfalz",
    "Saarland",
    "Sachsen",
    "Sachsen-Anhalt",
    "Schleswig-Holstein",
    "Thüringen",
];

/// Grade levels, including post-school options.
pub const GRADE_LEVELS: &[&str] = &[
    "5",
    "6",
    "7",
    "8",
    "9",
    "10",
    "11",
    "12",
    "13",
    "Studium",
    "Erwachsenenbildung",
];

/// Recognized school types.
pub const SCHOOL_TYPES: &[&str] = &[
    "Grundschule",
    "Hauptschule",
    "Realschule",
    "Gesamtschule",
    "Gymnasium",
    "Berufsschule",
    "Berufsoberschule",
    "Fachoberschule",
    "Fachhochschule",
    "Universität",
    "Privatschule",
    "Waldorfschule",
    "Montessori-Schule",
    "Internationale Schule",
    "Sonstiges",
];

/// Flat list of all selectable subjects.
pub const SUBJECTS: &[&str] = &[
    // Sprachen
    "Deutsch",
    "Englisch",
    "Französisch",
    "Spanisch",
    "Latein",
    // MINT
    "Mathematik",
    "Physik",
    "Chemie",
    "Biologie",
    "Informatik",
    // Gesellschaft
    "Geschichte",
    "Erdkunde",
    "Politik",
    "Wirtschaft",
    "Religion",
    "Ethik",
    "Philosophie",
    // Kreativ & Sport
    "Kunst",
    "Musik",
    "Sport",
    // Weitere
    "Psychologie",
    "Pädagogik",
    "Sonstiges",
];

pub fn is_valid_region(s: &str) -> bool {
    REGIONS.contains(&s)
}

pub fn is_valid_grade_level(s: &str) -> bool {
    GRADE_LEVELS.contains(&s)
}

pub fn is_valid_school_type(s: &str) -> bool {
    SCHOOL_TYPES.contains(&s)
}

pub fn is_valid_subject(s: &str) -> bool {
    SUBJECTS.contains(&s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values_validate() {
        assert!(is_valid_region("Bayern"));
        assert!(is_valid_grade_level("Studium"));
        assert!(is_valid_school_type("Gymnasium"));
        assert!(is_valid_subject("Mathematik"));
    }

    #[test]
    fn test_unknown_values_rejected() {
        assert!(!is_valid_region("Atlantis"));
        assert!(!is_valid_grade_level("14"));
        assert!(!is_valid_school_type("Hogwarts"));
        assert!(!is_valid_subject("Alchemie"));
    }
}
