//! # Classifier Module
//!
//! Infers an education level from keywords in a book title.
//!
//! Rules are checked top to bottom against the lower-cased title and the first
//! rule with a matching keyword wins. Keywords are plain substrings, so `"f1"`
//! also matches inside `"of1"`, and `"a level"` matches inside
//! `"as & a level"`, which makes the later AS & A Level rule reachable only
//! through titles that never contain `"a level"` on their own.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical education level labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EducationLevel {
    Form1,
    Form2,
    Form3,
    Form4,
    Form5,
    Form6,
    Grade1,
    Grade2,
    Grade3,
    Grade4,
    Grade5,
    Grade6,
    Grade7,
    OLevel,
    ALevel,
    Igcse,
    AsAndALevel,
    Starter,
}

impl EducationLevel {
    /// Label written to the catalog
    pub fn label(&self) -> &'static str {
        match self {
            Self::Form1 => "Form 1",
            Self::Form2 => "Form 2",
            Self::Form3 => "Form 3",
            Self::Form4 => "Form 4",
            Self::Form5 => "Form 5",
            Self::Form6 => "Form 6",
            Self::Grade1 => "Grade 1",
            Self::Grade2 => "Grade 2",
            Self::Grade3 => "Grade 3",
            Self::Grade4 => "Grade 4",
            Self::Grade5 => "Grade 5",
            Self::Grade6 => "Grade 6",
            Self::Grade7 => "Grade 7",
            Self::OLevel => "O Level",
            Self::ALevel => "A Level",
            Self::Igcse => "IGCSE",
            Self::AsAndALevel => "AS & A Level",
            Self::Starter => "Starter",
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered keyword rules. Earlier rows take priority.
pub const LEVEL_RULES: &[(&[&str], EducationLevel)] = &[
    (&["form 1", "f1"], EducationLevel::Form1),
    (&["form 2", "f2"], EducationLevel::Form2),
    (&["form 3", "f3"], EducationLevel::Form3),
    (&["form 4", "f4"], EducationLevel::Form4),
    (&["form 5", "f5"], EducationLevel::Form5),
    (&["form 6", "f6"], EducationLevel::Form6),
    (&["grade 1"], EducationLevel::Grade1),
    (&["grade 2"], EducationLevel::Grade2),
    (&["grade 3"], EducationLevel::Grade3),
    (&["grade 4"], EducationLevel::Grade4),
    (&["grade 5"], EducationLevel::Grade5),
    (&["grade 6"], EducationLevel::Grade6),
    (&["grade 7"], EducationLevel::Grade7),
    (&["o level", "o-level"], EducationLevel::OLevel),
    (&["a level", "a-level"], EducationLevel::ALevel),
    (&["igcse"], EducationLevel::Igcse),
    (&["as & a level"], EducationLevel::AsAndALevel),
    (&["starter"], EducationLevel::Starter),
];

/// Classify a title, returning the first matching level
pub fn classify(title: &str) -> Option<EducationLevel> {
    let title = title.to_lowercase();
    LEVEL_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| title.contains(k)))
        .map(|(_, level)| *level)
}

/// Classify a title, returning the label or an empty string
pub fn classify_label(title: &str) -> &'static str {
    classify(title).map(|l| l.label()).unwrap_or("")
}
