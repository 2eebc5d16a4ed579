//! Color classification of free-text subject names.
//!
//! Subjects are classified into a fixed palette by matching the
//! lower-cased name against an alias table. Aliases of two characters or
//! fewer must match the whole name exactly (so "Elec" is never matched to
//! "EL"); longer aliases match as substrings. Table entries are checked
//! in declaration order and the first hit wins, which resolves overlaps
//! between categories deterministically.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;

/// The display palette for subject classes.
///
/// `Accent` is the fallback for names no alias matches; the concrete
/// accent color is a rendering concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectColor {
    Purple,
    Orange,
    Cyan,
    Red,
    Green,
    Brown,
    Pink,
    PaleGray,
    Mint,
    Gray,
    Indigo,
    Slate,
    Accent,
}

/// Alias table in priority order. Earlier entries win on overlap.
const PALETTE: &[(&[&str], SubjectColor)] = &[
    // languages
    (&["cl", "hcl", "tl", "htl", "ml"], SubjectColor::Purple),
    (&["math"], SubjectColor::Orange),
    (&["english", "el"], SubjectColor::Cyan),
    // sciences
    (
        &[
            "science",
            "sci",
            "phy",
            "physics",
            "bio",
            "biology",
            "chem",
            "chemistry",
        ],
        SubjectColor::Red,
    ),
    // humanities
    (&["ss", "social studies"], SubjectColor::Green),
    (
        &["geography", "ch(ge)", "ge", "geog", "history", "hist"],
        SubjectColor::Brown,
    ),
    // non-graded
    (&["s&w"], SubjectColor::Pink),
    (&["break"], SubjectColor::PaleGray),
    // applied subjects
    (&["comp", "computing"], SubjectColor::Mint),
    (&["electronics", "elec"], SubjectColor::Gray),
    (&["biotech", "biot", "bt"], SubjectColor::Indigo),
    (&["ds", "design studies"], SubjectColor::Slate),
];

/// Classify a subject name into the palette. Pure and total: always
/// returns a color, falling back to [`SubjectColor::Accent`].
pub fn color_for(name: &str) -> SubjectColor {
    classify(name).unwrap_or(SubjectColor::Accent)
}

/// Like [`color_for`], with the fallback color taken from the injected
/// engine configuration.
pub fn color_for_with(name: &str, config: &EngineConfig) -> SubjectColor {
    classify(name).unwrap_or(config.accent_color)
}

fn classify(name: &str) -> Option<SubjectColor> {
    let lower_name = name.to_lowercase();

    for (aliases, color) in PALETTE {
        let matched = aliases.iter().any(|alias| {
            if alias.len() <= 2 {
                lower_name == *alias
            } else {
                lower_name.contains(alias)
            }
        });
        if matched {
            return Some(*color);
        }
    }

    None
}
