// Theme vocabulary — the static registry of theme → weighted-keyword
// tables.
//
// Twenty narrative themes, loaded once into read-only process-wide data
// and shared by every concurrent request. Keyword weights: 1.0 for the
// theme's anchor terms, 0.8 for strong cues, 0.5 for incidental words
// that also occur outside the theme.

/// One theme with its ordered keyword-weight table.
pub struct ThemeEntry {
    pub name: &'static str,
    pub keywords: &'static [(&'static str, f64)],
}

/// The full registry. Obtain via [`ThemeVocabulary::global`].
pub struct ThemeVocabulary {
    entries: &'static [ThemeEntry],
}

static ENTRIES: [ThemeEntry; 20] = [
    ThemeEntry {
        name: "character_development",
        keywords: &[
            ("character", 1.0),
            ("protagonist", 0.8),
            ("development", 0.8),
            ("growth", 0.8),
            ("arc", 0.5),
            ("personality", 0.5),
        ],
    },
    ThemeEntry {
        name: "moral_complexity",
        keywords: &[
            ("moral", 1.0),
            ("ethics", 0.8),
            ("dilemma", 0.8),
            ("consequence", 0.8),
            ("choice", 0.5),
            ("right and wrong", 0.5),
        ],
    },
    ThemeEntry {
        name: "world_building",
        keywords: &[
            ("world", 1.0),
            ("universe", 0.8),
            ("lore", 0.8),
            ("setting", 0.8),
            ("environment", 0.5),
            ("immersive", 0.5),
        ],
    },
    ThemeEntry {
        name: "storytelling",
        keywords: &[
            ("storytelling", 1.0),
            ("story", 0.8),
            ("narrative", 0.8),
            ("tale", 0.5),
            ("writing", 0.5),
        ],
    },
    ThemeEntry {
        name: "plot_twists",
        keywords: &[
            ("twist", 1.0),
            ("unexpected", 0.8),
            ("reveal", 0.8),
            ("shocking", 0.8),
            ("surprise", 0.5),
        ],
    },
    ThemeEntry {
        name: "emotional_depth",
        keywords: &[
            ("emotional", 1.0),
            ("touching", 0.8),
            ("moving", 0.8),
            ("poignant", 0.8),
            ("feeling", 0.5),
            ("heart", 0.5),
        ],
    },
    ThemeEntry {
        name: "philosophy",
        keywords: &[
            ("philosophy", 1.0),
            ("philosophical", 1.0),
            ("existential", 0.8),
            ("meaning", 0.5),
            ("thought", 0.5),
        ],
    },
    ThemeEntry {
        name: "exploration",
        keywords: &[
            ("exploration", 1.0),
            ("explore", 0.8),
            ("discovery", 0.8),
            ("adventure", 0.8),
            ("freedom", 0.5),
            ("open", 0.5),
        ],
    },
    ThemeEntry {
        name: "mystery",
        keywords: &[
            ("mystery", 1.0),
            ("mysterious", 1.0),
            ("suspense", 0.8),
            ("intrigue", 0.8),
            ("puzzle", 0.5),
            ("enigma", 0.5),
        ],
    },
    ThemeEntry {
        name: "humor",
        keywords: &[
            ("humor", 1.0),
            ("funny", 0.8),
            ("comedy", 0.8),
            ("hilarious", 0.8),
            ("laugh", 0.5),
            ("witty", 0.5),
        ],
    },
    ThemeEntry {
        name: "visual_effects",
        keywords: &[
            ("visual", 1.0),
            ("graphics", 0.8),
            ("cinematography", 0.8),
            ("effects", 0.5),
            ("beautiful", 0.5),
            ("stunning", 0.5),
        ],
    },
    ThemeEntry {
        name: "pacing",
        keywords: &[
            ("pacing", 1.0),
            ("pace", 0.8),
            ("rhythm", 0.5),
            ("tempo", 0.5),
            ("slow", 0.5),
            ("fast", 0.5),
        ],
    },
    ThemeEntry {
        name: "dialogue",
        keywords: &[
            ("dialogue", 1.0),
            ("conversation", 0.8),
            ("script", 0.8),
            ("lines", 0.5),
        ],
    },
    ThemeEntry {
        name: "atmosphere",
        keywords: &[
            ("atmosphere", 1.0),
            ("mood", 0.8),
            ("tone", 0.8),
            ("ambiance", 0.8),
            ("vibe", 0.5),
        ],
    },
    ThemeEntry {
        name: "innovation",
        keywords: &[
            ("innovative", 1.0),
            ("original", 0.8),
            ("unique", 0.8),
            ("fresh", 0.5),
            ("creative", 0.5),
        ],
    },
    ThemeEntry {
        name: "nostalgia",
        keywords: &[
            ("nostalgia", 1.0),
            ("nostalgic", 1.0),
            ("retro", 0.8),
            ("throwback", 0.8),
            ("classic", 0.5),
            ("reminds", 0.5),
        ],
    },
    ThemeEntry {
        name: "action",
        keywords: &[
            ("action", 1.0),
            ("combat", 0.8),
            ("fight", 0.8),
            ("battle", 0.8),
            ("intense", 0.5),
            ("adrenaline", 0.5),
        ],
    },
    ThemeEntry {
        name: "romance",
        keywords: &[
            ("romance", 1.0),
            ("romantic", 1.0),
            ("relationship", 0.8),
            ("chemistry", 0.8),
            ("love", 0.5),
        ],
    },
    ThemeEntry {
        name: "horror",
        keywords: &[
            ("horror", 1.0),
            ("scary", 0.8),
            ("frightening", 0.8),
            ("terror", 0.8),
            ("creepy", 0.5),
            ("disturbing", 0.5),
        ],
    },
    ThemeEntry {
        name: "drama",
        keywords: &[
            ("drama", 1.0),
            ("dramatic", 1.0),
            ("tension", 0.8),
            ("conflict", 0.5),
            ("serious", 0.5),
        ],
    },
];

static VOCABULARY: ThemeVocabulary = ThemeVocabulary { entries: &ENTRIES };

impl ThemeVocabulary {
    /// The process-wide registry. Never rebuilt per request.
    pub fn global() -> &'static ThemeVocabulary {
        &VOCABULARY
    }

    pub fn entries(&self) -> &'static [ThemeEntry] {
        self.entries
    }

    pub fn theme_count(&self) -> usize {
        self.entries.len()
    }

    /// All (term, weight) pairs across every theme, in registry order.
    pub fn all_keywords(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.entries.iter().flat_map(|e| e.keywords.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_twenty_themes() {
        assert_eq!(ThemeVocabulary::global().theme_count(), 20);
    }

    #[test]
    fn theme_names_are_unique() {
        let vocab = ThemeVocabulary::global();
        let mut names: Vec<&str> = vocab.entries().iter().map(|e| e.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 20);
    }

    #[test]
    fn every_theme_has_keywords_with_positive_weights() {
        for entry in ThemeVocabulary::global().entries() {
            assert!(!entry.keywords.is_empty(), "{} has no keywords", entry.name);
            for (term, weight) in entry.keywords {
                assert!(*weight > 0.0, "{term} has non-positive weight");
                assert_eq!(*term, term.to_lowercase(), "{term} is not lowercase");
            }
        }
    }

    #[test]
    fn anchor_keyword_carries_full_weight() {
        for entry in ThemeVocabulary::global().entries() {
            assert_eq!(
                entry.keywords[0].1, 1.0,
                "{} anchor keyword is not weighted 1.0",
                entry.name
            );
        }
    }
}
