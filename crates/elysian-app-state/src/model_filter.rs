use serde::{Deserialize, Serialize};

use crate::catalog::{MODELS, Model};

pub const ALL_OPTION: &str = "All";

/// Total inches for a `5'11"` style height. Anything unparseable is 0.
#[must_use]
pub fn parse_height(raw: &str) -> u32 {
    let cleaned = raw.replacen('"', "", 1);
    let mut parts = cleaned.split('\'');
    let (Some(feet), Some(inches), None) = (parts.next(), parts.next(), parts.next()) else {
        return 0;
    };
    match (leading_integer(feet), leading_integer(inches)) {
        (Some(feet), Some(inches)) => feet * 12 + inches,
        _ => 0,
    }
}

fn leading_integer(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let end = trimmed
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeightRange {
    #[default]
    All,
    FiveEightToFiveTen,
    FiveElevenToSixOne,
    SixTwoAndUp,
}

impl HeightRange {
    pub const ALL: [HeightRange; 4] = [
        HeightRange::All,
        HeightRange::FiveEightToFiveTen,
        HeightRange::FiveElevenToSixOne,
        HeightRange::SixTwoAndUp,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Heights",
            Self::FiveEightToFiveTen => "5'8\" - 5'10\"",
            Self::FiveElevenToSixOne => "5'11\" - 6'1\"",
            Self::SixTwoAndUp => "6'2\"+",
        }
    }

    /// Inclusive bounds in inches.
    #[must_use]
    pub fn bounds(self) -> (u32, u32) {
        match self {
            Self::All => (0, 100),
            Self::FiveEightToFiveTen => (68, 70),
            Self::FiveElevenToSixOne => (71, 73),
            Self::SixTwoAndUp => (74, 100),
        }
    }

    #[must_use]
    pub fn contains(self, inches: u32) -> bool {
        if self == Self::All {
            return true;
        }
        let (low, high) = self.bounds();
        (low..=high).contains(&inches)
    }

    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        if label == ALL_OPTION {
            return Some(Self::All);
        }
        Self::ALL.into_iter().find(|range| range.label() == label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelFilter {
    pub search: String,
    pub height: HeightRange,
    pub hair: String,
    pub eyes: String,
}

impl Default for ModelFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            height: HeightRange::All,
            hair: ALL_OPTION.to_string(),
            eyes: ALL_OPTION.to_string(),
        }
    }
}

impl ModelFilter {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    #[must_use]
    pub fn matches(&self, model: &Model) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || model.name.to_lowercase().contains(&needle)
            || model
                .specialties
                .iter()
                .any(|specialty| specialty.to_lowercase().contains(&needle));
        let matches_hair = self.hair == ALL_OPTION || self.hair == model.stats.hair;
        let matches_eyes = self.eyes == ALL_OPTION || self.eyes == model.stats.eyes;

        matches_search
            && matches_hair
            && matches_eyes
            && self.height.contains(parse_height(model.stats.height))
    }

    pub fn apply<'a>(&'a self, models: &'a [Model]) -> impl Iterator<Item = &'a Model> + 'a {
        models.iter().filter(move |model| self.matches(model))
    }
}

/// `All` followed by each distinct value in roster order.
fn distinct_options(pick: impl Fn(&Model) -> &'static str) -> Vec<&'static str> {
    let mut options = vec![ALL_OPTION];
    for model in &MODELS {
        let value = pick(model);
        if !options.contains(&value) {
            options.push(value);
        }
    }
    options
}

#[must_use]
pub fn hair_color_options() -> Vec<&'static str> {
    distinct_options(|model| model.stats.hair)
}

#[must_use]
pub fn eye_color_options() -> Vec<&'static str> {
    distinct_options(|model| model.stats.eyes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(filter: &ModelFilter) -> Vec<&'static str> {
        filter.apply(&MODELS).map(|model| model.name).collect()
    }

    #[test]
    fn heights_parse_to_inches() {
        assert_eq!(parse_height("5'11\""), 71);
        assert_eq!(parse_height("6'0\""), 72);
        assert_eq!(parse_height("6'"), 0);
        assert_eq!(parse_height("tall"), 0);
        assert_eq!(parse_height("6'2'1"), 0);
    }

    #[test]
    fn search_covers_names_and_specialties() {
        let filter = ModelFilter {
            search: "RUNWAY".to_string(),
            ..ModelFilter::default()
        };
        assert_eq!(
            names(&filter),
            vec!["Anya Petrova", "Freja Nielsen", "Liam Murphy", "Saskia van der Berg"]
        );

        let filter = ModelFilter {
            search: "kim".to_string(),
            ..ModelFilter::default()
        };
        assert_eq!(names(&filter), vec!["Chloe Kim"]);
    }

    #[test]
    fn height_ranges_are_inclusive() {
        let filter = ModelFilter {
            height: HeightRange::SixTwoAndUp,
            ..ModelFilter::default()
        };
        assert_eq!(names(&filter), vec!["Leo Chen", "Liam Murphy"]);
        assert!(HeightRange::FiveEightToFiveTen.contains(68));
        assert!(HeightRange::FiveEightToFiveTen.contains(70));
        assert!(!HeightRange::FiveEightToFiveTen.contains(71));
    }

    #[test]
    fn filters_combine() {
        let filter = ModelFilter {
            search: String::new(),
            height: HeightRange::FiveElevenToSixOne,
            hair: "Red".to_string(),
            eyes: "Blue".to_string(),
        };
        assert_eq!(names(&filter), vec!["Saskia van der Berg"]);
    }

    #[test]
    fn reset_restores_the_full_roster() {
        let mut filter = ModelFilter {
            search: "nobody".to_string(),
            ..ModelFilter::default()
        };
        assert!(names(&filter).is_empty());
        filter.reset();
        assert!(filter.is_default());
        assert_eq!(names(&filter).len(), MODELS.len());
    }

    #[test]
    fn options_keep_roster_order() {
        assert_eq!(hair_color_options(), vec!["All", "Blonde", "Black", "Brown", "Red", "Brunette"]);
        assert_eq!(eye_color_options(), vec!["All", "Blue", "Brown", "Green", "Hazel"]);
    }

    #[test]
    fn height_labels_parse_back() {
        for range in HeightRange::ALL {
            assert_eq!(HeightRange::parse(range.label()), Some(range));
        }
        assert_eq!(HeightRange::parse("All"), Some(HeightRange::All));
    }
}
