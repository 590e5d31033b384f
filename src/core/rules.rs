use crate::domain::model::{RecommendationSource, SpeciesRecommendation};

struct SeasonalRule {
    region_contains: &'static str,
    months: &'static [&'static str],
    species: &'static str,
    confidence: f64,
    reason: &'static str,
}

// Ordered: first match wins. Region is matched by case-insensitive
// substring, month by exact lowercase name.
const SEASONAL_RULES: &[SeasonalRule] = &[
    SeasonalRule {
        region_contains: "goa",
        months: &["november", "december"],
        species: "Pomfret",
        confidence: 0.42,
        reason: "Pomfret season along the Goa coast in early winter.",
    },
    SeasonalRule {
        region_contains: "chennai",
        months: &["july", "august"],
        species: "Mackerel",
        confidence: 0.45,
        reason: "Mackerel run off Chennai during the monsoon months.",
    },
];

/// Static fallback when the ML collaborator is absent or not trusted.
/// The default branch makes this total: a recommendation always comes back.
pub fn lookup_species(region: &str, month: &str) -> SpeciesRecommendation {
    let region = region.to_lowercase();
    let month = month.to_lowercase();

    for rule in SEASONAL_RULES {
        if region.contains(rule.region_contains) && rule.months.contains(&month.as_str()) {
            return SpeciesRecommendation {
                species: rule.species.to_string(),
                confidence: rule.confidence,
                source: RecommendationSource::Rules,
                reason: rule.reason.to_string(),
            };
        }
    }

    SpeciesRecommendation {
        species: "Sardine".to_string(),
        confidence: 0.35,
        source: RecommendationSource::Rules,
        reason: "Sardine is a year-round staple across Indian coastal waters.".to_string(),
    }
}
