use crate::core::rules;
use crate::domain::model::{
    EnvironmentReading, RecommendationSource, SafetyAssessment, SafetyStatus,
    SpeciesRecommendation,
};
use crate::domain::ports::HarvestPredictor;

/// Minimum confidence at which an ML recommendation is trusted over the
/// rule table.
const ML_ACCEPT_CONFIDENCE: f64 = 0.3;

/// Confidence ceiling applied under Unsafe conditions, regardless of source.
const UNSAFE_CONFIDENCE_CAP: f64 = 0.4;

/// Pick a species for the given environment.
///
/// Tries the ML collaborator first; any failure (timeout, transport error,
/// malformed response, low confidence, empty species) takes the single rule
/// fallback branch. The fallback is total, so this never fails.
pub async fn recommend_species(
    predictor: &dyn HarvestPredictor,
    env: &EnvironmentReading,
    safety: &SafetyAssessment,
) -> SpeciesRecommendation {
    let mut recommendation = match predictor.recommend(env).await {
        Ok(ml) if !ml.species.trim().is_empty() && ml.confidence >= ML_ACCEPT_CONFIDENCE => {
            SpeciesRecommendation {
                species: ml.species,
                confidence: ml.confidence,
                source: RecommendationSource::Ml,
                reason: format!("Model prediction for {} in {}.", env.region, env.month),
            }
        }
        Ok(ml) => {
            tracing::debug!(
                species = %ml.species,
                confidence = ml.confidence,
                "ML recommendation below acceptance threshold, using rule table"
            );
            rules::lookup_species(&env.region, &env.month)
        }
        Err(e) => {
            tracing::warn!(error = %e, "ML collaborator unavailable, using rule table");
            rules::lookup_species(&env.region, &env.month)
        }
    };

    if safety.status == SafetyStatus::Unsafe {
        recommendation.confidence = recommendation.confidence.min(UNSAFE_CONFIDENCE_CAP);
    }

    recommendation
}

/// Three-tier sustainability mapping. Discrete by design.
pub fn sustainability_score(recommendation: &SpeciesRecommendation, safety: &SafetyAssessment) -> i64 {
    if safety.status == SafetyStatus::Unsafe {
        55
    } else if recommendation.confidence > 0.6 {
        85
    } else {
        75
    }
}

pub fn market_signal(recommendation: &SpeciesRecommendation) -> &'static str {
    if recommendation.confidence > 0.6 {
        "Bullish"
    } else {
        "Stable"
    }
}

/// Caution maps to "Delay fishing", same as Unsafe. That matches the
/// upstream behavior this service replaces; pinned by a test below pending
/// product clarification.
pub fn recommended_action(safety: &SafetyAssessment) -> &'static str {
    if safety.status == SafetyStatus::Safe {
        "Go fishing"
    } else {
        "Delay fishing"
    }
}
