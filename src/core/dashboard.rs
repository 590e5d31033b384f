use crate::core::insights;
use crate::domain::model::{
    DashboardEnvironment, DashboardInsights, DashboardPayload, EnvironmentReading, MarketPoint,
    SafetyAssessment, SafetyStatus, SpeciesRecommendation,
};
use chrono::{Datelike, Duration, Utc};
use rand::Rng;
use serde_json::Value;

const DEFAULT_SALINITY_PSU: f64 = 34.0;
const MISSING_SPECIES: &str = "—";

/// Assemble the dashboard payload from the fused inputs.
pub fn build_dashboard(
    env: &EnvironmentReading,
    recommendation: &SpeciesRecommendation,
    safety: &SafetyAssessment,
    market_trend: Vec<MarketPoint>,
) -> DashboardPayload {
    let alerts = if safety.status == SafetyStatus::Unsafe {
        vec!["Unsafe sea conditions detected".to_string()]
    } else {
        Vec::new()
    };

    DashboardPayload {
        timestamp: Utc::now().timestamp_millis(),
        environment: DashboardEnvironment {
            temperature: env.temperature,
            salinity: env.salinity,
            wave_height: env.wave_height,
        },
        insights: DashboardInsights {
            top_species: recommendation.species.clone(),
            sustainability_score: insights::sustainability_score(recommendation, safety),
        },
        market_trend,
        alerts,
    }
}

/// Coerce arbitrary JSON into a well-typed payload. Last line of defense
/// before a response leaves the server: accepts null, {}, or anything
/// partially populated, never fails, and is idempotent.
pub fn normalize(raw: &Value) -> DashboardPayload {
    let environment = &raw["environment"];
    let insights = &raw["insights"];

    DashboardPayload {
        timestamp: raw["timestamp"]
            .as_i64()
            .unwrap_or_else(|| Utc::now().timestamp_millis()),
        environment: DashboardEnvironment {
            temperature: environment["temperature"].as_f64().unwrap_or(0.0),
            salinity: environment["salinity"].as_f64().unwrap_or(DEFAULT_SALINITY_PSU),
            wave_height: environment["waveHeight"].as_f64().unwrap_or(0.0),
        },
        insights: DashboardInsights {
            top_species: insights["topSpecies"]
                .as_str()
                .unwrap_or(MISSING_SPECIES)
                .to_string(),
            sustainability_score: insights["sustainabilityScore"].as_i64().unwrap_or(0),
        },
        market_trend: raw["marketTrend"]
            .as_array()
            .map(|points| {
                points
                    .iter()
                    .map(|p| MarketPoint {
                        day: p["day"].as_str().unwrap_or("").to_string(),
                        price: p["price"].as_f64().unwrap_or(0.0),
                    })
                    .collect()
            })
            .unwrap_or_default(),
        alerts: raw["alerts"]
            .as_array()
            .map(|alerts| {
                alerts
                    .iter()
                    .filter_map(|a| a.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default(),
    }
}

/// The degraded-but-successful payload served when dashboard assembly fails.
pub fn fallback_payload() -> DashboardPayload {
    normalize(&serde_json::json!({
        "alerts": ["Dashboard running in fallback mode"],
    }))
}

/// Seven days of synthetic price points: base price plus a slow sinusoidal
/// drift and a little jitter, labelled by weekday starting today.
pub fn market_trend(base_price: f64) -> Vec<MarketPoint> {
    let mut rng = rand::thread_rng();
    let today = Utc::now().date_naive();

    (0..7)
        .map(|i| {
            let date = today + Duration::days(i);
            let drift = (i as f64 / 2.0).sin() * 10.0;
            let jitter = rng.gen_range(-3.0..3.0);
            MarketPoint {
                day: date.weekday().to_string(),
                price: ((base_price + drift + jitter) * 100.0).round() / 100.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::safety::classify_safety;
    use crate::domain::model::RecommendationSource;
    use serde_json::json;

    fn sample_env() -> EnvironmentReading {
        EnvironmentReading {
            region: "Chennai Coast".to_string(),
            month: "August".to_string(),
            temperature: 27.4,
            salinity: 34.0,
            wave_height: 0.9,
            wind_speed: 8.0,
        }
    }

    fn sample_recommendation() -> SpeciesRecommendation {
        SpeciesRecommendation {
            species: "Mackerel".to_string(),
            confidence: 0.45,
            source: RecommendationSource::Rules,
            reason: String::new(),
        }
    }

    #[test]
    fn build_fills_every_field() {
        let env = sample_env();
        let safety = classify_safety(env.wave_height);
        let payload = build_dashboard(&env, &sample_recommendation(), &safety, market_trend(120.0));

        assert_eq!(payload.environment.temperature, 27.4);
        assert_eq!(payload.insights.top_species, "Mackerel");
        assert_eq!(payload.insights.sustainability_score, 75);
        assert_eq!(payload.market_trend.len(), 7);
        assert!(payload.alerts.is_empty());
    }

    #[test]
    fn unsafe_conditions_raise_alert_and_drop_score() {
        let mut env = sample_env();
        env.wave_height = 2.5;
        let safety = classify_safety(env.wave_height);
        let payload = build_dashboard(&env, &sample_recommendation(), &safety, Vec::new());

        assert_eq!(payload.insights.sustainability_score, 55);
        assert_eq!(payload.alerts, vec!["Unsafe sea conditions detected"]);
    }

    #[test]
    fn normalize_null_yields_typed_defaults() {
        let payload = normalize(&Value::Null);

        assert!(payload.timestamp > 0);
        assert_eq!(payload.environment.temperature, 0.0);
        assert_eq!(payload.environment.salinity, 34.0);
        assert_eq!(payload.environment.wave_height, 0.0);
        assert_eq!(payload.insights.top_species, "—");
        assert_eq!(payload.insights.sustainability_score, 0);
        assert!(payload.market_trend.is_empty());
        assert!(payload.alerts.is_empty());
    }

    #[test]
    fn normalize_keeps_populated_fields() {
        let raw = json!({
            "timestamp": 1700000000000i64,
            "environment": {"temperature": 26.1, "salinity": 33.2, "waveHeight": 1.1},
            "insights": {"topSpecies": "Pomfret", "sustainabilityScore": 85},
            "marketTrend": [{"day": "Mon", "price": 140.5}],
            "alerts": ["Unsafe sea conditions detected"],
        });
        let payload = normalize(&raw);

        assert_eq!(payload.timestamp, 1700000000000);
        assert_eq!(payload.environment.salinity, 33.2);
        assert_eq!(payload.insights.top_species, "Pomfret");
        assert_eq!(payload.market_trend[0].price, 140.5);
        assert_eq!(payload.alerts.len(), 1);
    }

    #[test]
    fn normalize_rejects_wrongly_typed_fields() {
        let raw = json!({
            "timestamp": "yesterday",
            "environment": {"temperature": "warm"},
            "insights": {"topSpecies": 7},
            "marketTrend": "up",
            "alerts": 3,
        });
        let payload = normalize(&raw);

        assert_eq!(payload.environment.temperature, 0.0);
        assert_eq!(payload.insights.top_species, "—");
        assert!(payload.market_trend.is_empty());
        assert!(payload.alerts.is_empty());
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in [
            Value::Null,
            json!({}),
            json!({
                "timestamp": 1700000000000i64,
                "environment": {"temperature": 26.1, "salinity": 33.2, "waveHeight": 1.1},
                "insights": {"topSpecies": "Pomfret", "sustainabilityScore": 85},
                "marketTrend": [{"day": "Mon", "price": 140.5}],
                "alerts": [],
            }),
        ] {
            let once = normalize(&raw);
            let twice = normalize(&serde_json::to_value(&once).unwrap());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn fallback_payload_carries_fallback_alert() {
        let payload = fallback_payload();
        assert_eq!(payload.alerts, vec!["Dashboard running in fallback mode"]);
        assert_eq!(payload.insights.top_species, "—");
    }

    #[test]
    fn market_trend_has_seven_bounded_points() {
        let trend = market_trend(120.0);
        assert_eq!(trend.len(), 7);
        for point in &trend {
            assert!(!point.day.is_empty());
            assert!((point.price - 120.0).abs() <= 13.0 + f64::EPSILON);
        }
    }
}
