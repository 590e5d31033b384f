use serde::{Deserialize, Serialize};

/// What the weather collaborator reports. Salinity and wave height are
/// simulated by the adapter until marine sensors exist upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeaConditions {
    pub temperature: f64,
    pub salinity: f64,
    pub wave_height: f64,
    pub wind_speed: f64,
}

/// Per-request snapshot of sea conditions plus where and when they apply.
/// Produced from the weather collaborator (or defaulted), consumed once,
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentReading {
    pub region: String,
    pub month: String,
    pub temperature: f64,
    pub salinity: f64,
    pub wave_height: f64,
    pub wind_speed: f64,
}

impl EnvironmentReading {
    pub fn from_conditions(region: &str, month: &str, conditions: &SeaConditions) -> Self {
        Self {
            region: region.to_string(),
            month: month.to_string(),
            temperature: conditions.temperature,
            salinity: conditions.salinity,
            wave_height: conditions.wave_height,
            wind_speed: conditions.wind_speed,
        }
    }

    /// Dissolved oxygen estimate in mg/L. Warmer water holds less oxygen;
    /// the prediction service expects this as a model feature.
    pub fn oxygen_estimate(&self) -> f64 {
        (8.0 - 0.1 * (self.temperature - 20.0)).clamp(4.0, 9.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SafetyStatus {
    Safe,
    Caution,
    Unsafe,
}

impl SafetyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyStatus::Safe => "Safe",
            SafetyStatus::Caution => "Caution",
            SafetyStatus::Unsafe => "Unsafe",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyAssessment {
    pub status: SafetyStatus,
    pub advice: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationSource {
    Ml,
    Rules,
}

/// Species pick with provenance. Exactly one of the two paths (ML or rule
/// fallback) produces it, never both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesRecommendation {
    pub species: String,
    pub confidence: f64,
    pub source: RecommendationSource,
    pub reason: String,
}

/// Raw recommendation as returned by the prediction service, before the
/// acceptance rule is applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MlRecommendation {
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketPoint {
    pub day: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardEnvironment {
    pub temperature: f64,
    pub salinity: f64,
    #[serde(rename = "waveHeight")]
    pub wave_height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardInsights {
    #[serde(rename = "topSpecies")]
    pub top_species: String,
    #[serde(rename = "sustainabilityScore")]
    pub sustainability_score: i64,
}

/// The externally-visible aggregate returned to the client. Every field has
/// a type-correct default even when upstream data is entirely absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardPayload {
    pub timestamp: i64,
    pub environment: DashboardEnvironment,
    pub insights: DashboardInsights,
    #[serde(rename = "marketTrend")]
    pub market_trend: Vec<MarketPoint>,
    pub alerts: Vec<String>,
}
