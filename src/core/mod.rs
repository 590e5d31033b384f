pub mod dashboard;
pub mod insights;
pub mod rules;
pub mod safety;

pub use crate::domain::model::{
    DashboardPayload, EnvironmentReading, MarketPoint, SafetyAssessment, SafetyStatus,
    SeaConditions, SpeciesRecommendation,
};
pub use crate::domain::ports::{ChatProvider, HarvestPredictor, WeatherProvider};
pub use crate::utils::error::Result;
