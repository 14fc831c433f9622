mod results;

pub use results::{
    AdjustedCurvePoint, CapitalCurvePoint, ForecastPoint, RiskDistribution, ScenarioResult,
};
