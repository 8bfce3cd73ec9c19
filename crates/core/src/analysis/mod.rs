//! Analysis module - income forecasting and behavior patterns over the
//! record history.

mod analysis_model;
mod analysis_service;


pub use analysis_model::{
    AlertSeverity, EfficiencyStats, GrowthStats, HourlyPatterns, HourlySlot, IncomeForecast,
    MonthlyStat, SpendingAlert, WeekdayStat,
};
pub use analysis_service::{
    analyze_trend, confidence, daily_income, efficiency, growth_rate, hourly_patterns,
    income_forecast, monthly_patterns, spending_alerts, weekday_patterns,
};
