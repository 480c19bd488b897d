use serde::{Deserialize, Serialize};

/// Dealership economics applied when turning a retail value into an offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessSettings {
    /// Target profit as a fraction of retail, used when no flat override is set.
    pub profit_margin_rate: f64,
    pub holding_cost_per_day: f64,
    pub holding_days: u32,
    /// Padding applied on top of estimated reconditioning.
    pub safety_buffer_rate: f64,
    /// Buffer used instead when mileage or age raises reconditioning risk.
    pub elevated_buffer_rate: f64,
    pub profit_margin_override: Option<f64>,
    pub reconditioning_override: Option<f64>,
}

impl Default for BusinessSettings {
    fn default() -> Self {
        Self {
            profit_margin_rate: 0.15,
            holding_cost_per_day: 50.0,
            holding_days: 10,
            safety_buffer_rate: 0.10,
            elevated_buffer_rate: 0.15,
            profit_margin_override: None,
            reconditioning_override: None,
        }
    }
}

impl BusinessSettings {
    /// Desk values layered over the store defaults for a single appraisal.
    pub fn with_overrides(&self, overrides: &SettingsOverride) -> Self {
        let mut settings = self.clone();
        if let Some(amount) = overrides.profit_margin_amount {
            settings.profit_margin_override = Some(amount);
        }
        if let Some(amount) = overrides.reconditioning_cost {
            settings.reconditioning_override = Some(amount);
        }
        if let Some(per_day) = overrides.holding_cost_per_day {
            settings.holding_cost_per_day = per_day;
        }
        if let Some(days) = overrides.holding_days {
            settings.holding_days = days;
        }
        settings
    }
}

/// Per-request knobs the appraiser can set on the form. Absent fields keep
/// the store defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsOverride {
    #[serde(default)]
    pub profit_margin_amount: Option<f64>,
    #[serde(default)]
    pub reconditioning_cost: Option<f64>,
    #[serde(default)]
    pub holding_cost_per_day: Option<f64>,
    #[serde(default)]
    pub holding_days: Option<u32>,
}
