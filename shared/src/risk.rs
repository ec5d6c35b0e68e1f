use strum_macros::{Display, EnumIter};

/// Coarse severity tag derived from the service's free-text risk level.
/// The lowercase name doubles as the CSS modifier class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum RiskLevel {
    High,
    Moderate,
    Low,
    Unknown,
}

/// "high" wins over "moderate"; any other present value counts as low.
pub fn classify_risk(level: Option<&str>) -> RiskLevel {
    match level {
        None => RiskLevel::Unknown,
        Some(level) => {
            let level = level.to_lowercase();
            if level.contains("high") {
                RiskLevel::High
            } else if level.contains("moderate") {
                RiskLevel::Moderate
            } else {
                RiskLevel::Low
            }
        }
    }
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::High => "High risk",
            RiskLevel::Moderate => "Moderate risk",
            RiskLevel::Low => "Low risk",
            RiskLevel::Unknown => "Risk unknown",
        }
    }
}
