use crate::error::ClientError;
use crate::gauge::percent_from_confidence;
use crate::risk::{classify_risk, RiskLevel};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Treats an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Descriptive metadata some deployments attach to a predicted class.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LesionDetails {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub recommendation: Option<String>,
    #[serde(default)]
    pub warning: Option<String>,
}

impl LesionDetails {
    pub fn risk(&self) -> RiskLevel {
        classify_risk(self.risk_level.as_deref())
    }
}

/// One ranked class from a `top3` list.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub class: String,
    pub confidence: f64,
    pub details: Option<LesionDetails>,
}

impl Candidate {
    pub fn percent(&self) -> u8 {
        percent_from_confidence(self.confidence)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub label: String,
    pub confidence: f64,
    pub extras: Vec<String>,
    pub details: Option<LesionDetails>,
    pub candidates: Vec<Candidate>,
}

/// Confidence as deployments actually send it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawConfidence {
    Number(f64),
    Text(String),
    Other(Value),
}

impl RawConfidence {
    fn coerce(confidence: Option<&RawConfidence>) -> f64 {
        let value = match confidence {
            Some(RawConfidence::Number(n)) => *n,
            Some(RawConfidence::Text(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
            Some(RawConfidence::Other(_)) | None => 0.0,
        };
        if value.is_finite() {
            value.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawCandidate {
    pub class: String,
    #[serde(default)]
    pub confidence: Option<RawConfidence>,
    #[serde(default)]
    pub details: Option<LesionDetails>,
}

/// Server JSON before normalization. Every field is optional because the
/// deployments disagree on names and types.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawPrediction {
    #[serde(default)]
    pub prediction: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub confidence: Option<RawConfidence>,
    #[serde(default)]
    pub extras: Option<Vec<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub top3: Vec<RawCandidate>,
    #[serde(default)]
    pub details: Option<LesionDetails>,
}

impl RawPrediction {
    /// Maps the raw payload into a [`PredictionResult`].
    ///
    /// Precedence:
    /// 1. label: `prediction`, then `label`, then `"Unknown"`
    /// 2. confidence: number or numeric string, anything else is 0, clamped to [0,1]
    /// 3. extras: `extras`, else empty; alternatives stay in `candidates`
    /// 4. details: top-level `details`, else the `top3` entry matching the
    ///    label, else the first `top3` entry
    pub fn normalize(self) -> PredictionResult {
        let label = self
            .prediction
            .or(self.label)
            .unwrap_or_else(|| "Unknown".to_string());
        let confidence = RawConfidence::coerce(self.confidence.as_ref());

        let candidates: Vec<Candidate> = self
            .top3
            .into_iter()
            .map(|c| Candidate {
                confidence: RawConfidence::coerce(c.confidence.as_ref()),
                class: c.class,
                details: c.details,
            })
            .collect();

        let extras = self.extras.unwrap_or_default();

        let details = self.details.or_else(|| {
            candidates
                .iter()
                .find(|c| c.class == label)
                .or_else(|| candidates.first())
                .and_then(|c| c.details.clone())
        });

        PredictionResult {
            label,
            confidence,
            extras,
            details,
            candidates,
        }
    }
}

impl PredictionResult {
    pub fn risk(&self) -> RiskLevel {
        self.details
            .as_ref()
            .map_or(RiskLevel::Unknown, LesionDetails::risk)
    }
}

/// Parses a successful response body.
pub fn parse_prediction(body: &str) -> Result<PredictionResult, ClientError> {
    let raw: RawPrediction =
        serde_json::from_str(body).map_err(|e| ClientError::malformed(e.to_string()))?;
    Ok(raw.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_prediction() {
        let result = parse_prediction(r#"{"prediction":"Eczema","confidence":0.92}"#).unwrap();
        assert_eq!(result.label, "Eczema");
        assert_eq!(result.confidence, 0.92);
        assert!(result.extras.is_empty());
        assert!(result.details.is_none());
        assert!(result.candidates.is_empty());
    }

    #[test]
    fn string_confidence_and_top3_details() {
        let body = r#"{
            "prediction": "Melanoma",
            "confidence": "0.87",
            "top3": [
                {
                    "class": "Melanoma",
                    "confidence": 0.87,
                    "details": {
                        "full_name": "Malignant Melanoma",
                        "risk_level": "High",
                        "symptoms": ["asymmetry", "irregular border"]
                    }
                },
                {"class": "Nevus", "confidence": 0.09},
                {"class": "Eczema", "confidence": "0.04"}
            ]
        }"#;
        let result = parse_prediction(body).unwrap();

        assert_eq!(result.confidence, 0.87);
        let details = result.details.as_ref().unwrap();
        assert_eq!(details.full_name.as_deref(), Some("Malignant Melanoma"));
        assert_eq!(details.symptoms, ["asymmetry", "irregular border"]);
        assert_eq!(details.risk(), RiskLevel::High);
        assert_eq!(result.risk(), RiskLevel::High);
        assert!(result.extras.is_empty());
        assert_eq!(result.candidates.len(), 3);
        assert_eq!(result.candidates[1].class, "Nevus");
        assert_eq!(result.candidates[2].confidence, 0.04);
        assert_eq!(result.candidates[0].percent(), 87);
    }

    #[test]
    fn label_is_used_when_prediction_is_missing() {
        let result = parse_prediction(r#"{"label":"Psoriasis","confidence":0.5}"#).unwrap();
        assert_eq!(result.label, "Psoriasis");

        let result = parse_prediction(r#"{"prediction":"Acne","label":"Other"}"#).unwrap();
        assert_eq!(result.label, "Acne");

        let result = parse_prediction("{}").unwrap();
        assert_eq!(result.label, "Unknown");
    }

    #[test]
    fn non_numeric_confidence_normalizes_to_zero() {
        for body in [
            r#"{"prediction":"A"}"#,
            r#"{"prediction":"A","confidence":null}"#,
            r#"{"prediction":"A","confidence":"high"}"#,
            r#"{"prediction":"A","confidence":true}"#,
            r#"{"prediction":"A","confidence":[0.4]}"#,
        ] {
            assert_eq!(parse_prediction(body).unwrap().confidence, 0.0, "{}", body);
        }
    }

    #[test]
    fn confidence_is_clamped() {
        let result = parse_prediction(r#"{"prediction":"A","confidence":1.7}"#).unwrap();
        assert_eq!(result.confidence, 1.0);
        let result = parse_prediction(r#"{"prediction":"A","confidence":" 0.25 "}"#).unwrap();
        assert_eq!(result.confidence, 0.25);
    }

    #[test]
    fn explicit_extras_win_over_top3() {
        let body = r#"{"prediction":"A","confidence":0.6,"extras":["hair"],
                       "top3":[{"class":"A","confidence":0.6},{"class":"B","confidence":0.3}]}"#;
        assert_eq!(parse_prediction(body).unwrap().extras, ["hair"]);
    }

    #[test]
    fn extras_stay_empty_when_only_top3_is_sent() {
        let body = r#"{"prediction":"Melanoma","confidence":0.87,
                       "top3":[{"class":"Melanoma","confidence":0.87},{"class":"Nevus","confidence":0.1}]}"#;
        let result = parse_prediction(body).unwrap();
        assert!(result.extras.is_empty());
        assert_eq!(result.candidates.len(), 2);
    }

    #[test]
    fn null_lists_are_treated_as_absent() {
        let body = r#"{"prediction":"Eczema","confidence":0.6,"extras":null,
                       "details":{"risk_level":"Low","symptoms":null}}"#;
        let result = parse_prediction(body).unwrap();
        assert!(result.extras.is_empty());
        let details = result.details.as_ref().unwrap();
        assert!(details.symptoms.is_empty());
        assert_eq!(details.risk(), RiskLevel::Low);

        let result = parse_prediction(r#"{"prediction":"Eczema","confidence":0.6,"top3":null}"#).unwrap();
        assert!(result.candidates.is_empty());
        assert!(result.details.is_none());

        let body = r#"{"prediction":"A","top3":[{"class":"A","details":{"symptoms":null}}]}"#;
        let result = parse_prediction(body).unwrap();
        assert!(result.details.unwrap().symptoms.is_empty());
    }

    #[test]
    fn details_fall_back_to_first_candidate() {
        let body = r#"{"prediction":"A","confidence":0.6,
                       "top3":[{"class":"B","confidence":0.3,"details":{"risk_level":"Moderate"}}]}"#;
        let result = parse_prediction(body).unwrap();
        assert_eq!(result.risk(), RiskLevel::Moderate);
        assert!(result.details.unwrap().symptoms.is_empty());
    }

    #[test]
    fn top_level_details_take_precedence() {
        let body = r#"{"label":"A","confidence":0.6,"details":{"warning":"See a doctor"},
                       "top3":[{"class":"A","details":{"risk_level":"High"}}]}"#;
        let result = parse_prediction(body).unwrap();
        assert_eq!(
            result.details.as_ref().unwrap().warning.as_deref(),
            Some("See a doctor")
        );
        assert_eq!(result.risk(), RiskLevel::Unknown);
        assert_eq!(result.candidates[0].confidence, 0.0);
    }

    #[test]
    fn garbage_is_a_malformed_failure() {
        for body in ["<html>oops</html>", "", r#"{"prediction":42}"#] {
            let err = parse_prediction(body).unwrap_err();
            assert!(
                matches!(
                    err,
                    ClientError::RequestFailed(crate::error::FailureCause::Malformed(_))
                ),
                "{}",
                body
            );
            assert_eq!(err.detail(), None);
        }
    }
}
