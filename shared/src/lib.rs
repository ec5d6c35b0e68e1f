pub mod config;
pub mod error;
pub mod gauge;
pub mod prediction;
pub mod risk;
pub mod session;

pub use config::{ClientConfig, ConfigError};
pub use error::{ClientError, FailureCause};
pub use gauge::GaugeGeometry;
pub use prediction::{Candidate, LesionDetails, PredictionResult, RawPrediction};
pub use risk::{classify_risk, RiskLevel};
pub use session::{RequestId, RequestStatus, UploadSession};
