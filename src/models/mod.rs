// Screening domain models

pub mod disease;
pub mod health_profile;
pub mod model_metrics;
pub mod risk_report;
pub mod validation;
pub mod vitals;

pub use disease::*;
pub use health_profile::*;
pub use model_metrics::*;
pub use risk_report::*;
pub use validation::*;
pub use vitals::*;
