mod estimate;
mod estimator;
pub mod policy;
mod request;

pub use estimate::{BREAKDOWN_FIELDS, PriceBreakdown, PriceEstimate, SCHEMA_NAME};
pub use estimator::PriceEstimator;
pub use request::{MISSING_FIELD, PricingRequest};
