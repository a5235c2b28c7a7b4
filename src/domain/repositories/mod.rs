pub mod payment_provider;
pub mod plans;
