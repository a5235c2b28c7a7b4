pub mod public_pricing;
