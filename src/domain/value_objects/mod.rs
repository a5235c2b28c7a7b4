pub mod enums;
pub mod plans;
pub mod products;
