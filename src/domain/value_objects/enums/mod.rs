pub mod entitlement_types;
