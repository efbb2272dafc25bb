pub mod patient;
pub mod plan;
pub mod soap;
