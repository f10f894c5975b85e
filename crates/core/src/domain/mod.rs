pub mod contract;
pub mod customer;
pub mod revenue_segment;
