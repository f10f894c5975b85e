pub mod config;
pub mod domain;
pub mod errors;

pub use domain::contract::{Contract, ContractId, ContractsForCustomerQuery, NewContract};
pub use domain::customer::{Customer, CustomerId, CustomerIdQuery, CustomerNameQuery, NewCustomer};
pub use domain::revenue_segment::{
    NewRevenueSegment, RevenueSegment, RevenueSegmentId, SegmentsForContractQuery,
};
pub use errors::{ApplicationError, InterfaceError};
