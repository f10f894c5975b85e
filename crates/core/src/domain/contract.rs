use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::customer::CustomerId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContractId(pub i64);

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub id: ContractId,
    pub customer_id: CustomerId,
    pub booked_month: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContract {
    pub customer_id: CustomerId,
    pub booked_month: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ContractsForCustomerQuery {
    pub customer_id: CustomerId,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Contract, ContractId, NewContract};
    use crate::domain::customer::CustomerId;

    #[test]
    fn new_contract_serializes_flat_ids() {
        let body = serde_json::to_value(NewContract { customer_id: CustomerId(6), booked_month: 5 })
            .expect("contract should serialize");

        assert_eq!(body, json!({ "customer_id": 6, "booked_month": 5 }));
    }

    #[test]
    fn contract_decodes_backend_shape() {
        let contract: Contract =
            serde_json::from_value(json!({ "id": 1, "customer_id": 6, "booked_month": 5 }))
                .expect("contract should decode");

        assert_eq!(contract.id, ContractId(1));
        assert_eq!(contract.customer_id, CustomerId(6));
    }
}
