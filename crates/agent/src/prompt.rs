//! Base prompt and few-shot dialogues handed to the agent framework.
//!
//! The framework's language model uses these transcripts to decide which
//! registered function to call and how to phrase the reply. Every
//! `Ask Func[...]` line must name a function in the registry.

use crate::call::FuncCall;
use crate::errors::ToolError;
use crate::tools::ToolRegistry;

pub const BASE_PROMPT: &str = "This agent takes input about customers, contracts, revenue recognition policies and invoices and returns rigorous financial statement data.";

pub const FEW_SHOTS: &str = r#"
Q: Add a customer named Meta
Thought: I need to add a customer named Meta and get the ID
Ask Func[addcustomer]: Meta
Func[addcustomer] says: Meta has ID 4
A: Customer Meta was added with ID 4

Q: Let's stuff in a new customer named Alpha
Thought: I need to add a customer named Alpha and get the ID
Ask Func[addcustomer]: Alpha
Func[addcustomer] says: Alpha has ID 5
A: Customer Alpha was added with ID 5

Q: Let's add a contract for customer Alpha in month 5
Thought: I need to find the ID of customer Alpha
Ask Func[getcustomerbyname]: {'name': 'Alpha'}
Func[getcustomerbyname] says: The customer ID is 5
Thought: I need to add a contract for customer Alpha (that has ID 5) with booked month 5 and get the contract ID
Ask Func[addcontract]: {'customer_id': 5, 'booked_month': 5}
Func[addcontract] says: Contract 1 was added for customer Alpha with booked month 5
A: Contract 1 was added for customer Alpha with booked month 5

Q: Who is customer 4?
Thought: I need to look up the name of the customer with ID 4
Ask Func[getcustomerbyid]: {'id': 4}
Func[getcustomerbyid] says: Customer name is Meta
A: Customer 4 is Meta

Q: Which customers do we have?
Thought: I need the list of all customers
Ask Func[getcustomers]: all
Func[getcustomers] says: Meta, Alpha
A: The customers are Meta and Alpha

Q: What contracts does Alpha have?
Thought: Alpha has ID 5, so I need the contracts for customer 5
Ask Func[getcontractsforcustomer]: {'customer_id': 5}
Func[getcontractsforcustomer] says: The contract IDs are 1
A: Alpha has one contract, contract 1

Q: Does Meta have any contracts?
Thought: Meta has ID 4, so I need the contracts for customer 4
Ask Func[getcontractsforcustomer]: {'customer_id': 4}
Func[getcontractsforcustomer] says: No contracts for this customer
A: Meta has no contracts yet

Q: Show me every contract
Thought: I need the full contract list
Ask Func[getcontracts]: all
Func[getcontracts] says: [{"id":1,"customer_id":5,"booked_month":5}]
A: There is one contract: contract 1 for customer 5, booked in month 5

Q: Add a 12000 subscription to contract 1, recognised over 12 months starting a month after booking and invoiced monthly
Thought: I need to add a revenue segment to contract 1 with all of its recognition and invoicing terms
Ask Func[addrevenuesegment]: {'contract_id': 1, 'name': 'Subscription', 'type': 'ratable', 'amount': 12000, 'delay_rev_start_mths': 1, 'delay_inv_from_rev_mths': 0, 'length_rev_mths': 12, 'invoice_schedule': 'monthly'}
Func[addrevenuesegment] says: Revenue segment 1 was added to contract 1
A: A 12000 subscription segment was added to contract 1

Q: What revenue is attached to contract 1?
Thought: I need the revenue segments for contract 1
Ask Func[getrevenuesegmentsforcontract]: {'contract_id': 1}
Func[getrevenuesegmentsforcontract] says: Revenue segments: Subscription
Amounts: 12000
Timelines: Subscription: revenue from month +1 for 12 months, invoiced 0 months after revenue (monthly)
A: Contract 1 has a 12000 subscription recognised over 12 months starting one month after booking, invoiced monthly

Q: List all revenue segments
Thought: I need every revenue segment
Ask Func[getrevenuesegments]: all
Func[getrevenuesegments] says: []
A: There are no revenue segments yet

Q: Refresh the revenue schedule
Thought: I need the backend to rebuild its revenue and invoice dataframe
Ask Func[populatedataframe]: refresh
Func[populatedataframe] says: Dataframe populated
A: The revenue recognition schedule was rebuilt

Q: Wipe everything and start over
Thought: I need to clear the database
Ask Func[cleardatabase]: clear
Func[cleardatabase] says: Database cleared
A: All customers, contracts and revenue segments were deleted
"#;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShotCall {
    pub call: FuncCall,
    pub result: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FewShot {
    pub question: String,
    pub thoughts: Vec<String>,
    pub calls: Vec<ShotCall>,
    pub answer: String,
}

/// Dialogues as separate text blocks, in the order they appear.
pub fn few_shot_blocks() -> Vec<&'static str> {
    FEW_SHOTS.trim().split("\n\n").map(str::trim).filter(|block| !block.is_empty()).collect()
}

pub fn parse_few_shots(text: &str) -> Result<Vec<FewShot>, ToolError> {
    text.trim()
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(parse_block)
        .collect()
}

fn parse_block(block: &str) -> Result<FewShot, ToolError> {
    let mut shot = FewShot::default();
    let mut pending: Option<FuncCall> = None;

    for line in block.lines() {
        if let Some(question) = line.strip_prefix("Q: ") {
            shot.question = question.trim().to_string();
        } else if let Some(thought) = line.strip_prefix("Thought: ") {
            shot.thoughts.push(thought.trim().to_string());
        } else if line.starts_with("Ask Func[") {
            pending = Some(FuncCall::parse(line)?);
        } else if let Some(result) = says_result(line) {
            let call = pending.take().ok_or_else(|| ToolError::MalformedCall(line.to_string()))?;
            shot.calls.push(ShotCall { call, result: result.to_string() });
        } else if let Some(answer) = line.strip_prefix("A: ") {
            shot.answer = answer.trim().to_string();
        } else if let Some(last) = shot.calls.last_mut() {
            // Multi-line function results continue until the next marker.
            last.result.push('\n');
            last.result.push_str(line);
        }
    }

    if let Some(call) = pending {
        return Err(ToolError::MalformedCall(call.to_line()));
    }
    Ok(shot)
}

fn says_result(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("Func[")?;
    let (_, result) = rest.split_once("] says:")?;
    Some(result.trim())
}

/// Names referenced by few-shot calls that the registry does not provide.
pub fn unregistered_functions(shots: &[FewShot], registry: &ToolRegistry) -> Vec<String> {
    let mut missing = Vec::new();
    for shot in shots {
        for shot_call in &shot.calls {
            let name = &shot_call.call.name;
            if !registry.contains(name) && !missing.contains(name) {
                missing.push(name.clone());
            }
        }
    }
    missing
}
