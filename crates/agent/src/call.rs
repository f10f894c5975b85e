//! The `Ask Func[name]: argument` call syntax used in few-shot transcripts.

use crate::errors::ToolError;

const CALL_PREFIX: &str = "Ask Func[";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FuncCall {
    pub name: String,
    pub argument: String,
}

impl FuncCall {
    pub fn parse(line: &str) -> Result<Self, ToolError> {
        let malformed = || ToolError::MalformedCall(line.trim().to_string());

        let rest = line.trim().strip_prefix(CALL_PREFIX).ok_or_else(malformed)?;
        let (name, rest) = rest.split_once(']').ok_or_else(malformed)?;
        let argument = rest.strip_prefix(':').ok_or_else(malformed)?;

        let name = name.trim();
        let valid_name = !name.is_empty()
            && name.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_');
        if !valid_name {
            return Err(malformed());
        }

        Ok(Self { name: name.to_string(), argument: argument.trim().to_string() })
    }

    pub fn to_line(&self) -> String {
        format!("{CALL_PREFIX}{}]: {}", self.name, self.argument)
    }
}

pub fn render_result(name: &str, result: &str) -> String {
    format!("Func[{name}] says: {result}")
}
