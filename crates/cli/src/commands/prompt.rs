use revrec_agent::prompt::{few_shot_blocks, BASE_PROMPT};

pub fn run() -> String {
    let blocks = few_shot_blocks();
    format!(
        "base prompt:\n{BASE_PROMPT}\n\nfew-shot dialogues ({}):\n\n{}",
        blocks.len(),
        blocks.join("\n\n")
    )
}
