//! Prompt builders for conversion and chat.

use converter_types::session::{ConversionRequest, SessionState};

pub const CONVERSION_SYSTEM_PROMPT: &str = "You are a code conversion expert. \
Convert code between programming languages accurately and return only the converted code \
without explanations. Do not wrap the code in markdown fences.";

/// Characters of the current document embedded in the chat system prompt.
pub const CODE_EXCERPT_CHARS: usize = 500;

pub fn conversion_prompt(req: &ConversionRequest) -> String {
    format!(
        "Convert the following {} code to {}. \n\
         Only return the converted code without explanations or formatting markers:\n\n{}",
        req.from_language, req.to_language, req.source_code
    )
}

/// First `budget` characters of `code`, with `...` appended when cut.
/// The cut ignores token and line boundaries.
pub fn code_excerpt(code: &str, budget: usize) -> String {
    match code.char_indices().nth(budget) {
        Some((end, _)) => format!("{}...", &code[..end]),
        None => code.to_string(),
    }
}

pub fn chat_system_prompt(state: &SessionState) -> String {
    let code = if state.code().is_empty() {
        "No code provided".to_string()
    } else {
        code_excerpt(state.code(), CODE_EXCERPT_CHARS)
    };

    format!(
        "You are a helpful coding assistant specialized in code conversion and programming help.

Current context:
- User's current code language: {}
- Target conversion language: {}
- Current code: {}

You can help with:
1. Explaining code concepts
2. Suggesting code improvements
3. Helping with conversion issues
4. Answering programming questions
5. Code optimization tips
6. Debugging help

Keep responses concise but helpful.",
        state.current_language(),
        state.target_language(),
        code
    )
}
