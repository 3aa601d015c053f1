use converter_types::language::LanguageTag;

/// Canned prompts offered while the chat is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    Explain,
    Optimize,
    Debug,
    ConvertTips,
}

impl QuickAction {
    pub fn all() -> &'static [QuickAction] {
        &[
            QuickAction::Explain,
            QuickAction::Optimize,
            QuickAction::Debug,
            QuickAction::ConvertTips,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::Explain => "📝 Explain Code",
            QuickAction::Optimize => "⚡ Optimize",
            QuickAction::Debug => "🐛 Debug Help",
            QuickAction::ConvertTips => "🔄 Convert Tips",
        }
    }

    pub fn prompt(&self, current: LanguageTag, target: LanguageTag) -> String {
        match self {
            QuickAction::Explain => "Can you explain what this code does?".to_string(),
            QuickAction::Optimize => "How can I optimize this code?".to_string(),
            QuickAction::Debug => "Help me debug this code. Are there any issues?".to_string(),
            QuickAction::ConvertTips => format!(
                "What should I know when converting from {} to {}?",
                current, target
            ),
        }
    }
}
