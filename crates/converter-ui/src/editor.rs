//! egui-backed editor widget for [`EditorSync`](converter_core::editor_sync::EditorSync).
//!
//! egui has no retained widget, so the "widget" is the buffer the
//! `TextEdit` edits in place. Each created buffer gets a fresh id, which
//! keys the egui widget state so cursor and undo history do not leak
//! across a language change.

use converter_core::ports::{EditorHost, EditorWidget};
use converter_types::language::SyntaxMode;

pub struct CodeBuffer {
    id: u64,
    text: String,
    mode: SyntaxMode,
}

impl CodeBuffer {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Direct access for the `TextEdit`. Report edits back with
    /// `EditorSync::on_widget_changed`.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }
}

impl EditorWidget for CodeBuffer {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn replace_all(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    fn mode(&self) -> SyntaxMode {
        self.mode
    }
}

#[derive(Debug, Default)]
pub struct EguiEditorHost {
    next_id: u64,
    live: usize,
}

impl EguiEditorHost {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EditorHost for EguiEditorHost {
    type Widget = CodeBuffer;

    fn create(&mut self, doc: &str, mode: SyntaxMode) -> CodeBuffer {
        self.next_id += 1;
        self.live += 1;
        log::debug!("Editor buffer {} created in {} mode, {} live", self.next_id, mode.label(), self.live);
        CodeBuffer {
            id: self.next_id,
            text: doc.to_string(),
            mode,
        }
    }

    fn destroy(&mut self, widget: CodeBuffer) {
        self.live = self.live.saturating_sub(1);
        log::debug!("Editor buffer {} destroyed, {} live", widget.id, self.live);
    }
}
