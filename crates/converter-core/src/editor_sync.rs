//! Mirrors `SessionState::code` into an externally owned editor widget.
//!
//! The widget is a scoped resource: it is created on mount, recreated on
//! language change and destroyed before re-creation or when the sync is
//! dropped. Downward pushes are skipped when the widget already shows the
//! state's text, which is what keeps an upward edit from echoing back.

use converter_types::{language::LanguageTag, session::SessionState};

use crate::ports::{EditorHost, EditorWidget};

pub struct EditorSync<H: EditorHost> {
    host: H,
    widget: Option<H::Widget>,
    language: LanguageTag,
    replaces: u64,
}

impl<H: EditorHost> EditorSync<H> {
    /// Create the widget for the session's current document and language.
    pub fn mount(mut host: H, state: &SessionState) -> Self {
        let language = state.current_language();
        let widget = host.create(state.code(), language.syntax_mode());
        log::debug!("Editor mounted in {:?} mode", language.syntax_mode());
        Self {
            host,
            widget: Some(widget),
            language,
            replaces: 0,
        }
    }

    pub fn widget(&self) -> Option<&H::Widget> {
        self.widget.as_ref()
    }

    pub fn widget_mut(&mut self) -> Option<&mut H::Widget> {
        self.widget.as_mut()
    }

    pub fn language(&self) -> LanguageTag {
        self.language
    }

    /// Number of downward replace-all edits issued so far.
    pub fn replace_count(&self) -> u64 {
        self.replaces
    }

    /// Upward: the widget reported a change, copy its text into the state.
    pub fn on_widget_changed(&self, state: &mut SessionState) {
        if let Some(widget) = &self.widget {
            let text = widget.text();
            if text != state.code() {
                state.set_code(text);
            }
        }
    }

    /// Downward: push `state.code` into the widget if it differs.
    /// Returns whether an edit was issued.
    pub fn sync_down(&mut self, state: &SessionState) -> bool {
        let Some(widget) = self.widget.as_mut() else {
            return false;
        };
        if widget.text() == state.code() {
            return false;
        }
        widget.replace_all(state.code());
        self.replaces += 1;
        true
    }

    /// Recreate the widget when the session language changed.
    /// Returns whether a new widget was created.
    pub fn sync_language(&mut self, state: &SessionState) -> bool {
        if self.widget.is_some() && state.current_language() == self.language {
            return false;
        }
        self.remount(state);
        true
    }

    /// Destroy the current widget (if any) and create a fresh one.
    pub fn remount(&mut self, state: &SessionState) {
        self.unmount();
        self.language = state.current_language();
        let mode = self.language.syntax_mode();
        self.widget = Some(self.host.create(state.code(), mode));
        log::debug!("Editor remounted for {} in {:?} mode", self.language, mode);
    }

    pub fn unmount(&mut self) {
        if let Some(widget) = self.widget.take() {
            self.host.destroy(widget);
        }
    }
}

impl<H: EditorHost> Drop for EditorSync<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}
