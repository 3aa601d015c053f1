#[cfg(test)]
mod tests {
    use converter_core::editor_sync::EditorSync;
    use converter_core::ports::EditorWidget;
    use converter_core::workflow::EMPTY_CODE_ALERT;
    use converter_types::error::{BackendError, CHAT_OFFLINE_FALLBACK};
    use converter_types::event::SessionEvent;
    use converter_types::language::{LanguageTag, SyntaxMode};
    use converter_types::message::ChatMessage;
    use converter_types::session::SessionState;

    use crate::editor::EguiEditorHost;
    use crate::panels::chat::display_time;
    use crate::quick_actions::QuickAction;
    use crate::state::*;

    fn finished(outcome: Result<String, BackendError>) -> SessionEvent {
        SessionEvent::ConversionFinished {
            from: LanguageTag::JavaScript,
            to: LanguageTag::Python,
            original_code: "console.log('hi')".to_string(),
            outcome,
        }
    }

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new();
        assert!(state.chat_input.is_empty());
        assert!(state.alert.is_none());
        assert!(state.backend_online.is_none());
        assert_eq!(state.status_text(), STATUS_CONNECTING);
        assert!(!state.is_busy());
        assert_eq!(state.session.current_language(), LanguageTag::JavaScript);
        assert_eq!(state.session.target_language(), LanguageTag::Python);
    }

    #[test]
    fn test_blank_code_raises_alert() {
        let mut session = SessionState::new();
        session.set_code("   \n\t");
        let mut state = UiState::with_session(session);

        assert!(state.request_conversion().is_none());
        assert_eq!(state.alert.as_deref(), Some(EMPTY_CODE_ALERT));
        assert!(!state.session.is_converting());

        state.dismiss_alert();
        assert!(state.alert.is_none());
    }

    #[test]
    fn test_conversion_roundtrip_through_events() {
        let mut state = UiState::new();
        let req = state.request_conversion().unwrap();
        assert_eq!(req.to_language, LanguageTag::Python);
        assert!(state.is_busy());
        assert!(state.request_conversion().is_none());

        let replaced = state.process_events(vec![finished(Ok("print('hi')".to_string()))]);
        assert!(replaced);
        assert_eq!(state.session.code(), "print('hi')");
        assert_eq!(state.session.current_language(), LanguageTag::JavaScript);
        assert!(matches!(
            state.session.history().entries()[0],
            ChatMessage::ConversionSummary { .. }
        ));
        assert!(!state.is_busy());
    }

    #[test]
    fn test_conversion_failure_alerts_and_keeps_code() {
        let mut state = UiState::new();
        let before = state.session.code().to_string();
        state.request_conversion().unwrap();

        let replaced = state.process_events(vec![finished(Err(BackendError::Rejected(
            "Service Unavailable".to_string(),
        )))]);
        assert!(!replaced);
        assert_eq!(state.session.code(), before);
        assert_eq!(state.alert.as_deref(), Some("Conversion failed: Service Unavailable"));
        assert!(state.session.history().is_empty());
    }

    #[test]
    fn test_submit_chat_clears_input_and_forwards_prior_history() {
        let mut state = UiState::new();
        for i in 0..7 {
            state.session.append_history(ChatMessage::user(format!("m{}", i)));
        }
        state.chat_input = "  explain please ".to_string();
        assert!(state.can_send());

        let req = state.submit_chat(5).unwrap();
        assert_eq!(req.message, "explain please");
        assert_eq!(req.chat_history.len(), 5);
        assert_eq!(req.chat_history.entries()[4].text(), Some("m6"));
        assert!(state.chat_input.is_empty());
        assert_eq!(state.session.history().len(), 8);
        assert!(state.session.is_awaiting_reply());

        state.chat_input = "another".to_string();
        assert!(!state.can_send());
        assert!(state.submit_chat(5).is_none());
        assert_eq!(state.chat_input, "another");
    }

    #[test]
    fn test_blank_chat_input_is_ignored() {
        let mut state = UiState::new();
        state.chat_input = "   ".to_string();
        assert!(!state.can_send());
        assert!(state.submit_chat(5).is_none());
        assert!(state.session.history().is_empty());
    }

    #[test]
    fn test_chat_transport_failure_becomes_fallback() {
        let mut state = UiState::new();
        state.chat_input = "hi".to_string();
        state.submit_chat(5).unwrap();

        state.process_events(vec![SessionEvent::ChatReplied {
            outcome: Err(BackendError::Network("offline".to_string())),
        }]);
        let last = state.session.history().entries().last().unwrap();
        assert_eq!(last.text(), Some(CHAT_OFFLINE_FALLBACK));
        assert!(!state.is_busy());
        assert!(state.alert.is_none());
    }

    #[test]
    fn test_health_event_updates_status() {
        let mut state = UiState::new();
        state.process_events(vec![SessionEvent::HealthChecked { online: true }]);
        assert_eq!(state.status_text(), STATUS_ONLINE);
        state.process_events(vec![SessionEvent::HealthChecked { online: false }]);
        assert_eq!(state.status_text(), STATUS_OFFLINE);
    }

    // ─── Quick Actions ───────────────────────────────────────

    #[test]
    fn test_quick_action_fills_input_without_sending() {
        let mut session = SessionState::new();
        session.set_current_language(LanguageTag::Python);
        session.set_target_language(LanguageTag::Rust);
        let mut state = UiState::with_session(session);

        state.apply_quick_action(QuickAction::ConvertTips);
        assert_eq!(
            state.chat_input,
            "What should I know when converting from python to rust?"
        );
        assert!(state.session.history().is_empty());
        assert!(!state.session.is_awaiting_reply());

        state.apply_quick_action(QuickAction::Explain);
        assert_eq!(state.chat_input, "Can you explain what this code does?");
    }

    #[test]
    fn test_quick_action_catalogue() {
        assert_eq!(QuickAction::all().len(), 4);
        let prompt = QuickAction::Debug.prompt(LanguageTag::Go, LanguageTag::Java);
        assert_eq!(prompt, "Help me debug this code. Are there any issues?");
    }

    // ─── Editor widget ───────────────────────────────────────

    #[test]
    fn test_language_change_creates_fresh_buffer() {
        let state = SessionState::new();
        let mut sync = EditorSync::mount(EguiEditorHost::new(), &state);
        let first = sync.widget().unwrap().id();

        let mut state = state;
        state.set_current_language(LanguageTag::Rust);
        assert!(sync.sync_language(&state));
        assert!(!sync.sync_language(&state));
        assert_eq!(sync.widget().unwrap().text(), state.code());
        assert_ne!(sync.widget().unwrap().id(), first);
        assert_eq!(sync.widget().unwrap().mode(), SyntaxMode::JavaScript);

        state.set_current_language(LanguageTag::Python);
        sync.sync_language(&state);
        assert_eq!(sync.widget().unwrap().mode(), SyntaxMode::Python);

        sync.unmount();
        assert!(sync.widget().is_none());
    }

    #[test]
    fn test_typing_does_not_echo_back() {
        let mut state = SessionState::new();
        let mut sync = EditorSync::mount(EguiEditorHost::new(), &state);

        sync.widget_mut().unwrap().text_mut().push_str("\n// edited");
        sync.on_widget_changed(&mut state);
        assert!(state.code().ends_with("// edited"));

        assert!(!sync.sync_down(&state));
        assert_eq!(sync.replace_count(), 0);
    }

    #[test]
    fn test_conversion_result_is_pushed_once() {
        let mut ui = UiState::new();
        let mut sync = EditorSync::mount(EguiEditorHost::new(), &ui.session);
        ui.request_conversion().unwrap();

        if ui.process_events(vec![finished(Ok("print('hi')".to_string()))]) {
            assert!(sync.sync_down(&ui.session));
        }
        assert_eq!(sync.widget().unwrap().text(), "print('hi')");
        assert!(!sync.sync_down(&ui.session));
        assert_eq!(sync.replace_count(), 1);
    }

    // ─── Formatting ──────────────────────────────────────────

    #[test]
    fn test_display_time_passes_through_non_rfc3339() {
        assert_eq!(display_time("10:42:07 AM"), "10:42:07 AM");
        assert_eq!(display_time(""), "");
    }

    #[test]
    fn test_display_time_formats_rfc3339() {
        let shown = display_time("2024-05-01T12:34:56Z");
        assert_eq!(shown.len(), 8);
        assert_eq!(shown.matches(':').count(), 2);
    }
}
