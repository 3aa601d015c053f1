//! Main egui application: lays out the panels and runs backend calls.

use std::rc::Rc;

use egui::{self, CentralPanel, SidePanel, TopBottomPanel};

use converter_core::editor_sync::EditorSync;
use converter_core::event_bus::EventBus;
use converter_core::ports::BackendPort;
use converter_core::workflow;
use converter_platform::HttpBackend;
use converter_types::api::ChatRequest;
use converter_types::config::ClientConfig;
use converter_types::session::ConversionRequest;
use converter_ui::editor::EguiEditorHost;
use converter_ui::panels::{alert, chat, editor, toolbar};
use converter_ui::state::UiState;
use converter_ui::theme;

pub struct ConverterApp {
    ui_state: UiState,
    config: ClientConfig,
    event_bus: EventBus,
    backend: Rc<dyn BackendPort>,
    editor: EditorSync<EguiEditorHost>,
    first_frame: bool,
}

impl ConverterApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = ClientConfig::default();
        let backend: Rc<dyn BackendPort> = Rc::new(HttpBackend::new(config.clone()));
        let ui_state = UiState::new();
        let editor = EditorSync::mount(EguiEditorHost::new(), &ui_state.session);

        Self {
            ui_state,
            config,
            event_bus: EventBus::new(),
            backend,
            editor,
            first_frame: true,
        }
    }

    fn probe_health(&self, ctx: &egui::Context) {
        let backend = self.backend.clone();
        let bus = self.event_bus.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            workflow::dispatch_health(backend.as_ref(), &bus).await;
            ctx.request_repaint();
        });
    }

    fn dispatch_conversion(&self, req: ConversionRequest, ctx: &egui::Context) {
        log::info!("Converting {} -> {}", req.from_language, req.to_language);
        let backend = self.backend.clone();
        let bus = self.event_bus.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            workflow::dispatch_conversion(backend.as_ref(), &bus, req).await;
            ctx.request_repaint();
        });
    }

    fn dispatch_chat(&self, req: ChatRequest, ctx: &egui::Context) {
        let backend = self.backend.clone();
        let bus = self.event_bus.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            workflow::dispatch_chat(backend.as_ref(), &bus, req).await;
            ctx.request_repaint();
        });
    }
}

impl eframe::App for ConverterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.probe_health(ctx);
            self.first_frame = false;
        }

        let events = self.event_bus.drain();
        if !events.is_empty() {
            if self.ui_state.process_events(events) && self.editor.sync_down(&self.ui_state.session) {
                log::debug!("Editor replaced from state ({} so far)", self.editor.replace_count());
            }
            ctx.request_repaint();
        }

        if self.ui_state.is_busy() {
            ctx.request_repaint();
        }

        // ── Toolbar ──────────────────────────────────────────
        let mut convert_clicked = false;
        TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            convert_clicked = toolbar::toolbar(ui, &mut self.ui_state);
            ui.add_space(4.0);
        });
        self.editor.sync_language(&self.ui_state.session);

        if convert_clicked {
            if let Some(req) = self.ui_state.request_conversion() {
                self.dispatch_conversion(req, ctx);
            }
        }

        // ── Chat side panel ──────────────────────────────────
        let mut chat_request = None;
        SidePanel::right("chat_panel")
            .min_width(320.0)
            .default_width(380.0)
            .show(ctx, |ui| {
                chat_request = chat::chat_panel(ui, &mut self.ui_state, self.config.history_sent);
            });
        if let Some(req) = chat_request {
            self.dispatch_chat(req, ctx);
        }

        // ── Editor ───────────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            editor::editor_panel(ui, &mut self.editor, &mut self.ui_state.session);
        });

        alert::alert_window(ctx, &mut self.ui_state);
    }
}
