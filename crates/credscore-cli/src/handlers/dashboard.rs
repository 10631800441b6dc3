//! Dashboard Handler for TUI
//!
//! This module implements the Handler (Controller) that:
//! - Owns state (the `Dashboard` state machine and its load channel)
//! - Reacts to renderer signals (search, reload, quit)
//! - Calls Presenter to build ViewModels
//! - Sends ViewModels to Renderer via channel

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use credscore_runtime::{Dashboard, LoadCompleted, ScoreSource, UiConfig};

use crate::presentation::presenters::build_screen_view_model;
use crate::presentation::renderers::{RendererSignal, TuiEvent, TuiRenderer};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

struct DashboardHandler {
    dashboard: Dashboard,
    loads: Receiver<LoadCompleted>,
    ui: UiConfig,
    /// Sender to TUI renderer
    tx: Sender<TuiEvent>,
}

impl DashboardHandler {
    fn new(
        source: Arc<dyn ScoreSource>,
        default_query: String,
        ui: UiConfig,
        tx: Sender<TuiEvent>,
    ) -> Self {
        let (dashboard, loads) = Dashboard::start(source, default_query);
        Self {
            dashboard,
            loads,
            ui,
            tx,
        }
    }

    /// Send updated ViewModel to renderer
    fn send_update(&self) {
        let screen_vm = build_screen_view_model(
            self.dashboard.state(),
            self.dashboard.active_query(),
            self.dashboard.source_name(),
            &self.ui,
        );

        // Renderer may already have quit
        let _ = self.tx.send(TuiEvent::Update(Box::new(screen_vm)));
    }

    /// Returns false when the handler should stop
    fn handle_signal(&mut self, signal: RendererSignal) -> bool {
        match signal {
            RendererSignal::Search(query) => {
                if self.dashboard.search(query) {
                    self.send_update();
                }
                true
            }
            RendererSignal::Reload => {
                self.dashboard.reload();
                self.send_update();
                true
            }
            RendererSignal::Quit => false,
        }
    }

    fn handle_completed(&mut self, completed: LoadCompleted) {
        if self.dashboard.apply(completed) {
            self.send_update();
        }
    }
}

/// Main entry point for the interactive dashboard
pub fn handle(source: Arc<dyn ScoreSource>, default_query: String, ui: UiConfig) -> Result<()> {
    // Create channels for bidirectional communication
    let (event_tx, event_rx) = mpsc::channel(); // Handler -> Renderer (events)
    let (signal_tx, signal_rx) = mpsc::channel(); // Renderer -> Handler (signals)

    let initial_input = default_query.clone();
    let tui_handle = thread::spawn(move || {
        let renderer = TuiRenderer::new(initial_input).with_signal_sender(signal_tx);
        renderer.run(event_rx)
    });

    // Run handler in main thread
    let result = run_handler(source, default_query, ui, event_tx, signal_rx);

    match tui_handle.join() {
        Ok(render_result) => render_result?,
        Err(e) => eprintln!("TUI thread panicked: {:?}", e),
    }

    result
}

fn run_handler(
    source: Arc<dyn ScoreSource>,
    default_query: String,
    ui: UiConfig,
    tx: Sender<TuiEvent>,
    signal_rx: Receiver<RendererSignal>,
) -> Result<()> {
    tracing::info!(query = %default_query, source = source.name(), "dashboard started");

    let mut handler = DashboardHandler::new(source, default_query, ui, tx);
    handler.send_update();

    loop {
        // Drain renderer signals (non-blocking)
        loop {
            match signal_rx.try_recv() {
                Ok(signal) => {
                    if !handler.handle_signal(signal) {
                        tracing::info!("dashboard closed by user");
                        return Ok(());
                    }
                }
                Err(TryRecvError::Empty) => break,
                // Renderer exited without a quit signal
                Err(TryRecvError::Disconnected) => return Ok(()),
            }
        }

        match handler.loads.recv_timeout(POLL_INTERVAL) {
            Ok(completed) => handler.handle_completed(completed),
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => return Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{BodyViewModel, ScreenViewModel};
    use credscore_runtime::MockScoreSource;

    const WAIT: Duration = Duration::from_secs(5);

    fn next_screen(rx: &Receiver<TuiEvent>) -> ScreenViewModel {
        let TuiEvent::Update(vm) = rx.recv_timeout(WAIT).unwrap();
        *vm
    }

    fn handler_with_delay(delay_ms: u64) -> (DashboardHandler, Receiver<TuiEvent>) {
        let (tx, rx) = mpsc::channel();
        let source = Arc::new(MockScoreSource::new(Duration::from_millis(delay_ms)));
        let handler = DashboardHandler::new(source, "Alpha Corp".to_string(), UiConfig::default(), tx);
        (handler, rx)
    }

    fn pump_load(handler: &mut DashboardHandler) {
        let completed = handler.loads.recv_timeout(WAIT).unwrap();
        handler.handle_completed(completed);
    }

    #[test]
    fn test_search_sends_loading_then_report() {
        let (mut handler, rx) = handler_with_delay(0);
        pump_load(&mut handler);
        assert!(matches!(next_screen(&rx).body, BodyViewModel::Report(_)));

        assert!(handler.handle_signal(RendererSignal::Search("Beta".to_string())));
        let loading = next_screen(&rx);
        assert!(matches!(loading.body, BodyViewModel::Loading { .. }));
        assert_eq!(loading.status_bar.active_query, "Beta");

        pump_load(&mut handler);
        match next_screen(&rx).body {
            BodyViewModel::Report(report) => {
                assert_eq!(report.score_card.subject_name, "Beta");
                assert_eq!(report.score_card.score, 750);
            }
            other => panic!("expected report, got {:?}", other),
        }
    }

    #[test]
    fn test_unchanged_search_sends_nothing() {
        let (mut handler, rx) = handler_with_delay(0);
        pump_load(&mut handler);
        next_screen(&rx);

        assert!(handler.handle_signal(RendererSignal::Search("Alpha Corp".to_string())));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_quit_stops_handler() {
        let (mut handler, _rx) = handler_with_delay(0);
        assert!(!handler.handle_signal(RendererSignal::Quit));
    }

    #[test]
    fn test_stale_completion_sends_no_update() {
        let (mut handler, rx) = handler_with_delay(30);

        handler.handle_signal(RendererSignal::Search("A".to_string()));
        handler.handle_signal(RendererSignal::Search("B".to_string()));
        assert!(matches!(next_screen(&rx).body, BodyViewModel::Loading { .. }));
        assert!(matches!(next_screen(&rx).body, BodyViewModel::Loading { .. }));

        // Initial load, "A" and "B" all complete; only "B" reaches the screen
        for _ in 0..3 {
            pump_load(&mut handler);
        }

        match next_screen(&rx).body {
            BodyViewModel::Report(report) => assert_eq!(report.score_card.subject_name, "B"),
            other => panic!("expected report, got {:?}", other),
        }
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_run_handler_exits_on_quit() {
        let (tx, rx) = mpsc::channel();
        let (signal_tx, signal_rx) = mpsc::channel();
        signal_tx.send(RendererSignal::Quit).unwrap();

        let source = Arc::new(MockScoreSource::new(Duration::ZERO));
        run_handler(source, "Alpha Corp".to_string(), UiConfig::default(), tx, signal_rx).unwrap();

        // Initial screen is always sent before any signal is read
        assert!(matches!(next_screen(&rx).body, BodyViewModel::Loading { .. }));
    }
}
