//! TUI Renderer for the dashboard
//!
//! Receives `ScreenViewModel` updates via channel and draws them with
//! Ratatui. Owns only UI state: the search field's edit buffer. Committed
//! searches go back to the handler as `RendererSignal`s.

use std::io;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::presentation::presenters::dashboard::LOADING_MESSAGE;
use crate::presentation::view_models::{
    BodyViewModel, ReportViewModel, ScreenViewModel, StatusLevel,
};
use crate::presentation::views::tui::{
    ContributionsView, ExplanationView, HistoryChartView, MessageView, ScoreCardView,
    SearchBarView, StatusBarView,
};

/// TUI events sent from handler to renderer
pub enum TuiEvent {
    /// Update screen with new ViewModel
    Update(Box<ScreenViewModel>),
}

/// Signals sent from renderer back to handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RendererSignal {
    /// Commit the edit buffer as the active query
    Search(String),
    /// Load the active query again
    Reload,
    /// User requested quit
    Quit,
}

/// Edit buffer of the search field. Editing never triggers a load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    value: String,
}

impl SearchInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn insert(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Cursor column in terminal cells; wide characters take two
    pub fn cursor(&self) -> usize {
        Line::from(self.value.as_str()).width()
    }
}

pub struct TuiRenderer {
    /// Current screen data (received from handler)
    current_screen: Option<ScreenViewModel>,
    /// UI State: search field edit buffer
    input: SearchInput,
    should_quit: bool,
    signal_tx: Option<Sender<RendererSignal>>,
}

impl TuiRenderer {
    pub fn new(initial_input: impl Into<String>) -> Self {
        Self {
            current_screen: None,
            input: SearchInput::new(initial_input),
            should_quit: false,
            signal_tx: None,
        }
    }

    pub fn with_signal_sender(mut self, tx: Sender<RendererSignal>) -> Self {
        self.signal_tx = Some(tx);
        self
    }

    pub fn input(&self) -> &SearchInput {
        &self.input
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main event loop for TUI rendering
    ///
    /// Sets up the terminal, then alternates between drawing, keyboard
    /// input and handler updates until quit. The terminal is restored on
    /// every exit path.
    pub fn run(mut self, rx: Receiver<TuiEvent>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = self.event_loop(&mut terminal, rx);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        rx: Receiver<TuiEvent>,
    ) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key_event(key);
                }
            }

            loop {
                match rx.try_recv() {
                    Ok(tui_event) => self.apply_event(tui_event),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        self.should_quit = true;
                        break;
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    pub fn apply_event(&mut self, tui_event: TuiEvent) {
        match tui_event {
            TuiEvent::Update(screen_vm) => self.current_screen = Some(*screen_vm),
        }
    }

    fn search_enabled(&self) -> bool {
        self.current_screen
            .as_ref()
            .is_none_or(|screen| screen.show_search_bar)
    }

    fn send(&self, signal: RendererSignal) {
        if let Some(tx) = &self.signal_tx {
            // Handler gone means we are shutting down anyway
            let _ = tx.send(signal);
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Char('c') if ctrl => self.quit(),
            KeyCode::Char('r') if ctrl => self.send(RendererSignal::Reload),
            KeyCode::Char('u') if ctrl => {
                if self.search_enabled() {
                    self.input.clear();
                }
            }
            KeyCode::Enter => {
                if self.search_enabled() {
                    self.send(RendererSignal::Search(self.input.value().to_string()));
                }
            }
            KeyCode::Backspace => {
                if self.search_enabled() {
                    self.input.backspace();
                }
            }
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                if self.search_enabled() {
                    self.input.insert(c);
                }
            }
            _ => {}
        }
    }

    fn quit(&mut self) {
        self.should_quit = true;
        self.send(RendererSignal::Quit);
    }

    fn render(&self, f: &mut Frame) {
        draw_screen(f, self.current_screen.as_ref(), &self.input);
    }
}

/// Draw one full frame
pub fn draw_screen(
    f: &mut Frame,
    screen: Option<&ScreenViewModel>,
    input: &SearchInput,
) {
    let size = f.area();

    // Nothing from the handler yet: the first load is already under way
    let Some(screen) = screen else {
        f.render_widget(MessageView::new(LOADING_MESSAGE, StatusLevel::Info), size);
        return;
    };

    let search_height = if screen.show_search_bar { 3 } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(search_height),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .split(size);

    let title = Paragraph::new(Span::styled(
        screen.title.as_str(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    if screen.show_search_bar {
        f.render_widget(SearchBarView::new(input.value()), chunks[1]);

        let text_area = SearchBarView::text_area(chunks[1]);
        if text_area.width > 0 {
            let offset = (input.cursor() as u16).min(text_area.width - 1);
            f.set_cursor_position((text_area.x + offset, text_area.y));
        }
    }

    match &screen.body {
        BodyViewModel::Loading { message } => {
            f.render_widget(MessageView::new(message, StatusLevel::Info), chunks[2]);
        }
        BodyViewModel::NotFound { message } | BodyViewModel::Failed { message } => {
            f.render_widget(MessageView::new(message, StatusLevel::Error), chunks[2]);
        }
        BodyViewModel::Report(report) => draw_report(f, chunks[2], report),
    }

    f.render_widget(StatusBarView::new(&screen.status_bar), chunks[3]);
}

fn draw_report(f: &mut Frame, area: Rect, report: &ReportViewModel) {
    let chunks = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(ExplanationView::required_height(
            &report.explanation,
            area.width,
        )),
        Constraint::Length(ContributionsView::required_height(
            report.contributions.len(),
        )),
        Constraint::Min(6),
    ])
    .split(area);

    f.render_widget(ScoreCardView::new(&report.score_card), chunks[0]);
    f.render_widget(ExplanationView::new(&report.explanation), chunks[1]);
    f.render_widget(ContributionsView::new(&report.contributions), chunks[2]);
    f.render_widget(HistoryChartView::new(&report.history), chunks[3]);
}
