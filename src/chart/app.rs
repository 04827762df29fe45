//! Interactive chart application.

use super::{model, ChartModel, Theme};
use crossterm::{
    event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame, Terminal,
};
use std::{io, time::Duration};
use tokio::sync::mpsc;

/// Events that can occur in the chart view.
#[derive(Debug, Clone)]
pub enum Event {
    /// Terminal event (keyboard input).
    Key(KeyEvent),
    /// Tick event for periodic redraws.
    Tick,
    /// Resize event.
    Resize(u16, u16),
}

/// Event handler that sends events over a channel.
struct EventHandler {
    _tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let event_tx = tx.clone();

        tokio::spawn(async move {
            loop {
                if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(CrosstermEvent::Key(key)) => {
                            if event_tx.send(Event::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(CrosstermEvent::Resize(w, h)) => {
                            if event_tx.send(Event::Resize(w, h)).is_err() {
                                break;
                            }
                        }
                        _ => {}
                    }
                } else if event_tx.send(Event::Tick).is_err() {
                    break;
                }
            }
        });

        Self { _tx: tx, rx }
    }

    async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Check if a key event should close the chart.
fn is_quit(event: &KeyEvent) -> bool {
    event.code == KeyCode::Char('c') && event.modifiers == KeyModifiers::CONTROL
        || event.code == KeyCode::Char('q')
        || event.code == KeyCode::Esc
}

/// Chart application.
pub struct App {
    model: ChartModel,
    theme: Theme,
    should_quit: bool,
}

impl App {
    /// Create a new chart application for a model.
    pub fn new(model: ChartModel) -> Self {
        Self {
            model,
            theme: Theme::default(),
            should_quit: false,
        }
    }

    /// Handle an event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                if is_quit(&key) {
                    self.should_quit = true;
                }
            }
            Event::Tick => {
                // Static chart, nothing to update between draws
            }
            Event::Resize(_, _) => {
                // Terminal will handle resize automatically
            }
        }
    }

    /// Check if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Render the chart view.
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Chart
                Constraint::Length(3), // Status bar
            ])
            .split(frame.size());

        self.render_chart(frame, chunks[0]);
        self.render_status_bar(frame, chunks[1]);
    }

    /// Render the chart widget: three line series plus one named dataset
    /// per marker sequence, so the legend holds a single Buy and a single
    /// Sell entry.
    fn render_chart(&self, frame: &mut Frame, area: Rect) {
        let mut datasets = vec![
            Dataset::default()
                .name(model::PRICE_LABEL)
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(self.theme.price))
                .data(&self.model.price),
            Dataset::default()
                .name(model::MACD_LABEL)
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(self.theme.macd))
                .data(&self.model.macd),
            Dataset::default()
                .name(model::SIGNAL_LABEL)
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(self.theme.signal))
                .data(&self.model.signal),
        ];

        if !self.model.buy_points.is_empty() {
            datasets.push(
                Dataset::default()
                    .name(model::BUY_LABEL)
                    .marker(Marker::Block)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(self.theme.buy))
                    .data(&self.model.buy_points),
            );
        }
        if !self.model.sell_points.is_empty() {
            datasets.push(
                Dataset::default()
                    .name(model::SELL_LABEL)
                    .marker(Marker::Block)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(self.theme.sell))
                    .data(&self.model.sell_points),
            );
        }

        let [x_min, x_max] = self.model.x_bounds();
        let [y_min, y_max] = self.model.y_bounds();

        let x_axis = Axis::default()
            .title("Days")
            .style(self.theme.muted())
            .bounds([x_min, x_max])
            .labels(vec![
                Span::raw(format!("{:.0}", x_min)),
                Span::raw(format!("{:.0}", (x_min + x_max) / 2.0)),
                Span::raw(format!("{:.0}", x_max)),
            ]);

        let y_axis = Axis::default()
            .title("Price")
            .style(self.theme.muted())
            .bounds([y_min, y_max])
            .labels(vec![
                Span::raw(format!("{:.2}", y_min)),
                Span::raw(format!("{:.2}", (y_min + y_max) / 2.0)),
                Span::raw(format!("{:.2}", y_max)),
            ]);

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("MACD Momentum Strategy")
                    .border_style(self.theme.border_style()),
            )
            .x_axis(x_axis)
            .y_axis(y_axis);

        frame.render_widget(chart, area);
    }

    /// Render status bar.
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let text = Line::from(vec![
            Span::styled("Signal Chart", self.theme.title()),
            Span::raw(" | "),
            Span::styled(format!("{} buys", self.model.buy_points.len()), self.theme.muted()),
            Span::raw(", "),
            Span::styled(format!("{} sells", self.model.sell_points.len()), self.theme.muted()),
            Span::raw(" | "),
            Span::styled("q", self.theme.muted()),
            Span::raw(" or "),
            Span::styled("Ctrl+C", self.theme.muted()),
            Span::raw(" to quit"),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style());

        frame.render_widget(block, area);

        let inner = Rect {
            x: area.x + 2,
            y: area.y + 1,
            width: area.width.saturating_sub(4),
            height: 1,
        };

        frame.render_widget(text, inner);
    }
}

/// Run the chart application. Blocks until the user quits.
pub async fn run_chart(model: ChartModel) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and event handler
    let mut app = App::new(model);
    let mut event_handler = EventHandler::new(Duration::from_millis(250));

    // Main loop
    loop {
        terminal.draw(|f| app.render(f))?;

        if let Some(event) = event_handler.next().await {
            app.handle_event(event);
        }

        if app.should_quit() {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
