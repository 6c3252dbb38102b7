// SPDX-License-Identifier: GPL-3.0-only

//! Terminal manual controls panel
//!
//! Renders ISO, shutter and aperture with the live EV readout and the
//! suggested parameter, and edits them from the keyboard.

use crate::config::Config;
use crate::controls::{FlashMode, Zoom};
use crate::errors::ExposureError;
use crate::exposure::{
    ExposureMode, ExposureParameter, ManualExposure, format_ev, format_value,
};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io::{self, stdout};
use std::time::Duration;
use tracing::{info, warn};

/// Relative zoom applied per key press, mimicking a small pinch
const ZOOM_STEP: f64 = 1.1;

/// Third-stop nudges per `[`/`]` press
const FULL_STOP_NUDGE: i32 = 3;

/// Run the terminal controls panel until the user quits
pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    // Reject bad bounds before touching the terminal
    let state = PanelState::new(config)?;

    // Set up terminal; restored when the guard drops, including on early errors
    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    run_app(&mut terminal, state)
}

/// Raw mode plus alternate screen for as long as it is alive
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(stdout(), LeaveAlternateScreen, cursor::Show) {
            warn!(error = %e, "Failed to restore terminal screen");
        }
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut state: PanelState,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(ev = state.exposure.setting().ev(), "Manual controls started");

    loop {
        terminal.draw(|f| render(f, &state))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && state.handle_key(key) == KeyOutcome::Quit
        {
            break;
        }
    }

    Ok(())
}

/// Whether the event loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyOutcome {
    Continue,
    Quit,
}

/// Everything the panel shows
struct PanelState {
    exposure: ManualExposure,
    selected: ExposureParameter,
    flash: FlashMode,
    zoom: Zoom,
    show_controls: bool,
    status_message: String,
}

impl PanelState {
    fn new(config: &Config) -> Result<Self, ExposureError> {
        Ok(Self {
            exposure: ManualExposure::new(config.exposure_bounds)?,
            selected: ExposureParameter::Iso,
            flash: config.flash_mode,
            zoom: Zoom::new(config.device_max_zoom),
            show_controls: config.show_manual_controls,
            status_message: build_status_message(),
        })
    }

    fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        // Ctrl+C to quit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return KeyOutcome::Quit;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return KeyOutcome::Quit,
            KeyCode::Char('m') => self.show_controls = !self.show_controls,
            KeyCode::Char('f') => {
                self.flash = self.flash.next();
                self.status_message = format!("Flash: {}", self.flash.display_name());
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.zoom.apply_pinch(ZOOM_STEP);
            }
            KeyCode::Char('-') => {
                self.zoom.apply_pinch(1.0 / ZOOM_STEP);
            }
            _ if !self.show_controls => {}
            KeyCode::Up | KeyCode::Char('k') => self.select_offset(-1),
            KeyCode::Down | KeyCode::Char('j') => self.select_offset(1),
            KeyCode::Left | KeyCode::Char('h') => self.nudge_selected(-1),
            KeyCode::Right | KeyCode::Char('l') => self.nudge_selected(1),
            KeyCode::Char('[') => self.nudge_selected(-FULL_STOP_NUDGE),
            KeyCode::Char(']') => self.nudge_selected(FULL_STOP_NUDGE),
            KeyCode::Char('r') => {
                self.exposure.reset_to_auto();
                self.status_message = "Auto exposure".to_string();
            }
            _ => {}
        }

        KeyOutcome::Continue
    }

    fn select_offset(&mut self, offset: isize) {
        let all = ExposureParameter::ALL;
        let current = all.iter().position(|p| *p == self.selected).unwrap_or(0) as isize;
        let next = (current + offset).rem_euclid(all.len() as isize) as usize;
        self.selected = all[next];
    }

    fn nudge_selected(&mut self, steps: i32) {
        match self.exposure.nudge(self.selected, steps) {
            Ok(_) => self.status_message = build_status_message(),
            Err(e) => {
                warn!(error = %e, "Exposure edit rejected");
                self.status_message = format!("Error: {}", e);
            }
        }
    }
}

fn build_status_message() -> String {
    "arrows adjust | [ ] full stop | r auto | f flash | +/- zoom | m panel | q quit".to_string()
}

fn render(f: &mut Frame, state: &PanelState) {
    let [panel_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(f.area());

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Mode   "),
            Span::styled(
                state.exposure.mode().display_name(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("   Flash "),
            Span::raw(state.flash.display_name()),
            Span::raw("   "),
            Span::raw(state.zoom.label().unwrap_or_default()),
        ]),
        Line::default(),
    ];

    if state.show_controls {
        let setting = state.exposure.setting();
        for parameter in ExposureParameter::ALL {
            lines.push(parameter_line(
                parameter,
                &format_value(parameter, setting.get(parameter)),
                parameter == state.selected,
                state.exposure.is_suggested(parameter),
            ));
        }
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("  EV        ", Style::default().fg(Color::Gray)),
            Span::styled(
                format_ev(setting.ev()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        if state.exposure.mode() == ExposureMode::Auto {
            lines.push(Line::styled(
                "  (camera meters automatically until a value is edited)",
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Manual Controls "),
    );
    f.render_widget(panel, panel_area);

    let status = Paragraph::new(state.status_message.as_str())
        .style(Style::default().fg(Color::White).bg(Color::DarkGray));
    f.render_widget(status, status_area);
}

fn parameter_line(
    parameter: ExposureParameter,
    value: &str,
    selected: bool,
    suggested: bool,
) -> Line<'static> {
    let marker = if selected { "> " } else { "  " };
    let name_style = if selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::styled(format!("{}{:<10}", marker, parameter.display_name()), name_style),
        Span::styled(format!("{:>8}", value), Style::default().fg(Color::Yellow)),
    ];
    if suggested {
        spans.push(Span::styled(" (suggested)", Style::default().fg(Color::Green)));
    }
    Line::from(spans)
}
