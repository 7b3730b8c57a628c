//! Terminal renderer
//!
//! One grid cell maps to one terminal cell: walls and streets as background
//! colors, agents painted over them. [`TerminalSession`] owns the raw-mode
//! alternate screen and restores the terminal on drop, including on the
//! error path.

use crate::simulation::agent::{PreyState, PursuerState};
use crate::simulation::tick::{TickOutcome, TickReport};
use crate::simulation::world::World;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction as LayoutDirection, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Paragraph, Widget};
use ratatui::Terminal;
use std::io;
use std::time::Duration;

const WALL: Color = Color::Rgb(0x7f, 0x7f, 0x7f);
const STREET: Color = Color::Rgb(0x20, 0x20, 0x20);
const PREY_ROAM: Color = Color::Rgb(233, 150, 122);
const PREY_FLEE: Color = Color::Rgb(245, 255, 250);
const PURSUER_ROAM: Color = Color::Rgb(152, 251, 152);
const PURSUER_HUNT: Color = Color::Rgb(124, 252, 0);

/// Paints the visible portion of the world into the frame buffer
///
/// The view is anchored at the map's top-left corner; maps larger than the
/// terminal are clipped, not scrolled.
pub struct SceneView<'a> {
    pub world: &'a World,
}

impl SceneView<'_> {
    fn paint_agent(&self, area: Rect, buf: &mut Buffer, row: usize, col: usize, color: Color) {
        if row < area.height as usize && col < area.width as usize {
            buf.get_mut(area.x + col as u16, area.y + row as u16)
                .set_char(' ')
                .set_bg(color);
        }
    }
}

impl Widget for SceneView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let grid = &self.world.grid;
        let rows = grid.rows().min(area.height as usize);
        let cols = grid.cols().min(area.width as usize);
        for row in 0..rows {
            for col in 0..cols {
                let color = if grid.get(row, col) == Some(true) {
                    WALL
                } else {
                    STREET
                };
                buf.get_mut(area.x + col as u16, area.y + row as u16)
                    .set_char(' ')
                    .set_bg(color);
            }
        }
        for agent in self.world.prey.iter() {
            let color = match agent.state {
                PreyState::Flee => PREY_FLEE,
                PreyState::Roam | PreyState::Captured => PREY_ROAM,
            };
            self.paint_agent(area, buf, agent.position.row, agent.position.col, color);
        }
        // Pursuers draw last so a shared cell reads as theirs
        for agent in self.world.pursuers.iter() {
            let color = match agent.state {
                PursuerState::Hunt => PURSUER_HUNT,
                PursuerState::Roam => PURSUER_ROAM,
            };
            self.paint_agent(area, buf, agent.position.row, agent.position.col, color);
        }
    }
}

/// RAII wrapper around the raw-mode alternate-screen terminal
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    /// Draw a status line and the scene below it
    pub fn draw_frame(&mut self, world: &World, report: &TickReport) -> io::Result<()> {
        self.terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(LayoutDirection::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(0)])
                .split(frame.size());

            let status = match report.outcome {
                TickOutcome::Running if report.captures > 0 => format!(
                    " tick {}  prey {}  pursuers {}  +{} captured  [q to quit]",
                    report.tick, report.prey_remaining, report.pursuer_count, report.captures
                ),
                TickOutcome::Running => format!(
                    " tick {}  prey {}  pursuers {}  [q to quit]",
                    report.tick, report.prey_remaining, report.pursuer_count
                ),
                TickOutcome::PreyExtinct => format!(
                    " tick {}  prey extinct, {} pursuers  [q to quit]",
                    report.tick, report.pursuer_count
                ),
            };
            let header = Paragraph::new(status).style(Style::default().fg(Color::Gray));
            frame.render_widget(header, chunks[0]);
            frame.render_widget(SceneView { world }, chunks[1]);
        })?;
        Ok(())
    }

    /// Wait up to `timeout` for input; true when the user asked to quit
    ///
    /// The timeout doubles as the frame delay, so pacing costs nothing
    /// extra when no key arrives.
    pub fn poll_quit(&mut self, timeout: Duration) -> io::Result<bool> {
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(true)
                        }
                        _ => {}
                    }
                }
            }
        }
        Ok(false)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
