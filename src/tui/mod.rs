// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mntl-space and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! A presentation adapter over [`Locator`]: a space-type selector with ineligible options greyed
//! out, the path input, the description of the active type and the canonical URI.

use std::{
    cell::RefCell,
    collections::VecDeque,
    error::Error,
    io,
    rc::Rc,
    time::Duration,
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::locator::{ChangeEvent, Locator};

const FOCUS_COLOR: Color = Color::LightGreen;
const DISABLED_COLOR: Color = Color::DarkGray;
const DESCRIPTION_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const EVENT_LOG_CAPACITY: usize = 8;

/// Runs the picker until the user quits and hands the locator back.
pub fn run(locator: Locator) -> Result<Locator, Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(locator);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    Ok(app.into_locator())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Types,
    Path,
}

struct App {
    locator: Locator,
    focus: Focus,
    should_quit: bool,
    events: Rc<RefCell<VecDeque<ChangeEvent>>>,
}

impl App {
    fn new(mut locator: Locator) -> Self {
        let events = Rc::new(RefCell::new(VecDeque::with_capacity(EVENT_LOG_CAPACITY)));
        let sink = events.clone();
        locator.subscribe(move |event: &ChangeEvent| {
            let mut log = sink.borrow_mut();
            if log.len() == EVENT_LOG_CAPACITY {
                log.pop_front();
            }
            log.push_back(event.clone());
        });
        Self { locator, focus: Focus::Types, should_quit: false, events }
    }

    fn into_locator(self) -> Locator {
        self.locator
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            _ => match self.focus {
                Focus::Types => self.handle_types_key(key.code),
                Focus::Path => self.handle_path_key(key.code),
            },
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Types if self.locator.show_path() => Focus::Path,
            _ => Focus::Types,
        };
    }

    fn handle_types_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.step_type(-1),
            KeyCode::Down | KeyCode::Char('j') => self.step_type(1),
            _ => {}
        }
    }

    /// Moves the selection to the next selectable option, skipping disabled ones.
    fn step_type(&mut self, delta: isize) {
        let options = self.locator.options();
        let Some(current) = options.iter().position(|option| option.selected) else {
            return;
        };
        let len = options.len() as isize;
        let mut idx = current as isize;
        for _ in 1..len {
            idx = (idx + delta).rem_euclid(len);
            let option = &options[idx as usize];
            if !option.disabled {
                self.locator.set_active_type(&option.value);
                return;
            }
        }
    }

    fn handle_path_key(&mut self, code: KeyCode) {
        if !self.locator.is_path_input_enabled() {
            return;
        }
        let mut text = self.locator.path().to_owned();
        match code {
            KeyCode::Char(ch) => text.push(ch),
            KeyCode::Backspace => {
                text.pop();
            }
            _ => return,
        }
        self.locator.set_path(&text);
    }
}

fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let option_count = app.locator.catalog().len() as u16;
    let path_height = if app.locator.show_path() { 3 } else { 0 };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(option_count + 2),
            Constraint::Length(path_height),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let types = Paragraph::new(Text::from(option_lines(&app.locator))).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Mental space")
            .border_style(border_style(app.focus == Focus::Types)),
    );
    frame.render_widget(types, layout[0]);

    if app.locator.show_path() {
        let title = if app.locator.is_path_input_enabled() { "Path" } else { "Path (locked)" };
        let path = Paragraph::new(path_line(&app.locator)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border_style(app.focus == Focus::Path)),
        );
        frame.render_widget(path, layout[1]);
    }

    let description = Paragraph::new(Line::from(Span::styled(
        app.locator.description().to_owned(),
        Style::default().fg(DESCRIPTION_COLOR),
    )));
    frame.render_widget(description, layout[2]);

    let log = Paragraph::new(Text::from(event_lines(&app.events.borrow())))
        .block(Block::default().borders(Borders::TOP).title("Changes"));
    frame.render_widget(log, layout[3]);

    frame.render_widget(Paragraph::new(footer_line(&app.locator)), layout[4]);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    }
}

fn option_lines(locator: &Locator) -> Vec<Line<'static>> {
    locator
        .options()
        .into_iter()
        .map(|option| {
            let marker = if option.selected { "(•) " } else { "( ) " };
            let style = if option.disabled {
                Style::default().fg(DISABLED_COLOR).add_modifier(Modifier::CROSSED_OUT)
            } else if option.selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![Span::raw(marker), Span::styled(option.label, style)])
        })
        .collect()
}

fn path_line(locator: &Locator) -> Line<'static> {
    let style = if locator.is_path_input_enabled() {
        Style::default()
    } else {
        Style::default().fg(DISABLED_COLOR)
    };
    Line::from(Span::styled(locator.path().to_owned(), style))
}

fn event_lines(events: &VecDeque<ChangeEvent>) -> Vec<Line<'static>> {
    events.iter().rev().map(|event| Line::from(event.full_uri.clone())).collect()
}

fn footer_line(locator: &Locator) -> Line<'static> {
    Line::from(vec![
        Span::styled("tab", Style::default().fg(FOOTER_KEY_COLOR)),
        Span::raw(" focus  "),
        Span::styled("↑↓", Style::default().fg(FOOTER_KEY_COLOR)),
        Span::raw(" type  "),
        Span::styled("esc", Style::default().fg(FOOTER_KEY_COLOR)),
        Span::raw(" done  "),
        Span::styled(locator.uri(), Style::default().add_modifier(Modifier::BOLD)),
    ])
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}
