//! Main TUI application state and logic

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::config::Settings;
use crate::languages;
use crate::llm::build_provider;
use crate::pipeline::{self, RunOutcome};
use crate::transcript::YoutubeTranscriptClient;
use crate::tui::widgets::HelpPopup;

/// Which input region has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Url,
    Language,
}

/// Main application state
pub struct App {
    settings: Settings,
    url_input: String,
    language_index: usize,
    focus: Focus,
    show_help: bool,

    // Result of the last trigger action
    error: Option<String>,
    summary: Option<String>,
    summary_scroll: u16,
}

impl App {
    /// Create a new app instance
    pub fn new(settings: Settings) -> Self {
        let language_index = languages::all()
            .iter()
            .position(|(name, _)| *name == "English")
            .unwrap_or(0);

        Self {
            settings,
            url_input: String::new(),
            language_index,
            focus: Focus::Url,
            show_help: false,
            error: None,
            summary: None,
            summary_scroll: 0,
        }
    }

    pub fn help_visible(&self) -> bool {
        self.show_help
    }

    /// Toggle help popup
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Handle key input
    pub async fn handle_key(&mut self, key: KeyCode) -> Result<()> {
        if self.show_help {
            self.show_help = false;
            return Ok(());
        }

        match key {
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Url => Focus::Language,
                    Focus::Language => Focus::Url,
                };
            }
            KeyCode::Enter => {
                self.run_summarize().await?;
            }
            KeyCode::PageUp => {
                self.summary_scroll = self.summary_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                self.summary_scroll = self.summary_scroll.saturating_add(5);
            }
            key => match self.focus {
                Focus::Url => self.handle_url_key(key),
                Focus::Language => self.handle_language_key(key),
            },
        }

        Ok(())
    }

    fn handle_url_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char(c) => {
                self.url_input.push(c);
            }
            KeyCode::Backspace => {
                self.url_input.pop();
            }
            _ => {}
        }
    }

    fn handle_language_key(&mut self, key: KeyCode) {
        let count = languages::all().len();
        match key {
            KeyCode::Up => {
                self.language_index = (self.language_index + count - 1) % count;
            }
            KeyCode::Down => {
                self.language_index = (self.language_index + 1) % count;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Char(c) => {
                self.jump_to_language(c);
            }
            _ => {}
        }
    }

    /// Jump to the next language whose name starts with the typed letter,
    /// wrapping around the table.
    fn jump_to_language(&mut self, letter: char) {
        let table = languages::all();
        let count = table.len();

        for offset in 1..=count {
            let index = (self.language_index + offset) % count;
            let first = table[index].0.chars().next();
            if first.is_some_and(|c| c.eq_ignore_ascii_case(&letter)) {
                self.language_index = index;
                return;
            }
        }
    }

    /// Run one fetch-then-summarize action for the current inputs.
    ///
    /// A malformed URL propagates out of the event loop, per the
    /// fatal-to-the-action error contract.
    async fn run_summarize(&mut self) -> Result<()> {
        self.error = None;
        self.summary = None;
        self.summary_scroll = 0;

        let (_, code) = languages::all()[self.language_index];

        let transcripts = YoutubeTranscriptClient::new()?;
        let provider = build_provider(&self.settings)?;

        match pipeline::run(&transcripts, provider.as_ref(), &self.url_input, code).await? {
            RunOutcome::Summary(text) => self.summary = Some(text),
            RunOutcome::TranscriptUnavailable(message) => self.error = Some(message),
        }

        Ok(())
    }

    /// Draw the screen
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // URL input
                Constraint::Length(3), // Language selector
                Constraint::Length(3), // Thumbnail link
                Constraint::Length(4), // Error region
                Constraint::Min(5),    // Summary
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        // Title
        let title = Paragraph::new("scriptbot")
            .style(Style::default().fg(Color::Cyan).bold())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(title, chunks[0]);

        // URL input
        let url_border = if self.focus == Focus::Url {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let url_text = if self.url_input.is_empty() {
            Line::from(Span::styled(
                "Paste a YouTube video link...",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(self.url_input.as_str())
        };
        let url_widget = Paragraph::new(url_text).block(
            Block::default()
                .title(" Video Link ")
                .borders(Borders::ALL)
                .border_style(url_border),
        );
        frame.render_widget(url_widget, chunks[1]);

        // Language selector
        let language_border = if self.focus == Focus::Language {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let (name, code) = languages::all()[self.language_index];
        let language_widget = Paragraph::new(Line::from(vec![
            Span::styled("< ", Style::default().fg(Color::DarkGray)),
            Span::styled(name, Style::default().fg(Color::White)),
            Span::styled(format!(" ({})", code), Style::default().fg(Color::Yellow)),
            Span::styled(" >", Style::default().fg(Color::DarkGray)),
        ]))
        .block(
            Block::default()
                .title(" Language ")
                .borders(Borders::ALL)
                .border_style(language_border),
        );
        frame.render_widget(language_widget, chunks[2]);

        // Thumbnail link, derived from the pasted URL on every frame
        let thumbnail_text = match thumbnail_url(&self.url_input) {
            Some(link) => Line::from(Span::styled(link, Style::default().fg(Color::Blue))),
            None => Line::from(Span::styled(
                "(thumbnail appears once a link is pasted)",
                Style::default().fg(Color::DarkGray),
            )),
        };
        let thumbnail_widget = Paragraph::new(thumbnail_text).block(
            Block::default()
                .title(" Thumbnail ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(thumbnail_widget, chunks[3]);

        // Error region
        let error_text = match &self.error {
            Some(message) => Line::from(Span::styled(
                message.as_str(),
                Style::default().fg(Color::Red),
            )),
            None => Line::from(""),
        };
        let error_widget = Paragraph::new(error_text).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" Errors ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
        frame.render_widget(error_widget, chunks[4]);

        // Summary region
        let summary_text = match &self.summary {
            Some(text) => Text::from(text.as_str()),
            None => Text::from(Span::styled(
                "Press Enter to fetch the transcript and summarize it.",
                Style::default().fg(Color::DarkGray),
            )),
        };
        let summary_widget = Paragraph::new(summary_text)
            .wrap(Wrap { trim: false })
            .scroll((self.summary_scroll, 0))
            .block(
                Block::default()
                    .title(" Detailed Analysis ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            );
        frame.render_widget(summary_widget, chunks[5]);

        // Help bar
        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Tab ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Switch field  "),
            Span::styled(" Enter ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Summarize  "),
            Span::styled(" PgUp/PgDn ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Scroll  "),
            Span::styled(" Esc ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Quit"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[6]);

        // Draw help popup if active
        if self.show_help {
            HelpPopup::draw(frame, area);
        }
    }
}

/// Thumbnail link for a pasted URL.
///
/// This is a second, lenient identifier extraction, independent of the
/// strict one on the fetch path.
fn thumbnail_url(url: &str) -> Option<String> {
    url.split_once('=')
        .map(|(_, id)| format!("http://img.youtube.com/vi/{}/0.jpg", id))
}
