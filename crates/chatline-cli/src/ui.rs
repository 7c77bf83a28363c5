//! TUI implementation for chatline

use chatline_client::{ChatSession, PendingSend, SendOutcome, Transport};
use chatline_tui::{
    TerminalGuard, Theme,
    input::{Action, event_to_action},
    widgets::{
        ConversationView, InputBox, MessageList, SendButton, Spinner, message_list,
        send_button::SEND_BUTTON_WIDTH,
    },
};
use crossterm::event::EventStream;
use futures::{
    StreamExt,
    future::{BoxFuture, OptionFuture},
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};
use std::sync::Arc;
use std::time::Instant;

/// What the event loop should do after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Draft accepted; start a request
    Submit,
    Quit,
}

/// TUI application state
pub struct TuiState {
    session: ChatSession,
    input: InputBox,
    view: ConversationView,
    theme: Theme,
    /// Where messages are posted, shown in the title
    endpoint: String,
    /// Spinner start time for animation
    spinner_start: Instant,
    /// Areas from the last render, for mouse hits and scroll math
    messages_area: Rect,
    input_area: Rect,
    button_area: Rect,
    content_height: usize,
}

impl TuiState {
    pub fn new(session: ChatSession, theme: Theme) -> Self {
        let mut input = InputBox::new().with_placeholder("Type your message...");
        input.set_focused(true);
        input.set_content(session.draft());
        let endpoint = session.transport().describe();

        Self {
            session,
            input,
            view: ConversationView::new(),
            theme,
            endpoint,
            spinner_start: Instant::now(),
            messages_area: Rect::default(),
            input_area: Rect::new(0, 0, 80, 3),
            button_area: Rect::default(),
            content_height: 0,
        }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    fn viewport(&self) -> usize {
        self.messages_area.height.saturating_sub(2) as usize
    }

    fn submit_requested(&self) -> Flow {
        if self.session.composer().can_submit() {
            Flow::Submit
        } else {
            Flow::Continue
        }
    }

    /// Handle keyboard or mouse action
    pub fn handle_action(&mut self, action: Action) -> Flow {
        let (height, viewport) = (self.content_height, self.viewport());

        match action {
            Action::Submit | Action::Send => self.submit_requested(),
            Action::Click { column, row } => {
                if SendButton::hit(self.button_area, column, row) {
                    self.submit_requested()
                } else {
                    Flow::Continue
                }
            }
            Action::Quit | Action::Interrupt => Flow::Quit,
            Action::Escape if !self.session.is_awaiting_reply() => Flow::Quit,
            Action::PageUp => {
                self.view.scroll_up(viewport.max(1), height, viewport);
                Flow::Continue
            }
            Action::PageDown => {
                self.view.scroll_down(viewport.max(1), height, viewport);
                Flow::Continue
            }
            Action::Up => {
                self.view.scroll_up(1, height, viewport);
                Flow::Continue
            }
            Action::Down => {
                self.view.scroll_down(1, height, viewport);
                Flow::Continue
            }
            Action::ScrollUp => {
                self.view.scroll_up(3, height, viewport);
                Flow::Continue
            }
            Action::ScrollDown => {
                self.view.scroll_down(3, height, viewport);
                Flow::Continue
            }
            _ => {
                if self.input.handle_action(&action, self.input_area.width) {
                    self.session.set_draft(self.input.content());
                }
                Flow::Continue
            }
        }
    }

    /// Commit the draft and lock the composer until the reply lands
    pub fn begin_send(&mut self) -> Option<PendingSend> {
        let pending = self.session.begin_send()?;
        self.input.set_locked(true);
        self.spinner_start = Instant::now();
        Some(pending)
    }

    /// Apply the request result and unlock the composer
    pub fn finish_send(&mut self, result: chatline_client::Result<Vec<String>>) -> SendOutcome {
        let outcome = self.session.finish_send(result);
        self.input.set_locked(false);
        if self.session.draft().is_empty() {
            self.input.clear();
        }
        outcome
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Layout: messages (flex), status bar (1), composer (3)
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(size);

        let composer = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(SEND_BUTTON_WIDTH)])
            .split(chunks[2]);

        self.messages_area = chunks[0];
        self.input_area = composer[0];
        self.button_area = composer[1];

        self.render_messages(frame, chunks[0]);
        self.render_status(frame, chunks[1]);

        self.input.keep_cursor_visible(composer[0].width);
        self.input
            .render(composer[0], frame.buffer_mut(), &self.theme);
        let enabled = self.session.composer().can_submit();
        frame.render_widget(SendButton::new(enabled, &self.theme), composer[1]);
    }

    fn render_messages(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(format!(" chatline │ {} ", self.endpoint));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let messages = self.session.messages();
        self.view.sync(messages.len());

        if inner.height == 0 || messages.is_empty() {
            let welcome = vec![
                Line::from(""),
                Line::from(Span::styled("  AI Chatbot", self.theme.user_header())),
                Line::from(""),
                Line::from(vec![
                    Span::styled("    Enter     ", self.theme.accent_style()),
                    Span::styled("Send message", self.theme.base_style()),
                ]),
                Line::from(vec![
                    Span::styled("    PgUp/Dn   ", self.theme.accent_style()),
                    Span::styled("Scroll history", self.theme.base_style()),
                ]),
                Line::from(vec![
                    Span::styled("    Ctrl+C    ", self.theme.accent_style()),
                    Span::styled("Quit", self.theme.base_style()),
                ]),
            ];
            frame.render_widget(Paragraph::new(welcome), inner);
            self.content_height = 0;
            return;
        }

        let viewport = inner.height as usize;
        self.content_height = message_list::content_height(messages, inner.width as usize);
        let offset = self.view.offset(self.content_height, viewport);

        let list = MessageList::new(messages, &self.theme).scroll(offset);
        frame.render_widget(list, inner);

        if self.content_height > viewport {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█");

            let mut scrollbar_state = ScrollbarState::new(self.content_height)
                .position(offset)
                .viewport_content_length(viewport);

            frame.render_stateful_widget(scrollbar, inner, &mut scrollbar_state);
        }
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        if self.session.is_awaiting_reply() {
            let spinner = Spinner::new("Waiting for reply...", &self.theme)
                .with_start_time(self.spinner_start);
            frame.render_widget(spinner, area);
            return;
        }

        let count = self.session.conversation().len();
        let left = format!("Ready │ {} messages", count);
        let right = "Enter: send │ PgUp/PgDn: scroll │ Ctrl+C: quit";

        let left_width = left.chars().count();
        let right_width = right.chars().count();
        let available = area.width as usize;

        let line = if left_width + right_width + 2 <= available {
            Line::from(vec![
                Span::styled(left, self.theme.dim_style()),
                Span::raw(" ".repeat(available - left_width - right_width)),
                Span::styled(right, self.theme.dim_style()),
            ])
        } else {
            Line::from(Span::styled(left, self.theme.dim_style()))
        };

        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Future for one in-flight request, detached from the session borrow
fn request(
    transport: Arc<dyn Transport>,
    pending: PendingSend,
) -> BoxFuture<'static, chatline_client::Result<Vec<String>>> {
    Box::pin(async move { transport.send(pending.text()).await })
}

/// Run the TUI application
pub async fn run_tui(session: ChatSession, theme: Theme) -> anyhow::Result<()> {
    let mut terminal = TerminalGuard::enter()?;
    let mut state = TuiState::new(session, theme);

    let mut events = EventStream::new();

    // Tick interval for animations (80ms for smooth spinner)
    let mut tick = tokio::time::interval(std::time::Duration::from_millis(80));

    let mut in_flight: Option<BoxFuture<'static, chatline_client::Result<Vec<String>>>> = None;

    loop {
        terminal.draw(|frame| state.render(frame))?;

        tokio::select! {
            biased;

            Some(result) = OptionFuture::from(in_flight.as_mut()), if in_flight.is_some() => {
                in_flight = None;
                let outcome = state.finish_send(result);
                tracing::debug!(?outcome, "request finished");
            }

            event = events.next() => {
                match event {
                    Some(Ok(event)) => {
                        let Some(action) = event_to_action(event) else {
                            continue;
                        };
                        match state.handle_action(action) {
                            Flow::Continue => {}
                            Flow::Submit => {
                                if let Some(pending) = state.begin_send() {
                                    in_flight = Some(request(state.session().transport(), pending));
                                }
                            }
                            Flow::Quit => break,
                        }
                    }
                    Some(Err(e)) => {
                        return Err(anyhow::anyhow!("Event error: {}", e));
                    }
                    None => break,
                }
            }

            _ = tick.tick() => {}
        }
    }

    Ok(())
}
