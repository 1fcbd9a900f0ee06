//! src/view/components/initial_load_error_view.rs
//! ============================================================
//! Empty / error content shown after an initial load or refresh
//! finished without items. A retry button is only offered when the
//! load actually failed.

use compact_str::CompactString;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::config::MessagesConfig;
use crate::controller::events::RetryHandle;
use crate::model::outcome::LoadError;
use crate::view::{theme, traits::ContentView};

pub struct InitialLoadErrorView {
    error: Option<LoadError>,
    message: CompactString,
    retry_label: CompactString,
    retry: Option<RetryHandle>,
}

impl InitialLoadErrorView {
    pub fn new(error: Option<LoadError>, retry: RetryHandle, messages: &MessagesConfig) -> Self {
        let message = match &error {
            Some(err) => err.message.clone(),
            None => messages.empty.clone(),
        };
        let retry = error.is_some().then_some(retry);

        Self {
            error,
            message,
            retry_label: messages.retry_label.clone(),
            retry,
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        self.error.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn has_retry_button(&self) -> bool {
        self.retry.is_some()
    }
}

impl ContentView for InitialLoadErrorView {
    fn name(&self) -> &'static str {
        "InitialLoadErrorView"
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, theme::content_slot_style());

        let body_height = if self.retry.is_some() { 3 } else { 1 };
        let [_, body, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(body_height),
            Constraint::Fill(1),
        ])
        .areas(area);

        let message_style = if self.error.is_some() {
            theme::error_message_style()
        } else {
            theme::message_style()
        };

        let mut lines = vec![Line::from(Span::styled(
            self.message.as_str(),
            message_style,
        ))];
        if self.retry.is_some() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("[ {} ]", self.retry_label),
                theme::button_style(),
            )));
        }

        Paragraph::new(Text::from(lines))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(body, buf);
    }

    fn handle_input(&mut self, key: KeyEvent) -> bool {
        let Some(retry) = &self.retry else {
            return false;
        };
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') => {
                retry.fire();
                true
            }
            _ => false,
        }
    }

    fn tick(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::events::{ControllerEvent, RetryTarget, channel};
    use crossterm::event::KeyModifiers;

    fn buffer_text(buf: &Buffer) -> String {
        buf.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_empty_without_error_has_no_button() {
        let (tx, mut rx) = channel();
        let mut view = InitialLoadErrorView::new(
            None,
            RetryHandle::new(tx, RetryTarget::InitialLoad),
            &MessagesConfig::default(),
        );

        assert_eq!(view.message(), "No items found.");
        assert!(!view.has_retry_button());
        assert!(!view.handle_input(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(rx.try_recv().is_err());

        let area = Rect::new(0, 0, 40, 7);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("No items found."));
        assert!(!text.contains("Try Again"));
    }

    #[test]
    fn test_error_shows_message_and_retry() {
        let (tx, mut rx) = channel();
        let error = LoadError::new("net", -1009, "Offline");
        let mut view = InitialLoadErrorView::new(
            Some(error.clone()),
            RetryHandle::new(tx, RetryTarget::InitialLoad),
            &MessagesConfig::default(),
        );

        assert_eq!(view.error(), Some(&error));
        assert!(view.has_retry_button());

        let area = Rect::new(0, 0, 40, 7);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Offline"));
        assert!(text.contains("Try Again"));

        assert!(view.handle_input(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE)));
        assert_eq!(rx.try_recv().ok(), Some(ControllerEvent::RetryInitialLoad));
        assert!(!view.handle_input(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)));
    }
}
