//! src/view/components/paging_footer.rs
//! ============================================================
//! One-row footer shown under the grid when a page load failed and the
//! host asked for the error to be shown.

use compact_str::CompactString;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::config::MessagesConfig;
use crate::controller::events::RetryHandle;
use crate::model::outcome::LoadError;
use crate::view::{theme, traits::ContentView};

pub struct PagingErrorView {
    error: LoadError,
    retry_label: CompactString,
    retry: RetryHandle,
}

impl PagingErrorView {
    pub fn new(error: LoadError, retry: RetryHandle, messages: &MessagesConfig) -> Self {
        Self {
            error,
            retry_label: messages.paging_retry_label.clone(),
            retry,
        }
    }

    pub fn error(&self) -> &LoadError {
        &self.error
    }
}

impl ContentView for PagingErrorView {
    fn name(&self) -> &'static str {
        "PagingErrorView"
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(self.error.message.as_str(), theme::error_message_style()),
            Span::raw("  "),
            Span::styled(format!("[ {} ]", self.retry_label), theme::button_style()),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .style(theme::footer_style())
            .render(area, buf);
    }

    fn handle_input(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') => {
                self.retry.fire();
                true
            }
            _ => false,
        }
    }

    fn tick(&mut self) {}
}
