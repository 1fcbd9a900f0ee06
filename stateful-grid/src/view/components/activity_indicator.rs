//! src/view/components/activity_indicator.rs
//! ============================================================
//! Indeterminate activity indicator. The default loading view of
//! the content slot, and (in its one-line form) the refresh
//! spinner and the paging footer.

use std::time::{Duration, Instant};

use compact_str::CompactString;
use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget},
};

use crate::view::{theme, traits::ContentView};

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct ActivityIndicator {
    caption: CompactString,
    interval: Duration,
    frame: usize,
    last_frame_at: Instant,
    /// Single row: spinner and caption side by side
    inline: bool,
}

impl ActivityIndicator {
    /// Centered indicator filling its area.
    pub fn new(caption: impl Into<CompactString>, interval: Duration) -> Self {
        Self {
            caption: caption.into(),
            interval,
            frame: 0,
            last_frame_at: Instant::now(),
            inline: false,
        }
    }

    /// One-row indicator for headers and footers.
    pub fn inline(caption: impl Into<CompactString>, interval: Duration) -> Self {
        Self {
            inline: true,
            ..Self::new(caption, interval)
        }
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub const fn frame(&self) -> usize {
        self.frame
    }

    fn spinner(&self) -> &'static str {
        FRAMES[self.frame % FRAMES.len()]
    }
}

impl ContentView for ActivityIndicator {
    fn name(&self) -> &'static str {
        "ActivityIndicator"
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        if self.inline {
            let line = Line::from(vec![
                Span::styled(self.spinner(), theme::spinner_style()),
                Span::raw(" "),
                Span::styled(self.caption.as_str(), theme::caption_style()),
            ]);
            Paragraph::new(line)
                .alignment(Alignment::Center)
                .style(theme::footer_style())
                .render(area, buf);
            return;
        }

        buf.set_style(area, theme::content_slot_style());
        let [_, body, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .areas(area);

        let text = Text::from(vec![
            Line::from(Span::styled(self.spinner(), theme::spinner_style())),
            Line::from(Span::styled(self.caption.as_str(), theme::caption_style())),
        ]);
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .render(body, buf);
    }

    fn handle_input(&mut self, _key: KeyEvent) -> bool {
        false
    }

    fn tick(&mut self) {
        // one frame per tick at most; a stalled host loop never skips ahead
        if self.last_frame_at.elapsed() < self.interval {
            return;
        }
        self.frame = (self.frame + 1) % FRAMES.len();
        self.last_frame_at = Instant::now();
    }
}
