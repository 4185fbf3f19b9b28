use crate::ui::theme::{Palette, STATUS_ERROR, STATUS_OK, STATUS_PENDING};
use crate::ui::view::{ResultView, UserView};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    view: &'a UserView,
    language: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(view: &'a UserView, language: &'a str) -> Self {
        Self { view, language }
    }

    pub fn widget(&self, palette: Palette) -> Paragraph<'static> {
        let text_style = Style::default().fg(palette.text);
        let separator_style = Style::default().fg(palette.muted);
        let (status, status_color) = match self.view.result {
            ResultView::Loading => ("loading", STATUS_PENDING),
            ResultView::Error { .. } => ("error", STATUS_ERROR),
            ResultView::Subject { .. } => ("ready", STATUS_OK),
            ResultView::Empty => ("idle", palette.muted),
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("●", Style::default().fg(status_color)),
            Span::styled(format!(" {}", status), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.view.container_class, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("lang: {}", self.language), text_style),
        ]);

        Paragraph::new(line)
            .style(Style::default().bg(palette.background))
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(palette.border)),
            )
    }
}
