use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{palette, Palette, ACCENT, STATUS_ERROR};
use crate::ui::view::{ResultView, UserView, TITLE};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let view = UserView::build(app);
    let palette = palette(view.theme);

    let header_widget = Header::new(&view, &app.preferences().language);
    frame.render_widget(header_widget.widget(palette), header);
    frame.render_widget(Clear, body);
    frame.render_widget(body_widget(&view, app.spinner(), palette), body);
    frame.render_widget(Footer::widget(footer, palette), footer);

    if let Some(cursor) = input_cursor(&view, body) {
        frame.set_cursor_position(cursor);
    }
}

const INPUT_LABEL: &str = "User ID: ";

fn body_widget(view: &UserView, spinner: char, palette: Palette) -> Paragraph<'static> {
    let text_style = Style::default().fg(palette.text);
    let muted_style = Style::default().fg(palette.muted);

    let mut lines = vec![Line::from(vec![
        Span::styled(INPUT_LABEL, muted_style),
        Span::styled(
            view.id_input.clone(),
            text_style
                .bg(palette.highlight)
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    if let Some(error) = &view.input_error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(STATUS_ERROR),
        )));
    }
    lines.push(Line::from(""));

    let result_style = match view.result {
        ResultView::Error { .. } => Style::default().fg(STATUS_ERROR),
        ResultView::Empty => muted_style,
        _ => text_style,
    };
    for (index, text) in view.result.lines().into_iter().enumerate() {
        let text = match view.result {
            ResultView::Loading => format!("{} {}", spinner, text),
            _ => text,
        };
        let style = if index == 0 && matches!(view.result, ResultView::Subject { .. }) {
            result_style.add_modifier(Modifier::BOLD)
        } else {
            result_style
        };
        lines.push(Line::from(Span::styled(text, style)));
    }
    lines.push(Line::from(""));

    let mut buttons = Vec::new();
    for button in &view.buttons {
        if !buttons.is_empty() {
            buttons.push(Span::styled("  ", text_style));
        }
        buttons.push(Span::styled(
            format!("[{}]", button.key),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));
        buttons.push(Span::styled(format!(" {}", button.label), text_style));
    }
    lines.push(Line::from(buttons));

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(palette.background))
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", TITLE),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        )
}

/// Cursor sits right after the typed id, inside the body border.
fn input_cursor(view: &UserView, body: Rect) -> Option<(u16, u16)> {
    if body.width < 3 || body.height < 3 {
        return None;
    }
    let offset = INPUT_LABEL.chars().count() + view.id_input.chars().count();
    let max_x = body.width.saturating_sub(2);
    let x = body.x + 1 + (offset.min(max_x as usize) as u16);
    Some((x.min(body.x + max_x), body.y + 1))
}
