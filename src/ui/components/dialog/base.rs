//! Base dialog component: a centered box with a title, message and hint

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Widest a dialog may get, borders included
const MAX_WIDTH: u16 = 60;

/// Horizontal padding inside the borders (both sides together)
const PADDING: u16 = 4;

/// Appearance of a dialog
pub struct DialogStyle<'a> {
    pub title: &'a str,
    pub color: Color,
}

/// "Press Enter or Esc to dismiss"
fn dismiss_hint() -> Line<'static> {
    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    Line::from(vec![
        Span::raw("Press "),
        Span::styled("Enter", key),
        Span::raw(" or "),
        Span::styled("Esc", key),
        Span::raw(" to dismiss"),
    ])
}

/// Render a dismissable dialog centered over `frame`
pub fn render_dialog(frame: &mut Frame, style: DialogStyle, message: &str) {
    let screen = frame.area();
    let text_width = (MAX_WIDTH - PADDING - 2) as usize;
    let body = wrap_words(message, text_width);
    let area = dialog_area(screen, style.title, &body);

    let mut lines = Vec::with_capacity(body.len() + 4);
    lines.push(Line::from(Span::styled(
        style.title.to_string(),
        Style::default()
            .fg(style.color)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.extend(body.into_iter().map(Line::from));
    lines.push(Line::from(""));
    lines.push(dismiss_hint());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.color))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(Style::default().bg(Color::Black)),
        area,
    );
}

/// Box for a dialog with `body` lines, centered and clipped to `screen`
fn dialog_area(screen: Rect, title: &str, body: &[String]) -> Rect {
    let widest = body
        .iter()
        .map(|l| l.chars().count())
        .chain([title.chars().count(), 28])
        .max()
        .unwrap_or(0);
    let width = u16::try_from(widest)
        .unwrap_or(u16::MAX)
        .saturating_add(PADDING + 2)
        .min(MAX_WIDTH)
        .min(screen.width);
    // borders + title + blank + body + blank + hint
    let height = u16::try_from(body.len())
        .unwrap_or(u16::MAX)
        .saturating_add(6)
        .min(screen.height);

    Rect {
        x: screen.x + screen.width.saturating_sub(width) / 2,
        y: screen.y + screen.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// Greedy word wrap on character counts; explicit newlines are kept
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let needed = line.chars().count() + word.chars().count() + usize::from(!line.is_empty());
            if needed > width && !line.is_empty() {
                out.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        out.push(line);
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}
