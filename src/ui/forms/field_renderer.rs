//! Field rendering: maps a schema field to a terminal control
//!
//! `control_for` is the pure dispatch on the field kind; `draw_control`
//! paints the result. Test ids are carried verbatim from the schema and
//! shown in each control's border so terminal-scraping tests can find them.

use crate::state::forms::{FieldKind, FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Label of the leading "no choice" dropdown entry
pub const SELECT_PLACEHOLDER: &str = "Select...";

/// Rows used by a multi-line text control, borders included
const TEXTAREA_HEIGHT: u16 = 5;

/// Semantic kind of a single-line input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Date,
}

impl InputKind {
    /// Short hint shown next to the label
    fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Text => None,
            Self::Email => Some("email"),
            Self::Tel => Some("tel"),
            Self::Date => Some("YYYY-MM-DD"),
        }
    }
}

/// One entry of a dropdown or radio group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceItem {
    pub label: String,
    pub value: String,
    pub test_id: String,
    pub selected: bool,
}

/// Control description for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    Input {
        kind: InputKind,
        value: String,
        placeholder: String,
        test_id: String,
    },
    TextArea {
        value: String,
        placeholder: String,
        test_id: String,
    },
    /// Dropdown; the first item is the "Select..." placeholder
    Select { items: Vec<ChoiceItem>, test_id: String },
    /// Exclusive choice; every item belongs to `group`
    RadioGroup { group: String, items: Vec<ChoiceItem> },
    Checkbox { checked: bool, test_id: String },
    /// Field kind without a control
    Nothing,
}

impl Control {
    /// Rows needed to draw the control, borders included
    pub fn height(&self) -> u16 {
        match self {
            Control::Input { .. } | Control::Select { .. } | Control::Checkbox { .. } => 3,
            Control::TextArea { .. } => TEXTAREA_HEIGHT,
            Control::RadioGroup { items, .. } => u16::try_from(items.len().max(1))
                .unwrap_or(u16::MAX)
                .saturating_add(2),
            Control::Nothing => 0,
        }
    }
}

fn choice_items<'a>(field: &'a FormField, stored: &str) -> impl Iterator<Item = ChoiceItem> + 'a {
    let stored = stored.to_string();
    field.options.iter().map(move |o| ChoiceItem {
        label: o.label.clone(),
        value: o.value.clone(),
        test_id: o.data_test_id.clone(),
        selected: o.value == stored,
    })
}

/// Map a field and its current value to the control that edits it
pub fn control_for(field: &FormField, value: &FieldValue) -> Control {
    let input = |kind| Control::Input {
        kind,
        value: value.as_text().to_string(),
        placeholder: field.placeholder.clone().unwrap_or_default(),
        test_id: field.data_test_id.clone(),
    };

    match &field.kind {
        FieldKind::Text => input(InputKind::Text),
        FieldKind::Email => input(InputKind::Email),
        FieldKind::Tel => input(InputKind::Tel),
        FieldKind::Date => input(InputKind::Date),
        FieldKind::Textarea => Control::TextArea {
            value: value.as_text().to_string(),
            placeholder: field.placeholder.clone().unwrap_or_default(),
            test_id: field.data_test_id.clone(),
        },
        FieldKind::Dropdown => {
            let stored = value.as_text();
            let mut items: Vec<ChoiceItem> = choice_items(field, stored).collect();
            let any_selected = items.iter().any(|i| i.selected);
            items.insert(
                0,
                ChoiceItem {
                    label: SELECT_PLACEHOLDER.to_string(),
                    value: String::new(),
                    test_id: String::new(),
                    selected: !any_selected,
                },
            );
            Control::Select {
                items,
                test_id: field.data_test_id.clone(),
            }
        }
        FieldKind::Radio => Control::RadioGroup {
            group: field.field_id.clone(),
            items: choice_items(field, value.as_text()).collect(),
        },
        FieldKind::Checkbox => Control::Checkbox {
            checked: value.as_bool(),
            test_id: field.data_test_id.clone(),
        },
        FieldKind::Unsupported(_) => Control::Nothing,
    }
}

/// Dropdown value after stepping one entry forward or backward.
/// The "Select..." entry (empty value) is part of the cycle.
pub fn cycle_select(field: &FormField, current: &str, forward: bool) -> String {
    let values: Vec<&str> = std::iter::once("")
        .chain(field.options.iter().map(|o| o.value.as_str()))
        .collect();
    let index = values.iter().position(|v| *v == current).unwrap_or(0);
    let next = if forward {
        (index + 1) % values.len()
    } else if index == 0 {
        values.len() - 1
    } else {
        index - 1
    };
    values[next].to_string()
}

fn focus_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn control_block(field: &FormField, test_id: &str, is_active: bool) -> Block<'static> {
    let mut title = format!(" {}", field.label);
    if field.required {
        title.push_str(" *");
    }
    title.push(' ');

    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(focus_style(is_active));
    if !test_id.is_empty() {
        block = block.title_top(
            Line::from(Span::styled(
                format!(" {test_id} "),
                Style::default().fg(Color::DarkGray),
            ))
            .right_aligned(),
        );
    }
    block
}

fn text_lines(value: &str, placeholder: &str, is_active: bool) -> Vec<Line<'static>> {
    let cursor = Span::styled(if is_active { "▌" } else { "" }, Style::default().fg(Color::Cyan));

    if value.is_empty() {
        let shown = if placeholder.is_empty() && !is_active {
            "(empty)".to_string()
        } else {
            placeholder.to_string()
        };
        return vec![Line::from(vec![
            cursor,
            Span::styled(shown, Style::default().fg(Color::DarkGray)),
        ])];
    }

    let mut lines: Vec<Line> = value
        .split('\n')
        .map(|l| Line::from(Span::styled(l.to_string(), focus_style(is_active))))
        .collect();
    if let Some(last) = lines.last_mut() {
        last.spans.push(cursor);
    }
    lines
}

fn choice_line(item: &ChoiceItem, marker: &str, is_highlighted: bool) -> Line<'static> {
    let style = if is_highlighted {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else if item.selected {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let mut spans = vec![Span::styled(format!("{marker} {}", item.label), style)];
    if !item.test_id.is_empty() {
        spans.push(Span::styled(
            format!("  [{}]", item.test_id),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Draw a field's control.
///
/// `option_cursor` is the highlighted radio option while the field has focus.
pub fn draw_control(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    control: &Control,
    is_active: bool,
    option_cursor: usize,
) {
    match control {
        Control::Input {
            kind,
            value,
            placeholder,
            test_id,
        } => {
            let mut block = control_block(field, test_id, is_active);
            if let Some(hint) = kind.hint() {
                block = block.title_bottom(
                    Line::from(Span::styled(
                        format!(" {hint} "),
                        Style::default().fg(Color::DarkGray),
                    ))
                    .right_aligned(),
                );
            }
            let paragraph = Paragraph::new(text_lines(value, placeholder, is_active)).block(block);
            frame.render_widget(paragraph, area);
        }
        Control::TextArea {
            value,
            placeholder,
            test_id,
        } => {
            let block = control_block(field, test_id, is_active);
            let paragraph = Paragraph::new(text_lines(value, placeholder, is_active))
                .wrap(Wrap { trim: false })
                .block(block);
            frame.render_widget(paragraph, area);
        }
        Control::Select { items, test_id } => {
            let current = items
                .iter()
                .find(|i| i.selected)
                .or_else(|| items.first());
            let line = match current {
                Some(item) => {
                    let mut spans = vec![
                        Span::styled("◀ ", focus_style(is_active)),
                        Span::styled(
                            item.label.clone(),
                            if item.value.is_empty() {
                                Style::default().fg(Color::DarkGray)
                            } else {
                                Style::default().fg(Color::White)
                            },
                        ),
                        Span::styled(" ▶", focus_style(is_active)),
                    ];
                    if !item.test_id.is_empty() {
                        spans.push(Span::styled(
                            format!("  [{}]", item.test_id),
                            Style::default().fg(Color::DarkGray),
                        ));
                    }
                    Line::from(spans)
                }
                None => Line::from(""),
            };
            let block = control_block(field, test_id, is_active);
            frame.render_widget(Paragraph::new(line).block(block), area);
        }
        Control::RadioGroup { items, .. } => {
            let lines: Vec<Line> = items
                .iter()
                .enumerate()
                .map(|(idx, item)| {
                    let marker = if item.selected { "(•)" } else { "( )" };
                    choice_line(item, marker, is_active && idx == option_cursor)
                })
                .collect();
            let block = control_block(field, "", is_active);
            frame.render_widget(Paragraph::new(lines).block(block), area);
        }
        Control::Checkbox { checked, test_id } => {
            let marker = if *checked { "[x]" } else { "[ ]" };
            let line = Line::from(Span::styled(
                format!("{marker} {}", if *checked { "Yes" } else { "No" }),
                focus_style(is_active),
            ));
            let block = control_block(field, test_id, is_active);
            frame.render_widget(Paragraph::new(line).block(block), area);
        }
        Control::Nothing => {}
    }
}

/// Draw a free-standing single-line input that is not backed by a schema field
pub fn draw_text_input(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    is_active: bool,
) {
    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(focus_style(is_active));
    let paragraph = Paragraph::new(text_lines(value, placeholder, is_active)).block(block);
    frame.render_widget(paragraph, area);
}

/// Draw help text at the bottom of a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
