//! Wizard section rendering

use super::field_renderer::{control_for, draw_control, draw_help_text, Control};
use crate::app::App;
use crate::platform::{NEXT_SHORTCUT, PREV_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::forms::{FormField, SectionWizard, WizardButton, WizardCursor};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// A field prepared for drawing
struct FieldSlot<'a> {
    field: &'a FormField,
    control: Control,
    error: Option<&'a str>,
}

impl FieldSlot<'_> {
    fn height(&self) -> u16 {
        let control = match self.control {
            // Unsupported kinds still show their label
            Control::Nothing => 1,
            ref other => other.height(),
        };
        control.saturating_add(u16::from(self.error.is_some()))
    }
}

/// First field to draw so that the focused one fits in `available` rows
fn first_visible(heights: &[u16], focused: Option<usize>, available: u16) -> usize {
    let Some(focused) = focused else {
        return 0;
    };
    // Walk back from the focused field while the rows still fit
    let mut first = focused;
    let mut used = 0u32;
    for idx in (0..=focused).rev() {
        used += u32::from(heights[idx]);
        if used > u32::from(available) {
            break;
        }
        first = idx;
    }
    first
}

/// Draw the current wizard section
pub fn draw_wizard(frame: &mut Frame, area: Rect, app: &App) {
    let Some(wizard) = &app.state.wizard else {
        return;
    };
    let cursor = &app.state.cursor;

    let Some(section) = wizard.current_section() else {
        let block = Block::default()
            .title(" Form ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(
            Paragraph::new("This form has no sections.").block(block),
            area,
        );
        return;
    };

    let block = Block::default()
        .title(format!(" {} ", section.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Description
            Constraint::Min(3),                // Fields
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Length(1),             // Help text
        ])
        .margin(1)
        .split(inner);

    frame.render_widget(
        Paragraph::new(section.description.as_str())
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    draw_fields(frame, chunks[1], wizard, cursor, &section.fields);
    draw_buttons(frame, chunks[2], wizard, cursor, section.fields.len());

    let help = if wizard.is_last_section() {
        format!("Tab/↑↓: move | ←→: choose | Space: select | {SUBMIT_SHORTCUT}: submit | {PREV_SHORTCUT}: back")
    } else {
        format!("Tab/↑↓: move | ←→: choose | Space: select | {NEXT_SHORTCUT}: next | {PREV_SHORTCUT}: back")
    };
    draw_help_text(frame, chunks[3], &help);
}

fn draw_fields(
    frame: &mut Frame,
    area: Rect,
    wizard: &SectionWizard,
    cursor: &WizardCursor,
    fields: &[FormField],
) {
    let slots: Vec<FieldSlot> = fields
        .iter()
        .map(|field| FieldSlot {
            field,
            control: control_for(field, &wizard.value(field)),
            error: wizard.error(&field.field_id),
        })
        .collect();
    let heights: Vec<u16> = slots.iter().map(FieldSlot::height).collect();
    let focused = cursor.field_index(fields.len());
    let first = first_visible(&heights, focused, area.height);

    let mut y = area.y;
    let bottom = area.y + area.height;
    for (idx, slot) in slots.iter().enumerate().skip(first) {
        let height = heights[idx];
        if y.saturating_add(height) > bottom {
            break;
        }
        let is_active = focused == Some(idx);
        let error_rows = u16::from(slot.error.is_some());
        let control_area = Rect::new(area.x, y, area.width, height - error_rows);

        if slot.control == Control::Nothing {
            frame.render_widget(
                Paragraph::new(slot.field.label.as_str()).style(Style::default().fg(Color::DarkGray)),
                control_area,
            );
        } else {
            draw_control(frame, control_area, slot.field, &slot.control, is_active, cursor.option);
        }

        if let Some(error) = slot.error {
            let error_area = Rect::new(area.x + 1, y + height - 1, area.width.saturating_sub(1), 1);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    error,
                    Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
                ))),
                error_area,
            );
        }

        y += height;
    }
}

fn draw_buttons(
    frame: &mut Frame,
    area: Rect,
    wizard: &SectionWizard,
    cursor: &WizardCursor,
    field_count: usize,
) {
    let on_buttons = cursor.on_buttons(field_count);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Min(0),
            Constraint::Length(14),
        ])
        .split(area);

    if !wizard.is_first_section() {
        render_action_button(
            frame,
            chunks[0],
            "Prev",
            on_buttons && cursor.button == WizardButton::Prev,
            true,
            Some(Color::Gray),
        );
    }

    let (label, color) = if wizard.is_last_section() {
        ("Submit", Color::Green)
    } else {
        ("Next", Color::Blue)
    };
    render_action_button(
        frame,
        chunks[2],
        label,
        on_buttons && cursor.button == WizardButton::Forward,
        true,
        Some(color),
    );
}
