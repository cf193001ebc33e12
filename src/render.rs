//! Alert rendering.
//!
//! Draws the session's active dialog as a centered overlay. The embedding
//! application calls [`render_alert`] at the end of its draw closure so the
//! dialog lands on top of everything else.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use crate::actions::{ActionSpec, ButtonRole};
use crate::session::DialogSession;
use crate::theme::{
    ACTIVE_HIGHLIGHT, DESTRUCTIVE_TEXT, DIALOG_TEXT, FIELD_BORDER, FIELD_BORDER_FOCUSED,
    MESSAGE_TEXT, PLACEHOLDER_TEXT, POPUP_BORDER,
};
use crate::variants::{
    DialogContent, ImageView, ProgressDialog, TextFieldHandle, TextFieldsDialog,
};

/// Width of an alert dialog; the image variant may widen it.
const DIALOG_WIDTH: u16 = 50;

/// Rows taken by one text-field box (value row plus borders).
const FIELD_BOX_HEIGHT: u16 = 3;

/// Render the active alert dialog, if one is visible.
pub fn render_alert(frame: &mut Frame, session: &DialogSession) {
    if !session.lifecycle().is_visible() {
        return;
    }
    let Some(content) = session.active_content() else {
        return;
    };

    let width = dialog_width(content).min(frame.area().width);
    let inner_width = width.saturating_sub(2);
    let height = dialog_height(content, inner_width);
    let area = centered_rect(width, height, frame.area());

    frame.render_widget(Clear, area);
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    if let Some(title) = dialog_title(content) {
        block = block
            .title(format!(" {} ", title))
            .title_alignment(Alignment::Center);
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match content {
        DialogContent::Progress(dialog) => render_progress_body(frame, inner, dialog),
        DialogContent::TextFields(dialog) => render_text_fields_body(frame, inner, dialog),
        other => {
            let lines = body_lines(other, inner_width);
            frame.render_widget(Paragraph::new(lines), inner);
        }
    }
}

fn dialog_width(content: &DialogContent) -> u16 {
    match content {
        DialogContent::Image(dialog) => DIALOG_WIDTH.max(dialog.view.width() + 2),
        _ => DIALOG_WIDTH,
    }
}

fn dialog_title(content: &DialogContent) -> Option<&str> {
    match content {
        DialogContent::Buttons(dialog) => dialog.title.as_deref(),
        DialogContent::Message(dialog) => dialog.title.as_deref(),
        DialogContent::Activity(dialog) => dialog.title.as_deref(),
        DialogContent::Progress(dialog) => dialog.title.as_deref(),
        DialogContent::TextFields(dialog) => dialog.title.as_deref(),
        DialogContent::Image(dialog) => dialog.buttons.title.as_deref(),
    }
}

/// Total dialog height including borders.
fn dialog_height(content: &DialogContent, inner_width: u16) -> u16 {
    match content {
        DialogContent::Progress(dialog) => {
            let message_rows = dialog
                .message
                .as_deref()
                .map(|message| wrap_text(message, inner_width as usize).len() as u16 + 1)
                .unwrap_or(0);
            let label_rows = u16::from(dialog.label.is_some());
            1 + message_rows + 1 + label_rows + 2
        }
        DialogContent::TextFields(dialog) => {
            let message_rows = dialog
                .message
                .as_deref()
                .map(|message| wrap_text(message, inner_width as usize).len() as u16)
                .unwrap_or(0);
            message_rows + FIELD_BOX_HEIGHT * dialog.fields.len() as u16 + 1 + 2
        }
        other => body_lines(other, inner_width).len() as u16 + 2,
    }
}

/// Body lines for the variants made of plain text rows.
fn body_lines(content: &DialogContent, inner_width: u16) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];
    match content {
        DialogContent::Buttons(dialog) => {
            if let Some(message) = dialog.message.as_deref() {
                lines.extend(message_lines(message, inner_width));
                lines.push(Line::from(""));
            }
            lines.push(button_row(&dialog.actions, dialog.selected));
        }
        DialogContent::Message(dialog) => {
            if let Some(message) = dialog.message.as_deref() {
                lines.extend(message_lines(message, inner_width));
            }
        }
        DialogContent::Activity(dialog) => {
            let spinner = Span::styled(
                format!("  {} ", dialog.indicator.frame()),
                Style::default().fg(dialog.indicator.color()),
            );
            let text = Span::styled(
                dialog.message.clone().unwrap_or_default(),
                Style::default().fg(DIALOG_TEXT),
            );
            lines.push(Line::from(vec![spinner, text]));
        }
        DialogContent::Image(dialog) => {
            if let Some(message) = dialog.buttons.message.as_deref() {
                lines.extend(message_lines(message, inner_width));
                lines.push(Line::from(""));
            }
            lines.extend(image_lines(&dialog.view));
            lines.push(Line::from(""));
            lines.push(button_row(&dialog.buttons.actions, dialog.buttons.selected));
        }
        DialogContent::Progress(_) | DialogContent::TextFields(_) => {}
    }
    lines
}

fn render_progress_body(frame: &mut Frame, inner: Rect, dialog: &ProgressDialog) {
    let mut y = inner.y + 1;
    if let Some(message) = dialog.message.as_deref() {
        let lines = message_lines(message, inner.width);
        let rows = lines.len() as u16;
        frame.render_widget(
            Paragraph::new(lines),
            Rect {
                x: inner.x,
                y,
                width: inner.width,
                height: rows.min(inner.height),
            },
        );
        y += rows + 1;
    }

    let gauge_area = Rect {
        x: inner.x + 2,
        y,
        width: inner.width.saturating_sub(4),
        height: 1,
    };
    let gauge = Gauge::default()
        .ratio(dialog.bar.ratio())
        .gauge_style(
            Style::default()
                .fg(dialog.bar.progress_color())
                .bg(dialog.bar.track_color()),
        )
        .use_unicode(true)
        .label("");
    frame.render_widget(gauge, gauge_area);
    y += 1;

    if let Some(label) = &dialog.label {
        let line = Line::from(Span::styled(
            label.text().to_string(),
            Style::default().fg(DIALOG_TEXT),
        ))
        .centered();
        frame.render_widget(
            Paragraph::new(line),
            Rect {
                x: inner.x,
                y,
                width: inner.width,
                height: 1,
            },
        );
    }
}

fn render_text_fields_body(frame: &mut Frame, inner: Rect, dialog: &TextFieldsDialog) {
    let mut y = inner.y;
    if let Some(message) = dialog.message.as_deref() {
        let lines = message_lines(message, inner.width);
        let rows = lines.len() as u16;
        frame.render_widget(
            Paragraph::new(lines),
            Rect {
                x: inner.x,
                y,
                width: inner.width,
                height: rows.min(inner.height),
            },
        );
        y += rows;
    }

    for (index, field) in dialog.fields.iter().enumerate() {
        let focused = index == dialog.focused;
        let area = Rect {
            x: inner.x + 1,
            y,
            width: inner.width.saturating_sub(2),
            height: FIELD_BOX_HEIGHT,
        };
        render_field_box(frame, area, field, focused);
        y += FIELD_BOX_HEIGHT;
    }

    let hint = Line::from(Span::styled(
        format!(
            "Enter: {}    Esc: {}",
            dialog.done_title, dialog.cancel_title
        ),
        Style::default().fg(MESSAGE_TEXT),
    ))
    .centered();
    frame.render_widget(
        Paragraph::new(hint),
        Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: 1,
        },
    );
}

fn render_field_box(frame: &mut Frame, area: Rect, field: &TextFieldHandle, focused: bool) {
    let border_color = if focused {
        FIELD_BORDER_FOCUSED
    } else {
        FIELD_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let field_inner = block.inner(area);
    frame.render_widget(block, area);

    let state = field.state();
    let display = state.display_text();
    let line = if display.is_empty() && !focused {
        Line::from(Span::styled(
            state.placeholder().unwrap_or_default().to_string(),
            Style::default().fg(PLACEHOLDER_TEXT),
        ))
    } else if focused {
        cursor_line(&display, state.cursor())
    } else {
        Line::from(Span::styled(display, Style::default().fg(DIALOG_TEXT)))
    };
    frame.render_widget(Paragraph::new(line), field_inner);
}

/// A field's text with the cursor cell reversed.
fn cursor_line(display: &str, cursor: usize) -> Line<'static> {
    let before: String = display.chars().take(cursor).collect();
    let at: String = display.chars().skip(cursor).take(1).collect();
    let after: String = display.chars().skip(cursor + 1).collect();
    let cursor_span = if at.is_empty() {
        Span::styled(" ".to_string(), Style::default().add_modifier(Modifier::REVERSED))
    } else {
        Span::styled(at, Style::default().add_modifier(Modifier::REVERSED))
    };
    Line::from(vec![
        Span::styled(before, Style::default().fg(DIALOG_TEXT)),
        cursor_span,
        Span::styled(after, Style::default().fg(DIALOG_TEXT)),
    ])
}

/// Render the action row, styled by role and selection.
fn button_row(actions: &[ActionSpec], selected: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(actions.len() * 2);
    for (index, action) in actions.iter().enumerate() {
        let mut style = match action.role {
            ButtonRole::Default => Style::default().fg(DIALOG_TEXT),
            ButtonRole::Cancel => Style::default().fg(DIALOG_TEXT).add_modifier(Modifier::BOLD),
            ButtonRole::Destructive => Style::default().fg(DESTRUCTIVE_TEXT),
        };
        if index == selected {
            style = style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(format!(" {} ", action.title), style));
        if index + 1 < actions.len() {
            spans.push(Span::raw("   "));
        }
    }
    Line::from(spans).centered()
}

fn message_lines(message: &str, inner_width: u16) -> Vec<Line<'static>> {
    wrap_text(message, inner_width as usize)
        .into_iter()
        .map(|line| {
            Line::from(Span::styled(line, Style::default().fg(MESSAGE_TEXT))).centered()
        })
        .collect()
}

fn image_lines(view: &ImageView) -> Vec<Line<'static>> {
    (0..view.height())
        .map(|y| {
            let spans: Vec<Span> = (0..view.width())
                .map(|x| {
                    let (top, bottom) = view.cell(x, y);
                    Span::styled("▀", Style::default().fg(top).bg(bottom))
                })
                .collect();
            Line::from(spans).centered()
        })
        .collect()
}

/// Greedy word wrap so computed heights match drawn rows exactly.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for segment in text.split('\n') {
        let mut current = String::new();
        for word in segment.split_whitespace() {
            let word_len = word.chars().count();
            let current_len = current.chars().count();
            if current.is_empty() {
                current = word.to_string();
            } else if current_len + 1 + word_len <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(current);
                current = word.to_string();
            }
        }
        lines.push(current);
    }
    lines
}

/// Create a centered rect of given size.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}
