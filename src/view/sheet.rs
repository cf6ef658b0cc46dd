//! Sheet overlay rendering.
//!
//! Draws the sheet at its animated vertical offset and applies the card
//! transform to the body: horizontal shift in cells, a faded foreground for
//! opacity. Rotation has no terminal analog and is intentionally not
//! rendered; it exists for pixel-based hosts reading the same snapshot.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::state::SheetController;
use crate::view::styles::SheetStyles;

/// Host-supplied content for the sheet body.
///
/// The controller is indifferent to what it displays; this is the demo's
/// minimal notion of "renderable".
#[derive(Debug, Clone, PartialEq)]
pub struct SheetContent {
    /// Title shown in the sheet's top border.
    pub title: String,
    /// Body lines, rendered top to bottom.
    pub lines: Vec<String>,
}

/// Render the sheet overlay into `area`.
///
/// Does nothing while the controller is closed or the animated offset is
/// fully below the viewport.
pub fn render_sheet(
    frame: &mut Frame,
    area: Rect,
    controller: &SheetController,
    content: &SheetContent,
    styles: &SheetStyles,
) {
    if !controller.is_visible() {
        return;
    }

    let state = controller.animation();
    let viewport = controller.viewport();

    // Animated offset in points mapped onto terminal rows.
    let top_row = (state.vertical_offset / viewport.height * f64::from(area.height)).round();
    let top_row = top_row.clamp(0.0, f64::from(area.height)) as u16;
    if top_row >= area.height {
        return;
    }

    let sheet_area = Rect {
        x: area.x,
        y: area.y + top_row,
        width: area.width,
        height: area.height - top_row,
    };

    // Clear the background for overlay effect
    frame.render_widget(Clear, sheet_area);

    let title = format!(" {} ", content.title);
    let block = Block::default()
        .title(
            Line::from(vec![
                Span::styled("── ", styles.grabber()),
                Span::styled(title, styles.title()),
                Span::styled(" ──", styles.grabber()),
            ])
            .alignment(Alignment::Center),
        )
        .borders(Borders::ALL)
        .border_type(ratatui::widgets::BorderType::Rounded)
        .border_style(styles.border());

    let inner = block.inner(sheet_area);
    frame.render_widget(block, sheet_area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Card transform: points to cells on each axis.
    let shift_cols =
        (state.card_dx / viewport.width * f64::from(area.width)).round() as i32;
    let shift_rows =
        (state.card_dy / viewport.height * f64::from(area.height)).round() as i32;
    let body_style = styles.body_for_opacity(state.card_opacity);

    let mut lines: Vec<Line> = Vec::with_capacity(inner.height as usize);
    for _ in 0..shift_rows.max(0) {
        lines.push(Line::default());
    }
    let skip_top = (-shift_rows).max(0) as usize;
    for text in content.lines.iter().skip(skip_top) {
        lines.push(shifted_line(text, shift_cols, inner.width, body_style));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Build one body line displaced horizontally by `shift` columns.
fn shifted_line(text: &str, shift: i32, width: u16, style: Style) -> Line<'static> {
    let width = width as usize;
    let shifted: String = if shift >= 0 {
        let pad = " ".repeat(shift as usize);
        let keep = width.saturating_sub(shift as usize);
        format!("{pad}{}", clip_to_width(text, keep))
    } else {
        skip_columns(text, (-shift) as usize)
    };
    Line::from(Span::styled(shifted, style))
}

/// Clip a string to at most `max` display columns (wide glyphs count as 2).
fn clip_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    for ch in text.chars() {
        let candidate_width = out.width() + unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if candidate_width > max {
            break;
        }
        out.push(ch);
    }
    out
}

/// Drop the first `skip` display columns of a string.
fn skip_columns(text: &str, skip: usize) -> String {
    let mut dropped = 0;
    let mut chars = text.chars();
    for ch in chars.by_ref() {
        dropped += unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if dropped >= skip {
            break;
        }
    }
    chars.collect()
}

// ===== Tests =====

#[cfg(test)]
#[path = "sheet_tests.rs"]
mod tests;
