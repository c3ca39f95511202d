//! TUI rendering for the Hilo simulator using ratatui.
//!
//! The simulator draws what the hardware would show: four seven-segment
//! digits fed from the display latch, a status line, and the key hints. All
//! game state lives in `hilo-core`; this crate renders read-only views and
//! translates key events into raw button pulses.

mod input;
mod segment;
mod theme;

pub use input::{handle_events, handle_key};
pub use segment::{DIGIT_COLS, DIGIT_GAP, DIGIT_ROWS, pattern_rows, segment_at};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use hilo_core::App;
use hilo_types::GamePhase;

/// Width of the four-digit art block in terminal cells.
const ART_WIDTH: u16 = (4 * segment::DIGIT_COLS + 3 * segment::DIGIT_GAP) as u16;

/// Ticks per half-period of the idle hint blink.
const BLINK_TICKS: u64 = 512;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(1),    // Display panel
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    draw_display(frame, app, chunks[0], &palette, &glyphs);
    draw_status_bar(frame, app, chunks[1], &palette, &glyphs);
    draw_hints(frame, chunks[2], &palette, &glyphs);
}

fn draw_display(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .title(" Hilo ")
        .title_style(Style::default().fg(palette.primary))
        .style(Style::default().bg(palette.bg_panel));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = seven_segment_lines(app, palette, glyphs);
    if app.session().phase == GamePhase::Idle && idle_hint_visible(app) {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "press s to start",
            Style::default().fg(palette.text_secondary),
        ));
    }

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let art = centered(inner, ART_WIDTH.max(16), height);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        art,
    );
}

/// The four latched digits as styled art rows, leftmost position first.
fn seven_segment_lines(app: &App, palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
    let lit = Style::default().fg(palette.segment_lit);
    let ghost = Style::default().fg(palette.segment_ghost);

    (0..segment::DIGIT_ROWS)
        .map(|row| {
            let mut spans = Vec::new();
            for position in (0..4usize).rev() {
                let pattern = app.latch().position(position);
                for col in 0..segment::DIGIT_COLS {
                    let (ch, style) = match segment::segment_at(row, col) {
                        Some(seg) if pattern.lit(seg) => (glyphs.segment_on, lit),
                        Some(_) => (glyphs.segment_on, ghost),
                        None => (glyphs.segment_off, lit),
                    };
                    spans.push(Span::styled(ch.to_string(), style));
                }
                if position > 0 {
                    spans.push(Span::raw(" ".repeat(segment::DIGIT_GAP)));
                }
            }
            Line::from(spans)
        })
        .collect()
}

fn idle_hint_visible(app: &App) -> bool {
    app.ui_options().reduced_motion || (app.tick_count() / BLINK_TICKS) % 2 == 0
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let session = app.session();
    let phase = session.phase;

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            format!(" {} ", phase.display_name()),
            styles::phase_badge(phase, palette),
        ),
        Span::styled(glyphs.separator, styles::key_hint(palette)),
        Span::styled(
            format!("attempts {}", session.attempts),
            Style::default().fg(palette.text_primary),
        ),
        Span::styled(glyphs.separator, styles::key_hint(palette)),
        Span::styled(
            format!("tick {}", app.tick_count()),
            Style::default().fg(palette.text_muted),
        ),
    ];
    if app.paused() {
        spans.push(Span::styled(glyphs.separator, styles::key_hint(palette)));
        spans.push(Span::styled(
            format!("{} paused", glyphs.paused),
            Style::default().fg(palette.warning),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_hints(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let pairs: [(&str, &str); 6] = [
        ("s", "start"),
        ("i/+", "guess"),
        (glyphs.submit_key, "submit"),
        ("r", "reset"),
        ("p", "pause"),
        ("q", "quit"),
    ];

    let plain: String = pairs
        .iter()
        .map(|(key, label)| format!("{key} {label}"))
        .collect::<Vec<_>>()
        .join(glyphs.separator);

    // A narrow terminal gets the one hint that matters.
    let fits = plain.width() + 1 <= usize::from(area.width);
    let shown: &[(&str, &str)] = if fits { &pairs } else { &pairs[5..] };

    let mut spans = vec![Span::raw(" ")];
    for (index, (key, label)) in shown.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(glyphs.separator, styles::key_hint(palette)));
        }
        spans.push(Span::styled(
            (*key).to_string(),
            styles::key_highlight(palette),
        ));
        spans.push(Span::styled(
            format!(" {label}"),
            styles::key_hint(palette),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hilo_core::HiloConfig;
    use hilo_types::ui::UiOptions;
    use hilo_types::{Glyph, SegmentPattern};

    #[test]
    fn centered_never_exceeds_the_area() {
        let area = Rect::new(2, 3, 10, 4);
        let rect = centered(area, 40, 9);
        assert_eq!(rect, area);

        let rect = centered(area, 4, 2);
        assert_eq!(rect, Rect::new(5, 4, 4, 2));
    }

    #[test]
    fn art_lines_span_four_digits() {
        let mut app = App::new(&HiloConfig::default());
        app.advance_frame(8);
        let palette = palette(app.ui_options());
        let glyphs = glyphs(app.ui_options());
        let lines = seven_segment_lines(&app, &palette, &glyphs);
        assert_eq!(lines.len(), DIGIT_ROWS);
        for line in &lines {
            assert_eq!(line.width(), usize::from(ART_WIDTH));
        }
    }

    #[test]
    fn latched_guess_digit_reaches_the_art() {
        let mut app = App::new(&HiloConfig::default());
        app.advance_frame(8);
        // Idle shows guess 1 at the rightmost position.
        assert_eq!(app.latch().position(0), SegmentPattern::from(Glyph::One));

        let palette = palette(app.ui_options());
        let glyphs = glyphs(app.ui_options());
        let lines = seven_segment_lines(&app, &palette, &glyphs);
        let row1: String = lines[1].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(row1.ends_with(&glyphs.segment_on.to_string()));
    }

    #[test]
    fn idle_hint_is_static_under_reduced_motion() {
        let config = HiloConfig {
            app: Some(UiOptions {
                reduced_motion: true,
                ..UiOptions::default()
            }),
            timing: None,
        };
        let mut app = App::new(&config);
        for _ in 0..200 {
            app.advance_frame(8);
            assert!(idle_hint_visible(&app));
        }
    }
}
