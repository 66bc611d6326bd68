//! Draw a composed [`View`] onto a ratatui frame.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::pipeline::Stats;
use crate::ui::theme;
use crate::ui::view::{self, ContentView, RowView, View};

const INDEX_WIDTH: u16 = 4;
const CASE_WIDTH: u16 = 16;
const ACTION_WIDTH: u16 = 18;

/// `selected` is the cursor position among records, not table lines.
pub fn draw(frame: &mut Frame, view: &View, selected: usize) {
    let area = frame.area();
    match view {
        View::Loading => draw_loading(frame, area),
        View::Error { message } => draw_error(frame, area, message),
        View::Content(content) => draw_content(frame, area, content, selected),
    }
}

fn draw_loading(frame: &mut Frame, area: Rect) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .areas(area);

    let text = Text::from(vec![
        Line::from("⠋"),
        Line::from(view::LOADING_TEXT),
    ]);
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), middle);
}

fn draw_error(frame: &mut Frame, area: Rect, message: &str) {
    let mut lines: Vec<Line> = wrap(&view::error_text(message), area.width as usize)
        .into_iter()
        .map(|l| Line::styled(l, theme::STYLE_ERROR))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[r] ", theme::STYLE_HELP),
        Span::raw(view::RETRY_LABEL),
    ]));

    // The retry line is last; keep it on screen even if the message is cut.
    let height = (lines.len() as u16).min(area.height);
    if lines.len() > height as usize {
        let retry = lines.split_off(lines.len() - 1);
        lines.truncate(height.saturating_sub(1) as usize);
        lines.extend(retry);
    }

    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), middle);
}

fn draw_content(frame: &mut Frame, area: Rect, content: &ContentView, selected: usize) {
    let banner: Vec<String> = content
        .warning
        .as_deref()
        .map(|w| wrap(w, area.width as usize))
        .unwrap_or_default();
    let banner_height = banner.len() as u16;
    let [header, banner_area, stats, table, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(banner_height),
        Constraint::Length(4),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::styled(view::TITLE, theme::STYLE_TITLE),
            Line::styled(view::SUBTITLE, theme::STYLE_SUBTITLE),
        ]),
        header,
    );

    if !banner.is_empty() {
        let text: Vec<Line> = banner.into_iter().map(Line::from).collect();
        frame.render_widget(Paragraph::new(text).style(theme::STYLE_WARNING), banner_area);
    }

    draw_stats(frame, stats, &content.stats);
    draw_table(frame, table, &content.rows, selected);
    frame.render_widget(footer_line(content), footer);
}

fn draw_stats(frame: &mut Frame, area: Rect, stats: &Stats) {
    let cards = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
    let mut entries = vec![(view::TOTAL_LABEL, stats.total, theme::STYLE_STAT_NUMBER)];
    entries.extend(
        stats
            .by_category()
            .into_iter()
            .map(|(verdict, count)| (verdict.label(), count, theme::badge_style(Some(verdict)))),
    );

    for ((label, count, style), card) in entries.into_iter().zip(cards.iter()) {
        let body = Paragraph::new(vec![
            Line::styled(count.to_string(), style),
            Line::from(label),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::STYLE_BORDER),
        );
        frame.render_widget(body, *card);
    }
}

fn draw_table(frame: &mut Frame, area: Rect, rows: &[RowView], selected: usize) {
    // Borders plus the column gaps ratatui inserts between four columns.
    let query_width = area
        .width
        .saturating_sub(INDEX_WIDTH + CASE_WIDTH + ACTION_WIDTH + 2 + 3)
        .max(10) as usize;

    let header = Row::new(view::COLUMNS.iter().map(|c| Cell::from(*c))).style(theme::STYLE_HEADER);

    let mut lines = Vec::with_capacity(rows.len() + 1);
    for row in rows {
        lines.push(record_row(row));
        if let Some(detail) = &row.detail {
            lines.push(detail_row(detail, query_width));
        }
    }

    let mut state = TableState::default();
    if !rows.is_empty() {
        state.select(Some(table_line(rows, selected.min(rows.len() - 1))));
    }

    let table = Table::new(
        lines,
        [
            Constraint::Length(INDEX_WIDTH),
            Constraint::Min(10),
            Constraint::Length(CASE_WIDTH),
            Constraint::Length(ACTION_WIDTH),
        ],
    )
    .header(header)
    .row_highlight_style(theme::STYLE_SELECTED)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::STYLE_BORDER),
    );

    frame.render_stateful_widget(table, area, &mut state);
}

fn record_row(row: &RowView) -> Row<'static> {
    let badge = Line::from(vec![
        Span::styled(
            if row.badge.icon.is_empty() {
                String::new()
            } else {
                format!("{} ", row.badge.icon)
            },
            theme::badge_style(row.verdict),
        ),
        Span::styled(row.label.clone(), theme::badge_style(row.verdict)),
    ]);

    Row::new(vec![
        Cell::from(row.index.to_string()),
        Cell::from(row.query_preview.clone()),
        Cell::from(badge),
        Cell::from(row.toggle_label()),
    ])
}

fn detail_row(detail: &str, width: usize) -> Row<'static> {
    let mut text = vec![Line::styled(view::DETAIL_HEADING, theme::STYLE_HEADER)];
    text.extend(
        wrap(detail, width)
            .into_iter()
            .map(|l| Line::styled(l, theme::STYLE_DETAIL)),
    );
    let height = text.len() as u16;
    Row::new(vec![Cell::from(""), Cell::from(Text::from(text))]).height(height)
}

/// Table line of the record at `position`, counting inserted detail rows.
fn table_line(rows: &[RowView], position: usize) -> usize {
    position + rows[..position].iter().filter(|r| r.detail.is_some()).count()
}

fn footer_line(content: &ContentView) -> Paragraph<'static> {
    let mut spans = vec![
        Span::styled("[r] ", theme::STYLE_HELP),
        Span::raw(view::REFRESH_LABEL),
        Span::styled("   [Enter] ", theme::STYLE_HELP),
        Span::raw(view::SHOW_DETAILS),
        Span::styled("   [↑/↓] [q]", theme::STYLE_HELP),
    ];
    if let Some(at) = content.updated_at {
        spans.push(Span::styled(
            format!("   {}", at.format("%H:%M:%S UTC")),
            theme::STYLE_HELP,
        ));
    }
    Paragraph::new(Line::from(spans))
}

/// Greedy word wrap on display width. Words wider than `width` are split
/// between characters.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_width = 0;
        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            if line_width > 0 && line_width + 1 + word_width > width {
                out.push(std::mem::take(&mut line));
                line_width = 0;
            }
            if word_width > width {
                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(0);
                    if line_width > 0 && line_width + ch_width > width {
                        out.push(std::mem::take(&mut line));
                        line_width = 0;
                    }
                    line.push(ch);
                    line_width += ch_width;
                }
                continue;
            }
            if line_width > 0 {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
        }
        out.push(line);
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FactCheckRecord, RecordId, ResultSet};
    use crate::pipeline::FetchStatus;
    use crate::ui::expansion::ExpansionState;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::sync::Arc;

    fn make_terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(100, 30)).unwrap()
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn ready(records: Vec<FactCheckRecord>) -> FetchStatus {
        FetchStatus::Ready(Arc::new(ResultSet::new(records)))
    }

    fn record(id: i64, label: &str, query: &str, talk: &str) -> FactCheckRecord {
        FactCheckRecord {
            id: RecordId::Number(id),
            query_preview: query.into(),
            verdict: label.into(),
            explanation: talk.into(),
        }
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("alpha beta gamma delta", 11);
        assert_eq!(lines, ["alpha beta", "gamma delta"]);
        assert!(wrap("abcdefghij", 4).iter().all(|l| l.chars().count() <= 4));
        assert_eq!(wrap("", 5), [""]);
    }

    #[test]
    fn wrap_measures_display_width() {
        let lines = wrap("📝📝📝📝📝📝 ok", 6);
        assert_eq!(lines, ["📝📝📝", "📝📝📝", "ok"]);
        assert!(wrap("حقيقي 📝 زائف ✓", 7).iter().all(|l| l.width() <= 7));
    }

    #[test]
    fn table_line_counts_every_detail_row_above() {
        let records = vec![
            record(1, "", "a", "x"),
            record(1, "", "b", "y"),
            record(2, "", "c", "z"),
        ];
        let view = view::compose(&ready(records), &ExpansionState::Expanded(RecordId::Number(1)));
        assert_eq!(table_line(view.rows(), 1), 2);
        assert_eq!(table_line(view.rows(), 2), 4);
    }

    #[test]
    fn table_line_skips_detail_row() {
        let view = view::compose(
            &ready(vec![
                record(1, "", "a", "x"),
                record(2, "", "b", "y"),
                record(3, "", "c", "z"),
            ]),
            &ExpansionState::Expanded(RecordId::Number(1)),
        );
        let rows = view.rows();
        assert_eq!(table_line(rows, 0), 0);
        assert_eq!(table_line(rows, 2), 3);
    }

    #[test]
    fn loading_screen_renders() {
        let mut terminal = make_terminal();
        terminal.draw(|f| draw(f, &View::Loading, 0)).unwrap();
        assert!(screen(&terminal).contains("..."));
    }

    #[test]
    fn error_screen_offers_retry() {
        let mut terminal = make_terminal();
        let view = View::Error {
            message: "Failed to fetch data".into(),
        };
        terminal.draw(|f| draw(f, &view, 0)).unwrap();
        let text = screen(&terminal);
        assert!(text.contains("Failed to fetch data"));
        assert!(text.contains("[r]"));
    }

    const TRANSPORT_MESSAGE: &str = "network error: error sending request for url \
        (https://fact-check-api-32dx.onrender.com/dashboard/fact-checks/)";

    #[test]
    fn long_error_keeps_retry_on_screen() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let view = View::Error {
            message: TRANSPORT_MESSAGE.into(),
        };
        terminal.draw(|f| draw(f, &view, 0)).unwrap();
        let text = screen(&terminal);
        assert!(text.contains("fact-checks/)"));
        assert!(text.contains("[r]"));
    }

    #[test]
    fn error_on_tiny_terminal_still_shows_retry() {
        let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();
        let view = View::Error {
            message: TRANSPORT_MESSAGE.into(),
        };
        terminal.draw(|f| draw(f, &view, 0)).unwrap();
        assert!(screen(&terminal).contains("[r]"));
    }

    #[test]
    fn long_stale_warning_is_rendered_in_full() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let status = FetchStatus::Failed {
            message: TRANSPORT_MESSAGE.into(),
            stale: Arc::new(ResultSet::new(vec![record(1, "حقيقي", "kept-query", "")])),
        };
        let view = view::compose(&status, &ExpansionState::Collapsed);
        terminal.draw(|f| draw(f, &view, 0)).unwrap();
        let text = screen(&terminal);
        assert!(text.contains("network error"));
        assert!(text.contains("fact-checks/)"));
        assert!(text.contains("kept-query"));
    }

    #[test]
    fn content_screen_shows_rows_and_detail() {
        let mut terminal = make_terminal();
        let view = view::compose(
            &ready(vec![
                record(1, "unknown", "first-query", "first-talk"),
                record(2, "unknown", "second-query", "second-talk"),
            ]),
            &ExpansionState::Expanded(RecordId::Number(2)),
        );
        terminal.draw(|f| draw(f, &view, 1)).unwrap();
        let text = screen(&terminal);
        assert!(text.contains("first-query"));
        assert!(text.contains("second-query"));
        assert!(text.contains("second-talk"));
        assert!(!text.contains("first-talk"));
    }

    #[test]
    fn stale_content_shows_banner_and_cursor_past_end_is_clamped() {
        let mut terminal = make_terminal();
        let status = FetchStatus::Failed {
            message: "offline-now".into(),
            stale: Arc::new(ResultSet::new(vec![record(1, "زائف", "only-query", "")])),
        };
        let view = view::compose(&status, &ExpansionState::Collapsed);
        terminal.draw(|f| draw(f, &view, 9)).unwrap();
        let text = screen(&terminal);
        assert!(text.contains("offline-now"));
        assert!(text.contains("only-query"));
    }
}
