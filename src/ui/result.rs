use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::theme::{CREAM, GOLD, GREEN, MUTED, OXBLOOD};
use crate::app::App;
use crate::models::{AnswerRecord, EndReason};

const PROMPT_PREVIEW_LENGTH: usize = 40;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let round = app.round();

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(
        frame,
        chunks[1],
        round.score(),
        round.history().len(),
        round.end_reason(),
    );
    render_answer_breakdown(frame, chunks[2], round.history(), app.result_scroll());
    render_controls(frame, chunks[3]);
}

fn end_reason_text(reason: Option<EndReason>) -> &'static str {
    match reason {
        Some(EndReason::TimeUp) => "Time's up",
        Some(EndReason::Exhausted) => "Every term dealt",
        None => "",
    }
}

fn render_score_summary(
    frame: &mut Frame,
    area: Rect,
    score: usize,
    answered: usize,
    reason: Option<EndReason>,
) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled("FINAL SCORE", Style::default().fg(CREAM))),
        Line::from(""),
        Line::from(Span::styled(
            score.to_string(),
            Style::default().fg(GOLD).bold(),
        )),
        Line::from(
            format!("{}  ·  {} answered", end_reason_text(reason), answered).fg(MUTED),
        ),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(MUTED),
    );
    frame.render_widget(widget, area);
}

fn render_answer_breakdown(frame: &mut Frame, area: Rect, history: &[AnswerRecord], scroll: usize) {
    let lines: Vec<Line> = history
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let (symbol, color) = if record.correct {
                ("+", GREEN)
            } else {
                ("-", OXBLOOD)
            };

            let mut spans = vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(format!("{:2}. ", index + 1), Style::default().fg(MUTED)),
                Span::styled(record.answer.clone(), Style::default().fg(GOLD)),
                Span::styled(
                    format!("  {}", truncate_prompt(&record.prompt)),
                    Style::default().fg(Color::Gray),
                ),
            ];
            if !record.correct {
                spans.push(Span::styled(
                    format!("  (you picked {})", record.picked),
                    Style::default().fg(MUTED),
                ));
            }
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn truncate_prompt(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > PROMPT_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(PROMPT_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r play again  ·  q quit")
        .alignment(Alignment::Center)
        .fg(MUTED);
    frame.render_widget(widget, area);
}
