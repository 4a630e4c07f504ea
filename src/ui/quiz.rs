use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::theme::{CREAM, GOLD, GREEN, MUTED, OXBLOOD};
use crate::app::App;
use crate::models::Feedback;

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let round = app.round();
    let Some(question) = round.question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_status(frame, chunks[0], round.score(), round.remaining_secs());
    render_definition(frame, chunks[1], &question.prompt);
    render_options(
        frame,
        chunks[2],
        &question.options,
        app.selected_option(),
        round.feedback().is_some(),
    );
    render_feedback(frame, chunks[3], round.feedback());
    render_controls(frame, chunks[4]);
}

fn render_status(frame: &mut Frame, area: Rect, score: usize, remaining_secs: u64) {
    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let title = Paragraph::new("GENTLEMEN'S LEXICON").fg(MUTED);
    frame.render_widget(title, halves[0]);

    let status = Line::from(vec![
        Span::styled("Score: ", Style::default().fg(MUTED)),
        Span::styled(score.to_string(), Style::default().fg(GOLD).bold()),
        Span::styled("   Time: ", Style::default().fg(MUTED)),
        Span::styled(format!("{}s", remaining_secs), Style::default().fg(GOLD).bold()),
    ]);
    frame.render_widget(Paragraph::new(status).alignment(Alignment::Right), halves[1]);
}

fn render_definition(frame: &mut Frame, area: Rect, prompt: &str) {
    let widget = Paragraph::new(prompt)
        .wrap(Wrap { trim: true })
        .fg(CREAM)
        .bold()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(MUTED)
                .title(" Definition ")
                .title_style(Style::default().fg(GOLD))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    options: &[String],
    selected: usize,
    revealing: bool,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, (option, label)) in options.iter().zip(OPTION_LABELS).enumerate() {
        let is_selected = index == selected;
        let style = match (is_selected, revealing) {
            (true, false) => Style::default().fg(GOLD).bold(),
            (true, true) => Style::default().fg(CREAM).bold(),
            (false, _) => Style::default().fg(Color::Gray),
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_feedback(frame: &mut Frame, area: Rect, feedback: Option<Feedback>) {
    let line = match feedback {
        Some(Feedback::Right) => Line::from("Correct".fg(GREEN)),
        Some(Feedback::Wrong) => Line::from("Try again".fg(OXBLOOD)),
        None => Line::from(""),
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  enter pick  ·  q quit")
        .alignment(Alignment::Center)
        .fg(MUTED);
    frame.render_widget(widget, area);
}
