use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::theme::{CREAM, GOLD, MUTED};
use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(11),
        Constraint::Fill(1),
    ])
    .split(area);

    let round = app.round();
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "GENTLEMEN'S LEXICON",
            Style::default().fg(GOLD).bold(),
        )),
        Line::from(""),
        Line::from("Match the definition to the correct Brit-crime slang.".fg(CREAM)),
        Line::from(""),
        Line::from(
            format!(
                "{} terms · {} seconds",
                round.bank_len(),
                round.config().duration.as_secs()
            )
            .fg(MUTED),
        ),
        Line::from(""),
        Line::from(Span::styled("ENTER", Style::default().fg(GOLD).bold())),
        Line::from("to start  ·  q to quit".fg(MUTED)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(GOLD),
    );

    frame.render_widget(widget, chunks[1]);
}
