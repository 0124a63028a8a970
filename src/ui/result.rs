use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::quiz::{ResultTier, ScoreClass, MAX_QUESTIONS, POINTS_PER_QUESTION};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let percentage = session.series_percentage();
    let tier = session.result_tier();

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    let summary = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RÉSULTAT DE LA SÉRIE",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} / {}  ({}%)",
                session.total_correct(),
                MAX_QUESTIONS as u32 * POINTS_PER_QUESTION,
                percentage
            ),
            Style::default().fg(tier_color(tier)).bold(),
        )),
        Line::from(""),
    ];
    let widget = Paragraph::new(summary).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);

    let message = Paragraph::new(session.result_message())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .fg(Color::White);
    frame.render_widget(message, chunks[2]);

    let lines: Vec<Line> = session
        .question_scores()
        .iter()
        .enumerate()
        .map(|(index, score)| {
            let color = super::score_color(ScoreClass::from_score(Some(i64::from(score.correct))));
            Line::from(vec![
                Span::styled(
                    format!("{:2}. ", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{}/{}", score.correct, score.total),
                    Style::default().fg(color),
                ),
            ])
        })
        .collect();
    let breakdown = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(breakdown, chunks[3]);

    super::render_controls(frame, chunks[4], "r new series  ·  esc home  ·  q quit");
}

fn tier_color(tier: ResultTier) -> Color {
    match tier {
        ResultTier::Excellent => Color::Green,
        ResultTier::Good => Color::Cyan,
        ResultTier::Encouraging => Color::Yellow,
        ResultTier::KeepPracticing => Color::Red,
    }
}
