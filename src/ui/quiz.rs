use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{AnswerChoice, Category, ChoiceContent};
use crate::quiz::{CategoryStatus, PendingAdvance, ProgressState, QuizSession, ScoreClass};

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_progress(frame, chunks[0], session);
    render_tabs(frame, chunks[1], session);
    render_question_text(frame, chunks[2], session);
    render_options(frame, chunks[3], session, app.highlighted());
    render_feedback(frame, chunks[4], session);
    render_stats(frame, chunks[5], session);
    super::render_controls(
        frame,
        chunks[6],
        "j/k move  ·  space pick  ·  enter validate/next  ·  h/l category  ·  n random  ·  esc home",
    );
}

fn render_progress(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let mut spans = vec![Span::styled("Série ", Style::default().fg(Color::DarkGray))];
    for entry in session.progress_entries() {
        let color = super::score_color(ScoreClass::from_score(entry.score.map(i64::from)));
        let style = match entry.state {
            ProgressState::Completed => Style::default().fg(color),
            ProgressState::Current => Style::default().fg(color).bold().underlined(),
            ProgressState::Upcoming => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled(format!(" {} ", entry.value), style));
    }

    let question = session.current_question();
    let header = Line::from(spans);
    let title = Paragraph::new(question.display_name())
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(Paragraph::new(header), area);
    frame.render_widget(title, area);
}

fn render_tabs(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let statuses = session.category_statuses();
    let mut spans = Vec::with_capacity(Category::ORDER.len() * 2);

    for (category, status) in statuses.iter() {
        let mark = match status {
            Some(CategoryStatus::Correct) => "✓",
            Some(CategoryStatus::Incorrect) => "✗",
            None => "·",
        };
        let style = if category == session.active_category() {
            Style::default().fg(Color::Cyan).bold().reversed()
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} {} ", mark, category.label()), style));
        spans.push(Span::raw("  "));
    }

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let question = session.current_question();
    let lines = vec![
        Line::from(question.theme.as_str().fg(Color::DarkGray)),
        Line::from(Span::styled(
            session.active_question().question(),
            Style::default().fg(Color::White).bold(),
        )),
    ];
    let widget = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, session: &QuizSession, highlighted: usize) {
    let choices = session.answer_choices();
    let selected = session.selected_choice();
    let validated = session.is_validated();
    let mut lines: Vec<Line> = Vec::with_capacity(choices.len() * 2);

    for (index, choice) in choices.iter().enumerate() {
        let is_selected = selected == Some(choice.id.as_str());
        let style = option_style(choice, is_selected, validated);
        let cursor = if index == highlighted && !validated { ">" } else { " " };
        let check = if is_selected { "[x]" } else { "[ ]" };
        let label = OPTION_LABELS.get(index).copied().unwrap_or('?');

        lines.push(Line::from(vec![
            Span::styled(format!(" {} {} ", cursor, check), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(option_text(choice), style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn option_style(choice: &AnswerChoice, is_selected: bool, validated: bool) -> Style {
    if validated && choice.is_correct {
        Style::default().fg(Color::Green).bold()
    } else if validated && is_selected {
        Style::default().fg(Color::Red).bold()
    } else if is_selected {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn option_text(choice: &AnswerChoice) -> String {
    match &choice.content {
        ChoiceContent::Text(text) => text.clone(),
        ChoiceContent::Image(src) => format!("[image] {}", src),
    }
}

fn render_feedback(frame: &mut Frame, area: Rect, session: &QuizSession) {
    if !session.is_validated() {
        return;
    }

    let verdict = if session.was_correct() {
        Line::from(Span::styled(
            "Bonne réponse !",
            Style::default().fg(Color::Green).bold(),
        ))
    } else {
        Line::from(Span::styled(
            "Mauvaise réponse.",
            Style::default().fg(Color::Red).bold(),
        ))
    };

    let mut lines = vec![
        verdict,
        Line::from(vec![
            Span::styled("Réponse : ", Style::default().fg(Color::DarkGray)),
            Span::raw(session.correct_answer_text()),
        ]),
    ];
    if let Some(pending) = session.pending_advance() {
        let next = match pending {
            PendingAdvance::Category(target) => format!("enter → {}", target.label()),
            PendingAdvance::Question => "enter → question suivante".to_string(),
            PendingAdvance::Result => "enter → voir le résultat".to_string(),
        };
        lines.push(Line::from(Span::styled(next, Style::default().fg(Color::Yellow))));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_stats(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let spans: Vec<Span> = session
        .stats()
        .iter()
        .map(|(category, stats)| {
            Span::styled(
                format!("{} {}/{}   ", category.label(), stats.correct, stats.asked),
                Style::default().fg(Color::DarkGray),
            )
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
