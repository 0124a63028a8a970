use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{ActiveQuestion, Category, Question};
use crate::revision::{short_theme_label, RevisionBrowser};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let browser = app.revision();
    let Some(question) = browser.current() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], browser, question);
    for (offset, category) in Category::ORDER.into_iter().enumerate() {
        render_section(frame, chunks[offset + 1], browser, question, category);
    }
    super::render_controls(
        frame,
        chunks[4],
        "h/l previous/next  ·  r random  ·  1/2/3 show answer  ·  esc home",
    );
}

fn render_header(frame: &mut Frame, area: Rect, browser: &RevisionBrowser, question: &Question) {
    let (position, total) = browser.position();
    let theme = if area.width < 60 {
        short_theme_label(&question.theme)
    } else {
        question.theme.as_str()
    };

    let left = Line::from(vec![
        Span::styled(question.display_name(), Style::default().fg(Color::Cyan).bold()),
        Span::styled(format!("  {}", theme), Style::default().fg(Color::DarkGray)),
    ]);
    let counter = Paragraph::new(format!("Question {} / {}", position, total))
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);

    frame.render_widget(Paragraph::new(left), area);
    frame.render_widget(counter, area);
}

fn render_section(
    frame: &mut Frame,
    area: Rect,
    browser: &RevisionBrowser,
    question: &Question,
    category: Category,
) {
    let section = question.section(category);
    let mut lines = vec![Line::from(Span::styled(
        section.question(),
        Style::default().fg(Color::White).bold(),
    ))];

    if browser.is_revealed(category) {
        match section {
            ActiveQuestion::Vehicle(vehicle) => {
                lines.push(Line::from(vehicle.answer.text.as_str().fg(Color::Green)));
                if let Some(src) = vehicle.answer.image_path() {
                    lines.push(Line::from(Span::styled(
                        format!("[image] {}", src),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
            }
            ActiveQuestion::Knowledge(knowledge) => {
                for line in knowledge.answer.display_lines() {
                    lines.push(Line::from(line.fg(Color::Green)));
                }
            }
        }
    } else {
        lines.push(Line::from(Span::styled(
            format!("[{}] afficher", category.index() + 1),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(category.label())
            .borders(Borders::TOP)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}
