use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

const ENTRIES: [(&str, &str); 2] = [
    ("Quiz", "Séries de 5 questions notées"),
    ("Révision", "Parcourir les fiches et afficher les réponses"),
];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(13),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    let bank_size = app.session().bank().len();
    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "PERMIS · VÉRIFICATIONS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} fiches · véhicule, sécurité routière, secours", bank_size),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(""),
    ];

    for (index, (title, subtitle)) in ENTRIES.iter().enumerate() {
        let is_selected = index == app.menu_index();
        let style = if is_selected {
            Style::default().fg(Color::Green).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };
        content.push(Line::from(Span::styled(format!("{} {}", marker, title), style)));
        content.push(Line::from(subtitle.fg(Color::DarkGray)));
    }

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
    super::render_controls(frame, chunks[3], "j/k choose  ·  enter open  ·  q quit");
}
