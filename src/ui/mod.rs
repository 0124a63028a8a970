mod home;
mod quiz;
mod result;
mod revision;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::models::Screen;
use crate::quiz::ScoreClass;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen {
        Screen::Home => home::render(frame, area, app),
        Screen::Quiz if app.session().show_results() => result::render(frame, area, app),
        Screen::Quiz => quiz::render(frame, area, app),
        Screen::Revision => revision::render(frame, area, app),
    }
}

fn score_color(class: ScoreClass) -> Color {
    match class {
        ScoreClass::Neutral => Color::DarkGray,
        ScoreClass::Tier0 => Color::Red,
        ScoreClass::Tier1 => Color::LightRed,
        ScoreClass::Tier2 => Color::Yellow,
        ScoreClass::Tier3 => Color::Green,
    }
}

fn render_controls(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
