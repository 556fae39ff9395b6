use crate::cards::{Card, Color as CardColor};
use crate::table::Player;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner, split_even};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(3),    // seats
            Constraint::Length(4), // status bar
        ])
        .split(f.area());

    let table = &app.table;
    let header = Paragraph::new(Line::from(format!(
        "Round: {}   Players: {}   Hand size: {}   Draw pile: {}   In play: {}",
        table.round(),
        table.players().len(),
        table.hand_size(),
        table.draw_pile().len(),
        table.total_cards(),
    )))
    .block(Block::default().title("rummy-rs").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    // Two rows of seats
    let seats_area = chunks[1];
    let total = table.players().len();
    let top = (total + 1) / 2;
    let rows = split_even(seats_area, if total > 1 { 2 } else { 1 }, Direction::Vertical);
    for (r, row) in rows.iter().enumerate() {
        let (start, count) = if r == 0 { (0, top) } else { (top, total - top) };
        if count == 0 {
            continue;
        }
        let cols = split_even(*row, count, Direction::Horizontal);
        for (c, seat_area) in cols.iter().enumerate() {
            let idx = start + c;
            if let Some(p) = table.players().get(idx) {
                render_seat(f, *seat_area, app, idx, p);
            }
        }
    }

    let status_area = chunks[2];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner(status_area));

    let mut left_info = if table.round() == 0 {
        vec![Line::from("No cards dealt yet, press Space to deal.")]
    } else {
        let drawn = app.last_drawn().map(card_span).unwrap_or_else(|| Span::raw("--"));
        vec![Line::from(vec![
            Span::raw(format!("Focus: {}   Last drawn: ", app.focus + 1)),
            drawn,
        ])]
    };
    if let Some(err) = app.error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    let right_keys =
        vec![Line::from("Space deal • D draw"), Line::from("? help • M menu • Q quit")];
    f.render_widget(Paragraph::new(left_info).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );

    if app.help_open() {
        draw_help(f);
    }
}

fn render_seat(f: &mut Frame, area: Rect, app: &AppState, idx: usize, p: &Player) {
    let mut title = format!("{} ({})", p.name(), p.id());
    if idx == app.focus {
        title.push_str(" [Focus]");
    }
    let mut block = Block::default().title(title).borders(Borders::ALL);
    if idx == app.focus {
        block = block.border_style(Style::default().fg(Color::Cyan));
    }

    let mut lines: Vec<Line> = Vec::with_capacity(p.hand().len() + 1);
    lines.push(Line::from(Span::styled(
        format!("Phase {} • {} cards", p.round(), p.hand().len()),
        Style::default().add_modifier(Modifier::DIM),
    )));
    // Wrap the hand five cards per line
    for chunk in p.hand().as_slice().chunks(5) {
        let mut spans = Vec::with_capacity(chunk.len() * 2);
        for card in chunk {
            spans.push(card_span(*card));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines), inner(area));
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 60, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Table:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Space: shuffle a fresh deck and deal a round"),
        Line::from("- D: draw the top card into the focused hand"),
        Line::from("- ] / [: focus next / prev"),
        Line::from("- 1-9: focus seat"),
        Line::from(""),
        Line::from(Span::styled("Menu:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: apply (reseats the table)"),
        Line::from("- Esc: cancel"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn card_style(color: CardColor) -> Style {
    let fg = match color {
        CardColor::Red => Color::Red,
        CardColor::Yellow => Color::Yellow,
        CardColor::Green => Color::Green,
        CardColor::Blue => Color::Blue,
        CardColor::Wild => Color::Magenta,
    };
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
}

fn card_label(c: Card) -> String {
    match c.value().rank() {
        Some(n) => format!("{n:>2}"),
        None if c.is_wild() => String::from(" W"),
        None => String::from(" S"),
    }
}

fn card_span(c: Card) -> Span<'static> {
    Span::styled(format!("[{}]", card_label(c)), card_style(c.color()))
}
