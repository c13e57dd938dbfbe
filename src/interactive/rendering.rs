//! TUI rendering with ratatui
//!
//! Board, slot picker and session panels for the Mastermind interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Color as PegColor, Score};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(5), // Slot picker
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Info panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_slots(f, app, chunks[2]);

    render_status(f, app, chunks[3]);
}

/// Terminal color used to paint a peg
const fn peg_color(color: PegColor) -> Color {
    match color {
        PegColor::Red => Color::Red,
        PegColor::Green => Color::Green,
        PegColor::Blue => Color::Blue,
        PegColor::Yellow => Color::Yellow,
        PegColor::Orange => Color::Rgb(255, 165, 0),
        PegColor::Purple => Color::Magenta,
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND - Crack the Code")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn score_spans(score: Score, code_length: usize) -> Vec<Span<'static>> {
    let empty = code_length.saturating_sub(score.exact + score.color);
    vec![
        Span::styled(
            "●".repeat(score.exact),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled("○".repeat(score.color), Style::default().fg(Color::White)),
        Span::styled("·".repeat(empty), Style::default().fg(Color::DarkGray)),
    ]
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let code_length = app.game.code_length();

    let items: Vec<ListItem> = app
        .game
        .history()
        .iter()
        .enumerate()
        .map(|(i, turn)| {
            let mut spans = vec![Span::styled(
                format!("{:>2}. ", i + 1),
                Style::default().fg(Color::DarkGray),
            )];
            for &color in turn.guess.iter() {
                spans.push(Span::styled("██ ", Style::default().fg(peg_color(color))));
            }
            spans.push(Span::raw("  "));
            spans.extend(score_spans(turn.score, code_length));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let board = List::new(items).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(5), // Legend
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_legend(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let left = app.game.attempts_left();
    let max = app.game.max_attempts();
    let percent = (left * 100 / max) as u16;

    let color = if left * 3 <= max {
        Color::Red
    } else {
        Color::Cyan
    };

    let gauge = Gauge::default()
        .block(Block::default().title(" Attempts ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{left}/{max} attempts left"));

    f.render_widget(gauge, area);
}

fn render_legend(f: &mut Frame, app: &App, area: Rect) {
    let palette: Vec<Span> = app
        .game
        .palette()
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            Span::styled(
                format!("{} {}  ", i + 1, c.name()),
                Style::default().fg(peg_color(c)),
            )
        })
        .collect();

    let content = vec![
        Line::from(palette),
        Line::from("● right place  ○ right color"),
    ];

    let legend = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Colors ").borders(Borders::ALL));
    f.render_widget(legend, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_slots(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            Color::Green,
        ),
        InputMode::Selecting => (
            " Your Guess | ←/→ move  ↑/↓/Space cycle  1-6 or initial pick  Enter submit ",
            Color::Yellow,
        ),
    };

    let mut slot_spans = Vec::with_capacity(app.slots.len() * 3);
    let mut cursor_spans = Vec::with_capacity(app.slots.len());
    for (i, slot) in app.slots.iter().enumerate() {
        let span = match slot {
            Some(c) => Span::styled(" ████ ", Style::default().fg(peg_color(*c))),
            None => Span::styled(" ░░░░ ", Style::default().fg(Color::DarkGray)),
        };
        slot_spans.push(span);

        let marker = if i == app.cursor && app.input_mode == InputMode::Selecting {
            "  ▲▲  "
        } else {
            "      "
        };
        cursor_spans.push(Span::styled(marker, Style::default().fg(color)));
    }

    let picker = Paragraph::new(vec![Line::from(slot_spans), Line::from(cursor_spans)])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(picker, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let guess_text = format!(
        "Guess {}/{}",
        (app.game.history().len() + 1).min(app.game.max_attempts()),
        app.game.max_attempts()
    );
    let guess = Paragraph::new(guess_text).alignment(Alignment::Center);
    f.render_widget(guess, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let best = app
        .stats
        .guess_distribution
        .iter()
        .position(|&count| count > 0)
        .map_or_else(|| "-".to_string(), |n| n.to_string());
    let best_text = format!("Best: {best}");
    let best_widget = Paragraph::new(best_text).alignment(Alignment::Center);
    f.render_widget(best_widget, chunks[2]);

    let help = Paragraph::new("q: Quit | n: New Game | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn renders_board_and_slots() {
        let mut app = App::new(StdRng::seed_from_u64(11)).unwrap();
        for color in [PegColor::Red, PegColor::Red, PegColor::Red, PegColor::Red] {
            app.pick_color(color);
        }
        app.submit();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("MASTERMIND"));
        assert!(text.contains("Board"));
        assert!(text.contains("attempts left"));
    }

    #[test]
    fn legend_wraps_on_narrow_terminal() {
        let app = App::new(StdRng::seed_from_u64(11)).unwrap();

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Purple"));
        assert!(text.contains("right color"));
    }

    #[test]
    fn score_spans_pad_to_code_length() {
        let spans = score_spans(Score::new(1, 2), 4);
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "●○○·");
    }
}
