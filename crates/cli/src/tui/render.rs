//! Rendering logic for the TUI.

use animal_chess_core::{Piece, Side};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::app::{App, UiMode};
use super::widgets::BoardWidget;

/// Foreground color used for a side's pieces and moves.
pub fn side_color(side: Side) -> Color {
    match side {
        Side::Upper => Color::Green,
        Side::Lower => Color::Yellow,
    }
}

/// Main render function.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_layout = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Min(14),   // Content
        Constraint::Length(3), // Help bar
    ])
    .split(area);

    render_title(frame, main_layout[0]);
    render_content(frame, main_layout[1], app);
    render_help_bar(frame, main_layout[2]);

    if app.ui_mode == UiMode::ConfirmQuit {
        render_quit_dialog(frame);
    }
}

/// Renders the title bar.
fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " Animal Chess ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            concat!("v", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(title, area);
}

/// Renders the main content area (board + info panel).
fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    let content_layout = Layout::horizontal([
        Constraint::Length(22), // Board area
        Constraint::Min(20),    // Info panel
    ])
    .split(area);

    render_board(frame, content_layout[0], app);
    render_info_panel(frame, content_layout[1], app);
}

/// Renders the game board.
fn render_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Board ");

    let inner_area = board_block.inner(area);
    frame.render_widget(board_block, area);

    let board_widget = BoardWidget::new(app.game.board()).cursor(app.cursor.0, app.cursor.1);
    frame.render_widget(board_widget, inner_area);
}

/// Builds the captured-pieces line for one side.
fn dead_zone_line(app: &App, side: Side) -> Line<'static> {
    let pieces = app.game.dead_zone(side).pieces();
    let mut spans = vec![Span::styled(
        format!("{:<6}", side.as_str()),
        Style::default().fg(side_color(side)),
    )];
    if pieces.is_empty() {
        spans.push(Span::styled("--", Style::default().fg(Color::DarkGray)));
    } else {
        let captured: String = pieces.iter().map(Piece::to_char).collect();
        spans.push(Span::raw(captured));
    }
    Line::from(spans)
}

/// Renders the information panel.
fn render_info_panel(frame: &mut Frame, area: Rect, app: &App) {
    let info_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Info ");

    let inner_area = info_block.inner(area);
    frame.render_widget(info_block, area);

    let side_to_move = app.game.side_to_move();
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            app.game.renderer().info().to_string(),
            Style::default()
                .fg(side_color(side_to_move))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Captured:", Style::default().fg(Color::Cyan))),
        dead_zone_line(app, Side::Upper),
        dead_zone_line(app, Side::Lower),
        Line::from(""),
        Line::from("─".repeat(inner_area.width as usize)),
    ];

    let history = app.game.history();
    if !history.is_empty() {
        lines.push(Line::from(Span::styled(
            "History:",
            Style::default().fg(Color::Cyan),
        )));

        let max_width = inner_area.width.saturating_sub(2) as usize;
        let mut current_spans: Vec<Span> = vec![Span::raw(" ")];
        let mut current_len = 1usize;

        for record in history {
            let sep = if record.killed.is_some() { 'x' } else { '-' };
            let move_str = format!("{}{sep}{} ", record.from, record.to);
            let move_len = move_str.len();

            if current_len + move_len > max_width && current_len > 1 {
                lines.push(Line::from(current_spans));
                current_spans = vec![Span::raw(" ")];
                current_len = 1;
            }

            current_spans.push(Span::styled(
                move_str,
                Style::default().fg(side_color(record.side)),
            ));
            current_len += move_len;
        }

        if current_len > 1 {
            lines.push(Line::from(current_spans));
        }
    }

    if let Some(winner) = app.game.winner() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "*** Game Over ***",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("{winner} wins!"),
            Style::default().fg(side_color(winner)),
        )));
    }

    if let Some(ref msg) = app.status_message {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            msg.as_str(),
            Style::default().fg(Color::Gray),
        )));
    }

    let info = Paragraph::new(lines);
    frame.render_widget(info, inner_area);
}

/// Renders the help bar at the bottom.
fn render_help_bar(frame: &mut Frame, area: Rect) {
    let help_items = [
        ("Enter/Click", "Select/Move"),
        ("←↑↓→", "Cursor"),
        ("N", "New"),
        ("Q", "Quit"),
    ];

    let spans: Vec<Span> = help_items
        .iter()
        .flat_map(|(key, desc)| {
            vec![
                Span::styled(
                    format!(" [{key}] "),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                ),
                Span::raw(format!("{desc} ")),
            ]
        })
        .collect();

    let help = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(help, area);
}

/// Renders the quit confirmation dialog.
fn render_quit_dialog(frame: &mut Frame) {
    let area = centered_rect(40, 15, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Quit Animal Chess?",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Press Y to quit, N to cancel"),
    ];

    let dialog = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Confirm "),
    );
    frame.render_widget(dialog, area);
}

/// Creates a centered rectangle with the given percentage of the parent area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
