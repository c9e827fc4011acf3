//! Submission success view

use crate::state::{result_rows, Submission};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the details of a submission (blank values when none was handed over)
pub fn draw(frame: &mut Frame, area: Rect, submission: Option<&Submission>) {
    let heading = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled("Thank You for Registering", heading)).alignment(Alignment::Center),
        Line::from(Span::styled("Submission Successful", heading)).alignment(Alignment::Center),
        Line::from(""),
        Line::from("Here are your details:"),
        Line::from(""),
    ];

    for (label, value) in result_rows(submission) {
        lines.push(Line::from(vec![
            Span::raw("  • "),
            Span::styled(format!("{label}: "), Style::default().fg(Color::Cyan)),
            Span::raw(value.to_string()),
        ]));
    }

    if let Some(submission) = submission {
        let meta = Style::default().fg(Color::DarkGray);
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Registration ID: {}", submission.id),
            meta,
        )));
        lines.push(Line::from(Span::styled(
            format!(
                "Submitted at: {}",
                submission.submitted_at.format("%Y-%m-%d %H:%M:%S UTC")
            ),
            meta,
        )));
    }

    let block = Block::default()
        .title(" Registration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}
