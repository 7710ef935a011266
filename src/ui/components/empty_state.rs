use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// ASCII Art Logo
const LOGO: &[&str] = &[
    "████████╗██╗ ██████╗██╗  ██╗",
    "╚══██╔══╝██║██╔════╝██║ ██╔╝",
    "   ██║   ██║██║     █████╔╝ ",
    "   ██║   ██║██║     ██╔═██╗ ",
    "   ██║   ██║╚██████╗██║  ██╗",
    "   ╚═╝   ╚═╝ ╚═════╝╚═╝  ╚═╝",
];

/// 渲染空状态（带 Logo 和提示文字）
pub fn render(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let logo_height = LOGO.len() as u16;
    let text_height = 3u16;
    let total_height = logo_height + 2 + text_height;

    if inner_area.height < total_height {
        // 空间不足，只显示提示文字
        render_hint_only(frame, inner_area, colors);
        return;
    }

    let vertical_padding = (inner_area.height - total_height) / 2;

    let [_, logo_area, _, text_area, _] = Layout::vertical([
        Constraint::Length(vertical_padding),
        Constraint::Length(logo_height),
        Constraint::Length(2),
        Constraint::Length(text_height),
        Constraint::Fill(1),
    ])
    .areas(inner_area);

    let logo_lines: Vec<Line> = LOGO
        .iter()
        .map(|line| Line::from(Span::styled(*line, Style::default().fg(colors.highlight))))
        .collect();
    frame.render_widget(
        Paragraph::new(logo_lines).alignment(Alignment::Center),
        logo_area,
    );

    frame.render_widget(
        Paragraph::new(hint_lines(colors)).alignment(Alignment::Center),
        text_area,
    );
}

fn render_hint_only(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let lines = hint_lines(colors);

    // 垂直居中
    let y_offset = (area.height.saturating_sub(lines.len() as u16)) / 2;
    let centered_area = Rect {
        x: area.x,
        y: area.y + y_offset,
        width: area.width,
        height: (lines.len() as u16).min(area.height),
    };

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered_area,
    );
}

fn hint_lines(colors: &ThemeColors) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "No tasks yet",
            Style::default().fg(colors.muted),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(colors.text)),
            Span::styled(
                " a ",
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("to add a task", Style::default().fg(colors.text)),
        ]),
    ]
}
