use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 计算 Toast 宽度（按显示宽度，多字节文本不会把弹窗撑宽）
fn toast_width(message: &str, area_width: u16) -> u16 {
    let display_width = Line::from(message).width();
    (display_width + 6).min(area_width.saturating_sub(4) as usize) as u16
}

/// 在屏幕底部居中显示 Toast 消息
///
/// 存储失败等错误消息使用错误色边框，成功提示使用高亮色。
pub fn render(frame: &mut Frame, message: &str, is_error: bool, colors: &ThemeColors) {
    let area = frame.area();

    // 计算 Toast 尺寸和位置
    let toast_width = toast_width(message, area.width);
    let toast_height = 3;
    let toast_x = (area.width.saturating_sub(toast_width)) / 2;
    let toast_y = area.height.saturating_sub(toast_height + 3);

    let toast_area = Rect::new(toast_x, toast_y, toast_width, toast_height);

    // 清除背景
    frame.render_widget(Clear, toast_area);

    let border_color = if is_error {
        colors.error
    } else {
        colors.highlight
    };

    let toast = Paragraph::new(message)
        .style(
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .style(Style::default().bg(colors.bg)),
        );

    frame.render_widget(toast, toast_area);
}
