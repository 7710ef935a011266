use std::path::Path;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// Header 总高度：边框 + 信息行
pub const HEADER_HEIGHT: u16 = 3;

/// Replace home directory prefix with ~
fn shorten_path(path: &Path) -> String {
    let path_str = path.to_string_lossy();
    if let Some(home) = dirs::home_dir() {
        if let Some(home_str) = home.to_str() {
            if let Some(stripped) = path_str.strip_prefix(home_str) {
                return format!("~{}", stripped);
            }
        }
    }
    path_str.to_string()
}

/// 渲染顶部区域（标题 + 任务文件信息）
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks_path: &Path,
    task_count: usize,
    done_count: usize,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let left = Span::styled(
        " tick ",
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD),
    );
    let path = Span::styled(shorten_path(tasks_path), Style::default().fg(colors.muted));

    let right = Span::styled(
        format!("{} tasks · {} done ", task_count, done_count),
        Style::default().fg(colors.muted),
    );

    // 计算中间填充空格
    let total_width = inner_area.width as usize;
    let used_width = left.width() + path.width() + right.width();
    let padding = " ".repeat(total_width.saturating_sub(used_width));

    let line = Line::from(vec![left, path, Span::raw(padding), right]);
    frame.render_widget(Paragraph::new(line), inner_area);
}
