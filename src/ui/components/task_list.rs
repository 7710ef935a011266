use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::model::Task;
use crate::theme::ThemeColors;

/// 渲染任务列表
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[Task],
    list_state: &mut ListState,
    colors: &ThemeColors,
) {
    let selected = list_state.selected();

    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_selected = selected == Some(i);
            let selector = if is_selected { "❯ " } else { "  " };

            // 已完成任务淡化显示（标记本身是任务文本的一部分，原样展示）
            let text_style = if task.is_done() {
                Style::default()
                    .fg(colors.done)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(colors.text)
            };

            let line = Line::from(vec![
                Span::styled(selector, Style::default().fg(colors.highlight)),
                Span::styled(task.as_str().to_string(), text_style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(colors.border)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));

    frame.render_stateful_widget(list, area, list_state);
}
