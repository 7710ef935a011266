use ratatui::{
    layout::Constraint,
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::App;

use super::components::{
    empty_state, footer, header, help_panel, input_dialog, task_list, theme_selector, toast,
};

/// 渲染任务列表页面
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let colors = app.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, list_area, footer_area] = ratatui::layout::Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(area);

    // 渲染 Header
    header::render(
        frame,
        header_area,
        &app.tasks_path,
        app.tasks.len(),
        app.tasks.done_count(),
        &colors,
    );

    // 渲染列表或空状态
    if app.tasks.is_empty() {
        empty_state::render(frame, list_area, &colors);
    } else {
        task_list::render(frame, list_area, app.tasks.tasks(), &mut app.list_state, &colors);
    }

    // 渲染 Footer
    footer::render(frame, footer_area, !app.tasks.is_empty(), &colors);

    // 渲染 Toast（如果有）
    if let Some(ref t) = app.toast {
        if !t.is_expired() {
            toast::render(frame, &t.message, t.is_error, &colors);
        }
    }

    // 渲染主题选择器（如果打开）
    if app.show_theme_selector {
        theme_selector::render(frame, app.theme_selector_index, &colors);
    }

    // 渲染 Add Task 弹窗（如果打开）
    if app.show_add_dialog {
        input_dialog::render(frame, &app.add_input, &colors);
    }

    // 渲染帮助面板
    if app.show_help {
        help_panel::render(frame, &colors);
    }
}
