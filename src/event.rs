use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::app::App;

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            // 只处理按下事件
            if key.kind != KeyEventKind::Press {
                return Ok(true);
            }
            handle_key(app, key);
        }
    }

    Ok(!app.should_quit)
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // 优先处理弹窗事件

    // 帮助面板
    if app.show_help {
        handle_help_key(app, key);
        return;
    }

    // Add Task 弹窗
    if app.show_add_dialog {
        handle_add_dialog_key(app, key);
        return;
    }

    // 主题选择器
    if app.show_theme_selector {
        handle_theme_selector_key(app, key);
        return;
    }

    handle_list_key(app, key);
}

/// 处理任务列表的键盘事件
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        // 导航 - 下移
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
        }

        // 导航 - 上移
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_previous();
        }

        // 功能按键 - 添加任务
        KeyCode::Char('a') => {
            app.open_add_dialog();
        }

        // 功能按键 - 删除选中任务
        KeyCode::Char('x') | KeyCode::Delete => {
            app.remove_selected();
        }

        // 功能按键 - 标记完成
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.mark_selected_done();
        }

        // 功能按键 - 保存
        KeyCode::Char('s') => {
            app.save_tasks();
        }

        // 功能按键 - 重新加载
        KeyCode::Char('r') => {
            app.load_tasks();
        }

        // 功能按键 - Theme 选择器
        KeyCode::Char('T') | KeyCode::Char('t') => {
            app.open_theme_selector();
        }

        // 功能按键 - 帮助
        KeyCode::Char('?') => {
            app.show_help = true;
        }

        _ => {}
    }
}

/// 处理 Add Task 弹窗的键盘事件
fn handle_add_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 确认添加（空白输入静默忽略）
        KeyCode::Enter => {
            app.confirm_add();
        }

        // 取消
        KeyCode::Esc => {
            app.close_add_dialog();
        }

        // 删除字符
        KeyCode::Backspace => {
            app.add_delete_char();
        }

        // 输入字符
        KeyCode::Char(c) => {
            app.add_input_char(c);
        }

        _ => {}
    }
}

/// 处理主题选择器的键盘事件
fn handle_theme_selector_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.theme_selector_next();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.theme_selector_prev();
        }
        KeyCode::Enter => {
            app.theme_selector_confirm();
        }
        KeyCode::Esc => {
            app.close_theme_selector();
        }
        _ => {}
    }
}

/// 处理帮助面板的键盘事件
fn handle_help_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.show_help = false;
        }
        _ => {}
    }
}
