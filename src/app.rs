use std::path::PathBuf;
use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::model::TaskList;
use crate::storage::{self, config::Config};
use crate::theme::{get_theme_colors, Theme, ThemeColors};

/// Toast 显示时长
const TOAST_DURATION: Duration = Duration::from_secs(2);

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub is_error: bool,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, is_error: bool, duration: Duration) -> Self {
        Self {
            message: message.into(),
            is_error,
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 任务列表（内存中的唯一可变状态）
    pub tasks: TaskList,
    /// 任务文件路径（来自配置或 --file）
    pub tasks_path: PathBuf,
    /// 列表选择状态
    pub list_state: ListState,
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 是否显示主题选择器
    pub show_theme_selector: bool,
    /// 主题选择器当前选中索引
    pub theme_selector_index: usize,
    /// 是否显示 Add Task 弹窗
    pub show_add_dialog: bool,
    /// Add Task 输入内容
    pub add_input: String,
    /// 是否显示帮助面板
    pub show_help: bool,
}

impl App {
    /// 创建应用状态，并从任务文件自动加载一次
    pub fn new(tasks_path: PathBuf, config: &Config) -> Self {
        let theme = Theme::from_name(&config.theme.name);
        let colors = get_theme_colors(theme);

        let mut app = Self {
            should_quit: false,
            tasks: TaskList::new(),
            tasks_path,
            list_state: ListState::default(),
            toast: None,
            theme,
            colors,
            show_theme_selector: false,
            theme_selector_index: 0,
            show_add_dialog: false,
            add_input: String::new(),
            show_help: false,
        };

        // 启动时自动加载（文件不存在时保持空列表，不是错误；成功时无提示）
        app.load_from_file();
        app
    }

    /// 当前选中的任务索引
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// 确保选中项在列表范围内（删除/加载后调用）
    pub fn ensure_selection(&mut self) {
        let len = self.tasks.len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        match self.list_state.selected() {
            None => self.list_state.select(Some(0)),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        let len = self.tasks.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % len));
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let len = self.tasks.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.list_state.select(Some(prev));
    }

    // ========== Add Task Dialog ==========

    /// 打开 Add Task 弹窗
    pub fn open_add_dialog(&mut self) {
        self.add_input.clear();
        self.show_add_dialog = true;
    }

    /// 关闭 Add Task 弹窗
    pub fn close_add_dialog(&mut self) {
        self.show_add_dialog = false;
        self.add_input.clear();
    }

    /// Add Task 输入字符
    pub fn add_input_char(&mut self, c: char) {
        self.add_input.push(c);
    }

    /// Add Task 删除字符
    pub fn add_delete_char(&mut self) {
        self.add_input.pop();
    }

    /// 确认添加任务
    ///
    /// 空白输入静默忽略（弹窗保持打开）；成功后清空输入并关闭弹窗。
    pub fn confirm_add(&mut self) {
        if self.tasks.add(&self.add_input) {
            self.close_add_dialog();
            self.ensure_selection();
        }
    }

    // ========== Task Operations ==========

    /// 删除当前选中的任务（无选中时静默忽略）
    pub fn remove_selected(&mut self) {
        if self.tasks.remove(self.selected()).is_some() {
            self.ensure_selection();
        }
    }

    /// 标记当前选中的任务为完成（幂等，无选中时静默忽略）
    pub fn mark_selected_done(&mut self) {
        self.tasks.mark_done(self.selected());
    }

    /// 保存任务列表到文件
    ///
    /// 失败时内存中的列表保持不变，错误信息原样展示给用户。
    pub fn save_tasks(&mut self) {
        match storage::tasks::save_tasks(&self.tasks_path, self.tasks.tasks()) {
            Ok(()) => self.show_toast("Tasks saved"),
            Err(e) => self.show_error_toast(format!("Error saving tasks: {}", e)),
        }
    }

    /// 从文件重新加载任务列表（完全取代内存中的序列）
    ///
    /// 用户显式触发时成功会提示；启动时的自动加载走 `load_from_file`，成功无提示。
    pub fn load_tasks(&mut self) {
        if self.load_from_file() {
            self.show_toast("Tasks loaded");
        }
    }

    /// 加载任务文件，返回是否成功
    ///
    /// 失败时内存中的列表保持不变，错误信息原样展示给用户。
    fn load_from_file(&mut self) -> bool {
        match storage::tasks::load_tasks(&self.tasks_path) {
            Ok(tasks) => {
                self.tasks.replace(tasks);
                self.list_state.select(None);
                self.ensure_selection();
                true
            }
            Err(e) => {
                self.show_error_toast(format!("Error loading tasks: {}", e));
                false
            }
        }
    }

    // ========== Theme Selector ==========

    /// 打开主题选择器
    pub fn open_theme_selector(&mut self) {
        self.theme_selector_index = Theme::all()
            .iter()
            .position(|t| *t == self.theme)
            .unwrap_or(0);
        self.show_theme_selector = true;
    }

    /// 关闭主题选择器
    pub fn close_theme_selector(&mut self) {
        self.show_theme_selector = false;
    }

    /// 主题选择器 - 选择上一个
    pub fn theme_selector_prev(&mut self) {
        let len = Theme::all().len();
        self.theme_selector_index = if self.theme_selector_index == 0 {
            len - 1
        } else {
            self.theme_selector_index - 1
        };
        // 实时预览
        self.apply_theme_at_index(self.theme_selector_index);
    }

    /// 主题选择器 - 选择下一个
    pub fn theme_selector_next(&mut self) {
        let len = Theme::all().len();
        self.theme_selector_index = (self.theme_selector_index + 1) % len;
        // 实时预览
        self.apply_theme_at_index(self.theme_selector_index);
    }

    /// 主题选择器 - 确认选择并持久化
    pub fn theme_selector_confirm(&mut self) {
        self.apply_theme_at_index(self.theme_selector_index);
        self.show_theme_selector = false;

        let mut config = storage::config::load_config();
        config.theme.name = self.theme.label().to_string();
        match storage::config::save_config(&config) {
            Ok(()) => self.show_toast(format!("Theme: {}", self.theme.label())),
            Err(e) => self.show_error_toast(format!("Error saving config: {}", e)),
        }
    }

    /// 应用指定索引的主题
    fn apply_theme_at_index(&mut self, index: usize) {
        if let Some(theme) = Theme::all().get(index) {
            self.theme = *theme;
            self.colors = get_theme_colors(*theme);
        }
    }

    // ========== Toast ==========

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, false, TOAST_DURATION));
    }

    /// 显示错误 Toast（存储失败等）
    pub fn show_error_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, true, TOAST_DURATION));
    }

    /// 更新 Toast 状态（清理过期的 Toast）
    pub fn update_toast(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app(dir: &tempfile::TempDir) -> App {
        App::new(dir.path().join("tasks.txt"), &Config::default())
    }

    #[test]
    fn test_startup_with_missing_file_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir);

        assert!(app.tasks.is_empty());
        assert!(app.toast.is_none());
        assert!(app.selected().is_none());
    }

    #[test]
    fn test_add_dialog_flow() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);

        app.open_add_dialog();
        for c in "buy milk".chars() {
            app.add_input_char(c);
        }
        app.confirm_add();

        assert!(!app.show_add_dialog);
        assert!(app.add_input.is_empty());
        assert_eq!(app.tasks.tasks()[0].as_str(), "buy milk");
        assert_eq!(app.selected(), Some(0));
    }

    #[test]
    fn test_whitespace_input_keeps_dialog_open() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);

        app.open_add_dialog();
        app.add_input_char(' ');
        app.add_input_char(' ');
        app.confirm_add();

        assert!(app.show_add_dialog);
        assert!(app.tasks.is_empty());
        // 不是错误，不会有提示
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_remove_clamps_selection() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);

        app.tasks.add("one");
        app.tasks.add("two");
        app.ensure_selection();
        app.select_next();
        assert_eq!(app.selected(), Some(1));

        app.remove_selected();
        assert_eq!(app.selected(), Some(0));

        app.remove_selected();
        assert!(app.selected().is_none());

        // 空列表上的删除是静默 no-op
        app.remove_selected();
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn test_save_load_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);

        app.tasks.add("buy milk");
        app.ensure_selection();
        app.mark_selected_done();
        app.mark_selected_done(); // 幂等
        assert_eq!(app.tasks.tasks()[0].as_str(), "✔ buy milk");

        app.save_tasks();
        assert!(matches!(app.toast, Some(ref t) if !t.is_error));

        // 新实例从同一文件启动，自动恢复
        let app2 = test_app(&dir);
        assert_eq!(app2.tasks.len(), 1);
        assert_eq!(app2.tasks.tasks()[0].as_str(), "✔ buy milk");
        assert!(app2.tasks.tasks()[0].is_done());
    }

    #[test]
    fn test_save_failure_reports_and_keeps_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);

        app.tasks.add("one");
        // 让目标路径不可写入：改名目标是一个非空目录
        app.tasks_path = dir.path().to_path_buf();
        app.save_tasks();

        assert!(matches!(app.toast, Some(ref t) if t.is_error));
        assert_eq!(app.tasks.len(), 1);
    }

    #[test]
    fn test_startup_load_of_existing_file_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.txt");
        std::fs::write(&path, "buy milk\n").unwrap();

        let app = App::new(path, &Config::default());
        assert_eq!(app.tasks.len(), 1);
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_reload_shows_loaded_toast() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.txt");
        std::fs::write(&path, "buy milk\n").unwrap();

        let mut app = App::new(path, &Config::default());
        app.load_tasks();

        assert!(matches!(app.toast, Some(ref t) if !t.is_error));
        assert_eq!(app.toast.as_ref().unwrap().message, "Tasks loaded");
    }

    #[test]
    fn test_load_failure_reports_and_keeps_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);

        app.tasks.add("one");
        // 文件存在但不可读取为文本：路径指向一个目录
        app.tasks_path = dir.path().to_path_buf();
        app.load_tasks();

        assert!(matches!(app.toast, Some(ref t) if t.is_error));
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks.tasks()[0].as_str(), "one");
    }

    #[test]
    fn test_load_replaces_in_memory_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.txt");
        std::fs::write(&path, "from file\n").unwrap();

        let mut app = App::new(path, &Config::default());
        assert_eq!(app.tasks.tasks()[0].as_str(), "from file");

        app.tasks.add("unsaved");
        app.load_tasks();
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks.tasks()[0].as_str(), "from file");
    }
}
