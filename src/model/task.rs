//! 任务数据模型
//!
//! 任务就是一行用户输入的文本，完成状态以 `✔ ` 前缀编码在文本内，
//! 没有 ID、时间戳等额外元数据。

/// 完成标记前缀（字面文本，保存/加载时原样保留）
pub const DONE_MARKER: &str = "✔ ";

/// 单条任务
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// 任务文本（可能带完成标记前缀）
    text: String,
}

impl Task {
    /// 从文件行原样恢复（保存过的完成标记自动还原）
    pub fn from_line(line: impl Into<String>) -> Self {
        Self { text: line.into() }
    }

    /// 是否已完成
    pub fn is_done(&self) -> bool {
        self.text.starts_with(DONE_MARKER)
    }

    /// 标记完成（幂等：已带标记则不变，不会重复前缀）
    pub fn mark_done(&mut self) {
        if !self.is_done() {
            self.text.insert_str(0, DONE_MARKER);
        }
    }

    /// 任务文本
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// 有序任务列表
///
/// 插入顺序在所有操作和保存/加载之间保持不变。
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加任务：去除首尾空白后追加到末尾
    ///
    /// 空白文本静默忽略（不是错误）。返回是否实际添加。
    pub fn add(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.tasks.push(Task::from_line(text));
        true
    }

    /// 删除指定位置的任务
    ///
    /// 无选中或越界时静默忽略。返回被删除的任务。
    pub fn remove(&mut self, index: Option<usize>) -> Option<Task> {
        let index = index?;
        if index < self.tasks.len() {
            Some(self.tasks.remove(index))
        } else {
            None
        }
    }

    /// 标记指定位置的任务为完成（幂等）
    ///
    /// 无选中或越界时静默忽略。返回选中是否有效。
    pub fn mark_done(&mut self, index: Option<usize>) -> bool {
        let Some(task) = index.and_then(|i| self.tasks.get_mut(i)) else {
            return false;
        };
        task.mark_done();
        true
    }

    /// 整体替换（加载时使用：完全取代内存中的序列）
    pub fn replace(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// 已完成任务数（用于 Header 统计）
    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_done()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_text() {
        let mut list = TaskList::new();
        assert!(list.add("  buy milk  "));
        assert_eq!(list.tasks()[0].as_str(), "buy milk");
    }

    #[test]
    fn test_add_ignores_empty() {
        let mut list = TaskList::new();
        assert!(!list.add(""));
        assert!(!list.add("   "));
        assert!(list.is_empty());
    }

    #[test]
    fn test_mark_done_idempotent() {
        let mut list = TaskList::new();
        list.add("buy milk");

        assert!(list.mark_done(Some(0)));
        assert_eq!(list.tasks()[0].as_str(), "✔ buy milk");

        // 再次标记不会重复前缀
        assert!(list.mark_done(Some(0)));
        assert_eq!(list.tasks()[0].as_str(), "✔ buy milk");
    }

    #[test]
    fn test_mark_done_invalid_selection() {
        let mut list = TaskList::new();
        list.add("buy milk");

        assert!(!list.mark_done(None));
        assert!(!list.mark_done(Some(5)));
        assert_eq!(list.tasks()[0].as_str(), "buy milk");
    }

    #[test]
    fn test_remove_invalid_selection_unchanged() {
        let mut list = TaskList::new();
        list.add("buy milk");
        list.add("walk dog");

        assert!(list.remove(None).is_none());
        assert!(list.remove(Some(2)).is_none());
        assert_eq!(list.len(), 2);
        assert_eq!(list.tasks()[0].as_str(), "buy milk");
        assert_eq!(list.tasks()[1].as_str(), "walk dog");
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut list = TaskList::new();
        list.add("one");
        list.add("two");
        list.add("three");

        let removed = list.remove(Some(1)).unwrap();
        assert_eq!(removed.as_str(), "two");
        assert_eq!(list.tasks()[0].as_str(), "one");
        assert_eq!(list.tasks()[1].as_str(), "three");
    }

    #[test]
    fn test_done_count() {
        let mut list = TaskList::new();
        list.add("one");
        list.add("two");
        list.mark_done(Some(1));
        assert_eq!(list.done_count(), 1);
    }
}
