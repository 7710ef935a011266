//! 任务文件持久化
//!
//! 纯文本格式：一行一条任务，UTF-8，无文件头无转义。
//! 完成标记是行内字面文本，保存/加载自动保留。

use std::io;
use std::path::Path;

use crate::model::Task;

/// 加载任务列表
///
/// 文件不存在时返回空列表（不是错误）。每一行原样恢复为一条任务。
pub fn load_tasks(path: &Path) -> io::Result<Vec<Task>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path)?;
    Ok(content.lines().map(Task::from_line).collect())
}

/// 保存任务列表，一行一条，覆盖原有内容
///
/// 先写入同目录的 .tmp 文件再改名到目标路径，中途失败不会破坏上一次保存。
pub fn save_tasks(path: &Path, tasks: &[Task]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut content = String::new();
    for task in tasks {
        content.push_str(task.as_str());
        content.push('\n');
    }

    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, content)?;
    std::fs::rename(&tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskList;

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.txt");

        let tasks = load_tasks(&path).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.txt");

        let mut list = TaskList::new();
        list.add("buy milk");
        list.add("walk dog");
        list.mark_done(Some(0));

        save_tasks(&path, list.tasks()).unwrap();
        let loaded = load_tasks(&path).unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].as_str(), "✔ buy milk");
        assert!(loaded[0].is_done());
        assert_eq!(loaded[1].as_str(), "walk dog");
        assert!(!loaded[1].is_done());
    }

    #[test]
    fn test_save_one_task_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.txt");

        let mut list = TaskList::new();
        list.add("buy milk");
        list.mark_done(Some(0));

        save_tasks(&path, list.tasks()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "✔ buy milk\n");
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.txt");

        let mut list = TaskList::new();
        list.add("one");
        list.add("two");
        save_tasks(&path, list.tasks()).unwrap();

        list.remove(Some(0));
        save_tasks(&path, list.tasks()).unwrap();

        let loaded = load_tasks(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].as_str(), "two");
    }

    #[test]
    fn test_save_empty_list_clears_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.txt");

        std::fs::write(&path, "stale\n").unwrap();
        save_tasks(&path, &[]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn test_save_leaves_no_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.txt");

        let mut list = TaskList::new();
        list.add("one");
        save_tasks(&path, list.tasks()).unwrap();

        assert!(!dir.path().join("tasks.tmp").exists());
    }
}
