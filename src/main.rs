mod app;
mod cli;
mod error;
mod event;
mod model;
mod storage;
mod theme;
mod ui;

use std::io;
use std::panic;
use std::path::PathBuf;

use clap::Parser;
use ratatui::DefaultTerminal;

use app::App;
use cli::Cli;
use storage::config::Config;

fn main() -> io::Result<()> {
    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    // 解析命令行参数
    let cli = Cli::parse();

    // 任务文件路径优先级: --file > config.tasks_file > ~/.tick/tasks.txt
    let config = storage::config::load_config();
    let tasks_path = match cli.file.or_else(|| config.tasks_file.clone()) {
        Some(path) => path,
        None => match storage::default_tasks_path() {
            Ok(path) => path,
            Err(e) => {
                eprintln!("tick: {}", e);
                std::process::exit(1);
            }
        },
    };

    run_tui(tasks_path, &config)
}

/// 启动 TUI 界面
fn run_tui(tasks_path: PathBuf, config: &Config) -> io::Result<()> {
    // 初始化终端
    let mut terminal = ratatui::init();

    // 创建应用（启动时自动加载任务文件）
    let mut app = App::new(tasks_path, config);

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    ratatui::restore();

    result
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        // 渲染界面
        terminal.draw(|frame| ui::list::render(frame, app))?;

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}
