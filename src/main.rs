mod app;
mod board;
mod cli;
mod dialogs;
mod error;
mod event;
mod logging;
mod model;
mod storage;
mod store;
mod theme;
mod ui;
mod ui_state;

use std::io;
use std::panic;
use std::path::Path;
use std::time::Instant;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use mockable::DefaultClock;
use ratatui::DefaultTerminal;

use app::App;
use cli::{Cli, Commands};
use storage::config::{config_path, load_config, save_config, Config};
use storage::kv::FileStore;
use store::TaskStore;

/// 启动 TUI 界面
fn run_tui(data_dir: &Path, config: &Config) -> io::Result<()> {
    // 初始化终端
    let mut terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    let mut app = App::new(data_dir, config);

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    execute!(io::stdout(), DisableMouseCapture)?;
    ratatui::restore();

    result
}

fn main() -> io::Result<()> {
    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(io::stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));

    let cli = Cli::parse();

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => match storage::default_data_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
    };
    if let Err(e) = storage::ensure_data_dir(&data_dir) {
        eprintln!("Cannot create {}: {}", data_dir.display(), e);
        std::process::exit(1);
    }

    // 日志初始化失败不影响使用
    let _ = logging::init(&data_dir);

    let config = load_config(&data_dir);
    // 首次运行写出默认配置，方便用户修改
    if !config_path(&data_dir).exists() {
        if let Err(e) = save_config(&data_dir, &config) {
            tracing::warn!(error = %e, "failed to write default config");
        }
    }
    tracing::info!(data_dir = %data_dir.display(), "starting kanban");

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => run_tui(&data_dir, &config)?,
        command => {
            let mut store = TaskStore::load(
                FileStore::new(&data_dir),
                config.board.storage_key.clone(),
                DefaultClock,
            );
            if let Err(e) = cli::tasks::execute(command, &mut store, &mut io::stdout()) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        // 渲染界面
        app.ui.click_areas.reset();
        terminal.draw(|frame| ui::board::render(frame, app))?;

        // 首帧或 resize 后更新拖放区域
        app.sync_drop_zones(Instant::now());

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}
