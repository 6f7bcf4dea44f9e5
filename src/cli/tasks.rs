//! 非交互式任务命令

use std::io::Write;

use mockable::Clock;

use super::Commands;
use crate::error::Result;
use crate::model::{format_relative_time, Task, TaskStatus, TaskUpdate};
use crate::storage::kv::KeyValueStore;
use crate::store::TaskStore;

/// 执行任务命令，输出写到 `out`
pub fn execute<S: KeyValueStore, C: Clock>(
    command: Commands,
    store: &mut TaskStore<S, C>,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Commands::Tui => {}
        Commands::List { status } => list(store, status, out)?,
        Commands::Add { title, description } => {
            let task = store.create(&title, &description)?;
            writeln!(out, "Created {} \"{}\"", task.id, task.title)?;
        }
        Commands::Edit {
            id,
            title,
            description,
        } => {
            let id = store.find_by_prefix(&id)?.id.clone();
            let changes = TaskUpdate {
                title,
                description,
                status: None,
            };
            if changes.is_empty() {
                writeln!(out, "Nothing to change")?;
                return Ok(());
            }
            let task = store.update(&id, changes)?;
            writeln!(out, "Updated {} \"{}\"", task.id, task.title)?;
        }
        Commands::Move { id, status } => {
            let id = store.find_by_prefix(&id)?.id.clone();
            let task = store.update_status(&id, status)?;
            writeln!(out, "Moved \"{}\" to {}", task.title, status.label())?;
        }
        Commands::Delete { id } => {
            let task = store.find_by_prefix(&id)?.clone();
            store.delete(&task.id);
            writeln!(out, "Deleted {} \"{}\"", task.id, task.title)?;
        }
        Commands::Clear => {
            let total = store.counts().total;
            store.clear_all();
            writeln!(out, "Deleted {} tasks", total)?;
        }
    }
    Ok(())
}

fn list<S: KeyValueStore, C: Clock>(
    store: &TaskStore<S, C>,
    only: Option<TaskStatus>,
    out: &mut impl Write,
) -> Result<()> {
    let now = store.now();
    let counts = store.counts();
    for status in TaskStatus::ALL {
        if only.is_some_and(|s| s != status) {
            continue;
        }
        writeln!(out, "{} ({})", status.label(), counts.for_status(status))?;
        for task in store.get_by_status(status) {
            write_task(out, task, now)?;
        }
    }
    Ok(())
}

fn write_task(out: &mut impl Write, task: &Task, now: chrono::DateTime<chrono::Utc>) -> Result<()> {
    writeln!(
        out,
        "  {}  {}  ({})",
        task.id,
        task.title,
        format_relative_time(task.updated_at, now)
    )?;
    if let Some(first) = task.description.lines().next() {
        writeln!(out, "      {}", first)?;
    }
    Ok(())
}
