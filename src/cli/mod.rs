//! CLI 模块

pub mod tasks;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::model::TaskStatus;

#[derive(Parser)]
#[command(name = "kanban")]
#[command(version)]
#[command(about = "Three-column Kanban board for the terminal")]
pub struct Cli {
    /// Data directory (defaults to ~/.kanban)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive board (default)
    Tui,
    /// List tasks grouped by column
    List {
        /// Only show one column: todo, in-progress, done
        #[arg(long, value_parser = parse_status)]
        status: Option<TaskStatus>,
    },
    /// Create a task in To Do
    Add {
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Change title and/or description of a task
    Edit {
        /// Task ID or unique prefix
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Move a task to another column
    Move {
        /// Task ID or unique prefix
        id: String,
        /// todo, in-progress, done
        #[arg(value_parser = parse_status)]
        status: TaskStatus,
    },
    /// Delete a task
    Delete {
        /// Task ID or unique prefix
        id: String,
    },
    /// Delete all tasks
    Clear,
}

fn parse_status(s: &str) -> Result<TaskStatus, String> {
    TaskStatus::parse(s).ok_or_else(|| format!("unknown status '{}' (todo, in-progress, done)", s))
}
