use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use list_manager::{ListError, ListManager, ListView};
use notification::{Notifier, Severity};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use storage_manager::FileListStorage;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "grocery-cli")]
#[command(about = "Grocery list manager")]
#[command(version)]
struct Cli {
    /// Path of the list file (defaults to the user data directory)
    #[arg(long)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an item to the list
    Add {
        /// Item text
        value: String,
    },
    /// Print the list
    List,
    /// Remove an item by its position (1-based)
    Remove {
        /// Position shown by `list`
        index: usize,
    },
    /// Empty the list and remove the stored file
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let path = match cli.file {
        Some(path) => path,
        None => default_list_path()?,
    };

    let storage = FileListStorage::new(&path);
    let manager = ListManager::new(storage, Notifier::new());
    manager
        .initialize()
        .await
        .with_context(|| format!("loading list from {}", path.display()))?;

    match cli.command {
        Some(Commands::Add { value }) => {
            report(manager.add(&value).await.map(|_| ()), &manager);
        }
        Some(Commands::List) => {
            render_list(&manager.view().await);
        }
        Some(Commands::Remove { index }) => match resolve_index(&manager.view().await, index) {
            Some(id) => report(manager.delete(id).await.map(|_| ()), &manager),
            None => eprintln!("{}", format!("no item at position {index}").red()),
        },
        Some(Commands::Clear) => {
            report(manager.clear_all().await, &manager);
        }
        None => {
            run_repl(&manager).await?;
        }
    }

    Ok(())
}

fn default_list_path() -> anyhow::Result<PathBuf> {
    let base = dirs::data_dir().context("no user data directory available")?;
    Ok(base.join("grocery-cli").join("list.json"))
}

/// Interactive mode: every plain line is a submit (add, or commit of
/// the edit in progress); slash commands drive the rest.
async fn run_repl(manager: &ListManager<FileListStorage>) -> anyhow::Result<()> {
    println!("{}", "grocery list".bold());
    print_help();
    render_list(&manager.view().await);

    let stdin = io::stdin();
    loop {
        let view = manager.view().await;
        if view.submit_label == "edit" {
            print!("{} [{}]> ", "edit".yellow(), view.input);
        } else {
            print!("{}> ", "Add".green());
        }
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim_end_matches(['\r', '\n']);

        match line.split_whitespace().collect::<Vec<_>>().as_slice() {
            ["/quit" | "/q"] => break,
            ["/help" | "/h"] => print_help(),
            ["/list" | "/l"] => render_list(&manager.view().await),
            ["/edit" | "/e", index] => match parse_index(&manager.view().await, index) {
                Some(id) => report(manager.start_edit(id).await, manager),
                None => eprintln!("{}", format!("no item at position {index}").red()),
            },
            ["/del" | "/d", index] => match parse_index(&manager.view().await, index) {
                Some(id) => {
                    report(manager.delete(id).await.map(|_| ()), manager);
                    render_list(&manager.view().await);
                }
                None => eprintln!("{}", format!("no item at position {index}").red()),
            },
            ["/clear"] => {
                report(manager.clear_all().await, manager);
                render_list(&manager.view().await);
            }
            _ if line.starts_with('/') => {
                eprintln!("{}", format!("unknown command: {line}").red());
            }
            _ => {
                // Plain line, empty included: submit it as typed. An
                // empty submit surfaces the validation notice.
                report(manager.submit(line).await, manager);
                render_list(&manager.view().await);
            }
        }
    }

    Ok(())
}

fn print_help() {
    println!("type text to add it (or to commit an edit in progress)");
    println!("  /list         show the list");
    println!("  /edit <n>     edit item n");
    println!("  /del <n>      delete item n");
    println!("  /clear        empty the list");
    println!("  /quit         exit");
}

fn render_list(view: &ListView) {
    if !view.container_visible {
        println!("{}", "(list is empty)".dimmed());
        return;
    }
    for (i, item) in view.items.iter().enumerate() {
        println!("{:>3}. {}", i + 1, item.value);
    }
}

fn parse_index(view: &ListView, raw: &str) -> Option<Uuid> {
    resolve_index(view, raw.parse().ok()?)
}

fn resolve_index(view: &ListView, index: usize) -> Option<Uuid> {
    view.items.get(index.checked_sub(1)?).map(|item| item.id)
}

/// Print the notice produced by an operation, tinted by severity.
/// Validation failures already notified; anything else is printed as
/// an error without killing the session.
fn report(result: Result<(), ListError>, manager: &ListManager<FileListStorage>) {
    match result {
        Ok(()) | Err(ListError::EmptyValue) => {
            if let Some(notice) = manager.notifier().current() {
                let line = match notice.severity {
                    Severity::Success => notice.message.green(),
                    Severity::Danger => notice.message.red(),
                };
                println!("{line}");
            }
        }
        Err(e) => eprintln!("{}", e.to_string().red()),
    }
}
