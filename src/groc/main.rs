use clap::error::ErrorKind;
use clap::Parser;
use colored::*;
use groc::api::{CmdMessage, GroceryApi, MessageLevel};
use groc::config::{self, GrocConfig, CONFIG_DIR_ENV, LIST_FILE_ENV};
use groc::error::Result;
use groc::model::Item;
use groc::store::fs::FileStore;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod args;
use args::{Cli, Commands};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Explicit help and version are successes; everything else,
            // including a bare `groc`, is a usage error.
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

struct AppContext {
    api: GroceryApi<FileStore>,
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Add { name } => handle_add(&mut ctx, name),
        Commands::List => handle_list(&ctx),
        Commands::Check { id } => handle_check(&mut ctx, id),
        Commands::Remove { id } => handle_remove(&mut ctx, id),
        Commands::Clear => handle_clear(&mut ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config_dir = config::config_dir(env_path(CONFIG_DIR_ENV))?;

    let config = GrocConfig::load(&config_dir).unwrap_or_else(|e| {
        warn!(dir = %config_dir.display(), "Ignoring unreadable config: {}", e);
        GrocConfig::default()
    });

    if !config.color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let store = FileStore::new(config::resolve_list_file(
        cli.file.clone(),
        env_path(LIST_FILE_ENV),
        &config,
        &cwd,
    ));
    debug!(list_file = %store.path().display(), "Using list file");

    let api = GroceryApi::new(store);
    Ok(AppContext { api })
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn handle_add(ctx: &mut AppContext, name: Vec<String>) -> Result<()> {
    let result = ctx.api.add_item(&name.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_items()?;
    print_items(&result.listed_items);
    print_messages(&result.messages);
    Ok(())
}

fn handle_check(ctx: &mut AppContext, id: u32) -> Result<()> {
    let result = ctx.api.check_item(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, id: u32) -> Result<()> {
    let result = ctx.api.remove_item(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.clear_items()?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

fn print_items(items: &[Item]) {
    if items.is_empty() {
        return;
    }

    println!("{}", "Grocery List:".bold());
    for item in items {
        let line = item.to_string();
        if item.checked {
            println!("  {}", line.dimmed());
        } else {
            println!("  {}", line);
        }
    }
}
