//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin prompts)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Load config, install logging, open the API
//! 3. **API Dispatch**: Call the appropriate `ShelfApi` method
//! 4. **Output Formatting**: Render `CmdResult`s through templates
//! 5. **Error Handling**: Turn rejected input into an error (exit code 1)
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API and configuration
//! - `handle_*()`: Per-command handlers that call API and format output

use super::logging;
use super::render::{
    render_book, render_notifications, render_prompt, render_shelves, render_warning,
};
use super::setup::{Cli, Commands, ConfigCommands};
use clap::Parser;
use shelf::api::ShelfApi;
use shelf::commands::CmdResult;
use shelf::config::{default_config_path, ShelfConfig};
use shelf::confirm::Choice;
use shelf::error::{Result, ShelfError};
use shelf::model::{BookId, NewBook};
use shelf::notify::Severity;
use shelf::shelves::EditForm;
use shelf::store::fs_backend::FsBackend;
use std::io::Write;
use std::path::{Path, PathBuf};

struct AppContext {
    api: ShelfApi<FsBackend>,
    use_color: Option<bool>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_path = default_config_path();
    let config = ShelfConfig::load(config_path.as_deref())?;
    logging::init(cli.verbose, &config.log_level);

    // Config does not need the store, so it works even on a corrupt slot.
    if let Some(Commands::Config { action }) = &cli.command {
        return handle_config(&cli, &config, config_path.as_deref(), action.as_ref());
    }

    let mut ctx = init_context(&cli, &config)?;

    match cli.command {
        Some(Commands::Add {
            title,
            author,
            year,
            finished,
        }) => handle_add(&mut ctx, title, author, year, finished),
        Some(Commands::List) | None => handle_list(&mut ctx),
        Some(Commands::Search { keyword }) => handle_search(&mut ctx, keyword.join(" ")),
        Some(Commands::Show { id }) => handle_show(&ctx, id),
        Some(Commands::Toggle { ids }) => handle_toggle(&mut ctx, &ids),
        Some(Commands::Edit {
            id,
            title,
            author,
            year,
        }) => handle_edit(&mut ctx, id, title, author, year),
        Some(Commands::Delete { id, yes }) => handle_delete(&mut ctx, id, yes),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Config { .. }) => Ok(()),
    }
}

fn resolve_data_dir(cli: &Cli, config: &ShelfConfig) -> Result<PathBuf> {
    match &cli.data_dir {
        Some(dir) => Ok(dir.clone()),
        None => config.data_dir(),
    }
}

fn init_context(cli: &Cli, config: &ShelfConfig) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli, config)?;
    tracing::debug!(data_dir = %data_dir.display(), key = %config.storage_key, "opening shelf");

    let api = ShelfApi::open_dir(&data_dir, &config.storage_key)?;
    let use_color = if cli.no_color { Some(false) } else { None };

    Ok(AppContext { api, use_color })
}

/// Prints the result's notifications. Rejected input becomes an error so
/// the process exits non-zero.
fn report(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    if result.rejected {
        let reason = result
            .notifications
            .last()
            .map(|n| n.message.clone())
            .unwrap_or_else(|| "invalid input".to_string());
        return Err(ShelfError::Validation(reason));
    }
    print!("{}", render_notifications(&result.notifications, ctx.use_color));
    Ok(())
}

fn warn_unknown(ctx: &AppContext, id: BookId) {
    print!(
        "{}",
        render_warning(&format!("No book with id {}", id), ctx.use_color)
    );
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    author: String,
    year: u32,
    finished: bool,
) -> Result<()> {
    let result = ctx
        .api
        .add_book(NewBook::new(title, author, year, finished))?;
    report(ctx, &result)
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list()?;
    let view = result.view.unwrap_or_else(|| ctx.api.view());
    print!("{}", render_shelves(&view, None, ctx.use_color));
    Ok(())
}

fn handle_search(ctx: &mut AppContext, keyword: String) -> Result<()> {
    let result = ctx.api.search(&keyword)?;
    let view = result.view.clone().unwrap_or_default();
    let heading = format!("Search: \"{}\"", keyword);
    print!("{}", render_shelves(&view, Some(&heading), ctx.use_color));
    report(ctx, &result)
}

fn handle_show(ctx: &AppContext, id: BookId) -> Result<()> {
    let result = ctx.api.get_book(id)?;
    for book in &result.affected_books {
        print!("{}", render_book(book, ctx.use_color));
    }
    Ok(())
}

fn handle_toggle(ctx: &mut AppContext, ids: &[BookId]) -> Result<()> {
    for id in ids {
        if ctx.api.find(*id).is_none() {
            warn_unknown(ctx, *id);
        }
    }
    let result = ctx.api.toggle_books(ids)?;
    let (failed, done): (Vec<_>, Vec<_>) = result
        .notifications
        .iter()
        .cloned()
        .partition(|n| n.severity == Severity::Error);
    print!("{}", render_notifications(&done, ctx.use_color));
    match failed.into_iter().next() {
        Some(failure) => Err(ShelfError::Store(failure.message)),
        None => Ok(()),
    }
}

fn handle_edit(
    ctx: &mut AppContext,
    id: BookId,
    title: Option<String>,
    author: Option<String>,
    year: Option<u32>,
) -> Result<()> {
    let Some(book) = ctx.api.find(id) else {
        warn_unknown(ctx, id);
        return Ok(());
    };

    let mut form = EditForm::from(&book);
    if let Some(title) = title {
        form.title = title;
    }
    if let Some(author) = author {
        form.author = author;
    }
    if let Some(year) = year {
        form.year = year;
    }

    let result = ctx.api.dispatch(form.submit())?;
    report(ctx, &result)
}

fn handle_delete(ctx: &mut AppContext, id: BookId, yes: bool) -> Result<()> {
    if ctx.api.find(id).is_none() {
        warn_unknown(ctx, id);
        return Ok(());
    }

    let requested = ctx.api.request_delete(id)?;
    let Some(question) = requested.confirmation.clone() else {
        return report(ctx, &requested);
    };

    let choice = if yes {
        Choice::Confirm
    } else {
        ask(ctx, &question)?
    };

    let result = ctx.api.resolve_confirmation(choice)?;
    report(ctx, &result)
}

/// Prompts on stdout and reads one line from stdin. End of input cancels.
fn ask(ctx: &AppContext, question: &str) -> Result<Choice> {
    print!("{}", render_prompt(question, ctx.use_color));
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(Choice::from_answer(&answer))
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    println!("{}", ctx.api.slot_path().display());
    Ok(())
}

fn handle_config(
    cli: &Cli,
    config: &ShelfConfig,
    config_path: Option<&Path>,
    action: Option<&ConfigCommands>,
) -> Result<()> {
    match action {
        Some(ConfigCommands::Gen) => {
            print!("{}", ShelfConfig::template());
        }
        None => {
            let data_dir = resolve_data_dir(cli, config)?;
            if let Some(path) = config_path {
                println!("# config file: {}", path.display());
            }
            println!("data_dir = {:?}", data_dir.display().to_string());
            println!("storage_key = {:?}", config.storage_key);
            println!("log_level = {:?}", config.log_level);
        }
    }
    Ok(())
}
