//! # CLI Layer
//!
//! One possible UI client for idreg. This is the only place that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Handles argument parsing
//! - Decides that identifiers are validated before a record is accepted
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API and configuration
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::menu::Menu;
use super::print::{print_messages, print_users};
use super::setup::{Cli, Commands, PasswordCommands};
use clap::Parser;
use colored::Colorize;
use idreg::api::{CmdResult, IdregApi, MessageLevel};
use idreg::config::IdregConfig;
use idreg::error::{IdregError, Result};
use idreg::model::{non_blank, RecordUpdate, UserRecord};
use idreg::store::fs::FileStore;
use std::io;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: IdregApi<FileStore>,
    config: IdregConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        None | Some(Commands::Menu) => handle_menu(&mut ctx),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Add {
            user_id,
            name,
            pesel,
            nip,
            regon,
        }) => handle_add(&mut ctx, user_id, name, pesel, nip, regon),
        Some(Commands::Remove { user_id }) => handle_remove(&mut ctx, &user_id),
        Some(Commands::Edit {
            user_id,
            name,
            pesel,
            nip,
            regon,
        }) => handle_edit(&mut ctx, &user_id, name, pesel, nip, regon),
        Some(Commands::Check { pesel, nip, regon }) => handle_check(&ctx, pesel, nip, regon),
        Some(Commands::Password { action }) => match action {
            PasswordCommands::Generate { length } => handle_password_generate(&ctx, length),
            PasswordCommands::Check { password } => handle_password_check(&ctx, &password),
        },
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = IdregConfig::load(&cli.data_dir)?;
    let store = FileStore::new(&cli.data_dir).with_file_name(&config.users_file);
    tracing::debug!(path = %store.document_path().display(), "using registry");

    Ok(AppContext {
        api: IdregApi::new(store),
        config,
    })
}

fn handle_menu(ctx: &mut AppContext) -> Result<()> {
    let location = ctx.api.store().document_path().display().to_string();
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut ctx.api, stdin.lock(), stdout.lock(), location).run()
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_users()?;
    let mut out = io::stdout().lock();
    print_users(&mut out, &result.listed_users)?;
    print_messages(&mut out, &result.messages)?;
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    user_id: String,
    name: Option<String>,
    pesel: Option<String>,
    nip: Option<String>,
    regon: Option<String>,
) -> Result<()> {
    let Some(user_id) = non_blank(&user_id) else {
        return Err(IdregError::Api("User ID cannot be empty".into()));
    };
    let record = UserRecord {
        name: name.as_deref().and_then(non_blank),
        pesel: pesel.as_deref().and_then(non_blank),
        nip: nip.as_deref().and_then(non_blank),
        regon: regon.as_deref().and_then(non_blank),
        ..UserRecord::new(user_id)
    };

    ensure_identifiers(ctx, &record)?;
    let result = ctx.api.add_user(record)?;
    print(&result)
}

fn handle_remove(ctx: &mut AppContext, user_id: &str) -> Result<()> {
    let result = ctx.api.remove_user(user_id)?;
    print(&result)
}

fn handle_edit(
    ctx: &mut AppContext,
    user_id: &str,
    name: Option<String>,
    pesel: Option<String>,
    nip: Option<String>,
    regon: Option<String>,
) -> Result<()> {
    let update = RecordUpdate::from_input(
        name.as_deref().unwrap_or_default(),
        pesel.as_deref().unwrap_or_default(),
        nip.as_deref().unwrap_or_default(),
        regon.as_deref().unwrap_or_default(),
    );
    if update.is_empty() {
        return Err(IdregError::Api("Nothing to change".into()));
    }

    let candidate = UserRecord {
        pesel: update.pesel.clone(),
        nip: update.nip.clone(),
        regon: update.regon.clone(),
        ..UserRecord::new(user_id)
    };
    ensure_identifiers(ctx, &candidate)?;

    let result = ctx.api.edit_user(user_id, &update)?;
    print(&result)
}

fn handle_check(
    ctx: &AppContext,
    pesel: Option<String>,
    nip: Option<String>,
    regon: Option<String>,
) -> Result<()> {
    if pesel.is_none() && nip.is_none() && regon.is_none() {
        let result = ctx.api.audit()?;
        let mut out = io::stdout().lock();
        print_messages(&mut out, &result.messages)?;
        return Ok(());
    }

    // Validators see the raw value: an empty string is checked, and fails.
    let record = UserRecord {
        pesel,
        nip,
        regon,
        ..UserRecord::new("")
    };
    let result = ctx.api.check_identifiers(&record)?;
    print(&result)?;
    if result.affected_users.is_empty() {
        return Err(IdregError::Api("Invalid identifiers".into()));
    }
    Ok(())
}

fn handle_password_generate(ctx: &AppContext, length: Option<usize>) -> Result<()> {
    let result = ctx
        .api
        .generate_password(length.unwrap_or(ctx.config.password_length))?;
    if let Some(password) = &result.password {
        println!("{}", password.bold());
    }
    let mut err = io::stderr().lock();
    print_messages(&mut err, &result.messages)?;
    Ok(())
}

fn handle_password_check(ctx: &AppContext, password: &str) -> Result<()> {
    let result = ctx.api.check_password(password)?;
    print(&result)?;
    if result
        .messages
        .iter()
        .any(|m| m.level != MessageLevel::Success)
    {
        return Err(IdregError::Api("Password does not meet the policy".into()));
    }
    Ok(())
}

/// Refuses records carrying an invalid identifier, printing why.
fn ensure_identifiers(ctx: &AppContext, record: &UserRecord) -> Result<()> {
    let check = ctx.api.check_identifiers(record)?;
    if check.affected_users.is_empty() {
        let failures: Vec<_> = check
            .messages
            .into_iter()
            .filter(|m| m.level == MessageLevel::Error)
            .collect();
        print_messages(&mut io::stdout().lock(), &failures)?;
        return Err(IdregError::Api("Invalid identifiers, nothing saved".into()));
    }
    Ok(())
}

fn print(result: &CmdResult) -> Result<()> {
    print_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}
