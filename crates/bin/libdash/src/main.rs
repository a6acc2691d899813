//! # libdash — library administration dashboard
//!
//! Composition root that wires the HTTP adapter into the dashboard core and
//! drives it from the command line.
//!
//! ## Responsibilities
//! - Parse configuration (CLI args, env vars, config file)
//! - Initialise logging
//! - Construct the `LibraryApi` adapter and the quick stats source
//! - Construct the `Dashboard`, injecting both via port traits
//! - Run one command and render the resulting view
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod cli;
mod config;
mod confirm;
mod render;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use libdash_adapter_http_reqwest::HttpLibraryApi;
use libdash_app::dashboard::Dashboard;
use libdash_app::error_board::Resource;
use libdash_app::placeholder_quick_stats::PlaceholderQuickStats;
use libdash_app::services::category_store::{ArchiveOutcome, SubmitOutcome};
use libdash_domain::category::Category;
use libdash_domain::error::LibdashError;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::confirm::TerminalConfirmation;
use crate::render::Rendered;

type App = Dashboard<HttpLibraryApi, PlaceholderQuickStats>;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    init_tracing(&config.logging.filter);

    let api = HttpLibraryApi::new(&config.api).context("failed to build HTTP client")?;
    let dashboard = Dashboard::new(
        Arc::new(api),
        Arc::new(config.quick_stats_source()),
        config.dashboard.options(),
    );
    tracing::debug!(base_url = %config.api.base_url, "dashboard ready");

    match cli.command.unwrap_or_default() {
        Command::Show => show(&dashboard).await,
        Command::Create {
            name,
            description,
            editor,
        } => {
            let store = dashboard.categories();
            store.start_create();
            store.edit_form(|form| {
                form.category_name = name;
                form.category_description = description.unwrap_or_default();
                form.who_edited = editor.unwrap_or_default();
            });
            submit(&dashboard).await
        }
        Command::Update {
            id,
            name,
            description,
            editor,
        } => {
            let store = dashboard.categories();
            store
                .list()
                .await
                .map_err(|err| failure(&dashboard, Resource::Categories, err))?;
            let category = store
                .find(id)
                .with_context(|| format!("category #{id} not found"))?;
            store.start_edit(&category);
            store.edit_form(|form| {
                if let Some(name) = name {
                    form.category_name = name;
                }
                if let Some(description) = description {
                    form.category_description = description;
                }
                if let Some(editor) = editor {
                    form.who_edited = editor;
                }
            });
            submit(&dashboard).await
        }
        Command::Archive { id, yes } => {
            let outcome = dashboard
                .categories()
                .archive(id, &TerminalConfirmation::new(yes))
                .await
                .map_err(|err| failure(&dashboard, Resource::CategoryMutation, err))?;
            match outcome {
                ArchiveOutcome::Archived => println!("Category #{id} archived."),
                ArchiveOutcome::Declined => println!("Cancelled."),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter {filter:?}: {err}");
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn show(dashboard: &App) -> anyhow::Result<ExitCode> {
    dashboard.mount().await;
    let view = dashboard.view();
    println!("{}", Rendered(&view));
    Ok(if view.error.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

async fn submit(dashboard: &App) -> anyhow::Result<ExitCode> {
    let outcome = dashboard
        .categories()
        .submit()
        .await
        .map_err(|err| failure(dashboard, Resource::CategoryMutation, err))?;
    match outcome {
        SubmitOutcome::Created(category) => println!("Created {}.", describe(category.as_ref())),
        SubmitOutcome::Updated(category) => println!("Updated {}.", describe(category.as_ref())),
        SubmitOutcome::Busy => anyhow::bail!("another submission is still in progress"),
        SubmitOutcome::Closed => anyhow::bail!("no category form is open"),
    }
    println!("{}", Rendered(&dashboard.view()));
    Ok(ExitCode::SUCCESS)
}

fn describe(category: Option<&Category>) -> String {
    let Some(category) = category else {
        return "category".to_string();
    };
    let id = category.category_id;
    format!("category #{id} {:?}", category.category_name)
}

/// Attach the message the dashboard surfaced for `resource` to `err`.
fn failure(dashboard: &App, resource: Resource, err: LibdashError) -> anyhow::Error {
    let message = dashboard
        .errors()
        .get(resource)
        .unwrap_or_else(|| err.to_string());
    anyhow::Error::new(err).context(message)
}
