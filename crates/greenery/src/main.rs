//! Greenery - terminal browser for the green-tech company directory.
//!
//! Loads a directory snapshot and runs the listing pipeline from
//! `greenery-seeker` over it:
//!
//! ```text
//! greenery companies --search solar --sort founded_year-desc
//! greenery categories --search storage
//! greenery show 42
//! greenery browse --category wind-power
//! ```
//!
//! Logging goes to stderr and follows `RUST_LOG`; `--verbose` turns on debug
//! output.

mod browse;
mod cli;
mod output;
mod render;
mod source;
mod views;

use std::io;

use anyhow::Context;
use clap::Parser;
use greenery_seeker::query;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::browse::run_browse;
use crate::cli::{Cli, Command, ListingArgs};
use crate::render::{Renderer, CATEGORIES_TEMPLATE, COMPANIES_TEMPLATE, COMPANY_TEMPLATE};
use crate::source::SnapshotSource;
use crate::views::{CategoriesView, CompaniesView, CompanyView, Directory};

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn initial_state(directory: &Directory, args: &ListingArgs) -> greenery_seeker::QueryState {
    let category = args
        .category
        .as_deref()
        .map(|selector| directory.category_id(selector));
    args.to_state(category)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let source = SnapshotSource::new(&cli.data);
    tracing::debug!(path = %source.path().display(), "loading directory");
    let directory = Directory::load(&source);
    let renderer = Renderer::new(cli.output)?;

    match cli.command {
        Command::Companies(args) => {
            let state = initial_state(&directory, &args);
            let result = query(&directory.companies, &state);
            tracing::debug!(
                matched = result.matched(),
                page = result.meta.page,
                "listing companies"
            );
            let view = CompaniesView::new(&directory, &state, &result);
            println!("{}", renderer.render(COMPANIES_TEMPLATE, &view)?);
        }
        Command::Categories(args) => {
            let view = CategoriesView::new(&directory, &args.search);
            println!("{}", renderer.render(CATEGORIES_TEMPLATE, &view)?);
        }
        Command::Show(args) => {
            let view = CompanyView::find(&directory, &args.id)
                .with_context(|| format!("no approved company with id '{}'", args.id))?;
            println!("{}", renderer.render(COMPANY_TEMPLATE, &view)?);
        }
        Command::Browse(args) => {
            let state = initial_state(&directory, &args);
            run_browse(
                &directory,
                state,
                &renderer,
                io::stdin().lock(),
                io::stdout().lock(),
            )?;
        }
    }

    Ok(())
}
