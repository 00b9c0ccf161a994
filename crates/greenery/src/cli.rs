//! Command-line arguments and the configuration derived from them.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use greenery_seeker::{QueryState, SortOption, DEFAULT_PAGE_SIZE};

use crate::output::OutputMode;

/// Greenery - browse the green-tech company directory from the terminal
#[derive(Debug, Parser)]
#[command(name = "greenery", version)]
#[command(about = "Browse the Greenery green-tech company directory")]
pub struct Cli {
    /// Directory snapshot (JSON export of the companies and categories tables)
    #[arg(long, global = true, env = "GREENERY_DATA", default_value = "greenery.json")]
    pub data: PathBuf,

    /// Output mode
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Auto)]
    pub output: OutputMode,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List approved companies, one page at a time
    Companies(ListingArgs),

    /// List categories with their company counts
    Categories(CategoriesArgs),

    /// Show one company
    Show(ShowArgs),

    /// Browse interactively, reading commands from stdin
    Browse(ListingArgs),
}

/// Inputs of the companies listing.
#[derive(Debug, Clone, Args)]
pub struct ListingArgs {
    /// Search names, descriptions, locations and categories
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Only show this category (id or slug)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Sort order: name-asc, name-desc, founded_year-desc, founded_year-asc,
    /// employee_count-desc or employee_count-asc
    #[arg(long, default_value = "name-asc")]
    pub sort: SortOption,

    /// Page to show
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Companies per page
    #[arg(long, env = "GREENERY_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
}

impl ListingArgs {
    /// Builds the initial query state. `category` is the resolved category id.
    pub fn to_state(&self, category: Option<String>) -> QueryState {
        let state = QueryState::new()
            .with_page_size(self.page_size)
            .with_search(self.search.as_str())
            .with_sort(self.sort);
        let state = match category {
            Some(id) => state.with_category(id),
            None => state,
        };
        state.with_page(self.page)
    }
}

#[derive(Debug, Clone, Args)]
pub struct CategoriesArgs {
    /// Search category names and descriptions
    #[arg(short, long, default_value = "")]
    pub search: String,
}

#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Company id
    pub id: String,
}
