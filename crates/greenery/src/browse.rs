//! Interactive browsing.
//!
//! Reads one command per line and re-renders the listing after each one.
//! The page rules live in [`Browser`]; this module only parses input and
//! prints pages.

use std::io::{BufRead, Write};
use std::str::FromStr;

use greenery_seeker::{Browser, QueryState, SeekerError, SortOption};
use thiserror::Error;

use crate::render::{Renderer, COMPANIES_TEMPLATE};
use crate::views::{CompaniesView, Directory};

pub const HELP: &str = "\
Commands:
  search <text>      search names, descriptions, locations and categories
  category <id>|all  show one category, or all of them
  sort <option>      name-asc, name-desc, founded_year-desc, founded_year-asc,
                     employee_count-desc, employee_count-asc
  page <n>           go to page n
  next, prev         move one page
  size <n>           companies per page
  clear              clear search and category
  help               show this help
  quit               leave";

/// One line of browse input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Search(String),
    /// `None` selects all categories.
    Category(Option<String>),
    Sort(SortOption),
    Page(usize),
    PageSize(usize),
    Next,
    Previous,
    Clear,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("not a number: '{0}'")]
    InvalidNumber(String),

    #[error(transparent)]
    Sort(#[from] SeekerError),
}

fn number(arg: &str, command: &'static str) -> Result<usize, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            expected: "a number",
        });
    }
    arg.parse()
        .map_err(|_| CommandError::InvalidNumber(arg.to_string()))
}

impl FromStr for BrowseCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, arg) = match line.split_once(char::is_whitespace) {
            Some((word, arg)) => (word, arg.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "search" | "s" => Ok(BrowseCommand::Search(arg.to_string())),
            "category" | "cat" | "c" => match arg {
                "" => Err(CommandError::MissingArgument {
                    command: "category",
                    expected: "a category or 'all'",
                }),
                "all" => Ok(BrowseCommand::Category(None)),
                selector => Ok(BrowseCommand::Category(Some(selector.to_string()))),
            },
            "sort" => {
                if arg.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "sort",
                        expected: "a sort option",
                    });
                }
                Ok(BrowseCommand::Sort(arg.parse()?))
            }
            "page" | "goto" => Ok(BrowseCommand::Page(number(arg, "page")?)),
            "size" => Ok(BrowseCommand::PageSize(number(arg, "size")?)),
            "next" | "n" => Ok(BrowseCommand::Next),
            "prev" | "previous" | "p" => Ok(BrowseCommand::Previous),
            "clear" => Ok(BrowseCommand::Clear),
            "help" | "?" => Ok(BrowseCommand::Help),
            "quit" | "exit" | "q" => Ok(BrowseCommand::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}

/// Runs a browse session until `quit` or end of input.
///
/// Every command is echoed after a `> ` prompt, followed by the new page.
/// Bad commands print an error and leave the page as it was.
pub fn run_browse<R: BufRead, W: Write>(
    directory: &Directory,
    initial: QueryState,
    renderer: &Renderer,
    input: R,
    mut output: W,
) -> anyhow::Result<()> {
    let mut browser = Browser::new(&directory.companies, initial);
    let result = browser.refresh();
    let view = CompaniesView::new(directory, browser.state(), &result);
    writeln!(output, "{}", renderer.render(COMPANIES_TEMPLATE, &view)?)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        writeln!(output, "> {}", line.trim())?;

        let command = match line.parse::<BrowseCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "error: {}", e)?;
                continue;
            }
        };
        tracing::debug!(?command, "browse command");

        let result = match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => {
                writeln!(output, "{}", HELP)?;
                continue;
            }
            BrowseCommand::Search(search) => browser.search(&search),
            BrowseCommand::Category(Some(selector)) => {
                browser.select_category(&directory.category_id(&selector))
            }
            BrowseCommand::Category(None) => browser.all_categories(),
            BrowseCommand::Sort(sort) => browser.sort_by(sort),
            BrowseCommand::Page(page) => browser.goto(page),
            BrowseCommand::PageSize(size) => browser.set_page_size(size),
            BrowseCommand::Next => browser.next_page(),
            BrowseCommand::Previous => browser.previous_page(),
            BrowseCommand::Clear => browser.clear(),
        };

        let view = CompaniesView::new(directory, browser.state(), &result);
        writeln!(output, "{}", renderer.render(COMPANIES_TEMPLATE, &view)?)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputMode;
    use greenery_seeker::{Category, Company, Dir, SortKey};
    use std::io::Cursor;

    fn directory() -> Directory {
        let mut companies: Vec<Company> = (1..=30)
            .map(|i| Company::new(i.to_string(), format!("Company {:02}", i)))
            .collect();
        companies[0] = companies[0].clone().in_category("cat-wind", "Wind Power");
        companies[1] = companies[1].clone().in_category("cat-wind", "Wind Power");
        Directory {
            companies,
            categories: vec![Category {
                id: "cat-wind".into(),
                name: "Wind Power".into(),
                slug: "wind-power".into(),
                description: String::new(),
                icon_url: None,
            }],
            errors: Vec::new(),
        }
    }

    /// Runs a session and returns the page printed after each command.
    fn session(script: &str) -> Vec<String> {
        let renderer = Renderer::new(OutputMode::Text).unwrap();
        let mut out = Vec::new();
        run_browse(
            &directory(),
            QueryState::new().with_page_size(4),
            &renderer,
            Cursor::new(script),
            &mut out,
        )
        .unwrap();
        String::from_utf8(out)
            .unwrap()
            .split("> ")
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(
            "search solar panels".parse::<BrowseCommand>(),
            Ok(BrowseCommand::Search("solar panels".into()))
        );
        assert_eq!("search".parse::<BrowseCommand>(), Ok(BrowseCommand::Search(String::new())));
        assert_eq!("category all".parse::<BrowseCommand>(), Ok(BrowseCommand::Category(None)));
        assert_eq!(
            "cat Wind Power".parse::<BrowseCommand>(),
            Ok(BrowseCommand::Category(Some("Wind Power".into())))
        );
        assert_eq!(
            "sort founded_year-desc".parse::<BrowseCommand>(),
            Ok(BrowseCommand::Sort(SortOption::new(
                SortKey::FoundedYear,
                Dir::Desc
            )))
        );
        assert_eq!("  NEXT ".parse::<BrowseCommand>(), Ok(BrowseCommand::Next));
        assert_eq!("page 3".parse::<BrowseCommand>(), Ok(BrowseCommand::Page(3)));
        assert_eq!("q".parse::<BrowseCommand>(), Ok(BrowseCommand::Quit));
    }

    #[test]
    fn rejects_bad_commands() {
        assert_eq!(
            "dance".parse::<BrowseCommand>(),
            Err(CommandError::Unknown("dance".into()))
        );
        assert_eq!(
            "page two".parse::<BrowseCommand>(),
            Err(CommandError::InvalidNumber("two".into()))
        );
        assert!(matches!(
            "page".parse::<BrowseCommand>(),
            Err(CommandError::MissingArgument { command: "page", .. })
        ));
        assert!(matches!(
            "sort rating-desc".parse::<BrowseCommand>(),
            Err(CommandError::Sort(_))
        ));
    }

    #[test]
    fn initial_page_is_printed() {
        let pages = session("");
        assert_eq!(pages.len(), 1);
        assert!(pages[0].contains("Showing 1 to 4 of 30"));
    }

    #[test]
    fn new_search_returns_to_page_one() {
        let pages = session("page 3\nsearch company 1\n");
        assert!(pages[1].contains("Showing 9 to 12 of 30"));
        assert!(pages[2].contains("Found 10 companies"));
        assert!(pages[2].contains("Showing 1 to 4 of 10"));
    }

    #[test]
    fn paging_past_the_end_stays_on_the_last_page() {
        let pages = session("page 99\nnext\nprev\n");
        assert!(pages[1].contains("Showing 29 to 30 of 30"));
        assert!(pages[2].contains("Showing 29 to 30 of 30"));
        assert!(pages[3].contains("Showing 25 to 28 of 30"));
    }

    #[test]
    fn category_by_slug_then_all() {
        let pages = session("category wind-power\ncategory all\n");
        assert!(pages[1].contains("Category: Wind Power"));
        assert!(pages[1].contains("Found 2 companies"));
        assert!(pages[2].contains("Discover 30+ companies"));
    }

    #[test]
    fn errors_keep_the_session_going() {
        let pages = session("dance\nnext\nquit\nnext\n");
        assert!(pages[1].contains("error: unknown command 'dance'"));
        assert!(pages[2].contains("Showing 5 to 8 of 30"));
        // Nothing after quit is read.
        assert_eq!(pages.len(), 4);
    }

    #[test]
    fn clear_resets_filters() {
        let pages = session("search company 2\nclear\n");
        assert!(pages[1].contains("Found 10 companies"));
        assert!(pages[2].contains("Showing 1 to 4 of 30"));
    }
}
