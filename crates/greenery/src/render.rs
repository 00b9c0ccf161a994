//! Rendering of views to text or JSON.
//!
//! Text output goes through minijinja templates. Two filters do the styling:
//!
//! - `style(name)` applies a named style from the [`Theme`]
//! - `highlight(base)` joins a list of highlight spans, styling the matched
//!   ones and, when a base style is given, the rest
//!
//! Both honour the [`TextMode`]: styled output gets ANSI codes, plain output
//! gets bare text, and debug output keeps `[name]text[/name]` tags so the
//! markup can be checked without a terminal.

use std::collections::HashMap;
use std::sync::Arc;

use console::Style;
use minijinja::{Environment, Error as TemplateError, ErrorKind, Value};
use serde::Serialize;
use thiserror::Error;

use crate::output::{OutputMode, TextMode};

pub const COMPANIES_TEMPLATE: &str = "companies.txt";
pub const CATEGORIES_TEMPLATE: &str = "categories.txt";
pub const COMPANY_TEMPLATE: &str = "company.txt";

/// Style name used for highlighted matches.
pub const MARK: &str = "mark";

const COMPANIES: &str = r##"{{ headline | style("title") }}
{% if search %}
{{ "Search:" | style("label") }} {{ search }}
{% endif %}
{% if category %}
{{ "Category:" | style("label") }} {{ category }}
{% endif %}
{{ "Sort:" | style("label") }} {{ sort_label }}
{% for error in errors %}
{{ error | style("error") }}
{% endfor %}

{% if empty %}
{{ empty.title | style("title") }}
{{ empty.message | style("muted") }}
{% else %}
{% for c in companies %}
{{ c.name | highlight }} {{ ("#" ~ c.id) | style("muted") }}
{% if c.category %}
  {{ c.category | highlight("category") }}
{% endif %}
{% set description = c.description | highlight %}
{% if description %}
  {{ description }}
{% endif %}
{% if c.location %}
  {{ "Location:" | style("label") }} {{ c.location | highlight }}
{% endif %}
{% if c.founded_year %}
  {{ "Founded:" | style("label") }} {{ c.founded_year }}
{% endif %}
{% if c.employee_count %}
  {{ "Employees:" | style("label") }} {{ c.employee_count }}
{% endif %}
{% if not loop.last %}

{% endif %}
{% endfor %}

{{ summary | style("muted") }}
{% if paginated %}
{% if controls.has_previous %}{{ "< prev" | style("muted") }} {% endif %}
{% for n in controls.numbered %}
{% if not loop.first and n > loop.previtem + 1 %}... {% endif %}
{% if n == meta.page %}{{ ("[" ~ n ~ "]") | style("current") }} {% else %}{{ n }} {% endif %}
{% endfor %}
{% if controls.has_next %}{{ "next >" | style("muted") }}{% endif %}

{% endif %}
{% endif %}"##;

const CATEGORIES: &str = r#"{{ "Categories" | style("title") }}
{% if search %}
{{ "Search:" | style("label") }} {{ search }}
{% endif %}
{% for error in errors %}
{{ error | style("error") }}
{% endfor %}

{% if empty %}
{{ empty.title | style("title") }}
{{ empty.message | style("muted") }}
{% else %}
{% for c in categories %}
{{ c.name | highlight }} {{ ("(" ~ c.slug ~ ")") | style("muted") }}
{% set description = c.description | highlight %}
{% if description %}
  {{ description }}
{% endif %}
  {{ c.count }} {{ "company" if c.count == 1 else "companies" }}
{% endfor %}
{% endif %}"#;

const COMPANY: &str = r#"{{ name | style("title") }}
{% if category %}
{{ category | style("category") }}
{% endif %}
{% if description %}

{{ description }}

{% endif %}
{% if location %}
{{ "Location:" | style("label") }} {{ location }}
{% endif %}
{% if founded_year %}
{{ "Founded:" | style("label") }} {{ founded_year }}
{% endif %}
{% if employee_count %}
{{ "Employees:" | style("label") }} {{ employee_count }}
{% endif %}
{% if website %}
{{ "Website:" | style("label") }} {{ website }}
{% endif %}"#;

/// Errors raised while rendering a view.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A named collection of styles.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, returning an updated theme.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    /// Applies `name` to `text` as the text mode asks.
    ///
    /// Unknown style names leave the text unstyled.
    pub fn apply(&self, name: &str, text: &str, mode: TextMode) -> String {
        mode.decorate(name, self.get(name), text)
    }
}

/// The directory's default theme.
pub fn default_theme() -> Theme {
    Theme::new()
        .add("title", Style::new().bold().green())
        .add("label", Style::new().dim())
        .add("muted", Style::new().dim())
        .add("category", Style::new().cyan())
        .add("current", Style::new().bold().underlined())
        .add("error", Style::new().red())
        .add(MARK, Style::new().black().on_yellow().bold())
}

/// Joins a serialized list of highlight spans, styling the matches.
///
/// Unmatched spans get the `base` style one by one, so a match never sits
/// inside another style's escape codes.
fn join_spans(
    spans: &Value,
    base: Option<&str>,
    theme: &Theme,
    mode: TextMode,
) -> Result<String, TemplateError> {
    if spans.is_undefined() || spans.is_none() {
        return Ok(String::new());
    }
    let mut out = String::new();
    for span in spans.try_iter()? {
        let text = span.get_attr("text")?;
        let Some(text) = text.as_str() else {
            return Err(TemplateError::new(
                ErrorKind::InvalidOperation,
                "highlight expects a list of spans with a `text` field",
            ));
        };
        if span.get_attr("is_match")?.is_true() {
            out.push_str(&theme.apply(MARK, text, mode));
        } else if let Some(base) = base.filter(|_| !text.is_empty()) {
            out.push_str(&theme.apply(base, text, mode));
        } else {
            out.push_str(text);
        }
    }
    Ok(out)
}

/// Renders views in one output mode.
pub struct Renderer {
    env: Environment<'static>,
    mode: OutputMode,
}

impl Renderer {
    pub fn new(mode: OutputMode) -> Result<Self, RenderError> {
        Self::with_theme(mode, default_theme())
    }

    pub fn with_theme(mode: OutputMode, theme: Theme) -> Result<Self, RenderError> {
        let text_mode = mode.text_mode().unwrap_or(TextMode::Plain);
        let theme = Arc::new(theme);

        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        // style filter: {{ value | style("title") }}
        let styles = Arc::clone(&theme);
        env.add_filter("style", move |value: Value, name: String| -> String {
            styles.apply(&name, &value.to_string(), text_mode)
        });

        // highlight filter: {{ spans | highlight }} or {{ spans | highlight("category") }}
        let marks = Arc::clone(&theme);
        env.add_filter(
            "highlight",
            move |value: Value, base: Option<String>| -> Result<String, TemplateError> {
                join_spans(&value, base.as_deref(), &marks, text_mode)
            },
        );

        env.add_template(COMPANIES_TEMPLATE, COMPANIES)?;
        env.add_template(CATEGORIES_TEMPLATE, CATEGORIES)?;
        env.add_template(COMPANY_TEMPLATE, COMPANY)?;

        Ok(Renderer { env, mode })
    }

    /// Renders `view` with the named template, or as JSON in structured mode.
    pub fn render<S: Serialize>(&self, template: &str, view: &S) -> Result<String, RenderError> {
        if self.mode.is_json() {
            return Ok(serde_json::to_string_pretty(view)?);
        }
        let output = self.env.get_template(template)?.render(view)?;
        Ok(output)
    }
}
