//! Template rendering for CLI output using standout

use console::Style;
use querylablib::{render_report, Exercise, ExerciseInfo, Report};
use serde::Serialize;
use standout::{render_with_output, ColorPolicy, RenderError, Representation, Theme};

/// Include templates at compile time
const EXERCISE_LIST_TEMPLATE: &str = include_str!("../templates/exercise_list.jinja");
const REPORTS_TEMPLATE: &str = include_str!("../templates/reports.jinja");

/// One executed exercise, ready to print
#[derive(Debug)]
pub struct ExerciseRun {
    pub info: ExerciseInfo,
    pub report: Report,
}

/// Data context for the exercise list template
#[derive(Debug, Serialize)]
struct ExerciseListContext {
    /// Pre-padded header row
    header: String,
    /// Separator line (dashes)
    separator: String,
    /// Pre-padded rows: key, category, title
    rows: Vec<String>,
}

/// Data context for the reports template
#[derive(Debug, Serialize)]
struct ReportsContext {
    runs: Vec<TextRun>,
}

#[derive(Debug, Serialize)]
struct TextRun {
    /// `== key: title ==`
    banner: String,
    /// Dumped report, without the trailing newline
    text: String,
}

/// Structured shape of one run
#[derive(Debug, Serialize)]
struct JsonRun<'a> {
    key: &'a str,
    title: &'a str,
    category: &'a str,
    data: &'a serde_json::Value,
}

/// Create the theme with styles
pub fn create_theme() -> Theme {
    Theme::new()
        .add("header", Style::new().bold())
        .add("banner", Style::new().bold().cyan())
}

/// Render the exercise table, or the exercise metadata in a structured mode.
pub fn render_list(
    exercises: &[Exercise],
    mode: Representation,
    colors: ColorPolicy,
) -> Result<String, RenderError> {
    let theme = create_theme();
    if mode.is_structured() {
        let infos: Vec<ExerciseInfo> = exercises.iter().map(|e| e.info).collect();
        return render_with_output(EXERCISE_LIST_TEMPLATE, &infos, &theme, mode, colors);
    }

    let context = build_list_context(exercises);
    render_with_output(EXERCISE_LIST_TEMPLATE, &context, &theme, mode, colors)
}

/// Render every run: banner plus dumped report, or one structured array.
///
/// `depth` overrides the dump depth of every value in the text form.
pub fn render_runs(
    runs: &[ExerciseRun],
    depth: Option<usize>,
    mode: Representation,
    colors: ColorPolicy,
) -> anyhow::Result<String> {
    let theme = create_theme();
    if mode.is_structured() {
        let rows: Vec<JsonRun<'_>> = runs
            .iter()
            .map(|run| JsonRun {
                key: run.info.key,
                title: run.info.title,
                category: run.info.category,
                data: &run.report.data,
            })
            .collect();
        return Ok(render_with_output(
            REPORTS_TEMPLATE,
            &rows,
            &theme,
            mode,
            colors,
        )?);
    }

    let runs = runs
        .iter()
        .map(|run| {
            let text = render_report(&run.report, depth)?;
            Ok(TextRun {
                banner: format!("== {}: {} ==", run.info.key, run.info.title),
                text: text.trim_end_matches('\n').to_string(),
            })
        })
        .collect::<querylablib::Result<Vec<_>>>()?;
    let context = ReportsContext { runs };
    Ok(render_with_output(
        REPORTS_TEMPLATE,
        &context,
        &theme,
        mode,
        colors,
    )?)
}

/// Pad the list columns to the widest key and category
fn build_list_context(exercises: &[Exercise]) -> ExerciseListContext {
    let key_width = column_width("Key", exercises.iter().map(|e| e.info.key));
    let category_width = column_width("Category", exercises.iter().map(|e| e.info.category));

    let header = format!(
        "{:<kw$}  {:<cw$}  Title",
        "Key",
        "Category",
        kw = key_width,
        cw = category_width
    );
    let rows: Vec<String> = exercises
        .iter()
        .map(|e| {
            format!(
                "{:<kw$}  {:<cw$}  {}",
                e.info.key,
                e.info.category,
                e.info.title,
                kw = key_width,
                cw = category_width
            )
        })
        .collect();
    let widest = rows
        .iter()
        .map(|r| r.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0);

    ExerciseListContext {
        header,
        separator: "-".repeat(widest),
        rows,
    }
}

/// Widest of the header and the values, by character count
fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0)
}
