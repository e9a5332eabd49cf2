/*!
 * Response formatting for bot commands.
 */

use crate::catalog::{difficulty_indicator, Problem, Timeframe};
use crate::matching::display_name;
use crate::pagination::{PageContent, Paginator, PROBLEMS_PER_PAGE};

/// Accent color for paged messages
pub const EMBED_COLOR: u32 = 0x5865F2;

/// Maximum entries in a plain (non-paged) problems response
const PLAIN_RESPONSE_CAP: usize = 20;

/// Plain-text problems listing, used when the result set is small enough to
/// fit in a single message
pub fn problems_response(company: &str, timeframe: Timeframe, problems: &[Problem]) -> String {
    let mut out = format!(
        "Most Popular Problems for {} ({}):\n",
        display_name(company),
        timeframe.display()
    );
    for problem in problems.iter().take(PLAIN_RESPONSE_CAP) {
        out.push_str(&format!(
            "{} {} ({:.0}%): {}\n",
            difficulty_indicator(&problem.difficulty),
            problem.title,
            problem.frequency,
            problem.url
        ));
    }
    out
}

/// Hint listing the timeframes a company does have data for
pub fn available_timeframes_hint(
    prefix: &str,
    company: &str,
    requested: Timeframe,
    available: &[Timeframe],
) -> String {
    let mut out = format!(
        "No problems found for **{}** in the **{}** timeframe.\n\nAvailable timeframes:\n",
        display_name(company),
        requested.display()
    );
    for tf in available {
        out.push_str(&format!("• **{}** ({})\n", tf.short_alias(), tf.display()));
    }
    out.push_str(&format!("\nTry: `{prefix}problems {company} <timeframe>`"));
    out
}

pub fn no_data_message(company: &str) -> String {
    format!("No data found for company '{}'", display_name(company))
}

/// Rejection message carrying up to three suggestions
pub fn company_not_found(input: &str, suggestions: &[String]) -> String {
    let mut out = format!("Could not find company matching '{input}'.");
    if !suggestions.is_empty() {
        out.push_str("\n\nDid you mean:\n");
        for suggestion in suggestions {
            out.push_str(&format!("• {}\n", display_name(suggestion)));
        }
    }
    out
}

/// Build a paginator over a company's problem list
pub fn problems_paginator(company: &str, timeframe: Timeframe, problems: Vec<Problem>) -> Paginator {
    let total = problems.len();
    let total_pages = total.div_ceil(PROBLEMS_PER_PAGE).max(1);
    let title = format!(
        "Most Popular Problems for {} ({})",
        display_name(company),
        timeframe.display()
    );

    Paginator::new(total_pages, move |page| {
        let page = page.min(total_pages - 1);
        let start = page * PROBLEMS_PER_PAGE;
        let end = (start + PROBLEMS_PER_PAGE).min(total);

        let mut description = String::new();
        for (offset, problem) in problems[start..end].iter().enumerate() {
            description.push_str(&format!(
                "**{}.** {} [{}](<{}>) `{:.0}%`\n",
                start + offset + 1,
                difficulty_indicator(&problem.difficulty),
                problem.title,
                problem.url,
                problem.frequency
            ));
        }

        PageContent {
            title: title.clone(),
            description,
            footer: format!("Page {}/{} • Total: {} problems", page + 1, total_pages, total),
            color: EMBED_COLOR,
        }
    })
}

/// Build the paged help text
pub fn help_paginator(prefix: &str, is_admin: bool) -> Paginator {
    let prefix = prefix.to_string();
    Paginator::new(3, move |page| {
        let (title, description) = match page {
            0 => (
                "Help (1/3): Looking up problems".to_string(),
                format!(
                    "**{p}problems <company> [timeframe]**\n\
                     Show the most frequently reported interview problems for a company.\n\n\
                     Examples:\n\
                     • `{p}problems google`\n\
                     • `{p}problems amazon 6m`\n\n\
                     Timeframes: `30d`, `3mo`, `6mo`, `>6mo`, `all`. Without one, the most \
                     recent timeframe with data is used.",
                    p = prefix
                ),
            ),
            1 => (
                "Help (2/3): Tracking your processes".to_string(),
                format!(
                    "**{p}process <company> [stage]**\n\
                     With a stage, record a step of your interview process. Without one, \
                     show a summary of what you have recorded for that company.\n\n\
                     Stages: `apply`, `reject`, `oa`, `phone`, `onsite`, `offer`.\n\n\
                     Example: `{p}process stripe phone`",
                    p = prefix
                ),
            ),
            _ => {
                let admin = if is_admin {
                    format!(
                        "\n\nAdmin commands:\n\
                         • `{p}init enable` / `{p}init disable` / `{p}init status`\n\
                         • `{p}shutdown` / `{p}startup`",
                        p = prefix
                    )
                } else {
                    String::new()
                };
                (
                    "Help (3/3): Everything else".to_string(),
                    format!(
                        "**{p}help** shows this text.\n\n\
                         Long problem lists get navigation buttons; use them to turn \
                         pages.{admin}",
                        p = prefix
                    ),
                )
            }
        };

        PageContent {
            title,
            description,
            footer: format!("Page {}/3", page.min(2) + 1),
            color: EMBED_COLOR,
        }
    })
}
