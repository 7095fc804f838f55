use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use issue_types::Issue;

use crate::components::issue_list_item::{IssueListItem, IssueListItemProps};

/// A list of issues.
///
/// While `issues` is `None` the list shows `placeholder_rows` skeleton rows,
/// so the page keeps its shape until data arrives.
#[component]
pub fn IssueList(
    #[props(default)] issues: Option<Vec<Issue>>,
    #[props(default = 5)] placeholder_rows: usize,
    #[props(default)] now: Option<DateTime<Utc>>,
    #[props(default)] on_select: Option<EventHandler<u64>>,
) -> Element {
    let Some(issues) = issues else {
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./style.css") }
            ul { class: "issue-list", "aria-busy": "true",
                for row in 0..placeholder_rows {
                    IssueListItem { key: "placeholder-{row}" }
                }
            }
        };
    };

    if issues.is_empty() {
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./style.css") }
            p { class: "issue-list-empty", "No issues found." }
        };
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        ul { class: "issue-list",
            for issue in issues {
                IssueListItem {
                    key: "{issue.number}",
                    ..row_props(&issue, now, on_select),
                }
            }
        }
    }
}

fn row_props(
    issue: &Issue,
    now: Option<DateTime<Utc>>,
    on_select: Option<EventHandler<u64>>,
) -> IssueListItemProps {
    let number = issue.number;
    IssueListItemProps {
        now,
        on_activate: on_select.map(|handler| EventHandler::new(move |_: ()| handler.call(number))),
        ..IssueListItemProps::from(issue)
    }
}
