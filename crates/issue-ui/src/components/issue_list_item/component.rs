use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use issue_types::{Issue, IssueState, Label};

use crate::components::chip::Chip;
use crate::components::icons::{CommentIcon, IssueStateIcon};
use crate::components::skeleton::Span;
use crate::components::time_ago::TimeAgo;
use crate::error::SkeletonError;
use crate::format::format_issue_number;
use crate::skeleton::{placeholder, with_skeleton_provider, FallbackSpec, SkeletonProps};

/// Placeholder widths, in characters, for the text data props.
const TITLE_WIDTH: i64 = 50;
const AUTHOR_WIDTH: i64 = 10;

const UNKNOWN_AUTHOR: &str = "unknown";

#[derive(Props, Clone, PartialEq)]
pub struct IssueListItemProps {
    #[props(default)]
    pub title: Option<String>,
    #[props(default)]
    pub number: Option<u64>,
    #[props(default)]
    pub state: Option<IssueState>,
    #[props(default)]
    pub author: Option<String>,
    #[props(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[props(default)]
    pub comment_count: u32,
    /// `owner/name`; the repository line is only shown when non-empty.
    #[props(default)]
    pub repository: Option<String>,
    #[props(default)]
    pub labels: Vec<Label>,
    /// Set by the skeleton provider; any value passed in is overwritten.
    #[props(default)]
    pub loading: bool,
    /// Reference time for the relative date, defaults to the current time.
    #[props(default)]
    pub now: Option<DateTime<Utc>>,
    /// Fired on click, Enter or Space. Never fired while loading.
    #[props(default)]
    pub on_activate: Option<EventHandler<()>>,
}

impl SkeletonProps for IssueListItemProps {
    fn fallbacks() -> Result<FallbackSpec<Self>, SkeletonError> {
        Ok(FallbackSpec::new()
            .generated("title", |p: &mut Self| &mut p.title, placeholder(TITLE_WIDTH)?)
            .generated("author", |p: &mut Self| &mut p.author, placeholder(AUTHOR_WIDTH)?)
            .null("state", |p: &mut Self| &mut p.state))
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}

impl From<&Issue> for IssueListItemProps {
    fn from(issue: &Issue) -> Self {
        Self {
            title: Some(issue.title.clone()),
            number: Some(issue.number),
            state: Some(issue.state),
            author: Some(
                issue
                    .author
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            ),
            created_at: Some(issue.created_at),
            comment_count: issue.comment_count,
            repository: issue.repository.clone(),
            labels: issue.labels.clone(),
            loading: false,
            now: None,
            on_activate: None,
        }
    }
}

/// One row of an issue list.
///
/// Renders as a skeleton row (state icon, text and comment icon all
/// replaced by neutral placeholders, pointer and keyboard interaction off)
/// until `title`, `author` and `state` are all provided.
#[component]
pub fn IssueListItem(props: IssueListItemProps) -> Element {
    with_skeleton_provider(props, issue_list_item)
}

fn issue_list_item(props: IssueListItemProps) -> Element {
    let loading = props.loading;
    let number = format_issue_number(props.number);
    let title = props.title.unwrap_or_default();
    let author = props
        .author
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
    let repository = props.repository.filter(|repo| !repo.is_empty());
    let comment_count = props.comment_count;
    let show_comments = loading || comment_count > 0;
    let on_activate = props.on_activate;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        li {
            class: if loading { "issue-list-item loading" } else { "issue-list-item" },
            role: "button",
            tabindex: if loading { "-1" } else { "0" },
            "aria-busy": if loading { "true" } else { "false" },
            onclick: move |_| {
                if activates(loading, None) {
                    if let Some(handler) = &on_activate {
                        handler.call(());
                    }
                }
            },
            onkeydown: move |evt: KeyboardEvent| {
                if activates(loading, Some(&evt.key())) {
                    evt.prevent_default();
                    if let Some(handler) = &on_activate {
                        handler.call(());
                    }
                }
            },
            div { class: "issue-list-item-icon",
                IssueStateIcon { state: props.state }
            }
            div { class: "issue-list-item-text",
                {repository.map(|repository| rsx! {
                    div { class: "issue-list-item-repository",
                        Span { "{repository} {number}" }
                    }
                })}
                div { class: "issue-list-item-title",
                    Span { "{title}" }
                }
                div { class: "issue-list-item-meta",
                    Span {
                        "{number} opened "
                        TimeAgo { date: props.created_at, now: props.now }
                        " by {author} "
                        for label in props.labels {
                            Chip { key: "{label.name}", label: label }
                        }
                    }
                }
            }
            if show_comments {
                div { class: "issue-list-item-comments",
                    CommentIcon {}
                    span { class: "issue-list-item-comment-count",
                        Span { "{comment_count}" }
                    }
                }
            }
        }
    }
}

/// Whether a click (`key == None`) or key press activates the row.
fn activates(loading: bool, key: Option<&Key>) -> bool {
    if loading {
        return false;
    }
    match key {
        None | Some(Key::Enter) => true,
        Some(Key::Character(c)) => c == " ",
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_row_ignores_all_activation() {
        assert!(!activates(true, None));
        assert!(!activates(true, Some(&Key::Enter)));
        assert!(!activates(true, Some(&Key::Character(" ".into()))));
    }

    #[test]
    fn loaded_row_activates_on_click_enter_and_space() {
        assert!(activates(false, None));
        assert!(activates(false, Some(&Key::Enter)));
        assert!(activates(false, Some(&Key::Character(" ".into()))));
    }

    #[test]
    fn other_keys_do_nothing() {
        assert!(!activates(false, Some(&Key::Character("a".into()))));
        assert!(!activates(false, Some(&Key::Tab)));
    }
}
