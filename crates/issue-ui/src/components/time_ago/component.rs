use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::format::{format_time_ago, format_timestamp};

/// Relative time ("3 days ago") with the full timestamp as a tooltip.
///
/// Renders nothing when `date` is absent. `now` defaults to the current
/// time; pass it to render deterministically.
#[component]
pub fn TimeAgo(
    #[props(default)] date: Option<DateTime<Utc>>,
    #[props(default)] now: Option<DateTime<Utc>>,
) -> Element {
    let Some(date) = date else {
        return rsx! {};
    };
    let now = now.unwrap_or_else(Utc::now);
    let relative = format_time_ago(date, now);

    rsx! {
        time {
            datetime: date.to_rfc3339(),
            title: format_timestamp(date),
            "{relative}"
        }
    }
}
