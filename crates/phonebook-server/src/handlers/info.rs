//! HTML pages

use crate::middleware::ApiError;
use crate::AppState;
use axum::{extract::State, response::Html};
use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

pub async fn root() -> Html<&'static str> {
    Html("<h1>Hello World!</h1>")
}

pub async fn info(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let count = state.store.count().await?;
    Ok(Html(render_info(count, &Local::now())))
}

fn render_info<Tz>(count: usize, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "<div>Phonebook has info for {} people</div><div>{}</div>",
        count,
        now.format("%a %b %d %Y %H:%M:%S GMT%z")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_render_info() {
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 15, 4, 5).unwrap();
        assert_eq!(
            render_info(4, &now),
            "<div>Phonebook has info for 4 people</div><div>Tue Jan 02 2024 15:04:05 GMT+0000</div>"
        );

        let helsinki = FixedOffset::east_opt(2 * 3600).unwrap();
        let now = helsinki.with_ymd_and_hms(2024, 1, 2, 17, 4, 5).unwrap();
        assert!(render_info(0, &now).ends_with("17:04:05 GMT+0200</div>"));
    }
}
