use chrono::{DateTime, NaiveDate, NaiveDateTime};
use maud::{html, Markup, PreEscaped, DOCTYPE};

use daybrief_core::{ContentView, EventView, PopupViewModel, SummaryView};

/// Render the complete popup document for the current view snapshot.
pub fn render_page(view: &PopupViewModel) -> String {
    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Daybrief" }
                style { (PreEscaped(STYLES)) }
            }
            body {
                div class="popup" {
                    input id="apiUrl" type="text" value=(view.endpoint) placeholder="http://localhost:8000";
                    button id="connectBtn" disabled[view.connecting] { "Connect" }
                    div id="content" { (content(&view.content)) }
                }
            }
        }
    };
    markup.into_string()
}

fn content(content: &ContentView) -> Markup {
    match content {
        ContentView::Empty => html! {
            p class="hint" { "Connect to load your workday summary." }
        },
        ContentView::Loading => html! {
            p class="loading" { "Connecting..." }
        },
        // Escaped like every other interpolation; error text is untrusted too.
        ContentView::Error(message) => html! {
            p class="error" { (message) }
        },
        ContentView::Summary(summary) => summary_markup(summary),
    }
}

fn summary_markup(summary: &SummaryView) -> Markup {
    html! {
        div class="greeting" { (summary.greeting) }
        div class="summary" {
            div class="stat" {
                div class="stat-number" { (summary.upcoming_events) }
                div class="stat-label" { "Meetings" }
            }
            div class="stat" {
                div class="stat-number" { (summary.unread_emails) }
                div class="stat-label" { "Unread" }
            }
        }
        div class="events" {
            strong { "Upcoming:" }
            @if summary.events.is_empty() {
                p { "No upcoming events" }
            } @else {
                @for event in &summary.events {
                    (event_markup(event))
                }
            }
        }
    }
}

fn event_markup(event: &EventView) -> Markup {
    html! {
        div class="event" {
            div class="event-title" { (event.title) }
            div class="event-time" { (format_event_time(event.start.as_deref())) }
        }
    }
}

/// Human time for an event start: weekday, month, day and clock time for
/// timestamps; weekday, month and day for all-day dates; empty otherwise.
/// Timestamps render in their own offset.
fn format_event_time(start: Option<&str>) -> String {
    let Some(raw) = start else {
        return String::new();
    };
    if let Ok(stamped) = DateTime::parse_from_rfc3339(raw) {
        return stamped.format("%a, %b %-d, %-I:%M %p").to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format("%a, %b %-d, %-I:%M %p").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%a, %b %-d").to_string();
    }
    String::new()
}

const STYLES: &str = "\
body { margin: 0; font-family: system-ui, sans-serif; font-size: 14px; }
.popup { width: 320px; padding: 12px; }
#apiUrl { width: 200px; padding: 4px 6px; }
#connectBtn { padding: 4px 12px; margin-left: 6px; }
#content { margin-top: 12px; }
.hint, .loading { color: #666; }
.error { color: #c0392b; }
.greeting { font-size: 16px; font-weight: 600; margin-bottom: 8px; }
.summary { display: flex; gap: 16px; margin-bottom: 8px; }
.stat { text-align: center; }
.stat-number { font-size: 20px; font-weight: 700; }
.stat-label { color: #666; font-size: 12px; }
.event { margin: 6px 0; }
.event-title { font-weight: 600; }
.event-time { color: #666; font-size: 12px; }
";
