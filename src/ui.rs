use crate::models::MonthGrid;
use std::fmt::Write;

const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn render_dashboard(grids: &[MonthGrid]) -> String {
    let calendars: String = grids.iter().map(render_calendar).collect();
    let body = if calendars.is_empty() {
        r#"<p class="hint">No calendars configured.</p>"#.to_string()
    } else {
        calendars
    };
    DASHBOARD_HTML.replace("{{CALENDARS}}", &body)
}

pub fn render_calendar(grid: &MonthGrid) -> String {
    let id = escape(&grid.calendar);
    let mut html = String::new();

    let _ = write!(
        html,
        r#"<section class="calendar" id="{id}Calendar">
      <div class="calendar-header">
        <form method="post" action="/calendar/{id}/prev"><button class="calendar-nav" type="submit" aria-label="Previous month">&lsaquo;</button></form>
        <div>
          <span class="label">{id}</span>
          <div class="calendar-title">{title}</div>
        </div>
        <form method="post" action="/calendar/{id}/next"><button class="calendar-nav" type="submit" aria-label="Next month">&rsaquo;</button></form>
      </div>
      <div class="calendar-grid">"#,
        title = escape(&grid.title),
    );

    for header in WEEKDAY_HEADERS {
        let _ = write!(html, r#"<div class="day-header">{header}</div>"#);
    }
    for _ in 0..grid.leading_blanks {
        html.push_str(r#"<div class="day-cell day-empty"></div>"#);
    }
    for cell in &grid.days {
        let today = if cell.is_today { " today" } else { "" };
        let _ = write!(
            html,
            r#"<div class="day-cell day-{class}{today}" title="{tooltip}" data-date="{date}"><span class="day-num">{day}</span><span class="day-mark">{mark}</span></div>"#,
            class = cell.classification.as_str(),
            tooltip = escape(&cell.tooltip),
            date = cell.date,
            day = cell.day,
            mark = cell.classification.mark(),
        );
    }

    html.push_str("</div>\n    </section>\n");
    html
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Attendance</title>
  <style>
    :root {
      --bg: #f4f6f8;
      --ink: #22272e;
      --muted: #6b7280;
      --card: #ffffff;
      --present: #2d7a4b;
      --absent: #c63b2b;
      --weekend: #9aa3ad;
      --accent: #2f4858;
      --shadow: 0 18px 40px rgba(47, 72, 88, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(980px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    .calendars {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
      gap: 24px;
    }

    .calendar {
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 20px;
      display: grid;
      gap: 14px;
    }

    .calendar-header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      text-align: center;
    }

    .calendar-title {
      font-size: 1.2rem;
      font-weight: 600;
    }

    .label {
      font-size: 0.75rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .calendar-nav {
      appearance: none;
      border: none;
      border-radius: 999px;
      width: 36px;
      height: 36px;
      font-size: 1.3rem;
      cursor: pointer;
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent);
    }

    .calendar-grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
    }

    .day-header {
      text-align: center;
      font-size: 0.8rem;
      color: var(--muted);
    }

    .day-cell {
      border-radius: 10px;
      min-height: 44px;
      padding: 4px 6px;
      display: flex;
      flex-direction: column;
      justify-content: space-between;
      font-size: 0.85rem;
    }

    .day-empty {
      background: transparent;
    }

    .day-present {
      background: rgba(45, 122, 75, 0.12);
      color: var(--present);
    }

    .day-absent {
      background: rgba(198, 59, 43, 0.1);
      color: var(--absent);
    }

    .day-weekend {
      background: rgba(154, 163, 173, 0.15);
      color: var(--weekend);
    }

    .day-cell.today {
      outline: 2px solid var(--accent);
    }

    .day-mark {
      align-self: flex-end;
      font-weight: 600;
    }

    .hint {
      margin: 0;
      color: var(--muted);
      font-size: 0.9rem;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Attendance</h1>
      <p class="hint">P = present, A = absent, W = weekend. Hover a day for login times.</p>
    </header>
    <div class="calendars">
    {{CALENDARS}}
    </div>
  </main>
</body>
</html>
"#;
