use crate::display::{format_deadline, format_duration, format_long_date, format_total, html_escape};
use crate::models::PlanEntry;
use chrono::NaiveDate;

pub fn render_plan(date: NaiveDate, entries: &[PlanEntry]) -> String {
    PAGE_HTML
        .replace("{{DATE}}", &format_long_date(date))
        .replace("{{PLAN}}", &render_plan_section(entries))
}

fn render_plan_section(entries: &[PlanEntry]) -> String {
    if entries.is_empty() {
        return NO_PLAN_HTML.to_string();
    }

    let mut html = String::from("<h2>Today's Plan</h2>\n<div class=\"tasks-list\">\n");
    let mut total_minutes = 0;
    for entry in entries {
        total_minutes += entry.duration_minutes;
        html.push_str(&render_task_card(entry));
    }
    html.push_str("</div>\n");
    html.push_str(&format!(
        "<div class=\"summary\"><p>Total time: {}</p></div>\n",
        format_total(total_minutes)
    ));
    html
}

fn render_task_card(entry: &PlanEntry) -> String {
    format!(
        r#"<div class="task-card">
  <div class="task-order">{order}</div>
  <div class="task-content">
    <h3>{title}</h3>
    <div class="task-details">
      <span class="duration">⏱️ {duration}</span>
      <span class="priority priority-{priority}">Priority: {priority}</span>
      <span class="deadline">📅 Due: {deadline}</span>
    </div>
  </div>
</div>
"#,
        order = entry.task_order,
        title = html_escape(&entry.title),
        duration = format_duration(entry.duration_minutes),
        priority = entry.priority,
        deadline = format_deadline(entry.deadline),
    )
}

const NO_PLAN_HTML: &str = r#"<div class="no-plan">
  <p>No plan generated for today.</p>
  <p>Run <code>planner generate</code> to create your plan!</p>
</div>
"#;

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Smart Planner - Today's Plan</title>
  <style>
    :root {
      --bg-1: #eef2fb;
      --bg-2: #c9d9f5;
      --ink: #232735;
      --muted: #68708a;
      --accent: #4563e0;
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 24px 60px rgba(35, 50, 95, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e4ecfa 60%, #f2f5fc 100%);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
      display: grid;
      place-items: start center;
      padding: 40px 18px 56px;
    }

    .container {
      width: min(760px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 34px;
      display: grid;
      gap: 24px;
    }

    header h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    header .date {
      margin: 6px 0 0;
      color: var(--muted);
      font-size: 1rem;
    }

    .plan-section h2 {
      margin: 0 0 16px;
      font-size: 1.3rem;
    }

    .tasks-list {
      display: grid;
      gap: 14px;
    }

    .task-card {
      display: flex;
      align-items: center;
      gap: 16px;
      background: white;
      border: 1px solid rgba(35, 50, 95, 0.08);
      border-radius: 16px;
      padding: 16px 18px;
    }

    .task-order {
      flex-shrink: 0;
      width: 38px;
      height: 38px;
      display: grid;
      place-items: center;
      border-radius: 50%;
      background: var(--accent);
      color: white;
      font-weight: 600;
    }

    .task-content h3 {
      margin: 0 0 6px;
      font-size: 1.05rem;
    }

    .task-details {
      display: flex;
      flex-wrap: wrap;
      gap: 10px 16px;
      font-size: 0.9rem;
      color: var(--muted);
    }

    .priority {
      border-radius: 999px;
      padding: 2px 10px;
      background: rgba(35, 50, 95, 0.08);
    }

    .priority-1 {
      background: rgba(214, 69, 65, 0.14);
      color: #b03a32;
    }

    .priority-2 {
      background: rgba(230, 146, 41, 0.16);
      color: #a96415;
    }

    .priority-3 {
      background: rgba(69, 99, 224, 0.14);
      color: #3350c2;
    }

    .summary {
      border-top: 1px solid rgba(35, 50, 95, 0.1);
      padding-top: 14px;
      font-weight: 600;
    }

    .summary p {
      margin: 0;
    }

    .no-plan {
      text-align: center;
      color: var(--muted);
      padding: 28px 0;
    }

    .no-plan code {
      background: rgba(35, 50, 95, 0.08);
      border-radius: 6px;
      padding: 2px 8px;
      color: var(--ink);
    }

    @media (max-width: 520px) {
      .container {
        padding: 24px 18px;
      }
      .task-card {
        align-items: flex-start;
      }
    }
  </style>
</head>
<body>
  <div class="container">
    <header>
      <h1>🧠 Smart Planner</h1>
      <p class="date">{{DATE}}</p>
    </header>

    <div class="plan-section">
{{PLAN}}
    </div>
  </div>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(
        task_order: i64,
        title: &str,
        duration_minutes: i64,
        priority: i64,
        deadline: NaiveDate,
    ) -> PlanEntry {
        PlanEntry {
            task_order,
            title: title.to_string(),
            duration_minutes,
            priority,
            deadline,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn empty_plan_renders_fallback_only() {
        let page = render_plan(date(2024, 6, 10), &[]);
        assert!(page.contains("No plan generated for today."));
        assert!(!page.contains("class=\"task-card\""));
        assert!(!page.contains("Total time:"));
    }

    #[test]
    fn page_header_carries_long_form_date() {
        let page = render_plan(date(2024, 6, 10), &[]);
        assert!(page.contains("Monday, June 10, 2024"));
    }

    #[test]
    fn two_entries_render_in_store_order_with_summary() {
        let entries = vec![
            entry(1, "Write report", 90, 1, date(2024, 6, 10)),
            entry(2, "Email client", 15, 2, date(2024, 6, 11)),
        ];
        let page = render_plan(date(2024, 6, 10), &entries);

        let first = page.find("Write report").expect("first card");
        let second = page.find("Email client").expect("second card");
        assert!(first < second);
        assert_eq!(page.matches("class=\"task-card\"").count(), 2);

        assert!(page.contains("⏱️ 1h 30m"));
        assert!(page.contains("⏱️ 15m"));
        assert!(page.contains("class=\"priority priority-1\">Priority: 1<"));
        assert!(page.contains("class=\"priority priority-2\">Priority: 2<"));
        assert!(page.contains("📅 Due: Jun 10"));
        assert!(page.contains("📅 Due: Jun 11"));
        assert!(page.contains("Total time: 1h 45m"));
        assert!(!page.contains("No plan generated"));
    }

    #[test]
    fn zero_duration_row_and_summary_use_their_own_rules() {
        let entries = vec![entry(1, "Stretch", 0, 3, date(2024, 6, 12))];
        let page = render_plan(date(2024, 6, 10), &entries);
        assert!(page.contains("⏱️ 0m</span>"));
        assert!(page.contains("Total time: 0h 0m"));
    }

    #[test]
    fn titles_are_escaped_for_markup() {
        let entries = vec![entry(1, "<script>alert('x')</script> & more", 30, 1, date(2024, 6, 10))];
        let page = render_plan(date(2024, 6, 10), &entries);
        assert!(page.contains("&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt; &amp; more"));
        assert!(!page.contains("<script>alert"));
    }
}
