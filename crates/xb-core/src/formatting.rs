//! Boundary presentation helpers (currency grouping, summary text).
//!
//! Formatting happens once at the messaging edge; the aggregation layer
//! deals in raw integers only.

use chrono::NaiveDate;

use crate::summary::PeriodSummary;

/// Escape HTML special characters for Telegram HTML parse mode.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// `1234567` → `1 234 567 so‘m`.
pub fn fmt_sum(amount: i64) -> String {
    format!("{} so‘m", group_thousands(amount))
}

fn group_thousands(amount: i64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Render an aggregated period summary as Telegram HTML.
pub fn render_summary(
    title: &str,
    from: NaiveDate,
    to: NaiveDate,
    summary: &PeriodSummary,
) -> String {
    let mut lines = vec![
        title.to_string(),
        format!("📌 {from} → {to}"),
        format!("💸 Umumiy: <b>{}</b>", fmt_sum(summary.total)),
        String::new(),
    ];

    if summary.by_category.is_empty() {
        lines.push("Hali yozuv yo‘q.".to_string());
    } else {
        lines.push("Kategoriya bo‘yicha:".to_string());
        for (category, sum) in &summary.by_category {
            lines.push(format!("• {category}: {}", fmt_sum(*sum)));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expense::Category;

    #[test]
    fn groups_thousands_with_spaces() {
        assert_eq!(fmt_sum(0), "0 so‘m");
        assert_eq!(fmt_sum(999), "999 so‘m");
        assert_eq!(fmt_sum(2_000), "2 000 so‘m");
        assert_eq!(fmt_sum(500_000), "500 000 so‘m");
        assert_eq!(fmt_sum(1_234_567), "1 234 567 so‘m");
    }

    #[test]
    fn escapes_html() {
        assert_eq!(escape_html(r#"<a href="x&y">"#), "&lt;a href=&quot;x&amp;y&quot;&gt;");
    }

    #[test]
    fn renders_the_empty_summary() {
        let from = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let text = render_summary("🗓 Haftalik (7 kun)", from, to, &PeriodSummary::default());

        assert!(text.starts_with("🗓 Haftalik (7 kun)\n📌 2024-03-04 → 2024-03-10\n"));
        assert!(text.contains("💸 Umumiy: <b>0 so‘m</b>"));
        assert!(text.ends_with("Hali yozuv yo‘q."));
    }

    #[test]
    fn renders_the_breakdown_in_order() {
        let from = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let summary = PeriodSummary {
            total: 180,
            by_category: vec![(Category::Food, 150), (Category::Transport, 30)],
        };
        let text = render_summary("🗓 Oylik", from, to, &summary);

        assert!(text.contains("Kategoriya bo‘yicha:"));
        let food = text.find("• ovqat: 150 so‘m").unwrap();
        let transport = text.find("• transport: 30 so‘m").unwrap();
        assert!(food < transport);
    }
}
