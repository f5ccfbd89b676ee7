use terminal_size::{terminal_size, Width};
use crate::config::constants::DEFAULT_TERMINAL_WIDTH;
use crate::helpers::display_helper::DisplayHelper;
use crate::services::metrics_aggregator::MetricsAggregator;
use crate::structs::dashboard_summary::DashboardSummary;
use crate::structs::metric_record::MetricRecord;
use crate::structs::user::User;

const BAR_CHAR: &str = "█";
// label + " │ " + " 100%" + value column
const CHART_CHROME: usize = 20;

pub struct DashboardLogger {}

impl DashboardLogger {

    pub fn print_summary(summary: &DashboardSummary, label_width: usize) {
        println!("\n📊 Dashboard");
        println!("═══════════════════════════════════════");
        println!("   📊 Total Records: {}", summary.total_records);
        println!("   📂 Categories:    {}", summary.unique_categories);
        println!("   ⏱️ Avg Value:     {}", Self::format_average(summary.average_value));
        println!("   💾 Storage:       {}", summary.storage_status());

        println!("\n🏷️ Top Categories:");
        if summary.top_categories.is_empty() {
            println!("   (none)");
        }
        for (i, stat) in summary.top_categories.iter().enumerate() {
            let name = if stat.name.is_empty() { "(empty)" } else { stat.name.as_str() };
            println!(
                "   {}. {:<16} {:>5}  ({}%)",
                i + 1,
                name,
                stat.count,
                stat.percentage_of(summary.total_records)
            );
        }

        println!("\n📈 Recent Metrics Activity (scale {}):", DisplayHelper::format_value(summary.max_value));
        if summary.recent.is_empty() {
            println!("   No data stored yet. Run 'pulsedash seed' or 'pulsedash create'.");
        } else {
            for line in Self::render_bar_chart(summary, Self::terminal_width(), label_width) {
                println!("{}", line);
            }
        }
        println!("═══════════════════════════════════════");
    }

    /// Horizontal bars for the recent window, oldest first.
    pub fn render_bar_chart(summary: &DashboardSummary, terminal_width: usize, label_width: usize) -> Vec<String> {
        let bar_space = terminal_width.saturating_sub(label_width + CHART_CHROME).max(10);
        let heights = MetricsAggregator::bar_heights(summary);

        summary
            .recent
            .iter()
            .zip(heights)
            .map(|(record, percent)| {
                let clamped = if percent.is_finite() { percent.clamp(0.0, 100.0) } else { 0.0 };
                let cells = (clamped / 100.0 * bar_space as f64).round() as usize;
                format!(
                    "   {:<width$} │ {:<space$} {:>3.0}%  {}",
                    DisplayHelper::truncate_label(&record.metric_name, label_width),
                    BAR_CHAR.repeat(cells),
                    clamped,
                    DisplayHelper::format_value(record.value),
                    width = label_width,
                    space = bar_space,
                )
            })
            .collect()
    }

    pub fn print_records(records: &[MetricRecord]) {
        if records.is_empty() {
            println!("⚠️ No metric records found.");
            return;
        }

        println!("\n{:>6}  {:<24} {:<16} {:>12}  {}", "ID", "Metric Name", "Category", "Value", "Recorded At");
        println!("{}", "─".repeat(80));
        for record in records {
            println!(
                "{:>6}  {:<24} {:<16} {:>12}  {}",
                record.id.map_or_else(|| "-".to_string(), |id| id.to_string()),
                DisplayHelper::truncate_label(&record.metric_name, 24),
                DisplayHelper::truncate_label(&record.category, 16),
                DisplayHelper::format_value(record.value),
                DisplayHelper::format_timestamp(record.recorded_at.as_deref()),
            );
        }
        println!("{}", "─".repeat(80));
        println!("📋 {} records", records.len());
    }

    pub fn print_record(record: &MetricRecord) {
        println!("\n📄 Metric #{}", record.id.map_or_else(|| "-".to_string(), |id| id.to_string()));
        println!("   Name:        {}", record.metric_name);
        println!("   Category:    {}", record.category);
        println!("   Value:       {}", DisplayHelper::format_value(record.value));
        println!("   Recorded At: {}", DisplayHelper::format_timestamp(record.recorded_at.as_deref()));
    }

    pub fn print_user(user: &User) {
        println!("\n👤 {}", user.display_name());
        println!("   Email:  {}", user.email);
        println!("   Role:   {}", user.role);
        println!("   Active: {}", if user.is_active { "✅" } else { "❌" });
        if let Some(bio) = user.bio.as_deref().filter(|b| !b.is_empty()) {
            println!("   Bio:    {}", bio);
        }
        println!("   Since:  {}", DisplayHelper::format_timestamp(user.created_at.as_deref()));
    }

    pub fn print_users(users: &[User]) {
        println!("\n{:<24} {:<32} {:<8} {}", "Full Name", "Email", "Role", "Active");
        println!("{}", "─".repeat(72));
        for user in users {
            println!(
                "{:<24} {:<32} {:<8} {}",
                DisplayHelper::truncate_label(user.display_name(), 24),
                user.email,
                user.role,
                if user.is_active { "✅" } else { "❌" }
            );
        }
        println!("👥 {} users", users.len());
    }

    fn format_average(value: f64) -> String {
        if value.is_nan() {
            "NaN".to_string()
        } else {
            format!("{:.0}", value)
        }
    }

    fn terminal_width() -> usize {
        let Width(width) = terminal_size()
            .map(|(width, _)| width)
            .unwrap_or(Width(DEFAULT_TERMINAL_WIDTH));
        width as usize
    }
}
