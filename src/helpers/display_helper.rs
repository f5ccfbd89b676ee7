use chrono::{DateTime, NaiveDateTime};

pub struct DisplayHelper;

impl DisplayHelper {

    /// First `width` characters of `label`, counted in chars rather than bytes.
    pub fn truncate_label(label: &str, width: usize) -> String {
        label.chars().take(width).collect()
    }

    /// Renders backend timestamps (RFC 3339, or naive ISO without offset) as `YYYY-MM-DD HH:MM`.
    pub fn format_timestamp(raw: Option<&str>) -> String {
        let Some(raw) = raw else {
            return "-".to_string();
        };

        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return parsed.format("%Y-%m-%d %H:%M").to_string();
        }
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return parsed.format("%Y-%m-%d %H:%M").to_string();
        }
        raw.to_string()
    }

    pub fn format_value(value: f64) -> String {
        if value.is_nan() {
            "NaN".to_string()
        } else if value.fract() == 0.0 && value.abs() < 1e15 {
            format!("{:.0}", value)
        } else {
            format!("{:.2}", value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_label_is_char_aware() {
        assert_eq!(DisplayHelper::truncate_label("DB Latency", 8), "DB Laten");
        assert_eq!(DisplayHelper::truncate_label("Größe€€€€", 5), "Größe");
        assert_eq!(DisplayHelper::truncate_label("CPU", 8), "CPU");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(DisplayHelper::format_timestamp(Some("2025-01-12T10:04:33.120000+00:00")), "2025-01-12 10:04");
        assert_eq!(DisplayHelper::format_timestamp(Some("2025-01-12T10:04:33")), "2025-01-12 10:04");
        assert_eq!(DisplayHelper::format_timestamp(Some("yesterday")), "yesterday");
        assert_eq!(DisplayHelper::format_timestamp(None), "-");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(DisplayHelper::format_value(850.0), "850");
        assert_eq!(DisplayHelper::format_value(72.333), "72.33");
        assert_eq!(DisplayHelper::format_value(f64::NAN), "NaN");
    }
}
