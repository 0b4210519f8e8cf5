//! Dashboard utility functions
//!
//! Helper functions shared across dashboard components.

use crate::data::model::{CrossingStatus, ModelStatus, ReviewStatus, Severity, TrainingStatus};
use crate::events::Source;
use chrono::NaiveDate;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Color;

/// Color for a notification severity marker.
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => Color::Green,
        Severity::Info => Color::LightBlue,
        Severity::Warning => Color::Yellow,
    }
}

/// Color for a crossing status tag.
pub fn crossing_status_color(status: CrossingStatus) -> Color {
    match status {
        CrossingStatus::InProgress => Color::LightBlue,
        CrossingStatus::Completed => Color::Green,
        CrossingStatus::UnderReview => Color::Yellow,
        CrossingStatus::Failed => Color::Red,
    }
}

/// Color for a training-run status tag.
pub fn training_status_color(status: TrainingStatus) -> Color {
    match status {
        TrainingStatus::Completed => Color::Green,
        TrainingStatus::InProgress => Color::LightBlue,
        TrainingStatus::Failed => Color::Red,
        TrainingStatus::Paused => Color::DarkGray,
    }
}

/// Color for a predictive-model status tag.
pub fn model_status_color(status: ModelStatus) -> Color {
    match status {
        ModelStatus::Active => Color::Green,
        ModelStatus::Training => Color::Yellow,
    }
}

/// Color for an event source in the activity panel.
pub fn source_color(source: Source) -> Color {
    match source {
        Source::Catalog => Color::Cyan,
        Source::Simulation => Color::Yellow,
    }
}

/// Color for a compliance review status tag.
pub fn review_status_color(status: ReviewStatus) -> Color {
    match status {
        ReviewStatus::Approved => Color::Green,
        ReviewStatus::Pending => Color::Yellow,
        ReviewStatus::Rejected => Color::Red,
        ReviewStatus::UnderReview => Color::LightBlue,
    }
}

/// Format a catalog date the way the platform displays them.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Group digits with pt-BR thousands separators, e.g. 15420 -> "15.420".
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, c) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Compact "MM-DD HH:MM" display from a full "YYYY-MM-DD HH:MM:SS" stamp.
pub fn format_compact_timestamp(timestamp: &str) -> String {
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to the original stamp if parsing fails
    timestamp.to_string()
}

/// Centered sub-rectangle used for modal overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(8_750), "8.750");
        assert_eq!(format_thousands(15_420), "15.420");
        assert_eq!(format_thousands(1_234_567), "1.234.567");
    }

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(
            format_compact_timestamp("2025-06-14 09:31:07"),
            "06-14 09:31"
        );
        // Unparseable stamps pass through unchanged
        assert_eq!(format_compact_timestamp("bogus"), "bogus");
    }

    #[test]
    /// The popup rectangle stays inside the area it is centered in.
    fn test_centered_rect_stays_in_bounds() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(60, 50, area);
        assert!(popup.x >= area.x && popup.right() <= area.right());
        assert!(popup.y >= area.y && popup.bottom() <= area.bottom());
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 20);
    }
}
