// Date Cracker - Free and Open Source Software Statement
//
// This project, datecrack, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/format.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file provides utility functions for formatting statistics in
// datecrack. It formats search rates, durations and counts for consistent
// output in logs and reports.
//
// Tree Location:
// - src/utils/format.rs (formatting utilities)
// - Depends on: std

use std::time::Duration;

/// Utility functions for formatting search statistics
pub struct FormatUtils;

impl FormatUtils {
    /// Format a candidate rate in appropriate units (c/s, Kc/s, Mc/s)
    pub fn format_rate(rate: f64) -> String {
        if rate >= 1_000_000.0 {
            format!("{:.2} Mc/s", rate / 1_000_000.0)
        } else if rate >= 1_000.0 {
            format!("{:.2} Kc/s", rate / 1_000.0)
        } else {
            format!("{:.2} c/s", rate)
        }
    }

    /// Format a duration as seconds with millisecond precision, or minutes
    /// past one minute
    pub fn format_duration(duration: Duration) -> String {
        let secs = duration.as_secs_f64();
        if secs < 60.0 {
            format!("{:.3}s", secs)
        } else {
            format!("{}m {:.1}s", duration.as_secs() / 60, secs % 60.0)
        }
    }

    /// Format large numbers with suffixes (K, M, B)
    pub fn format_number(num: u64) -> String {
        if num >= 1_000_000_000 {
            format!("{:.1}B", num as f64 / 1_000_000_000.0)
        } else if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rate() {
        assert_eq!(FormatUtils::format_rate(512.0), "512.00 c/s");
        assert_eq!(FormatUtils::format_rate(1_500.0), "1.50 Kc/s");
        assert_eq!(FormatUtils::format_rate(2_250_000.0), "2.25 Mc/s");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(FormatUtils::format_duration(Duration::from_millis(1234)), "1.234s");
        assert_eq!(FormatUtils::format_duration(Duration::from_secs(125)), "2m 5.0s");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(FormatUtils::format_number(999), "999");
        assert_eq!(FormatUtils::format_number(842_816), "842.8K");
        assert_eq!(FormatUtils::format_number(421_408_000), "421.4M");
    }
}

// Changelog:
// - v1.0.0 (2025-07-02): Initial formatting helpers.
//   - Candidate-rate units, second-precision durations, suffixed counts.
