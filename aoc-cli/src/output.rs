//! Output formatting for solver results

use aoc_solver::SolveResult;
use chrono::TimeDelta;
use std::time::{Duration, Instant};

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    /// Create a new output formatter; the wall clock starts now
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Format one solved part
    pub fn format_result(
        &self,
        year: u16,
        day: u8,
        result: &SolveResult,
        parse_duration: TimeDelta,
    ) -> String {
        if self.quiet {
            return result.answer.clone();
        }
        format!(
            "{year}/{day:02} Part {}: {} (parse: {}, solve: {})",
            result.part,
            result.answer,
            format_duration(parse_duration),
            format_duration(result.duration())
        )
    }

    pub fn print_result(
        &self,
        year: u16,
        day: u8,
        result: &SolveResult,
        parse_duration: TimeDelta,
    ) {
        println!("{}", self.format_result(year, day, result, parse_duration));
    }

    /// Print the elapsed wall-clock time since the formatter was created
    pub fn print_summary(&self) {
        if self.quiet {
            return;
        }
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: Duration) -> String {
    TimeDelta::from_std(d).map_or_else(|_| "N/A".to_string(), format_duration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Span;
    use chrono::Utc;

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(250)), "250µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-40)), "-40µs");
        assert_eq!(format_std_duration(Duration::from_millis(3)), "3.00ms");
    }

    #[test]
    fn test_result_line() {
        let start = Utc::now();
        let result = SolveResult {
            part: 1,
            answer: "42".to_string(),
            span: Span {
                start,
                end: start + TimeDelta::microseconds(7),
            },
        };
        let parse = TimeDelta::microseconds(3);

        let full = OutputFormatter::new(false).format_result(2019, 9, &result, parse);
        assert_eq!(full, "2019/09 Part 1: 42 (parse: 3µs, solve: 7µs)");

        let quiet = OutputFormatter::new(true).format_result(2019, 9, &result, parse);
        assert_eq!(quiet, "42");
    }
}
