use std::path::Path;
use std::time::Duration;

use crate::commands::CompareResult;

pub fn format_duration(d: Duration) -> String {
    let ms = d.as_millis();
    if ms < 1000 {
        format!("{ms}ms")
    } else {
        format!("{:.1}s", d.as_secs_f64())
    }
}

/// One result line: status, names, mismatch count and share of pixels, time.
pub fn format_result(name: &str, result: &CompareResult) -> String {
    let time_suffix = format!("  \x1b[2m{}\x1b[0m", format_duration(result.elapsed));
    if result.mismatched == 0 {
        format!("  \x1b[32mPASS\x1b[0m  {name}{time_suffix}")
    } else {
        format!(
            "  \x1b[31mFAIL\x1b[0m  {name}  ({}/{} pixels, {:.2}%){time_suffix}",
            result.mismatched,
            result.total_pixels,
            result.score * 100.0
        )
    }
}

/// Print the comparison result for `image1` vs `image2`.
pub fn print_result(image1: &Path, image2: &Path, result: &CompareResult) {
    let name = format!("{} vs {}", image1.display(), image2.display());
    println!("{}", format_result(&name, result));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(mismatched: u64, total_pixels: u64) -> CompareResult {
        CompareResult {
            mismatched,
            total_pixels,
            score: mismatched as f64 / total_pixels as f64,
            diff_image: None,
            elapsed: Duration::from_millis(12),
        }
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.5s");
    }

    #[test]
    fn pass_line() {
        let line = format_result("a.png vs b.png", &result(0, 100));
        assert!(line.contains("PASS"));
        assert!(line.contains("a.png vs b.png"));
        assert!(line.contains("12ms"));
    }

    #[test]
    fn fail_line_shows_count_and_share() {
        let line = format_result("a vs b", &result(143, 10_000));
        assert!(line.contains("FAIL"));
        assert!(line.contains("(143/10000 pixels, 1.43%)"));
    }
}
