use std::path::Path;

use ngtw::application::PurgeReport;
use ngtw::config::paths::display_relative;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_purge_header(root: &Path, output: &Path, supports_color: bool, supports_unicode: bool) -> String {
    let mut header = CommandHeader::new(Icon::Purge, "ngtw purge");
    header.add("Output", display_relative(root, output));
    header.render(supports_color, supports_unicode)
}

/// One-line summary, shared with `build`'s automatic purge
pub fn render_purge_summary(report: &PurgeReport, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} Purged {} selectors: {} -> {} ({})\n",
        Icon::Success.colored(supports_color, supports_unicode),
        report.rejected.len(),
        format_bytes(report.bytes_before),
        format_bytes(report.bytes_after),
        ColoredText::success(percent_change(report.bytes_before, report.bytes_after))
            .render(supports_color)
    )
}

pub fn render_purge_report(
    report: &PurgeReport,
    print_rejected: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = render_purge_summary(report, supports_color, supports_unicode);
    if print_rejected {
        for selector in &report.rejected {
            out.push_str(&format!(
                "  {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim(selector.as_str()).render(supports_color)
            ));
        }
    }
    out
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MiB", bytes as f64 / (1024.0 * 1024.0))
    }
}

fn percent_change(before: u64, after: u64) -> String {
    if before == 0 {
        return "0%".to_string();
    }
    let delta = (after as f64 - before as f64) / before as f64 * 100.0;
    format!("{:+.0}%", delta)
}
