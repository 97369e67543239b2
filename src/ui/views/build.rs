use std::path::Path;

use ngtw::application::PipelineOutcome;
use ngtw::config::paths::display_relative;
use ngtw::config::ResolvedConfig;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;

pub fn render_build_header(config: &ResolvedConfig, supports_color: bool, supports_unicode: bool) -> String {
    let root = &config.project_root;
    let mut header = CommandHeader::new(Icon::Build, "ngtw build");
    header.add("Source", display_relative(root, &config.source_path));
    header.add("Output", display_relative(root, &config.output_path));
    if config.preprocessor_enabled {
        header.add("Sass", "on");
    }
    header.add("Purge", if config.purge_enabled { "on" } else { "off" });
    header.render(supports_color, supports_unicode)
}

pub fn render_build_result(
    root: &Path,
    outcome: &PipelineOutcome,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} Built {} in {}ms\n",
        Icon::Success.colored(supports_color, supports_unicode),
        display_relative(root, &outcome.build.output_path),
        outcome.build.duration_ms
    );
    if let Some(purge) = &outcome.purge {
        out.push_str(&super::purge::render_purge_summary(
            purge,
            supports_color,
            supports_unicode,
        ));
    }
    out
}
