use std::path::Path;

use ngtw::application::ConfigureResult;
use ngtw::config::paths::display_relative;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_configure_result(
    store_path: &Path,
    result: &ConfigureResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let config = &result.config;
    let root = &config.project_root;
    let on_off = |b: bool| if b { "on" } else { "off" };

    let verb = if result.replaced { "Updated" } else { "Created" };
    let mut header = CommandHeader::new(
        Icon::Config,
        format!("{} {}", verb, display_relative(root, store_path)),
    );
    header.add("Config", display_relative(root, &config.config_script_path));
    header.add("Source", display_relative(root, &config.source_path));
    header.add("Output", display_relative(root, &config.output_path));
    header.add("Purge", on_off(config.purge_enabled));
    header.add("Sass", on_off(config.preprocessor_enabled));

    let mut out = header.render(supports_color, supports_unicode);
    out.push_str(&format!(
        "{} {}\n",
        Icon::Warning.colored(supports_color, supports_unicode),
        ColoredText::warning("Restart any running `ngtw watch` to pick up the new configuration.")
            .render(supports_color)
    ));
    out
}
