use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

use ngtw::config::ConfigWarning;

/// Unknown keys found in `ng-tailwind.toml`
pub fn render_config_warnings(
    warnings: &[ConfigWarning],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    for warning in warnings {
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        out.push_str(&format!(
            "{} {} unknown key '{}'\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning(location).render(supports_color),
            warning.key
        ));
        if let Some(suggestion) = &warning.suggestion {
            out.push_str(&format!("  did you mean '{}'?\n", suggestion));
        }
    }
    out
}
