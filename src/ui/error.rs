use ngtw::error::NgtwError;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

/// Stage label for the failure, if it came from the library
pub fn error_stage(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<NgtwError>() {
        Some(NgtwError::Config(_)) => "config",
        Some(NgtwError::Build(_)) => "build",
        Some(NgtwError::Purge(_)) => "purge",
        Some(NgtwError::Monitor(_)) => "watch",
        Some(NgtwError::Manifest(_)) => "scripts",
        Some(NgtwError::Io(_)) | None => "error",
    }
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    // Library errors already embed their source in the message.
    format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        err
    )
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let output = serde_json::json!({
            "event": "error",
            "stage": error_stage(err),
            "message": err.to_string(),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err, ui.color, ui.unicode));
}
