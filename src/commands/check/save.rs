use std::io;
use std::path::Path;
use std::process::Command;

use tracing::{info, warn};
use umya_spreadsheet::XlsxError;

use crate::model::SaveOutcome;
use crate::sheet::TocSheet;
use crate::util::ensure_parent_dir;
use crate::validation::ValidationReport;

pub fn save_annotated_copy(
    sheet: &TocSheet,
    report: &ValidationReport,
    source: &Path,
    output: &Path,
) -> SaveOutcome {
    let path = output.display().to_string();

    if let Err(error) = ensure_parent_dir(output) {
        return SaveOutcome::Failed {
            path,
            reason: format!("{error:#}"),
        };
    }

    match sheet.save_annotated_copy(report, source, output) {
        Ok(filled) => {
            info!(path = %path, cells = filled, "highlighted flagged cells");
            SaveOutcome::Saved { path }
        }
        Err(error) => classify_save_error(path, error),
    }
}

pub fn classify_save_error(path: String, error: XlsxError) -> SaveOutcome {
    match error {
        XlsxError::Io(io_error) if io_error.kind() == io::ErrorKind::PermissionDenied => {
            SaveOutcome::LockedElsewhere { path }
        }
        other => SaveOutcome::Failed {
            path,
            reason: other.to_string(),
        },
    }
}

pub fn default_app_command(path: &Path) -> Command {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    } else {
        Command::new("xdg-open")
    };
    command.arg(path);
    command
}

pub fn open_with_default_app(path: &Path) {
    // The launchers hand the file to the desktop and exit straight away.
    match default_app_command(path).status() {
        Ok(status) if status.success() => {
            info!(path = %path.display(), "opened annotated workbook")
        }
        Ok(status) => warn!(
            path = %path.display(),
            status = %status,
            "default application launcher reported a failure"
        ),
        Err(error) => warn!(
            path = %path.display(),
            error = %error,
            "failed to open annotated workbook with the default application"
        ),
    }
}
