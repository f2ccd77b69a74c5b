/// Native dialogs (folder picker, confirmations, reports)
///
/// Thin wrappers over rfd's blocking dialogs. They run on the UI thread,
/// so nothing else can touch the collection while one is open.

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::path::PathBuf;

/// Ask for an export folder. `None` means the user cancelled.
pub fn pick_export_folder() -> Option<PathBuf> {
    let mut dialog = FileDialog::new().set_title("Select Download Folder");
    if let Some(start) = dirs::picture_dir().or_else(dirs::home_dir) {
        dialog = dialog.set_directory(start);
    }
    dialog.pick_folder()
}

/// Yes/No question; anything but an explicit "Yes" counts as no
pub fn confirm(title: &str, description: &str) -> bool {
    let result = MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::YesNo)
        .show();
    result == MessageDialogResult::Yes
}

pub fn inform(title: &str, description: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}

pub fn warn(title: &str, description: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}
