/// User interface module
///
/// - `grid` - pure thumbnail grid layout and scrollbar decisions
/// - `gallery` - widget tree for the thumbnail grid
/// - `status` - status line with self-reverting messages
/// - `dialogs` - native folder picker and message boxes

pub mod dialogs;
pub mod gallery;
pub mod grid;
pub mod status;
