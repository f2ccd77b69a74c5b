/// State management module
///
/// This module handles all application state:
/// - The ordered image collection (collection.rs)
/// - Shared data structures (data.rs)
/// - Inline renaming of records (rename.rs)

pub mod collection;
pub mod data;
pub mod rename;
