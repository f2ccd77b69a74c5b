/// Clipboard capture module
///
/// This module handles:
/// - Reading images from the system clipboard
/// - Flattening them into the collection
/// - Building grid thumbnails for collected images

pub mod clipboard;
pub mod thumbnail;
