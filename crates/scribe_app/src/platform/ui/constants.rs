use std::time::Duration;

/// How long the loop waits for terminal input before draining engine messages.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub const APP_TITLE: &str = " Text Summarization & Content Generation ";
pub const SIDEBAR_WIDTH: u16 = 36;
pub const HEADER_HEIGHT: u16 = 3;
pub const STATUS_HEIGHT: u16 = 3;

pub const KEY_HINTS: &str =
    " Enter submit | Tab switch | ^L clear | ^Y copy | ^T theme | ^B history | ^R recall | Esc quit ";
