//! ANSI escape codes used by the terminal renderer

// ============================================================================
// TEXT ATTRIBUTES
// ============================================================================

pub const RESET: &str = "\x1b[0m"; // Reset all attributes
pub const BOLD: &str = "\x1b[1m"; // Bold text
pub const DIM: &str = "\x1b[2m"; // Dimmed/faint text

// ============================================================================
// FOREGROUND COLORS
// ============================================================================

pub const FG_RED: &str = "\x1b[31m";
pub const FG_GREEN: &str = "\x1b[32m";
pub const FG_YELLOW: &str = "\x1b[33m";
pub const FG_BLUE: &str = "\x1b[34m";
pub const FG_BRIGHT_BLACK: &str = "\x1b[90m"; // Also known as dark gray

// ============================================================================
// SEMANTIC COLOR ALIASES
// ============================================================================

pub const FG_ERROR: &str = FG_RED; // Error prompt
pub const FG_WARNING: &str = FG_YELLOW; // Loading indicator
pub const FG_INFO: &str = FG_BLUE; // Episode codes, current page
pub const FG_DIM_TEXT: &str = FG_BRIGHT_BLACK; // Hints and secondary fields

// Status bullet, colored per character status
pub const STATUS_BULLET: &str = "●";
