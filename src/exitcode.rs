//! Standard exit codes (BSD sysexits.h compatible)

/// Internal software error
pub const SOFTWARE: i32 = 70;

/// System error (e.g., can't allocate)
pub const OSERR: i32 = 71;

/// Configuration error
pub const CONFIG: i32 = 78;
