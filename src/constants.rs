//! Global constants for the leap engine

pub mod markers {
    /// Default marker key alphabet, in priority order (home row first).
    /// The first keys are handed to the matches nearest the cursor.
    pub const DEFAULT_MARKER_KEYS: &str = "hklyuiopnm,qwertzxcvbasdgjf;";

    /// Longest label the allocator will produce. Anything past this is a
    /// capacity failure rather than an ever-deeper label.
    pub const MAX_LABEL_LEN: usize = 4;
}

pub mod errors {
    // Error Codes
    pub const REGEX_PARSE_ERROR: &str = "REGEX_PARSE_ERROR";
    pub const REGEX_COMPILE_ERROR: &str = "REGEX_COMPILE_ERROR";
    pub const NO_MARKER_KEYS: &str = "NO_MARKER_KEYS";
    pub const LABEL_CAPACITY: &str = "LABEL_CAPACITY";
}
