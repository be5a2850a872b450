pub mod compile_time {
    pub mod lexical {
        /// Maximum input buffer size accepted per lex call (1MB)
        /// SECURITY: Bounds memory for pasted or piped input
        pub const MAX_INPUT_SIZE: usize = 1_048_576;

        /// Maximum number of tokens produced from a single buffer
        /// SECURITY: Prevents token explosion on degenerate input
        pub const MAX_TOKEN_COUNT: usize = 1_000_000;
    }

    pub mod grammar {
        /// Maximum recursion depth while walking grammar rules
        /// SECURITY: Prevents stack overflow on cyclic or deeply nested rules
        pub const MAX_MATCH_DEPTH: usize = 100;
    }

    pub mod logging {
        /// Maximum context entries attached to a single log event
        /// RESOURCE: Keeps events bounded
        pub const MAX_CONTEXT_ENTRIES: usize = 32;

        /// Maximum events retained by the in-memory test logger
        /// RESOURCE: Bounds memory during long test runs
        pub const MEMORY_LOGGER_CAPACITY: usize = 10_000;
    }
}
