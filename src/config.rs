// Parser constants
pub mod parser {
    /// Deepest chain of Expression/Factor/Term invocations a parse may reach.
    /// Also bounds the depth of every tree the parser hands out.
    pub const MAX_NESTING_DEPTH: usize = 1000;

    /// Largest nesting limit the driver accepts from `--max-depth`.
    pub const NESTING_DEPTH_CEILING: usize = 10_000;

    pub const GROUP_OPEN: char = '{';
    pub const GROUP_CLOSE: char = '}';
}

// Stack reserved for the thread that parses, evaluates and renders
pub mod stack {
    pub const BASE_BYTES: usize = 1024 * 1024;

    /// Covers one nesting level of parsing plus the matching level of
    /// evaluation, rendering and drop, in unoptimized builds.
    pub const BYTES_PER_LEVEL: usize = 4 * 1024;

    pub const fn size_for_depth(max_depth: usize) -> usize {
        BASE_BYTES + max_depth * BYTES_PER_LEVEL
    }
}

// Tree diagram connectors
pub mod render {
    pub const BRANCH: &str = "├── ";
    pub const LAST_BRANCH: &str = "└── ";
    pub const STRAND: &str = "│   ";
    pub const GAP: &str = "    ";
}
