//! Test fixtures - reusable content constants for tests.

/// Project config running `.gen.sh` generators through `sh`
pub const SH_CONFIG: &str = r#"[layout]
generator_suffix = ".gen.sh"

[runner]
interpreter = "sh"
"#;

/// Generator that appends a line to `runs.log` in its working directory
pub const COUNTING_GENERATOR: &str = "echo run >> runs.log\n";

/// Generator that writes its output and a marker of where it ran
pub const CHART_GENERATOR: &str = "pwd > where.txt\necho '<svg/>' > chart.svg\n";

/// Generator that reports progress on stdout
pub const CHATTY_GENERATOR: &str = "echo 'wrote chart.svg'\necho run >> runs.log\n";

/// Generator that exits with status 3
pub const FAILING_GENERATOR: &str = "echo boom >&2\nexit 3\n";

/// Shared helper sourced by nothing; only its content matters
pub const SHARED_HELPER: &str = "palette=blue\n";

pub const GEN_ALPHA: &str = "docs/posts/alpha/__generators__/chart.gen.sh";
pub const GEN_BETA: &str = "docs/posts/beta/__generators__/table.gen.sh";
pub const SHARED: &str = "docs/posts/alpha/__generators__/common.sh";

pub const OUT_ALPHA: &str = "docs/posts/alpha/__generated__";
pub const OUT_BETA: &str = "docs/posts/beta/__generated__";

pub const STATE_FILE: &str = "generators_hashes.json";
