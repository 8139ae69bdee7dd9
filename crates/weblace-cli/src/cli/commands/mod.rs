mod completions;
mod overrides;
mod resolve;
mod sanitize;

pub use completions::run_completions;
pub use overrides::run_overrides;
pub use resolve::run_resolve;
pub use sanitize::run_sanitize;
