pub mod options;
pub mod page;
pub mod pass;
pub mod session;

pub use options::{Country, HeadlineCount, Options};
pub use page::{Card, MarkdownPage, Page};
pub use pass::{run_pass, PassSummary, NO_RESULTS};
pub use session::{run_interactive, Command};

pub const APP_TITLE: &str = "🌟 Positive News Generator";
pub const APP_TAGLINE: &str = "Shows only uplifting news rewritten in an inspiring tone.";
