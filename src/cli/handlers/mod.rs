//! Command handlers for the CLI.

mod add;
mod completions;
mod edit;
mod list;
mod tui;


// Re-export public items
pub use add::handle_add;
pub use completions::handle_completions;
pub use edit::{handle_demote, handle_priority, handle_promote, handle_remove};
pub use list::{Presentation, handle_list, render_list};
pub use tui::handle_tui;

// ===========================================
// Shared Utilities
// ===========================================

/// Prints a green check mark followed by `message`.
pub(crate) fn report_success(message: &str) {
    println!("\x1b[32m \u{2713} \x1b[0m{message}");
}

/// Prints a red cross followed by `message`.
pub(crate) fn report_removal(message: &str) {
    println!("\x1b[31m \u{2717} \x1b[0m{message}");
}
