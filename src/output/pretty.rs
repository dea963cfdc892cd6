use colored::Colorize;

use crate::resolver::Resolution;

/// Format a resolution as pretty output.
///
/// The rendered interval is the same for matched and unmatched phrases; an
/// unmatched phrase gets a dimmed marker so the fallback is visible.
pub fn format_resolution_pretty(resolution: &Resolution) -> String {
    if resolution.is_recognized() {
        resolution.render()
    } else {
        format!("{} {}", resolution.render(), "(no match)".dimmed())
    }
}
