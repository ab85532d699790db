use crate::rewriter::RewriteOptions;
use colored::*;

/// Lines of unchanged context shown around each hunk
const CONTEXT_LINES: usize = 3;

/// Confirmation printed after a successful in-place rewrite
pub fn status_message(options: &RewriteOptions) -> String {
    format!(
        "✅ Fixed all {} blocks to {}",
        options.opening_pattern(),
        options.opening_replacement()
    )
}

/// Generate a unified-style diff between original and rewritten content.
///
/// The rewriter never adds or removes lines, so hunks pair lines by index.
pub fn generate_diff(original: &str, modified: &str, file_path: &str) -> String {
    let mut diff = String::new();

    diff.push_str(&format!("--- {file_path}\n"));
    diff.push_str(&format!("+++ {file_path} (fixed)\n"));

    let original_lines: Vec<&str> = original.lines().collect();
    let modified_lines: Vec<&str> = modified.lines().collect();

    let max_lines = original_lines.len().max(modified_lines.len());
    let mut hunks: Vec<(usize, usize)> = Vec::new();

    for i in 0..max_lines {
        if original_lines.get(i) == modified_lines.get(i) {
            continue;
        }
        let start = i.saturating_sub(CONTEXT_LINES);
        let end = (i + CONTEXT_LINES + 1).min(max_lines);
        match hunks.last_mut() {
            // Merge with the previous hunk when the context overlaps
            Some((_, prev_end)) if start <= *prev_end => *prev_end = end,
            _ => hunks.push((start, end)),
        }
    }

    if hunks.is_empty() {
        diff.push_str("No changes\n");
        return diff;
    }

    for (start, end) in hunks {
        diff.push_str(&format!(
            "@@ -{},{} +{},{} @@\n",
            start + 1,
            end - start,
            start + 1,
            end - start
        ));

        for i in start..end {
            match (original_lines.get(i), modified_lines.get(i)) {
                (Some(orig), Some(modified)) if orig == modified => {
                    diff.push_str(&format!(" {orig}\n"));
                }
                (orig, modified) => {
                    if let Some(orig) = orig {
                        diff.push_str(&format!("-{orig}\n"));
                    }
                    if let Some(modified) = modified {
                        diff.push_str(&format!("+{modified}\n"));
                    }
                }
            }
        }
    }

    diff
}

/// Color the removed and added lines of a diff from [`generate_diff`]
pub fn colorize_diff(diff: &str) -> String {
    let mut out = String::with_capacity(diff.len());
    for line in diff.lines() {
        let styled = if line.starts_with("--- ") || line.starts_with("+++ ") {
            line.bold().to_string()
        } else if line.starts_with("@@") {
            line.cyan().to_string()
        } else if line.starts_with('-') {
            line.red().to_string()
        } else if line.starts_with('+') {
            line.green().to_string()
        } else {
            line.to_string()
        };
        out.push_str(&styled);
        out.push('\n');
    }
    out
}
