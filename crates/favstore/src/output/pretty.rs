//! Pretty output formatting.

use favstore_core::favorites::FavoriteEntry;

use super::Membership;

/// Format a favorite for display.
pub fn format_entry(entry: &FavoriteEntry) -> String {
    format!(
        "{}  {}",
        entry.created_at.format("%Y-%m-%d %H:%M:%S"),
        entry.taxon_id
    )
}

/// Format favorites for display.
pub fn format_entries(entries: &[FavoriteEntry]) -> String {
    if entries.is_empty() {
        return "No favorites found.".to_string();
    }
    let mut output = format!("FAVORITES ({})\n", entries.len());
    output.push_str(&"-".repeat(40));
    for entry in entries {
        output.push_str(&format!("\n{}", format_entry(entry)));
    }
    output
}

/// Format the membership of a taxon for display.
pub fn format_membership(membership: &Membership) -> String {
    if membership.favorite {
        format!("{} is a favorite", membership.taxon_id)
    } else {
        format!("{} is not a favorite", membership.taxon_id)
    }
}

/// Format a byte count for display.
pub fn format_size(bytes: i64) -> String {
    const KIB: f64 = 1024.0;
    let value = bytes as f64;
    if value < KIB {
        format!("{bytes} B")
    } else if value < KIB * KIB {
        format!("{:.1} KiB ({bytes} bytes)", value / KIB)
    } else {
        format!("{:.1} MiB ({bytes} bytes)", value / (KIB * KIB))
    }
}
