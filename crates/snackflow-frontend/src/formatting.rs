//! Text rendering of the console UI.

use snackflow_bridge::{PresentedSnackbar, showcase::Showcase};

/// Renders a snackbar as one line, with the keys that answer it.
pub fn format_snackbar(snackbar: &PresentedSnackbar) -> String {
    let mut out = format!("▌ {}", snackbar.message);
    if let Some(label) = &snackbar.action_label {
        out.push_str(&format!("    [a] {label}"));
    }
    if snackbar.with_dismiss_action {
        out.push_str("    [d] ✕");
    }
    out
}

/// Renders the list of demo buttons and console commands.
pub fn format_menu() -> String {
    let mut out = String::from("Snackbars:\n");
    for (index, showcase) in Showcase::ALL.iter().enumerate() {
        out.push_str(&format!("  {:>2}  {}\n", index + 1, showcase.label()));
    }
    out.push_str(concat!(
        "Commands:\n",
        "  a / d        perform the action / dismiss the visible snackbar\n",
        "  stop / start move the screen to the background / foreground\n",
        "  rotate       recreate the screen\n",
        "  locale <id>  switch string resources\n",
        "  help         show this menu\n",
        "  quit         exit",
    ));
    out
}

pub fn format_counters(action_performed: u32, dismissed: u32) -> String {
    format!("onActionPerform called: {action_performed}    onDismiss called: {dismissed}")
}
