use console::{Emoji, style};

pub static INFO_ICON: Emoji<'_, '_> = Emoji("ℹ️  ", "");
pub static ERROR_ICON: Emoji<'_, '_> = Emoji("❌ ", "");

pub fn print_info(msg: &str) {
    println!("{} {}", INFO_ICON, style(msg).blue());
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", ERROR_ICON, style(msg).red().bold());
}

/// Hint printed after a failed credential check.
pub fn print_credentials_hint(missing: &[&str]) {
    for name in missing {
        eprintln!("  {} {}", style("missing:").dim(), style(name).bold().yellow());
    }
    eprintln!(
        "  Set them in the environment or in a {} file next to the binary.",
        style(".env").cyan()
    );
}
