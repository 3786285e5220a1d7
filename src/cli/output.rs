//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::{Entry, ServiceSummary};

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a freshly added or generated password.
pub fn password(label: &str, value: &str) {
    println!("{} {}", style(label).bold(), style(value).cyan());
}

/// Print the entries of one service as a numbered table (#, Login, Password).
pub fn print_entries_table(entries: &[Entry]) {
    if entries.is_empty() {
        info("No logins stored for this service.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Login", "Password"]);

    for (i, e) in entries.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            e.login.clone(),
            e.password.clone(),
        ]);
    }

    println!("{table}");
}

/// Print a table of services with their login counts.
pub fn print_services_table(services: &[ServiceSummary]) {
    if services.is_empty() {
        info("No services in this vault yet.");
        tip("Run `passvault add <SERVICE> <LOGIN>` to add your first entry.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Service", "Logins"]);

    for s in services {
        table.add_row(vec![s.name.clone(), s.entries.to_string()]);
    }

    println!("{table}");
}
