use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style names used by the templates through the `style` filter.
pub mod names {
    pub const HEADER: &str = "header";
    pub const INDEX: &str = "index";
    pub const INDEX_TRASH: &str = "index_trash";
    pub const MUTED: &str = "muted";
    pub const MONEY: &str = "money";
    pub const STATUS_ACTIVE: &str = "status_active";
    pub const STATUS_ON_LEAVE: &str = "status_on_leave";
    pub const STATUS_TERMINATED: &str = "status_terminated";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

pub static ROSTER_STYLES: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    HashMap::from([
        (names::HEADER, Style::new().bold().underlined()),
        (names::INDEX, Style::new().yellow()),
        (names::INDEX_TRASH, Style::new().red()),
        (names::MUTED, Style::new().color256(246).italic()),
        (names::MONEY, Style::new().cyan()),
        (names::STATUS_ACTIVE, Style::new().green()),
        (names::STATUS_ON_LEAVE, Style::new().yellow()),
        (names::STATUS_TERMINATED, Style::new().red().dim()),
        (names::SUCCESS, Style::new().green()),
        (names::INFO, Style::new().color256(246)),
        (names::WARNING, Style::new().yellow().bold()),
        (names::ERROR, Style::new().red().bold()),
    ])
});

/// Applies a named style. Unknown names and disabled color both pass text through.
pub fn apply(name: &str, text: &str, use_color: bool) -> String {
    match ROSTER_STYLES.get(name) {
        Some(style) if use_color => style
            .clone()
            .force_styling(true)
            .apply_to(text)
            .to_string(),
        _ => text.to_string(),
    }
}
