use thiserror::Error;

/// Mistakes in what the user asked for, as opposed to environment failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuickLinkError {
    #[error("Invalid or empty name {0:?}")]
    EmptyName(String),

    #[error("Invalid or empty location {0:?}")]
    EmptyLocation(String),

    #[error("Specified name \"{name}\" has not been registered{}", hint(.suggestion))]
    NotRegistered {
        name: String,
        suggestion: Option<String>,
    },
}

fn hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean \"{}\"?)", s),
        None => String::new(),
    }
}
