pub mod counter_handlers;
pub mod dashboard;
pub mod token_handlers;
pub mod user_handlers;

/// Shown when the backend gives no message of its own.
pub const LOAD_FAILED: &str = "Gagal memuat data dari server";
pub const ACTION_FAILED: &str = "Terjadi kesalahan, silakan coba lagi";

/// Only same-site absolute paths are accepted as redirect targets.
pub fn safe_redirect(target: Option<&str>, default: &str) -> String {
    match target {
        Some(t) if is_local_path(t) => t.to_string(),
        _ => default.to_string(),
    }
}

/// `/` followed by anything but a second slash. Browsers read `\` as `/`.
fn is_local_path(t: &str) -> bool {
    let mut chars = t.chars();
    chars.next() == Some('/')
        && !matches!(chars.next(), Some('/' | '\\'))
        && !t.chars().any(|c| c == '\\' || c.is_control())
        && !t.contains("://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_redirect_rejects_offsite_targets() {
        assert_eq!(safe_redirect(Some("/users/trashed?q=a"), "/dashboard"), "/users/trashed?q=a");
        assert_eq!(safe_redirect(Some("//evil.example"), "/dashboard"), "/dashboard");
        assert_eq!(safe_redirect(Some("https://evil.example"), "/dashboard"), "/dashboard");
        assert_eq!(safe_redirect(None, "/dashboard"), "/dashboard");
        assert_eq!(safe_redirect(Some("/"), "/dashboard"), "/");
    }

    #[test]
    fn safe_redirect_rejects_backslash_and_control_chars() {
        assert_eq!(safe_redirect(Some("/\\evil.example"), "/dashboard"), "/dashboard");
        assert_eq!(safe_redirect(Some("/users\\..\\x"), "/dashboard"), "/dashboard");
        assert_eq!(safe_redirect(Some("/\tevil.example"), "/dashboard"), "/dashboard");
        assert_eq!(safe_redirect(Some("/users\r\nSet-Cookie: x=1"), "/dashboard"), "/dashboard");
    }
}
