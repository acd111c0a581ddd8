//! Class and inline-style composition for the page shell container.
//!
//! Layout and the opacity values live in the stylesheet; the inline style only
//! carries the values that come from [`ShellConfig`].

use crate::config::ShellConfig;
use crate::lifecycle::MountState;

/// Base layout class of the shell container.
pub const SHELL_CLASS: &str = "ms-shell";

/// Applied while the shell is [`MountState::Pending`] (opacity 0).
pub const HIDDEN_CLASS: &str = "ms-shell--hidden";

/// Applied once the shell is [`MountState::Settled`] (opacity 1).
pub const VISIBLE_CLASS: &str = "ms-shell--visible";

/// Class list for the shell container in the given state.
pub fn shell_class(state: MountState) -> String {
    let modifier = match state {
        MountState::Pending => HIDDEN_CLASS,
        MountState::Settled => VISIBLE_CLASS,
    };
    format!("{SHELL_CLASS} {modifier}")
}

/// Inline declarations for the configured transition and background.
pub fn shell_style(config: &ShellConfig) -> String {
    format!(
        "transition-duration: {}ms; background: radial-gradient(circle at center, {}, {});",
        config.fade_in_ms(),
        config.background_inner(),
        config.background_outer()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_is_hidden() {
        let class = shell_class(MountState::Pending);
        assert!(class.split(' ').any(|c| c == SHELL_CLASS));
        assert!(class.split(' ').any(|c| c == HIDDEN_CLASS));
        assert!(!class.split(' ').any(|c| c == VISIBLE_CLASS));
    }

    #[test]
    fn test_settled_is_visible() {
        let class = shell_class(MountState::Settled);
        assert!(class.split(' ').any(|c| c == SHELL_CLASS));
        assert!(class.split(' ').any(|c| c == VISIBLE_CLASS));
        assert!(!class.split(' ').any(|c| c == HIDDEN_CLASS));
    }

    #[test]
    fn test_style_uses_config() {
        let style = shell_style(&ShellConfig::default());
        assert!(style.contains("transition-duration: 700ms"));
        assert!(style.contains("#0d0d1a"));
        assert!(style.contains("#111827"));

        let config = ShellConfig::default().with_fade_in_ms(250).unwrap();
        assert!(shell_style(&config).contains("transition-duration: 250ms"));
    }
}
