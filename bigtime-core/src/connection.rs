//! Phone link icon selection

use crate::glyph::ConnectionIcon;

/// Glyph for a link state
pub fn connection_icon(connected: bool) -> ConnectionIcon {
    if connected {
        ConnectionIcon::Connected
    } else {
        ConnectionIcon::Disconnected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_selection() {
        assert_eq!(connection_icon(true).index(), 0);
        assert_eq!(connection_icon(false).index(), 1);
    }

    #[test]
    fn test_toggle_has_no_residual_state() {
        let first = connection_icon(true);
        let _ = connection_icon(false);
        assert_eq!(connection_icon(true), first);
    }
}
