//! `?open=<app>[,<app>...]` query handling for launching apps at boot.

use desktop_runtime::{app_descriptor, AppId};
use leptos::logging;

/// Splits the raw `open` query value into registered app ids, in order.
///
/// Unknown and duplicate ids are dropped; unknown ones are logged.
pub(crate) fn parse_open_targets(raw: &str) -> Vec<AppId> {
    let mut targets: Vec<AppId> = Vec::new();
    for token in raw.split(',').map(str::trim).filter(|token| !token.is_empty()) {
        let app_id = AppId::from(token);
        if app_descriptor(&app_id).is_none() {
            logging::warn!("ignoring deep link to unknown app `{app_id}`");
            continue;
        }
        if !targets.contains(&app_id) {
            targets.push(app_id);
        }
    }
    targets
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_known_targets_in_order() {
        assert_eq!(
            parse_open_targets("wordle, about"),
            vec![AppId::from("wordle"), AppId::from("about")]
        );
    }

    #[test]
    fn drops_unknown_empty_and_repeated_targets() {
        assert_eq!(
            parse_open_targets("paint,,tictactoe,tictactoe"),
            vec![AppId::from("tictactoe")]
        );
        assert!(parse_open_targets("").is_empty());
    }
}
