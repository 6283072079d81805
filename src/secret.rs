//! Secret List Unlocker
//!
//! Every `.unlock-btn` asks for the list's password and navigates to the
//! list only after the server accepts it.

use web_sys::{Element, MouseEvent};

use crate::api::{self, FailureNotice, InFlight};
use crate::dom;

pub const UNLOCK_SELECTOR: &str = ".unlock-btn";

const PASSWORD_PROMPT: &str = "Bitte Passwort eingeben:";
const WRONG_PASSWORD: &str = "Falsches Passwort!";
const VERIFY_FAILED: &str = "Fehler beim Überprüfen des Passworts.";

pub fn unlock_url(list_name: &str) -> String {
    format!("/view_list/{}", api::encode_component(list_name))
}

/// What to do with the server's verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unlock {
    Navigate(String),
    Reject(&'static str),
}

impl Unlock {
    pub fn decide(list_name: &str, accepted: bool) -> Self {
        if accepted {
            Unlock::Navigate(unlock_url(list_name))
        } else {
            Unlock::Reject(WRONG_PASSWORD)
        }
    }

    fn apply(self) {
        match self {
            Unlock::Navigate(url) => dom::navigate(&url),
            Unlock::Reject(message) => dom::alert(message),
        }
    }
}

/// Bind all lock controls; returns how many were bound
pub fn bind() -> usize {
    let in_flight = InFlight::new();
    let buttons = dom::query_all(UNLOCK_SELECTOR);
    for button in &buttons {
        let in_flight = in_flight.clone();
        let target = button.clone();
        dom::listen(button, "click", move |ev: MouseEvent| {
            ev.prevent_default();
            unlock(&target, &in_flight);
        });
    }
    tracing::debug!(buttons = buttons.len(), "unlock controls bound");
    buttons.len()
}

fn unlock(button: &Element, in_flight: &InFlight) {
    let Some(list_name) = dom::data(button, "list-name") else {
        tracing::warn!("unlock control without data-list-name");
        return;
    };
    let Some(password) = dom::prompt(PASSWORD_PROMPT, "") else {
        return;
    };

    let guard = in_flight.try_begin("unlock", &list_name);
    let name = list_name.clone();
    api::submit_or_revert(
        "verify_secret",
        async move {
            let _guard = guard?;
            api::verify_secret(&name, &password).await
        },
        FailureNotice::Alert(VERIFY_FAILED),
        move |accepted| {
            tracing::info!(list = %list_name, accepted, "password verified");
            Unlock::decide(&list_name, accepted).apply();
        },
        || {},
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlock_url_encodes_list_name() {
        assert_eq!(unlock_url("Tagebuch"), "/view_list/Tagebuch");
        assert_eq!(unlock_url("Geheim & privat/2026"), "/view_list/Geheim%20%26%20privat%2F2026");
    }

    #[test]
    fn test_rejected_password_does_not_navigate() {
        assert_eq!(Unlock::decide("Tagebuch", false), Unlock::Reject("Falsches Passwort!"));
    }

    #[test]
    fn test_accepted_password_navigates_to_list() {
        assert_eq!(
            Unlock::decide("Meine Liste", true),
            Unlock::Navigate("/view_list/Meine%20Liste".to_string())
        );
    }
}
