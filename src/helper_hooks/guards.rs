use crate::prelude::*;

use crate::Route;

/// Route guard for authenticated-only views. Redirects home (with an alert)
/// once the session is known to be missing; returns true when the view may
/// render its content.
pub fn use_auth_guard() -> Memo<bool> {
    use_session_guard(false)
}

/// Route guard for author-only views.
pub fn use_author_guard() -> Memo<bool> {
    use_session_guard(true)
}

fn use_session_guard(require_author: bool) -> Memo<bool> {
    // None while the persisted-session restore is still running
    let verdict = use_memo(move || match *state_management::SESSION.read() {
        None => None,
        Some(Session::Authenticated(ref auth)) => {
            Some(!require_author || auth.user.is_author())
        }
        Some(Session::Anonymous) => Some(false),
    });

    use_effect(move || {
        if verdict() == Some(false) {
            alert_warn(if require_author {
                "Access denied. Author privileges required."
            } else {
                "Please login to access this page"
            });
            navigator().replace(Route::HomeView {});
        }
    });

    use_memo(move || verdict() == Some(true))
}
