//! Visibility observation in the webview.
//!
//! Both hooks here install IntersectionObservers through `document::eval`
//! and stream results back over the eval channel. Sending any message to a
//! running script disconnects its observers, which is how teardown works.

use dioxus::document::Eval;
use dioxus::prelude::*;
use invitation_core::section::VISIBILITY_THRESHOLD;
use invitation_core::{InvitationState, ObserverMessage, SectionId};

/// Observes the content sections and posts one message per entry.
///
/// Receives the list of section ids first, then waits for a disconnect
/// message.
const SECTION_OBSERVER_JS: &str = r#"
const ids = await dioxus.recv();
await new Promise((resolve) => requestAnimationFrame(() => resolve()));
const observers = [];
if (!("IntersectionObserver" in window)) {
  dioxus.send({ kind: "unsupported" });
} else {
  for (const id of ids) {
    const el = document.getElementById(id);
    if (!el) continue;
    const observer = new IntersectionObserver((entries) => {
      for (const entry of entries) {
        dioxus.send({
          kind: "entry",
          id,
          ratio: entry.intersectionRatio,
          intersecting: entry.isIntersecting,
        });
      }
    }, { threshold: __THRESHOLD__ });
    observer.observe(el);
    observers.push(observer);
  }
}
await dioxus.recv();
observers.forEach((observer) => observer.disconnect());
"#;

/// Adds `in-view` to each `.reveal` element the first time it is seen.
const REVEAL_OBSERVER_JS: &str = r#"
await new Promise((resolve) => requestAnimationFrame(() => resolve()));
const pending = document.querySelectorAll(".reveal:not(.reveal--immediate):not(.in-view)");
let observer = null;
if (!("IntersectionObserver" in window)) {
  pending.forEach((el) => el.classList.add("in-view"));
} else {
  observer = new IntersectionObserver((entries) => {
    for (const entry of entries) {
      if (entry.isIntersecting) {
        entry.target.classList.add("in-view");
        observer.unobserve(entry.target);
      }
    }
  }, { threshold: 0.1 });
  pending.forEach((el) => observer.observe(el));
}
await dioxus.recv();
if (observer) observer.disconnect();
"#;

fn section_observer_script() -> String {
    SECTION_OBSERVER_JS.replace("__THRESHOLD__", &VISIBILITY_THRESHOLD.to_string())
}

/// Tell a running observer script to disconnect
fn disconnect(handle: Signal<Option<Eval>>) {
    if let Ok(guard) = handle.try_peek() {
        if let Some(eval) = guard.as_ref() {
            let _ = eval.send("disconnect");
        }
    }
}

/// Track the active section while the page is unlocked.
///
/// Observation starts on the first render after the gate opens and all
/// observers are disconnected when the calling component unmounts.
pub fn use_section_tracker(mut state: Signal<InvitationState>) {
    let unlocked = !state.read().is_locked();
    let mut handle: Signal<Option<Eval>> = use_signal(|| None);

    use_effect(use_reactive((&unlocked,), move |(unlocked,)| {
        if !unlocked || handle.peek().is_some() {
            return;
        }

        let eval = document::eval(&section_observer_script());
        let ids: Vec<&'static str> = SectionId::content().map(|id| id.dom_id()).collect();
        if let Err(e) = eval.send(ids) {
            tracing::warn!("Failed to start section observer: {:?}", e);
            return;
        }
        tracing::info!("Section observer started");
        handle.set(Some(eval));

        let mut receiver = eval;
        spawn(async move {
            loop {
                match receiver.recv::<ObserverMessage>().await {
                    Ok(message) => {
                        let mut next = state.peek().clone();
                        next.record_visibility(&message);
                        if next != *state.peek() {
                            state.set(next);
                        }
                    }
                    Err(e) => {
                        tracing::debug!("Section observer closed: {:?}", e);
                        break;
                    }
                }
            }
        });
    }));

    use_drop(move || {
        disconnect(handle);
        tracing::debug!("Section observer disconnected");
    });
}

/// Play "in view" entrance animations once each, after `enabled` turns on.
pub fn use_reveal_on_scroll(enabled: bool) {
    let mut handle: Signal<Option<Eval>> = use_signal(|| None);

    use_effect(use_reactive((&enabled,), move |(enabled,)| {
        if !enabled || handle.peek().is_some() {
            return;
        }
        handle.set(Some(document::eval(REVEAL_OBSERVER_JS)));
    }));

    use_drop(move || disconnect(handle));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_substituted() {
        let script = section_observer_script();
        assert!(script.contains("threshold: 0.3"));
        assert!(!script.contains("__THRESHOLD__"));
    }
}
