//! Keyboard and input method reconciliation.
//!
//! The [`InputReconciler`] sits between the host's key/IME callbacks and the
//! terminal core. Each physical key action is offered to the
//! [`InputMethod`] first; the signals it emits and whether it claimed the
//! event decide if (and with what text) the core sees a key event.

mod methods;
mod reconciler;
mod types;

pub use methods::{ScriptedInputMethod, SimpleInputMethod};
pub use reconciler::{decide, resolve_key, InputReconciler, KeyDisposition, COMMIT_CAPACITY};
pub use types::{Decision, ImeFilter, ImeSignal, InputMethod, KeyEventState, RawKeyEvent};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::{KeyEffect, RecordingCore};
    use crate::keys::{Key, KeyAction, KEYVAL_ESCAPE, KEYVAL_RETURN, SHIFT_MASK};

    fn press(keycode: u32, keyval: u32, unshifted: Option<char>) -> RawKeyEvent {
        RawKeyEvent {
            action: KeyAction::Press,
            keycode,
            keyval,
            unshifted_codepoint: unshifted,
            state: 0,
            consumed: 0,
        }
    }

    fn letter(c: char) -> RawKeyEvent {
        let keycode = match c {
            'a' => 38,
            'e' => 26,
            'k' => 45,
            'n' => 57,
            'o' => 32,
            _ => 0,
        };
        press(keycode, c as u32, Some(c))
    }

    fn enter() -> RawKeyEvent {
        press(36, KEYVAL_RETURN, None)
    }

    fn changed(text: &str) -> ImeSignal {
        ImeSignal::PreeditChanged(text.into())
    }

    fn commit(text: &str) -> ImeSignal {
        ImeSignal::Commit(text.into())
    }

    // -- Literal sequences --

    #[test]
    fn plain_letter_dispatches_once_with_text() {
        let mut reconciler = InputReconciler::new();
        let mut im = ScriptedInputMethod::new([ImeFilter::handled(vec![commit("a")])]);
        let mut core = RecordingCore::new();

        let disposition = reconciler.key_event(&letter('a'), &mut im, &mut core);
        assert_eq!(disposition, KeyDisposition::Dispatched(KeyEffect::Consumed));

        let keys = core.keys();
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].utf8, "a");
        assert_eq!(keys[0].key, Key::A);
        assert_eq!(keys[0].physical_key, Key::A);
        assert!(!keys[0].composing);
    }

    #[test]
    fn dead_key_then_letter_dispatches_composed_text_once() {
        let mut reconciler = InputReconciler::new();
        let mut im = SimpleInputMethod::new();
        let mut core = RecordingCore::new();

        // dead_acute on the apostrophe key.
        let dead = press(48, 0xfe51, Some('\''));
        assert_eq!(
            reconciler.key_event(&dead, &mut im, &mut core),
            KeyDisposition::Composing
        );
        assert!(reconciler.is_composing());
        assert!(core.keys().is_empty());

        assert_eq!(
            reconciler.key_event(&letter('e'), &mut im, &mut core),
            KeyDisposition::Suppressed
        );
        assert!(!reconciler.is_composing());

        let keys = core.keys();
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].utf8, "é");
        assert_eq!(keys[0].key, Key::Invalid);
        assert_eq!(core.preedits(), vec![Some("´"), None]);
    }

    #[test]
    fn japanese_composition_commits_once_on_enter() {
        let mut reconciler = InputReconciler::new();
        let mut im = ScriptedInputMethod::new([
            ImeFilter::handled(vec![ImeSignal::PreeditStart, changed("k")]),
            ImeFilter::handled(vec![changed("こ")]),
            ImeFilter::handled(vec![changed("こn")]),
            ImeFilter::handled(vec![changed("こん")]),
            ImeFilter::handled(vec![commit("こん"), ImeSignal::PreeditEnd]),
        ]);
        let mut core = RecordingCore::new();

        for c in ['k', 'o', 'n', 'n'] {
            let disposition = reconciler.key_event(&letter(c), &mut im, &mut core);
            assert_eq!(disposition, KeyDisposition::Composing);
        }
        assert!(core.keys().is_empty());

        let disposition = reconciler.key_event(&enter(), &mut im, &mut core);
        assert_eq!(disposition, KeyDisposition::Suppressed);

        let keys = core.keys();
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].utf8, "こん");
        assert_ne!(keys[0].key, Key::Enter);
        assert!(!reconciler.is_composing());
        assert_eq!(core.preedits().last(), Some(&None));
    }

    #[test]
    fn commit_then_preedit_end_clears_preedit_once() {
        let mut reconciler = InputReconciler::new();
        let mut im = ScriptedInputMethod::new([
            ImeFilter::handled(vec![ImeSignal::PreeditStart, changed("に")]),
            ImeFilter::handled(vec![commit("に"), ImeSignal::PreeditEnd]),
        ]);
        let mut core = RecordingCore::new();

        reconciler.key_event(&letter('n'), &mut im, &mut core);
        reconciler.key_event(&enter(), &mut im, &mut core);

        assert_eq!(core.keys().len(), 1);
        assert_eq!(core.preedits(), vec![Some("に"), None]);
    }

    #[test]
    fn preedit_end_while_idle_is_ignored() {
        let mut reconciler = InputReconciler::new();
        let mut core = RecordingCore::new();

        reconciler.ime_signal(ImeSignal::PreeditEnd, &mut core);
        assert!(core.preedits().is_empty());
    }

    #[test]
    fn dead_key_then_arrow_dispatches_arrow() {
        let mut reconciler = InputReconciler::new();
        let mut im = SimpleInputMethod::new();
        let mut core = RecordingCore::new();

        let dead = press(48, 0xfe51, Some('\''));
        reconciler.key_event(&dead, &mut im, &mut core);
        assert!(reconciler.is_composing());

        // The arrow cancels the accent and is not claimed by the input method.
        let disposition = reconciler.key_event(&press(113, 0xff51, None), &mut im, &mut core);
        assert_eq!(disposition, KeyDisposition::Dispatched(KeyEffect::Consumed));
        assert!(!reconciler.is_composing());

        let keys = core.keys();
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].key, Key::ArrowLeft);
        assert_eq!(keys[0].physical_key, Key::ArrowLeft);
        assert!(keys[0].composing);
        assert_eq!(keys[0].utf8, "");
        assert_eq!(core.preedits(), vec![Some("´"), None]);
    }

    #[test]
    fn preedit_end_before_commit_also_dispatches_once() {
        let mut reconciler = InputReconciler::new();
        let mut im = ScriptedInputMethod::new([
            ImeFilter::handled(vec![ImeSignal::PreeditStart, changed("に")]),
            ImeFilter::handled(vec![ImeSignal::PreeditEnd, commit("に")]),
        ]);
        let mut core = RecordingCore::new();

        reconciler.key_event(&letter('n'), &mut im, &mut core);
        reconciler.key_event(&enter(), &mut im, &mut core);

        let keys = core.keys();
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].utf8, "に");
    }

    // -- Commits outside key events --

    #[test]
    fn commit_outside_key_event_dispatches_immediately() {
        let mut reconciler = InputReconciler::new();
        let mut core = RecordingCore::new();

        reconciler.ime_signal(commit("hello"), &mut core);
        let keys = core.keys();
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].utf8, "hello");
        assert_eq!(keys[0].key, Key::Invalid);
        assert_eq!(keys[0].physical_key, Key::Invalid);
        assert!(core.preedits().is_empty());
    }

    #[test]
    fn commit_outside_key_event_closes_preedit_first() {
        let mut reconciler = InputReconciler::new();
        let mut core = RecordingCore::new();

        reconciler.ime_signal(ImeSignal::PreeditStart, &mut core);
        reconciler.ime_signal(changed("ä"), &mut core);
        reconciler.ime_signal(commit("ä"), &mut core);

        assert!(!reconciler.is_composing());
        assert_eq!(core.preedits(), vec![Some("ä"), None]);
        assert_eq!(core.keys().len(), 1);
    }

    #[test]
    fn empty_preedit_while_idle_is_ignored() {
        let mut reconciler = InputReconciler::new();
        let mut core = RecordingCore::new();
        reconciler.ime_signal(changed(""), &mut core);
        assert!(core.calls.is_empty());
        assert!(!reconciler.is_composing());
    }

    // -- Decision table --

    #[test]
    fn decision_table_first_match_wins() {
        assert_eq!(decide(true, false, true, 3), Decision::Consumed);
        assert_eq!(decide(true, true, true, 0), Decision::Consumed);
        assert_eq!(decide(true, true, false, 2), Decision::Suppressed);
        assert_eq!(decide(true, false, false, 0), Decision::Suppressed);
        assert_eq!(decide(true, false, false, 1), Decision::Dispatch);
        assert_eq!(decide(false, true, true, 0), Decision::Dispatch);
        assert_eq!(decide(false, false, false, 0), Decision::Dispatch);
    }

    #[test]
    fn handled_without_text_is_suppressed() {
        let mut reconciler = InputReconciler::new();
        let mut im = ScriptedInputMethod::new([ImeFilter::handled(vec![])]);
        let mut core = RecordingCore::new();

        let disposition = reconciler.key_event(&letter('a'), &mut im, &mut core);
        assert_eq!(disposition, KeyDisposition::Suppressed);
        assert!(disposition.handled());
        assert!(core.keys().is_empty());
    }

    #[test]
    fn oversized_commit_is_dropped() {
        let mut reconciler = InputReconciler::new();
        let long = "x".repeat(COMMIT_CAPACITY + 1);
        let mut im = ScriptedInputMethod::new([
            ImeFilter::handled(vec![commit(&long)]),
            ImeFilter::handled(vec![commit("a"), commit(&long)]),
        ]);
        let mut core = RecordingCore::new();

        // Nothing fits: the IME handled the key with no usable text.
        assert_eq!(
            reconciler.key_event(&letter('a'), &mut im, &mut core),
            KeyDisposition::Suppressed
        );
        assert!(core.keys().is_empty());

        // The buffer keeps what fit before the overflow.
        reconciler.key_event(&letter('a'), &mut im, &mut core);
        let keys = core.keys();
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].utf8, "a");
    }

    #[test]
    fn commit_buffer_is_cleared_between_events() {
        let mut reconciler = InputReconciler::new();
        let mut im = ScriptedInputMethod::new([ImeFilter::handled(vec![commit("a")])]);
        let mut core = RecordingCore::new();

        reconciler.key_event(&letter('a'), &mut im, &mut core);
        reconciler.key_event(&enter(), &mut im, &mut core);

        let keys = core.keys();
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[1].utf8, "");
        assert_eq!(keys[1].key, Key::Enter);
        assert_eq!(reconciler.key_event_state(), KeyEventState::None);
    }

    // -- Key resolution --

    #[test]
    fn shifted_letter_carries_modifiers() {
        let mut reconciler = InputReconciler::new();
        let mut im = ScriptedInputMethod::new([ImeFilter::handled(vec![commit("A")])]);
        let mut core = RecordingCore::new();
        let raw = RawKeyEvent {
            state: SHIFT_MASK,
            consumed: SHIFT_MASK,
            ..press(38, 0x41, Some('a'))
        };

        reconciler.key_event(&raw, &mut im, &mut core);
        let keys = core.keys();
        assert_eq!(keys[0].key, Key::A);
        assert!(keys[0].mods.shift);
        assert!(keys[0].consumed_mods.shift);
        assert_eq!(keys[0].unshifted_codepoint, Some('a'));
    }

    #[test]
    fn turkish_q_dotless_i_resolves_to_invalid() {
        // The physical I key types "ı" on a Turkish Q layout. Neither the
        // keysym nor the text maps to a key, and the physical key must not be
        // guessed because the text disagrees with it.
        let raw = press(31, 0x2b9, Some('ı'));
        assert_eq!(resolve_key(&raw, "ı", false), Key::Invalid);

        let mut reconciler = InputReconciler::new();
        let mut im = ScriptedInputMethod::new([ImeFilter::handled(vec![commit("ı")])]);
        let mut core = RecordingCore::new();
        reconciler.key_event(&raw, &mut im, &mut core);
        let keys = core.keys();
        assert_eq!(keys[0].key, Key::Invalid);
        assert_eq!(keys[0].physical_key, Key::I);
        assert_eq!(keys[0].utf8, "ı");
    }

    #[test]
    fn resolution_precedence() {
        // Keysym wins.
        assert_eq!(resolve_key(&press(38, 0x61, None), "z", false), Key::A);
        // Then the first committed byte.
        assert_eq!(resolve_key(&press(38, 0, None), "z", false), Key::Z);
        // Then the unshifted codepoint.
        assert_eq!(resolve_key(&press(38, 0, Some('q')), "", false), Key::Q);
        // Non-ASCII codepoint with no text still refuses the physical key.
        assert_eq!(resolve_key(&press(38, 0, Some('ф')), "", false), Key::Invalid);
        // Nothing else: the physical key.
        assert_eq!(resolve_key(&press(38, 0, None), "", false), Key::A);
        // Composing is always invalid.
        assert_eq!(resolve_key(&press(38, 0x61, None), "", true), Key::Invalid);
    }

    // -- Effects and focus --

    #[test]
    fn consumed_key_while_composing_resets_input_method() {
        let mut reconciler = InputReconciler::new();
        let mut im = ScriptedInputMethod::new([
            ImeFilter::handled(vec![ImeSignal::PreeditStart, changed("k")]),
            // Escape is not handled by the IME.
            ImeFilter::unhandled(),
        ]);
        let mut core = RecordingCore::new();

        reconciler.key_event(&letter('k'), &mut im, &mut core);
        let disposition = reconciler.key_event(&press(9, KEYVAL_ESCAPE, None), &mut im, &mut core);

        assert_eq!(disposition, KeyDisposition::Dispatched(KeyEffect::Consumed));
        assert_eq!(im.resets, 1);
        assert!(!reconciler.is_composing());
        let keys = core.keys();
        assert_eq!(keys.len(), 1);
        assert!(keys[0].composing);
        assert_eq!(keys[0].key, Key::Invalid);
        assert_eq!(keys[0].physical_key, Key::Escape);
        assert_eq!(core.preedits(), vec![Some("k"), None]);
    }

    #[test]
    fn ignored_key_is_not_handled() {
        let mut reconciler = InputReconciler::new();
        let mut im = ScriptedInputMethod::default();
        let mut core = RecordingCore {
            key_effect: Some(KeyEffect::Ignored),
            ..RecordingCore::new()
        };
        let disposition = reconciler.key_event(&enter(), &mut im, &mut core);
        assert_eq!(disposition, KeyDisposition::Dispatched(KeyEffect::Ignored));
        assert!(!disposition.handled());
    }

    #[test]
    fn core_failure_reports_unhandled() {
        let mut reconciler = InputReconciler::new();
        let mut im = ScriptedInputMethod::default();
        let mut core = RecordingCore {
            fail_keys: true,
            ..RecordingCore::new()
        };
        let disposition = reconciler.key_event(&enter(), &mut im, &mut core);
        assert_eq!(disposition, KeyDisposition::Failed);
        assert!(!disposition.handled());
    }

    #[test]
    fn focus_out_abandons_composition() {
        let mut reconciler = InputReconciler::new();
        let mut im = ScriptedInputMethod::new([ImeFilter::handled(vec![
            ImeSignal::PreeditStart,
            changed("k"),
        ])]);
        let mut core = RecordingCore::new();

        reconciler.key_event(&letter('k'), &mut im, &mut core);
        assert!(reconciler.is_composing());

        reconciler.focus_out(&mut im, &mut core);
        assert!(!reconciler.is_composing());
        assert_eq!(im.resets, 1);
        assert_eq!(core.preedits().last(), Some(&None));
    }

    #[test]
    fn simple_input_method_passes_control_keys_through() {
        let mut reconciler = InputReconciler::new();
        let mut im = SimpleInputMethod::new();
        let mut core = RecordingCore::new();

        let ctrl_c = RawKeyEvent {
            state: crate::keys::CONTROL_MASK,
            ..press(54, 0x63, Some('c'))
        };
        reconciler.key_event(&ctrl_c, &mut im, &mut core);
        reconciler.key_event(&letter('a'), &mut im, &mut core);

        let keys = core.keys();
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].key, Key::C);
        assert!(keys[0].mods.ctrl);
        assert_eq!(keys[0].utf8, "");
        assert_eq!(keys[1].utf8, "a");
    }

    #[test]
    fn dead_key_release_stays_in_composition() {
        let mut reconciler = InputReconciler::new();
        let mut im = SimpleInputMethod::new();
        let mut core = RecordingCore::new();

        let dead = press(48, 0xfe51, Some('\''));
        reconciler.key_event(&dead, &mut im, &mut core);
        let release = RawKeyEvent {
            action: KeyAction::Release,
            ..dead
        };
        assert_eq!(
            reconciler.key_event(&release, &mut im, &mut core),
            KeyDisposition::Composing
        );
        assert!(core.keys().is_empty());
    }
}
