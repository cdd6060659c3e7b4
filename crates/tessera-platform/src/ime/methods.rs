//! Input method implementations that do not need a host toolkit.

use std::collections::VecDeque;

use super::types::{ImeFilter, ImeSignal, InputMethod, RawKeyEvent};
use crate::keys::{is_dead_key, keyval_to_char, KeyAction, Modifiers};

/// Replays a fixed sequence of filter results. Events beyond the script are
/// left unhandled.
#[derive(Debug, Default)]
pub struct ScriptedInputMethod {
    script: VecDeque<ImeFilter>,
    pub resets: usize,
}

impl ScriptedInputMethod {
    pub fn new(script: impl IntoIterator<Item = ImeFilter>) -> Self {
        Self {
            script: script.into_iter().collect(),
            resets: 0,
        }
    }

    pub fn push(&mut self, filter: ImeFilter) {
        self.script.push_back(filter);
    }
}

impl InputMethod for ScriptedInputMethod {
    fn filter(&mut self, _event: &RawKeyEvent) -> ImeFilter {
        self.script.pop_front().unwrap_or_default()
    }

    fn reset(&mut self) {
        self.resets += 1;
    }
}

/// A table-driven input method: commits printable keys directly and composes
/// dead-key accents with the following letter.
#[derive(Debug, Default)]
pub struct SimpleInputMethod {
    pending_dead: Option<u32>,
}

impl SimpleInputMethod {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputMethod for SimpleInputMethod {
    fn filter(&mut self, event: &RawKeyEvent) -> ImeFilter {
        if event.action == KeyAction::Release {
            // Releases belong to the composition while one is open.
            return ImeFilter {
                handled: self.pending_dead.is_some(),
                signals: Vec::new(),
            };
        }

        if is_dead_key(event.keyval) {
            let accent = dead_key_accent(event.keyval).to_string();
            let mut signals = Vec::new();
            if self.pending_dead.is_none() {
                signals.push(ImeSignal::PreeditStart);
            }
            signals.push(ImeSignal::PreeditChanged(accent));
            self.pending_dead = Some(event.keyval);
            return ImeFilter::handled(signals);
        }

        let mods = Modifiers::from_bits(event.state);
        let printable = keyval_to_char(event.keyval).filter(|_| !(mods.ctrl || mods.alt || mods.super_key));

        match (self.pending_dead.take(), printable) {
            (Some(dead), Some(c)) => {
                let text = match compose(dead, c) {
                    Some(composed) => composed.to_string(),
                    None if c == ' ' => dead_key_accent(dead).to_string(),
                    None => format!("{}{}", dead_key_accent(dead), c),
                };
                ImeFilter::handled(vec![ImeSignal::PreeditEnd, ImeSignal::Commit(text)])
            }
            (Some(_), None) => ImeFilter {
                // Any other key cancels the accent and is processed normally.
                handled: false,
                signals: vec![ImeSignal::PreeditEnd],
            },
            (None, Some(c)) => ImeFilter::handled(vec![ImeSignal::Commit(c.to_string())]),
            (None, None) => ImeFilter::unhandled(),
        }
    }

    fn reset(&mut self) {
        self.pending_dead = None;
    }
}

fn dead_key_accent(keyval: u32) -> char {
    match keyval {
        0xfe50 => '`',
        0xfe51 => '´',
        0xfe52 => '^',
        0xfe53 => '~',
        0xfe57 => '¨',
        _ => '·',
    }
}

fn compose(dead: u32, base: char) -> Option<char> {
    let composed = match (dead, base) {
        // dead_grave
        (0xfe50, 'a') => 'à',
        (0xfe50, 'e') => 'è',
        (0xfe50, 'i') => 'ì',
        (0xfe50, 'o') => 'ò',
        (0xfe50, 'u') => 'ù',
        (0xfe50, 'A') => 'À',
        (0xfe50, 'E') => 'È',
        // dead_acute
        (0xfe51, 'a') => 'á',
        (0xfe51, 'e') => 'é',
        (0xfe51, 'i') => 'í',
        (0xfe51, 'o') => 'ó',
        (0xfe51, 'u') => 'ú',
        (0xfe51, 'y') => 'ý',
        (0xfe51, 'A') => 'Á',
        (0xfe51, 'E') => 'É',
        // dead_circumflex
        (0xfe52, 'a') => 'â',
        (0xfe52, 'e') => 'ê',
        (0xfe52, 'i') => 'î',
        (0xfe52, 'o') => 'ô',
        (0xfe52, 'u') => 'û',
        // dead_tilde
        (0xfe53, 'a') => 'ã',
        (0xfe53, 'n') => 'ñ',
        (0xfe53, 'o') => 'õ',
        (0xfe53, 'N') => 'Ñ',
        // dead_diaeresis
        (0xfe57, 'a') => 'ä',
        (0xfe57, 'e') => 'ë',
        (0xfe57, 'i') => 'ï',
        (0xfe57, 'o') => 'ö',
        (0xfe57, 'u') => 'ü',
        (0xfe57, 'y') => 'ÿ',
        (0xfe57, 'A') => 'Ä',
        (0xfe57, 'O') => 'Ö',
        (0xfe57, 'U') => 'Ü',
        _ => return None,
    };
    Some(composed)
}
