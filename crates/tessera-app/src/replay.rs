//! Scripted replay: drives an [`App`] from a JSON script against recording
//! terminal cores and reports what every core and chrome subscriber saw.
//!
//! ```json
//! {
//!   "ime": "simple",
//!   "steps": [
//!     { "step": "action", "action": { "NewSplit": "Right" } },
//!     { "step": "key", "event": { "action": "press", "keycode": 38, "keyval": 97 } },
//!     { "step": "title", "title": "vim" }
//!   ]
//! }
//! ```

use std::collections::{BTreeMap, VecDeque};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tessera_common::actions::Action;
use tessera_common::events::{Event, EventBus};
use tessera_common::types::{PaneId, Rect, TabId};
use tessera_common::TesseraError;
use tessera_config::TesseraConfig;
use tessera_platform::clipboard::{ConfirmationId, MemoryClipboard};
use tessera_platform::ime::{ImeFilter, ImeSignal, ScriptedInputMethod, SimpleInputMethod};
use tessera_platform::terminal::{ClipboardKind, CoreCall, PasteError, RecordingCore};
use tessera_platform::{InputMethod, RawKeyEvent};
use tessera_tiling::TreeSnapshot;
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{debug, warn};

use crate::app_state::{App, SurfaceFactory};

/// Which input method every replayed surface uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImeMode {
    /// Direct commits plus dead-key composition.
    #[default]
    Simple,
    /// Filter results supplied by each key step.
    Scripted,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub ime: ImeMode,
    /// Cores report a running program, so closes ask first.
    #[serde(default)]
    pub confirm_quit: bool,
    /// Cores refuse unconfirmed clipboard completions with this error.
    #[serde(default)]
    pub paste_guard: Option<PasteError>,
    #[serde(default)]
    pub viewport: Option<Rect>,
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_json(text: &str) -> Result<Self, TesseraError> {
        serde_json::from_str(text).map_err(|e| TesseraError::Script(format!("invalid script: {e}")))
    }

    pub fn from_path(path: &Path) -> Result<Self, TesseraError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// One scripted host interaction. Steps without a `pane` act on the pane
/// holding keyboard focus.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    Action {
        action: Action,
    },
    Key {
        event: RawKeyEvent,
        /// What the scripted input method answers for this key.
        #[serde(default)]
        ime: Option<ImeFilter>,
    },
    Ime {
        signal: ImeSignal,
    },
    Title {
        title: String,
        #[serde(default)]
        pane: Option<u32>,
    },
    Pwd {
        pwd: String,
        #[serde(default)]
        pane: Option<u32>,
    },
    Focus {
        pane: u32,
    },
    SetClipboard {
        kind: ClipboardKind,
        text: String,
    },
    ClipboardRead {
        kind: ClipboardKind,
    },
    ClipboardWrite {
        kind: ClipboardKind,
        text: String,
    },
    /// Answer the oldest outstanding clipboard confirmation.
    ConfirmClipboard {
        accepted: bool,
    },
    /// Answer the oldest outstanding close confirmation.
    ConfirmClose {
        accepted: bool,
    },
    Viewport {
        width: f64,
        height: f64,
    },
}

/// Input method for replayed surfaces.
#[derive(Debug)]
pub enum ReplayIme {
    Simple(SimpleInputMethod),
    Scripted(ScriptedInputMethod),
}

impl InputMethod for ReplayIme {
    fn filter(&mut self, event: &RawKeyEvent) -> ImeFilter {
        match self {
            ReplayIme::Simple(im) => im.filter(event),
            ReplayIme::Scripted(im) => im.filter(event),
        }
    }

    fn reset(&mut self) {
        match self {
            ReplayIme::Simple(im) => im.reset(),
            ReplayIme::Scripted(im) => im.reset(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReplayFactory {
    pub ime: ImeMode,
    pub confirm_quit: bool,
    pub paste_guard: Option<PasteError>,
}

impl SurfaceFactory for ReplayFactory {
    type Core = RecordingCore;
    type Ime = ReplayIme;

    fn create(&mut self, pane: PaneId) -> (RecordingCore, ReplayIme) {
        debug!(%pane, ime = ?self.ime, "replay surface");
        let core = RecordingCore {
            confirm_quit: self.confirm_quit,
            paste_guard: self.paste_guard,
            ..RecordingCore::new()
        };
        let im = match self.ime {
            ImeMode::Simple => ReplayIme::Simple(SimpleInputMethod::new()),
            ImeMode::Scripted => ReplayIme::Scripted(ScriptedInputMethod::default()),
        };
        (core, im)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TabReport {
    pub id: TabId,
    pub title: String,
    pub tooltip: String,
    pub focus: Option<PaneId>,
    pub zoomed: Option<PaneId>,
    pub tree: Option<TreeSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub events: Vec<Event>,
    pub tabs: Vec<TabReport>,
    pub active_tab: Option<TabId>,
    pub focused_pane: Option<PaneId>,
    /// Every callback each surviving pane's core received, keyed by pane.
    pub calls: BTreeMap<String, Vec<CoreCall>>,
}

/// Drives an app through a script, collecting published events.
pub struct Replay {
    app: App<ReplayFactory>,
    events_rx: broadcast::Receiver<Event>,
    events: Vec<Event>,
    clipboard_confirmations: VecDeque<ConfirmationId>,
    close_confirmations: VecDeque<PaneId>,
}

impl Replay {
    pub fn new(script: &Script, config: TesseraConfig) -> Self {
        let factory = ReplayFactory {
            ime: script.ime,
            confirm_quit: script.confirm_quit,
            paste_guard: script.paste_guard,
        };
        let bus = EventBus::new(1024);
        let events_rx = bus.subscribe();
        let mut app =
            App::with_event_bus(config, factory, Box::new(MemoryClipboard::new()), bus);
        if let Some(viewport) = script.viewport {
            app.set_viewport(viewport);
        }
        let mut replay = Self {
            app,
            events_rx,
            events: Vec::new(),
            clipboard_confirmations: VecDeque::new(),
            close_confirmations: VecDeque::new(),
        };
        replay.collect_events();
        replay
    }

    pub fn app(&self) -> &App<ReplayFactory> {
        &self.app
    }

    /// Run every step in order. Stops at the first step that cannot apply.
    pub fn run(&mut self, steps: &[Step]) -> Result<(), TesseraError> {
        for (index, step) in steps.iter().enumerate() {
            self.step(step)
                .map_err(|msg| TesseraError::Script(format!("step {}: {msg}", index + 1)))?;
            self.collect_events();
        }
        Ok(())
    }

    fn step(&mut self, step: &Step) -> Result<(), String> {
        match step {
            Step::Action { action } => {
                self.app.dispatch(action.clone());
            }
            Step::Key { event, ime } => {
                let pane = self.target(None)?;
                if let Some(filter) = ime {
                    match self.app.surface_mut(pane).map(|s| s.input_method_mut()) {
                        Some(ReplayIme::Scripted(im)) => im.push(filter.clone()),
                        _ => warn!(%pane, "ime answer ignored: surfaces use the simple input method"),
                    }
                }
                let disposition = self.app.key_event(pane, event);
                debug!(%pane, ?disposition, "replayed key");
            }
            Step::Ime { signal } => {
                let pane = self.target(None)?;
                self.app.ime_signal(pane, signal.clone());
            }
            Step::Title { title, pane } => {
                let pane = self.target(*pane)?;
                self.app.pane_title_changed(pane, title);
            }
            Step::Pwd { pwd, pane } => {
                let pane = self.target(*pane)?;
                self.app.pane_pwd_changed(pane, pwd);
            }
            Step::Focus { pane } => {
                let pane = self.target(Some(*pane))?;
                self.app.focus_pane(pane);
            }
            Step::SetClipboard { kind, text } => {
                self.app
                    .clipboard_backend_mut()
                    .set(*kind, text)
                    .map_err(|e| e.to_string())?;
            }
            Step::ClipboardRead { kind } => {
                let pane = self.target(None)?;
                if let Some(id) = self.app.clipboard_read_requested(pane, *kind) {
                    self.app.complete_clipboard_read(id);
                }
            }
            Step::ClipboardWrite { kind, text } => {
                let pane = self.target(None)?;
                self.app.clipboard_write_requested(pane, *kind, text);
            }
            Step::ConfirmClipboard { accepted } => {
                let id = self
                    .clipboard_confirmations
                    .pop_front()
                    .ok_or("no clipboard confirmation is pending")?;
                self.app.confirm_clipboard(id, *accepted);
            }
            Step::ConfirmClose { accepted } => {
                let pane = self
                    .close_confirmations
                    .pop_front()
                    .ok_or("no close confirmation is pending")?;
                self.app.confirm_close(pane, *accepted);
            }
            Step::Viewport { width, height } => {
                self.app.set_viewport(Rect {
                    x: 0.0,
                    y: 0.0,
                    width: *width,
                    height: *height,
                });
            }
        }
        Ok(())
    }

    /// The pane a step acts on: the named one, or the keyboard focus.
    fn target(&self, pane: Option<u32>) -> Result<PaneId, String> {
        match pane {
            Some(id) => {
                let pane = PaneId(id);
                self.app
                    .surface(pane)
                    .map(|_| pane)
                    .ok_or_else(|| format!("no open pane {pane}"))
            }
            None => self
                .app
                .input_focus()
                .ok_or_else(|| "no pane holds keyboard focus".to_string()),
        }
    }

    fn collect_events(&mut self) {
        loop {
            match self.events_rx.try_recv() {
                Ok(event) => {
                    match &event {
                        Event::ClipboardConfirmationRequested { confirmation, .. } => {
                            self.clipboard_confirmations
                                .push_back(ConfirmationId(*confirmation));
                        }
                        Event::CloseConfirmationRequested(pane) => {
                            self.close_confirmations.push_back(*pane);
                        }
                        _ => {}
                    }
                    self.events.push(event);
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, "replay fell behind the event bus");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
    }

    pub fn report(&self) -> Report {
        let window = self.app.window();
        let tabs = window
            .tabs()
            .iter()
            .map(|tab| TabReport {
                id: tab.id,
                title: tab.title().to_string(),
                tooltip: tab.tooltip().to_string(),
                focus: tab.focus(),
                zoomed: window.zoomed_pane(tab.id),
                tree: window
                    .tree()
                    .root(tab.id)
                    .and_then(|root| window.tree().snapshot(root)),
            })
            .collect();
        let calls = self
            .app
            .surfaces()
            .map(|(pane, surface)| (pane.to_string(), surface.core().calls.clone()))
            .collect();
        Report {
            events: self.events.clone(),
            tabs,
            active_tab: window.active_tab_id(),
            focused_pane: window.focused_pane(),
            calls,
        }
    }
}

/// Run a whole script and report on it.
pub fn run(script: &Script, config: TesseraConfig) -> Result<Report, TesseraError> {
    let mut replay = Replay::new(script, config);
    replay.run(&script.steps)?;
    Ok(replay.report())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay(json: &str) -> Report {
        let script = Script::from_json(json).unwrap();
        run(&script, TesseraConfig::default()).unwrap()
    }

    #[test]
    fn split_and_type_into_the_new_pane() {
        let report = replay(
            r#"{
                "steps": [
                    { "step": "action", "action": { "NewSplit": "Right" } },
                    { "step": "key", "event": { "action": "press", "keycode": 38, "keyval": 97 } }
                ]
            }"#,
        );
        assert_eq!(report.focused_pane, Some(PaneId(2)));
        assert_eq!(report.tabs.len(), 1);
        assert_eq!(report.tabs[0].tree.as_ref().unwrap().pane_count(), 2);

        let typed: Vec<_> = report.calls["2"]
            .iter()
            .filter(|c| matches!(c, CoreCall::Key(_)))
            .collect();
        assert_eq!(typed.len(), 1);
        assert!(!report.calls["1"].iter().any(|c| matches!(c, CoreCall::Key(_))));
        assert!(report.events.contains(&Event::PaneOpened(PaneId(2))));
    }

    #[test]
    fn scripted_composition_commits_once() {
        let report = replay(
            r#"{
                "ime": "scripted",
                "steps": [
                    { "step": "key",
                      "event": { "action": "press", "keycode": 44, "keyval": 106 },
                      "ime": { "handled": true, "signals": [
                          { "signal": "preedit_start" },
                          { "signal": "preedit_changed", "text": "に" } ] } },
                    { "step": "key",
                      "event": { "action": "press", "keycode": 36, "keyval": 65293 },
                      "ime": { "handled": true, "signals": [
                          { "signal": "commit", "text": "日本" },
                          { "signal": "preedit_end" } ] } }
                ]
            }"#,
        );
        let calls = &report.calls["1"];
        let keys: Vec<_> = calls
            .iter()
            .filter_map(|c| match c {
                CoreCall::Key(event) => Some(event.utf8.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(keys, vec!["日本"]);
        assert!(calls.contains(&CoreCall::Preedit(Some("に".into()))));
    }

    #[test]
    fn title_only_reaches_the_window_from_the_focused_pane() {
        let report = replay(
            r#"{
                "steps": [
                    { "step": "action", "action": { "NewSplit": "Down" } },
                    { "step": "title", "title": "make", "pane": 1 },
                    { "step": "title", "title": "vim" }
                ]
            }"#,
        );
        let window_titles: Vec<_> = report
            .events
            .iter()
            .filter_map(|e| match e {
                Event::WindowTitleChanged(title) => Some(title.as_str()),
                _ => None,
            })
            .collect();
        assert!(window_titles.contains(&"vim"));
        assert!(!window_titles.contains(&"make"));
        assert_eq!(report.tabs[0].title, "vim");
    }

    #[test]
    fn clipboard_confirmation_flows_through_events() {
        let report = replay(
            r#"{
                "paste_guard": "unauthorized_paste",
                "steps": [
                    { "step": "set_clipboard", "kind": "standard", "text": "secret" },
                    { "step": "clipboard_read", "kind": "standard" },
                    { "step": "confirm_clipboard", "accepted": true }
                ]
            }"#,
        );
        assert!(report
            .events
            .iter()
            .any(|e| matches!(e, Event::ClipboardConfirmationRequested { .. })));
        let confirmed = report.calls["1"].iter().any(|c| {
            matches!(c, CoreCall::Clipboard { text, confirmed: true, .. } if text == "secret")
        });
        assert!(confirmed);
    }

    #[test]
    fn close_confirmation_is_answered_from_the_script() {
        let report = replay(
            r#"{
                "confirm_quit": true,
                "steps": [
                    { "step": "action", "action": { "NewSplit": "Right" } },
                    { "step": "action", "action": "ClosePane" },
                    { "step": "confirm_close", "accepted": true }
                ]
            }"#,
        );
        assert!(report
            .events
            .contains(&Event::CloseConfirmationRequested(PaneId(2))));
        assert!(report.events.contains(&Event::PaneClosed(PaneId(2))));
        assert_eq!(report.focused_pane, Some(PaneId(1)));
        assert!(!report.calls.contains_key("2"));
    }

    #[test]
    fn viewport_sizes_reach_the_cores() {
        let report = replay(
            r#"{
                "viewport": { "x": 0.0, "y": 0.0, "width": 300.0, "height": 200.0 },
                "steps": [ { "step": "viewport", "width": 640.0, "height": 480.0 } ]
            }"#,
        );
        let sizes: Vec<_> = report.calls["1"]
            .iter()
            .filter_map(|c| match c {
                CoreCall::Size(size) => Some((size.width, size.height)),
                _ => None,
            })
            .collect();
        assert_eq!(sizes, vec![(300, 200), (640, 480)]);
    }

    #[test]
    fn unanswerable_step_is_a_script_error() {
        let script = Script::from_json(
            r#"{ "steps": [ { "step": "confirm_close", "accepted": true } ] }"#,
        )
        .unwrap();
        let err = run(&script, TesseraConfig::default()).unwrap_err();
        assert!(matches!(err, TesseraError::Script(_)));
        assert!(err.to_string().contains("step 1"));
    }

    #[test]
    fn unknown_pane_is_a_script_error() {
        let script =
            Script::from_json(r#"{ "steps": [ { "step": "focus", "pane": 7 } ] }"#).unwrap();
        let err = run(&script, TesseraConfig::default()).unwrap_err();
        assert!(err.to_string().contains("no open pane"));
    }

    #[test]
    fn script_loads_from_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, r#"{ "ime": "scripted", "steps": [] }"#).unwrap();
        let script = Script::from_path(&path).unwrap();
        assert_eq!(script.ime, ImeMode::Scripted);
        assert!(script.steps.is_empty());

        let missing = Script::from_path(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(missing, TesseraError::Io(_)));
    }

    #[test]
    fn malformed_script_is_rejected() {
        let err = Script::from_json(r#"{ "steps": [ { "step": "dance" } ] }"#).unwrap_err();
        assert!(matches!(err, TesseraError::Script(_)));
    }

    #[test]
    fn report_serializes_to_json() {
        let report = replay(r#"{ "steps": [ { "step": "action", "action": "NewTab" } ] }"#);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["tabs"].as_array().unwrap().len(), 2);
        assert!(json["calls"]["2"].is_array());
    }
}
