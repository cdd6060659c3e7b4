//! App struct definition, constructor and the window event pump.

use std::collections::HashMap;

use tessera_common::events::{Event, EventBus};
use tessera_common::types::{PaneId, Rect, Size, TabId};
use tessera_config::TesseraConfig;
use tessera_platform::{ClipboardBackend, ClipboardBridge, EnvMap};
use tessera_tiling::{LayoutEngine, Window, WindowSettings};
use tokio::sync::broadcast;
use tracing::{debug, info};

use super::surface::{Surface, SurfaceFactory};
use super::types::CloseTarget;

/// Window tuning derived from the user's configuration.
pub fn window_settings(config: &TesseraConfig) -> WindowSettings {
    WindowSettings {
        default_ratio: config.split.default_ratio,
        min_ratio: config.split.min_ratio,
        default_title: config.window.default_title.clone(),
        layout: LayoutEngine {
            gap: config.layout.gap,
            outer_padding: config.layout.outer_padding,
        },
    }
}

/// Top-level application state: one window, one surface per pane, the
/// clipboard bridge and the chrome event bus.
pub struct App<F: SurfaceFactory> {
    pub(super) config: TesseraConfig,
    pub(super) window: Window,
    pub(super) surfaces: HashMap<PaneId, Surface<F::Core, F::Ime>>,
    pub(super) factory: F,
    pub(super) clipboard: ClipboardBridge,
    pub(super) clipboard_backend: Box<dyn ClipboardBackend>,
    pub(super) event_bus: EventBus,
    /// The surface whose widget currently holds keyboard focus.
    pub(super) input_focus: Option<PaneId>,
    /// Closes waiting on the user, keyed by the pane that asked.
    pub(super) pending_close: HashMap<PaneId, CloseTarget>,
    pub(super) should_exit: bool,
}

impl<F: SurfaceFactory> App<F> {
    pub fn new(
        config: TesseraConfig,
        factory: F,
        clipboard_backend: Box<dyn ClipboardBackend>,
    ) -> Self {
        Self::with_event_bus(config, factory, clipboard_backend, EventBus::default())
    }

    /// Like [`App::new`], publishing on `event_bus` so subscribers taken
    /// beforehand also see the first tab and pane open.
    pub fn with_event_bus(
        config: TesseraConfig,
        factory: F,
        clipboard_backend: Box<dyn ClipboardBackend>,
        event_bus: EventBus,
    ) -> Self {
        let window = Window::with_settings(window_settings(&config));
        let mut app = Self {
            config,
            window,
            surfaces: HashMap::new(),
            factory,
            clipboard: ClipboardBridge::new(),
            clipboard_backend,
            event_bus,
            input_focus: None,
            pending_close: HashMap::new(),
            should_exit: false,
        };
        app.sync();
        info!(panes = app.surfaces.len(), "app initialized");
        app
    }

    // -- Accessors --

    pub fn config(&self) -> &TesseraConfig {
        &self.config
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn surface(&self, pane: PaneId) -> Option<&Surface<F::Core, F::Ime>> {
        self.surfaces.get(&pane)
    }

    pub fn surface_mut(&mut self, pane: PaneId) -> Option<&mut Surface<F::Core, F::Ime>> {
        self.surfaces.get_mut(&pane)
    }

    pub fn surfaces(&self) -> impl Iterator<Item = (PaneId, &Surface<F::Core, F::Ime>)> {
        self.surfaces.iter().map(|(id, surface)| (*id, surface))
    }

    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn clipboard(&self) -> &ClipboardBridge {
        &self.clipboard
    }

    pub fn clipboard_backend_mut(&mut self) -> &mut dyn ClipboardBackend {
        self.clipboard_backend.as_mut()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe()
    }

    pub fn focused_pane(&self) -> Option<PaneId> {
        self.window.focused_pane()
    }

    pub fn input_focus(&self) -> Option<PaneId> {
        self.input_focus
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn is_close_pending(&self, pane: PaneId) -> bool {
        self.pending_close.contains_key(&pane)
    }

    /// The cgroup new surfaces are spawned into.
    pub fn cgroup_path(&self) -> Option<String> {
        tessera_platform::cgroup_path()
    }

    /// The environment new surfaces start with.
    pub fn default_environment(&self) -> EnvMap {
        tessera_platform::default_environment()
    }

    // -- Event pump --

    /// Apply the window's queued events: open and tear down surfaces, then
    /// publish each event to chrome subscribers. Keyboard focus follows the
    /// active tab's focus target afterwards.
    pub(super) fn sync(&mut self) {
        for event in self.window.drain_events() {
            match &event {
                Event::PaneOpened(pane) => self.open_surface(*pane),
                Event::PaneClosed(pane) => self.close_surface(*pane),
                Event::WindowClosed => self.should_exit = true,
                _ => {}
            }
            self.event_bus.publish(event);
        }
        self.update_input_focus();
    }

    /// `sync`, then push the current layout to the visible surfaces.
    pub(super) fn after_mutation(&mut self) {
        self.sync();
        self.relayout();
    }

    fn open_surface(&mut self, pane: PaneId) {
        if self.surfaces.contains_key(&pane) {
            return;
        }
        let (core, im) = self.factory.create(pane);
        self.surfaces.insert(pane, Surface::new(pane, core, im));
        debug!(%pane, "surface created");
    }

    fn close_surface(&mut self, pane: PaneId) {
        if self.surfaces.remove(&pane).is_none() {
            return;
        }
        // Completions still in flight for this pane are discarded.
        self.clipboard.forget_pane(pane);
        self.pending_close.remove(&pane);
        if self.input_focus == Some(pane) {
            self.input_focus = None;
        }
        debug!(%pane, "surface destroyed");
    }

    fn update_input_focus(&mut self) {
        let target = self.window.focused_pane();
        if target == self.input_focus {
            return;
        }
        if let Some(old) = self.input_focus.and_then(|p| self.surfaces.get_mut(&p)) {
            old.focus_out();
        }
        if let Some(new) = target.and_then(|p| self.surfaces.get_mut(&p)) {
            new.focus_in();
        }
        debug!(from = ?self.input_focus, to = ?target, "input focus moved");
        self.input_focus = target;
    }

    // -- Geometry --

    /// The area available to the tiling layout changed.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.window.set_viewport(viewport);
        self.relayout();
    }

    /// Send every visible pane of the active tab its laid-out size.
    pub(super) fn relayout(&mut self) {
        let Some(tab) = self.window.active_tab_id() else {
            return;
        };
        for (pane, rect) in self.window.layout(tab) {
            let size = Size {
                width: rect.width.max(0.0).round() as u32,
                height: rect.height.max(0.0).round() as u32,
            };
            if let Some(p) = self.window.pane_mut(pane) {
                p.geometry.size = size;
            }
            if let Some(surface) = self.surfaces.get_mut(&pane) {
                surface.set_size(size);
            }
        }
    }

    /// A surface reported its preferred size before the first layout. Only
    /// honoured while its pane is the window's single, unsplit root.
    pub fn initial_size(&mut self, pane: PaneId, size: Size) -> bool {
        if !self.window.initial_size(pane, size) {
            return false;
        }
        if let Some(surface) = self.surfaces.get_mut(&pane) {
            surface.set_size(size);
        }
        true
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        for surface in self.surfaces.values_mut() {
            surface.set_scale_factor(scale_factor);
        }
    }

    pub fn tab_panes(&self, tab: TabId) -> Vec<PaneId> {
        self.window.panes_of(tab)
    }
}
