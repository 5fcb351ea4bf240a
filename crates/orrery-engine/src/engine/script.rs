use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use super::SceneEngine;

/// Which side of the render pass a script runs on.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Phase {
    PreRender,
    PostRender,
}

type ScriptFn = dyn FnMut(&Script, &mut SceneEngine);

struct ScriptInner {
    enabled: Cell<bool>,
    phase: Cell<Option<Phase>>,
    body: RefCell<Box<ScriptFn>>,
}

/// Per-frame logic hook.
///
/// `Script` is a cheap handle; clones refer to the same script. The body gets
/// the handle it was invoked through and the engine, so it can disable or
/// remove itself, move viewports and mutate the registry.
#[derive(Clone)]
pub struct Script(Rc<ScriptInner>);

impl Script {
    pub fn new<F>(body: F) -> Self
    where
        F: FnMut(&Script, &mut SceneEngine) + 'static,
    {
        Self::with_enabled(true, body)
    }

    /// A script that starts out disabled.
    pub fn disabled<F>(body: F) -> Self
    where
        F: FnMut(&Script, &mut SceneEngine) + 'static,
    {
        Self::with_enabled(false, body)
    }

    fn with_enabled<F>(enabled: bool, body: F) -> Self
    where
        F: FnMut(&Script, &mut SceneEngine) + 'static,
    {
        Self(Rc::new(ScriptInner {
            enabled: Cell::new(enabled),
            phase: Cell::new(None),
            body: RefCell::new(Box::new(body)),
        }))
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.0.enabled.get()
    }

    /// The list this script was added to, if it is registered.
    #[inline]
    pub fn phase(&self) -> Option<Phase> {
        self.0.phase.get()
    }

    /// Handle identity.
    #[inline]
    pub fn ptr_eq(&self, other: &Script) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn set_enabled_flag(&self, enabled: bool) {
        self.0.enabled.set(enabled);
    }

    pub(crate) fn set_phase(&self, phase: Option<Phase>) {
        self.0.phase.set(phase);
    }

    /// Runs the body once. A script that is already running further up the
    /// stack is not re-entered.
    pub(crate) fn run(&self, engine: &mut SceneEngine) {
        match self.0.body.try_borrow_mut() {
            Ok(mut body) => (&mut *body)(self, engine),
            Err(_) => log::warn!("script invoked while already running; skipped"),
        }
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Script")
            .field("enabled", &self.is_enabled())
            .field("phase", &self.phase())
            .finish_non_exhaustive()
    }
}

/// One phase's scripts plus the enabled subset the scheduler iterates.
#[derive(Debug, Default)]
pub(crate) struct ScriptList {
    all: Vec<Script>,
    enabled: Vec<Script>,
}

impl ScriptList {
    pub(crate) fn all(&self) -> &[Script] {
        &self.all
    }

    pub(crate) fn enabled(&self) -> &[Script] {
        &self.enabled
    }

    pub(crate) fn push(&mut self, script: Script) {
        if script.is_enabled() {
            self.enabled.push(script.clone());
        }
        self.all.push(script);
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> Option<Script> {
        if index >= self.all.len() {
            return None;
        }
        let removed = self.all.remove(index);
        self.refresh();
        Some(removed)
    }

    pub(crate) fn position(&self, script: &Script) -> Option<usize> {
        self.all.iter().position(|s| s.ptr_eq(script))
    }

    pub(crate) fn refresh(&mut self) {
        self.enabled = self.all.iter().filter(|s| s.is_enabled()).cloned().collect();
    }
}

impl SceneEngine {
    fn script_list(&self, phase: Phase) -> &ScriptList {
        match phase {
            Phase::PreRender => &self.pre_scripts,
            Phase::PostRender => &self.post_scripts,
        }
    }

    fn script_list_mut(&mut self, phase: Phase) -> &mut ScriptList {
        match phase {
            Phase::PreRender => &mut self.pre_scripts,
            Phase::PostRender => &mut self.post_scripts,
        }
    }

    /// Every script registered for `phase`, in registration order.
    pub fn scripts(&self, phase: Phase) -> &[Script] {
        self.script_list(phase).all()
    }

    /// The scripts `phase` will actually run.
    pub fn enabled_scripts(&self, phase: Phase) -> &[Script] {
        self.script_list(phase).enabled()
    }

    /// Appends `script` to `phase` and records the phase on the script.
    ///
    /// A handle belongs to one phase at a time: adding a script that is still
    /// registered in the other phase is a no-op and returns `false`.
    pub fn add_script(&mut self, script: Script, phase: Phase) -> bool {
        if let Some(owner) = script.phase().filter(|owner| *owner != phase) {
            log::trace!("add script to {phase:?}: already registered in {owner:?}");
            return false;
        }
        script.set_phase(Some(phase));
        log::trace!("add script to {phase:?} (enabled: {})", script.is_enabled());
        self.script_list_mut(phase).push(script);
        true
    }

    /// Removes the script at `index` in `phase`. Out of range is a no-op.
    pub fn remove_script_at(&mut self, phase: Phase, index: usize) -> Option<Script> {
        let removed = self.script_list_mut(phase).remove_at(index);
        match &removed {
            Some(script) => {
                if self.script_list(phase).position(script).is_none() {
                    script.set_phase(None);
                }
            }
            None => log::trace!("remove script: no index {index} in {phase:?}"),
        }
        removed
    }

    /// Removes `script` from the phase it was added to. Unregistered scripts
    /// are a no-op.
    pub fn remove_script(&mut self, script: &Script) -> bool {
        let Some(phase) = script.phase() else {
            log::trace!("remove script: not registered");
            return false;
        };
        match self.script_list(phase).position(script) {
            Some(index) => self.remove_script_at(phase, index).is_some(),
            None => {
                log::trace!("remove script: not found in {phase:?}");
                false
            }
        }
    }

    /// Enables or disables `script` and refreshes the enabled subset of the
    /// phase it belongs to.
    pub fn set_script_enabled(&mut self, script: &Script, enabled: bool) {
        script.set_enabled_flag(enabled);
        if let Some(phase) = script.phase() {
            self.filter_scripts(phase);
        }
    }

    /// Recomputes the enabled subset of `phase`.
    pub fn filter_scripts(&mut self, phase: Phase) {
        self.script_list_mut(phase).refresh();
    }

    /// Runs every enabled script of `phase` in registration order.
    ///
    /// Iterates a snapshot: scripts added, removed or toggled by a running
    /// script take effect from the next phase run.
    pub(crate) fn run_scripts(&mut self, phase: Phase) {
        let snapshot = self.script_list(phase).enabled().to_vec();
        for script in &snapshot {
            script.run(self);
        }
    }
}
