use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::scene::{same_drawable, Drawable, Layer, RenderSettings, SharedDrawable};

use super::SceneEngine;

impl SceneEngine {
    /// Every registered drawable, in registration order.
    pub fn drawables(&self) -> &[SharedDrawable] {
        &self.drawables
    }

    /// Registers `drawable` and refreshes every viewport's cache.
    ///
    /// Registering the same handle twice draws it twice.
    pub fn add_drawable(&mut self, drawable: SharedDrawable) {
        self.drawables.push(drawable);
        log::trace!("add drawable (total {})", self.drawables.len());
        self.refilter();
        self.resort();
    }

    /// Removes the drawable at `index`. Out of range is a no-op.
    pub fn remove_drawable_at(&mut self, index: usize) -> Option<SharedDrawable> {
        if index >= self.drawables.len() {
            log::trace!("remove drawable: no index {index}");
            return None;
        }
        let removed = self.drawables.remove(index);
        self.refilter();
        self.resort();
        Some(removed)
    }

    /// Removes the first registration of `drawable`. Unregistered handles are
    /// a no-op.
    pub fn remove_drawable<D>(&mut self, drawable: &Rc<RefCell<D>>) -> bool
    where
        D: Drawable + ?Sized,
    {
        match self.drawables.iter().position(|d| same_drawable(d, drawable)) {
            Some(index) => self.remove_drawable_at(index).is_some(),
            None => {
                log::trace!("remove drawable: not registered");
                false
            }
        }
    }

    pub fn set_visible<D>(&mut self, drawable: &RefCell<D>, visible: bool)
    where
        D: Drawable + ?Sized,
    {
        self.update_settings(drawable, |s| s.set_visible(visible));
    }

    pub fn set_layer<D>(&mut self, drawable: &RefCell<D>, layer: impl Into<Layer>)
    where
        D: Drawable + ?Sized,
    {
        let layer = layer.into();
        self.update_settings(drawable, |s| s.set_layer(layer));
    }

    pub fn set_viewport_targets<D, I, S>(&mut self, drawable: &RefCell<D>, targets: I)
    where
        D: Drawable + ?Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let targets: BTreeSet<String> = targets.into_iter().map(Into::into).collect();
        self.update_settings(drawable, |s| s.set_targets(targets));
    }

    /// Applies `change` to the drawable's settings, then refreshes the caches
    /// so the next render already reflects it.
    fn update_settings<D, F>(&mut self, drawable: &RefCell<D>, change: F)
    where
        D: Drawable + ?Sized,
        F: FnOnce(&RenderSettings),
    {
        match drawable.try_borrow() {
            Ok(d) => change(d.settings()),
            Err(_) => {
                log::warn!("render settings changed while the drawable is mutably borrowed; ignored");
                return;
            }
        }
        self.refilter();
        self.resort();
    }

    /// Rebuilds each viewport's renderables: visible drawables whose targets
    /// name the viewport, in registration order.
    pub fn refilter(&mut self) {
        let visible: Vec<&SharedDrawable> = self
            .drawables
            .iter()
            .filter(|d| match d.try_borrow() {
                Ok(d) => d.settings().visible(),
                Err(_) => {
                    log::warn!("drawable is mutably borrowed during refilter; left out");
                    false
                }
            })
            .collect();

        for viewport in &mut self.viewports {
            let renderables = visible
                .iter()
                .filter(|d| {
                    d.try_borrow()
                        .map(|d| d.settings().targets_viewport(viewport.name()))
                        .unwrap_or(false)
                })
                .map(|d| Rc::clone(d))
                .collect();
            viewport.set_renderables(renderables);
        }
    }

    /// Stable-sorts each viewport's renderables by ascending layer.
    pub fn resort(&mut self) {
        for viewport in &mut self.viewports {
            viewport
                .renderables_mut()
                .sort_by_key(|d| d.try_borrow().map(|d| d.settings().layer()).unwrap_or_default());
        }
    }
}
