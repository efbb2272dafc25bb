//! Plan view toggles.
//!
//! A [`PlanViews`] keeps, for each visible plan container, the parsed
//! sections and the mode they are shown in. Toggling replays the renderer
//! against those cached sections; the plan text is parsed exactly once, in
//! [`PlanViews::show`].

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use medora_core::models::plan::{PlanSection, PlanText, RenderMode};
use medora_core::plan::parse_plan_of_care;
use medora_export::render::PlanRenderer;

/// The two toggle controls shown above a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleKind {
    /// Bullet list ⇄ narrative paragraph.
    Bullet,
    /// Bullet list ⇄ first item only.
    Detail,
}

impl ToggleKind {
    /// Mode this control switches to from the bullet list.
    fn target(self) -> RenderMode {
        match self {
            ToggleKind::Bullet => RenderMode::Narrative,
            ToggleKind::Detail => RenderMode::Concise,
        }
    }

    /// Mode reached by pressing this control while in `current`.
    fn next_mode(self, current: RenderMode) -> RenderMode {
        if current == self.target() {
            RenderMode::Bullet
        } else {
            self.target()
        }
    }

    /// Label and active flag for this control while the view is in `mode`.
    pub fn control_state(self, mode: RenderMode) -> ToggleState {
        let active = mode == self.target();
        let label = match (self, active) {
            (ToggleKind::Bullet, false) => "Paragraph view",
            (ToggleKind::Bullet, true) => "Bullet view",
            (ToggleKind::Detail, false) => "Concise view",
            (ToggleKind::Detail, true) => "Detailed view",
        };
        ToggleState { active, label }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleState {
    pub active: bool,
    pub label: &'static str,
}

/// A rendering target for one plan, e.g. a DOM element.
pub trait PlanContainer {
    /// Replace everything shown in the container.
    fn replace_content(&mut self, html: &str);

    /// Reflect a toggle control's state (label text, pressed styling).
    fn set_toggle(&mut self, kind: ToggleKind, state: ToggleState);
}

/// Looks containers up by id. Containers may not exist yet (or any more);
/// a missing one turns the operation into a no-op.
pub trait PlanDocument {
    fn container(&mut self, id: &str) -> Option<&mut dyn PlanContainer>;
}

/// One visible plan: cached sections plus the current mode.
#[derive(Debug, Clone)]
pub struct PlanView {
    sections: Arc<[PlanSection]>,
    mode: RenderMode,
}

impl PlanView {
    pub fn sections(&self) -> &[PlanSection] {
        &self.sections
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }
}

/// Toggle controller for every plan container on the page.
pub struct PlanViews {
    renderer: PlanRenderer,
    default_mode: RenderMode,
    views: HashMap<String, PlanView>,
}

impl PlanViews {
    pub fn new(renderer: PlanRenderer, default_mode: RenderMode) -> Self {
        Self {
            renderer,
            default_mode,
            views: HashMap::new(),
        }
    }

    pub fn view(&self, container_id: &str) -> Option<&PlanView> {
        self.views.get(container_id)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Parse `plan` and show it in `container_id` using the default mode.
    ///
    /// Replaces any plan previously shown there. The parsed sections are
    /// cached even if the container is not present yet, so a later toggle
    /// or [`refresh`](Self::refresh) can draw them.
    pub fn show(&mut self, doc: &mut dyn PlanDocument, container_id: &str, plan: &PlanText) {
        let sections: Arc<[PlanSection]> = parse_plan_of_care(plan).into();
        debug!(container_id, sections = sections.len(), "showing plan");

        self.views.insert(
            container_id.to_string(),
            PlanView {
                sections,
                mode: self.default_mode,
            },
        );
        self.refresh(doc, container_id);
    }

    /// Bullet list ⇄ narrative paragraph.
    pub fn toggle_bullet(&mut self, doc: &mut dyn PlanDocument, container_id: &str) {
        self.toggle(doc, container_id, ToggleKind::Bullet);
    }

    /// Bullet list ⇄ concise (first item only).
    pub fn toggle_detail(&mut self, doc: &mut dyn PlanDocument, container_id: &str) {
        self.toggle(doc, container_id, ToggleKind::Detail);
    }

    /// Switch a view to an explicit mode.
    pub fn set_mode(&mut self, doc: &mut dyn PlanDocument, container_id: &str, mode: RenderMode) {
        let Some(view) = self.views.get_mut(container_id) else {
            debug!(container_id, "no plan view to set mode on");
            return;
        };
        view.mode = mode;
        self.refresh(doc, container_id);
    }

    fn toggle(&mut self, doc: &mut dyn PlanDocument, container_id: &str, kind: ToggleKind) {
        let Some(view) = self.views.get_mut(container_id) else {
            debug!(container_id, ?kind, "no plan view to toggle");
            return;
        };
        view.mode = kind.next_mode(view.mode);
        debug!(container_id, ?kind, mode = %view.mode, "toggled plan view");
        self.refresh(doc, container_id);
    }

    /// Redraw a view from its cached sections.
    pub fn refresh(&self, doc: &mut dyn PlanDocument, container_id: &str) {
        let Some(view) = self.views.get(container_id) else {
            return;
        };
        let Some(container) = doc.container(container_id) else {
            debug!(container_id, "plan container not present, skipping render");
            return;
        };

        let html = match self.renderer.render(&view.sections, view.mode) {
            Ok(html) => html,
            Err(e) => {
                warn!(container_id, error = %e, "plan render failed");
                return;
            }
        };

        container.replace_content(&html);
        for kind in [ToggleKind::Bullet, ToggleKind::Detail] {
            container.set_toggle(kind, kind.control_state(view.mode));
        }
    }

    /// Forget every cached plan, e.g. when another patient is selected.
    pub fn clear(&mut self) {
        if !self.views.is_empty() {
            debug!(views = self.views.len(), "discarding plan views");
        }
        self.views.clear();
    }
}
