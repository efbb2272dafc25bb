use std::collections::HashMap;

use medora_app::view::{PlanContainer, PlanDocument, ToggleKind, ToggleState};

/// In-memory stand-in for the page's plan containers.
#[derive(Default)]
pub struct FakeDocument {
    pub containers: HashMap<String, FakeContainer>,
}

impl FakeDocument {
    pub fn with_containers(ids: &[&str]) -> Self {
        let containers = ids
            .iter()
            .map(|id| (id.to_string(), FakeContainer::default()))
            .collect();
        Self { containers }
    }

    pub fn html(&self, id: &str) -> &str {
        &self.containers[id].html
    }
}

impl PlanDocument for FakeDocument {
    fn container(&mut self, id: &str) -> Option<&mut dyn PlanContainer> {
        self.containers
            .get_mut(id)
            .map(|c| c as &mut dyn PlanContainer)
    }
}

#[derive(Default)]
pub struct FakeContainer {
    pub html: String,
    pub renders: usize,
    pub toggles: HashMap<ToggleKind, ToggleState>,
}

impl PlanContainer for FakeContainer {
    fn replace_content(&mut self, html: &str) {
        self.html = html.to_string();
        self.renders += 1;
    }

    fn set_toggle(&mut self, kind: ToggleKind, state: ToggleState) {
        self.toggles.insert(kind, state);
    }
}
