use std::rc::Rc;

use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::hooks::viewport_height;
use crate::view_state::panels::{GroupRules, PanelGroup, PanelId, Toggle};

pub struct PanelGroupHandle {
    pub group: UseStateHandle<PanelGroup>,
    /// One ref per panel container, measured when a panel expands.
    pub nodes: Rc<Vec<NodeRef>>,
    pub toggle: Callback<PanelId>,
}

/// State for one group of expandable panels plus the scroll-into-view step
/// after a panel opens.
#[hook]
pub fn use_panel_group(rules: GroupRules, len: usize) -> PanelGroupHandle {
    let group = use_state_eq(|| PanelGroup::new(rules, len));
    let nodes = use_memo(|len| (0..*len).map(|_| NodeRef::default()).collect::<Vec<_>>(), len);
    let just_opened = use_state_eq(|| None::<PanelId>);

    let toggle = {
        let group = group.clone();
        let just_opened = just_opened.clone();
        Callback::from(move |id: PanelId| {
            let (next, toggle) = group.toggled(id);
            match toggle {
                Toggle::Expanded { id, collapsed } => {
                    log::debug!("{} panel {} opened, closed {:?}", rules.name, id, collapsed);
                    just_opened.set(Some(id));
                }
                Toggle::Collapsed(_) => just_opened.set(None),
                Toggle::Ignored => return,
            }
            group.set(next);
        })
    };

    {
        let nodes = nodes.clone();
        use_effect_with_deps(
            move |opened| {
                if let Some(element) = opened.and_then(|id| nodes.get(id)).and_then(|node| node.cast::<Element>()) {
                    reveal_if_needed(&rules, &element);
                }
                || ()
            },
            *just_opened,
        );
    }

    PanelGroupHandle { group, nodes, toggle }
}

#[deny(deprecated)]
fn reveal_if_needed(rules: &GroupRules, element: &Element) {
    let Some(viewport) = viewport_height() else {
        return;
    };
    let bottom = element.get_bounding_client_rect().bottom();
    if rules.needs_reveal(bottom, viewport) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Nearest);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
