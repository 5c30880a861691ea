use yew::prelude::*;

use crate::components::panel_group::use_panel_group;
use crate::components::reveal::Reveal;
use crate::content::PRACTICE_AREAS;
use crate::view_state::panels::PRACTICE;

#[function_component(PracticeAreas)]
pub fn practice_areas() -> Html {
    let panels = use_panel_group(PRACTICE, PRACTICE_AREAS.len());

    html! {
        <div class="practice-grid">
            { for PRACTICE_AREAS.iter().enumerate().map(|(id, area)| {
                let expanded = panels.group.is_expanded(id);
                let onclick = {
                    let toggle = panels.toggle.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        toggle.emit(id);
                    })
                };
                html! {
                    <Reveal>
                        <div class="practice-card" ref={panels.nodes[id].clone()} data-practice={area.slug}>
                            <i class={area.icon}></i>
                            <h3>{ area.title }</h3>
                            <p>{ area.summary }</p>
                            <div class={classes!("practice-details", expanded.then(|| "active"))}>
                                <ul>
                                    { for area.details.iter().map(|line| html! { <li>{ *line }</li> }) }
                                </ul>
                            </div>
                            <a href="#" class="learn-more-btn" onclick={onclick}>
                                { panels.group.label(id).unwrap_or_default() }
                            </a>
                        </div>
                    </Reveal>
                }
            }) }
        </div>
    }
}
