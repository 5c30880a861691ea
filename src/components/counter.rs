use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::hooks::use_in_view_once;
use crate::view_state::counter::{Stat, TICK_MS};

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub stat: Stat,
}

/// Ramps from zero to the target the first time it scrolls into view.
#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let stat = props.stat;
    let node = use_node_ref();
    let started = use_in_view_once(node.clone());
    let value = use_state_eq(|| 0u32);
    let finished = use_state_eq(|| false);

    {
        let deps = (started, *finished);
        let value = value.clone();
        let finished = finished.clone();
        use_effect_with_deps(
            move |(started, done)| {
                // Dropping the interval cancels it: on completion, unmount,
                // or when the deps change underneath a running ramp.
                let interval = (*started && !*done).then(|| {
                    log::debug!("Starting counter {}", stat.id);
                    let mut ramp = stat.ramp();
                    Interval::new(TICK_MS, move || {
                        if let Some(next) = ramp.next() {
                            value.set(next);
                        }
                        if ramp.is_finished() {
                            finished.set(true);
                        }
                    })
                });
                move || drop(interval)
            },
            deps,
        );
    }

    html! {
        <div class="stat-item" ref={node}>
            <span class="stat-number" id={stat.id}>{ stat.display(*value) }</span>
            <span class="stat-label">{ stat.label }</span>
        </div>
    }
}
