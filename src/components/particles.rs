use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::view_state::particles::{generate, PARTICLE_COUNT};

#[function_component(Particles)]
pub fn particles() -> Html {
    let particles = use_memo(|_| generate(PARTICLE_COUNT, Math::random), ());

    html! {
        <div id="particles" class="particles">
            { for particles.iter().map(|particle| html! {
                <div class="particle" style={particle.style()}></div>
            }) }
        </div>
    }
}
