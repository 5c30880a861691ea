use yew::prelude::*;
use yew::{Children, Properties};

use crate::components::panel_group::use_panel_group;
use crate::content::FAQ_ENTRIES;
use crate::view_state::panels::FAQ;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    open: bool,
    on_toggle: Callback<()>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "active"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{ props.question }</span>
                <span class="toggle-icon">{ if props.open { "−" } else { "+" } }</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

/// Accordion where every question opens and closes on its own.
#[function_component(Faq)]
pub fn faq() -> Html {
    let panels = use_panel_group(FAQ, FAQ_ENTRIES.len());

    html! {
        <div class="faq-list">
            { for FAQ_ENTRIES.iter().enumerate().map(|(id, entry)| {
                let on_toggle = panels.toggle.reform(move |_| id);
                html! {
                    <FaqItem question={entry.question} open={panels.group.is_expanded(id)} on_toggle={on_toggle}>
                        <p>{ entry.answer }</p>
                    </FaqItem>
                }
            }) }
        </div>
    }
}
