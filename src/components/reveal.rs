use yew::prelude::*;
use yew::{Children, Properties};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = crate::hooks::use_in_view_once(node.clone());

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone(), visible.then(|| "visible"))}>
            { for props.children.iter() }
        </div>
    }
}
