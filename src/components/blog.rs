use yew::prelude::*;

use crate::components::panel_group::use_panel_group;
use crate::components::reveal::Reveal;
use crate::content::BLOG_POSTS;
use crate::view_state::panels::BLOG;

#[function_component(BlogPosts)]
pub fn blog_posts() -> Html {
    let panels = use_panel_group(BLOG, BLOG_POSTS.len());

    html! {
        <div class="blog-grid">
            { for BLOG_POSTS.iter().enumerate().map(|(id, post)| {
                let expanded = panels.group.is_expanded(id);
                let onclick = {
                    let toggle = panels.toggle.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        toggle.emit(id);
                    })
                };
                html! {
                    <Reveal class="blog-card">
                        <div class="blog-content" ref={panels.nodes[id].clone()}>
                            <span class="blog-date">{ post.published_label() }</span>
                            <h3>{ post.title }</h3>
                            <p>{ post.excerpt }</p>
                            <div class={classes!("blog-expanded", expanded.then(|| "active"))}>
                                { for post.body.iter().map(|paragraph| html! { <p>{ *paragraph }</p> }) }
                            </div>
                            <a href="#" class="read-more-btn" onclick={onclick}>
                                { panels.group.label(id).unwrap_or_default() }
                            </a>
                        </div>
                    </Reveal>
                }
            }) }
        </div>
    }
}
