use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api::HttpTransport;
use crate::components::notification::notify;
use crate::content::PRACTICE_AREAS;
use crate::view_state::inquiry::{submit, ContactFields};

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let fields = use_state(ContactFields::default);

    let edit = |apply: fn(&mut ContactFields, String)| {
        let fields = fields.clone();
        Callback::from(move |value: String| {
            let mut next = (*fields).clone();
            apply(&mut next, value);
            fields.set(next);
        })
    };

    let on_input = |edit: Callback<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit.emit(input.value());
        })
    };

    let on_name = on_input(edit(|f, v| f.name = v));
    let on_email = on_input(edit(|f, v| f.email = v));
    let on_phone = on_input(edit(|f, v| f.phone = v));

    let on_practice = {
        let edit = edit(|f, v| f.practice = v);
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            edit.emit(select.value());
        })
    };

    let on_message = {
        let edit = edit(|f, v| f.message = v);
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            edit.emit(area.value());
        })
    };

    let onsubmit = {
        let fields = fields.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let snapshot = (*fields).clone();
            let fields = fields.clone();
            spawn_local(async move {
                let outcome = submit(&HttpTransport::new(), &snapshot).await;
                notify(&outcome.notice());
                if outcome.clears_form() {
                    fields.set(ContactFields::default());
                }
            });
        })
    };

    html! {
        <form id="consultation-form" class="contact-form" onsubmit={onsubmit}>
            <div class="form-group">
                <label for="name">{"Full Name *"}</label>
                <input type="text" id="name" name="name" value={fields.name.clone()} oninput={on_name} />
            </div>
            <div class="form-group">
                <label for="email">{"Email *"}</label>
                <input type="email" id="email" name="email" value={fields.email.clone()} oninput={on_email} />
            </div>
            <div class="form-group">
                <label for="phone">{"Phone"}</label>
                <input type="tel" id="phone" name="phone" value={fields.phone.clone()} oninput={on_phone} />
            </div>
            <div class="form-group">
                <label for="practice">{"Practice Area"}</label>
                <select id="practice" name="practice" onchange={on_practice}>
                    <option value="" selected={fields.practice.is_empty()}>{"Select a practice area"}</option>
                    { for PRACTICE_AREAS.iter().map(|area| html! {
                        <option value={area.slug} selected={fields.practice == area.slug}>{ area.title }</option>
                    }) }
                </select>
            </div>
            <div class="form-group">
                <label for="message">{"Message *"}</label>
                <textarea id="message" name="message" rows="5" value={fields.message.clone()} oninput={on_message}></textarea>
            </div>
            <button type="submit" class="btn btn-primary">{"Send Message"}</button>
        </form>
    }
}
