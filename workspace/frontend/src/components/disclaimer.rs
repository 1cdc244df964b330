use form::view::{DISCLAIMER_TEXT, DISCLAIMER_TITLE};
use yew::prelude::*;

#[function_component(Disclaimer)]
pub fn disclaimer() -> Html {
    html! {
        <div class="alert alert-warning shadow">
            <i class="fas fa-exclamation-triangle text-xl"></i>
            <div>
                <h3 class="font-medium text-sm">{DISCLAIMER_TITLE}</h3>
                <p class="text-sm mt-1">{DISCLAIMER_TEXT}</p>
            </div>
        </div>
    }
}
