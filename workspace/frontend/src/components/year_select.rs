use form::view::{YEAR_DESCRIPTION, YEAR_LABEL, YEAR_PLACEHOLDER};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct YearSelectProps {
    pub options: Vec<String>,
    pub value: Option<String>,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(YearSelect)]
pub fn year_select(props: &YearSelectProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <div class="form-control w-full">
            <label class="label">
                <span class="label-text">{YEAR_LABEL}</span>
            </label>
            <select class="select select-bordered w-full" {onchange}>
                <option value="" disabled={true} selected={props.value.is_none()}>
                    {YEAR_PLACEHOLDER}
                </option>
                { for props.options.iter().map(|year| html! {
                    <option
                        key={year.clone()}
                        value={year.clone()}
                        selected={props.value.as_deref() == Some(year.as_str())}
                    >
                        {year}
                    </option>
                }) }
            </select>
            <label class="label">
                <span class="label-text-alt">{YEAR_DESCRIPTION}</span>
            </label>
            if let Some(error) = &props.error {
                <p class="text-error text-sm">{error}</p>
            }
        </div>
    }
}
