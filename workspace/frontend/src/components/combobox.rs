use form::{filter_options, OptionItem};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ComboboxProps {
    pub label: AttrValue,
    pub description: AttrValue,
    /// Text on the trigger button: the selected value or a placeholder
    pub button_text: String,
    pub options: Vec<OptionItem>,
    pub search_placeholder: AttrValue,
    pub empty_text: AttrValue,
    pub on_select: Callback<String>,
    #[prop_or_default]
    pub disabled: bool,
    /// Validation message under the field
    #[prop_or_default]
    pub error: Option<String>,
    /// Rendered below the field, e.g. a load failure alert
    #[prop_or_default]
    pub children: Html,
}

/// Button that opens a searchable list of options.
#[function_component(Combobox)]
pub fn combobox(props: &ComboboxProps) -> Html {
    let open = use_state(|| false);
    let query = use_state(String::new);

    let toggle = {
        let open = open.clone();
        let query = query.clone();
        Callback::from(move |_: MouseEvent| {
            if *open {
                query.set(String::new());
            }
            open.set(!*open);
        })
    };

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let visible = filter_options(props.options.clone(), &query);

    let items = visible.into_iter().map(|option| {
        let onclick = {
            let on_select = props.on_select.clone();
            let open = open.clone();
            let query = query.clone();
            let value = option.value.clone();
            Callback::from(move |_: MouseEvent| {
                log::debug!("Option picked: {}", value);
                on_select.emit(value.clone());
                query.set(String::new());
                open.set(false);
            })
        };
        let check = if option.selected { "opacity-100" } else { "opacity-0" };

        html! {
            <li key={option.value.clone()}>
                <a {onclick}>
                    <i class={classes!("fas", "fa-check", "mr-2", check)}></i>
                    {&option.label}
                </a>
            </li>
        }
    }).collect::<Vec<Html>>();

    html! {
        <div class="form-control w-full">
            <label class="label">
                <span class="label-text">{&props.label}</span>
            </label>
            <div class={classes!("dropdown", "w-full", (*open && !props.disabled).then_some("dropdown-open"))}>
                <button
                    type="button"
                    role="combobox"
                    aria-expanded={(*open).to_string()}
                    class="btn btn-outline w-full justify-between font-normal"
                    disabled={props.disabled}
                    onclick={toggle}
                >
                    {&props.button_text}
                    <i class="fas fa-sort opacity-50"></i>
                </button>
                if *open && !props.disabled {
                    <div class="dropdown-content z-10 w-full bg-base-100 shadow rounded-box p-2">
                        <input
                            type="text"
                            class="input input-bordered input-sm w-full mb-2"
                            placeholder={props.search_placeholder.clone()}
                            value={(*query).clone()}
                            oninput={on_search}
                        />
                        if items.is_empty() {
                            <p class="text-sm text-center py-4">{&props.empty_text}</p>
                        } else {
                            <ul class="menu max-h-[300px] overflow-auto flex-nowrap">
                                { for items }
                            </ul>
                        }
                    </div>
                }
            </div>
            <label class="label">
                <span class="label-text-alt">{&props.description}</span>
            </label>
            if let Some(error) = &props.error {
                <p class="text-error text-sm">{error}</p>
            }
            { props.children.clone() }
        </div>
    }
}
