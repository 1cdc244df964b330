use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    pub message: String,
    #[prop_or_default]
    pub class: Classes,
}

/// Inline destructive alert
#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div role="alert" class={classes!("alert", "alert-error", props.class.clone())}>
            <i class="fas fa-exclamation-circle"></i>
            <span>{&props.message}</span>
        </div>
    }
}
