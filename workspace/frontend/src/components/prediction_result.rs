use form::view::RESULT_HEADING;
use form::ResultView;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct PredictionResultProps {
    pub result: ResultView,
}

#[function_component(PredictionResult)]
pub fn prediction_result(props: &PredictionResultProps) -> Html {
    html! {
        <div class="card-actions flex flex-col gap-4 px-8 pb-8">
            <div class="w-full p-4 bg-primary/10 rounded-lg">
                <h3 class="font-semibold text-primary">{RESULT_HEADING}</h3>
                <div class="mt-2 space-y-2">
                    <p class="font-bold">{&props.result.grade_line}</p>
                    <p class="text-sm text-gray-500">{&props.result.confidence_line}</p>
                </div>
            </div>
            <Link<Route> to={Route::HowWePredict} classes="btn btn-ghost btn-sm gap-2">
                <i class="fas fa-info-circle"></i>
                <span>{props.result.learn_more_label}</span>
                <i class="fas fa-chevron-right"></i>
            </Link<Route>>
        </div>
    }
}
