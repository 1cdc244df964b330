use common::HOW_WE_PREDICT_ROUTE;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::grade_predictor::GradePredictorPage;
use crate::pages::how_we_predict::HowWePredictPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/grade-predictor")]
    GradePredictor,
    #[at("/how-we-predict-grades")]
    HowWePredict,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home | Route::GradePredictor => {
            log::trace!("Rendering Grade Predictor page");
            html! { <GradePredictorPage /> }
        }
        Route::HowWePredict => {
            log::trace!("Rendering {} page", HOW_WE_PREDICT_ROUTE);
            html! { <HowWePredictPage /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! {
                <div class="container mx-auto px-4 py-8">
                    <h1 class="text-2xl font-bold">{"404 Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="link">{"Go to the grade predictor"}</Link<Route>>
                </div>
            }
        }
    }
}
