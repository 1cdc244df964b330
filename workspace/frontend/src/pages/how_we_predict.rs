use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(HowWePredictPage)]
pub fn how_we_predict_page() -> Html {
    html! {
        <div class="container mx-auto max-w-2xl px-4 py-8">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title text-3xl mb-6">{"How We Predict Grades"}</h2>

                    <div class="prose max-w-none">
                        <p class="mb-4">
                            {"Predictions are produced by a model trained on historical grade distributions for each course."}
                        </p>
                        <p class="mb-4">
                            {"The predicted grade is the most likely outcome for the selected year. The confidence shows how closely past offerings of the course agree with that outcome."}
                        </p>
                        <p>
                            {"Courses with few past offerings, new instructors or changed syllabi make estimates less reliable."}
                        </p>
                    </div>

                    <div class="card-actions justify-end mt-6">
                        <Link<Route> to={Route::GradePredictor} classes="btn btn-primary">
                            {"Back to the predictor"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </div>
    }
}
