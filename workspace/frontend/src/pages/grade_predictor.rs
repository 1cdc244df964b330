use common::Field;
use form::view::{
    COURSE_DESCRIPTION, COURSE_EMPTY, COURSE_LABEL, COURSE_SEARCH_PLACEHOLDER, DESCRIPTION,
    SUBJECT_DESCRIPTION, SUBJECT_LABEL, SUBJECT_SEARCH_PLACEHOLDER, TITLE,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api_client::prediction::predict;
use crate::api_client::reference::{get_courses, get_subjects};
use crate::common::error::ErrorAlert;
use crate::components::combobox::Combobox;
use crate::components::disclaimer::Disclaimer;
use crate::components::prediction_result::PredictionResult;
use crate::components::year_select::YearSelect;
use crate::hooks::{PredictorAction, PredictorState};

#[function_component(GradePredictorPage)]
pub fn grade_predictor_page() -> Html {
    let state = use_reducer(PredictorState::default);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            log::debug!("Loading subjects");
            spawn_local(async move {
                let result = get_subjects().await;
                state.dispatch(PredictorAction::SubjectsLoaded(result));
            });
            || ()
        });
    }

    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.courses_request.clone(), move |request| {
            if let Some(request) = request.clone() {
                spawn_local(async move {
                    let result = get_courses(&request.subject).await;
                    dispatcher.dispatch(PredictorAction::CoursesLoaded(request, result));
                });
            }
            || ()
        });
    }

    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.submission.clone(), move |submission| {
            if let Some(submission) = submission.clone() {
                log::debug!("Sending submission #{}", submission.id);
                spawn_local(async move {
                    let result = predict(&submission.selection).await;
                    dispatcher.dispatch(PredictorAction::PredictionFinished(result));
                });
            }
            || ()
        });
    }

    let view = state.form.view();

    if let Some(error) = &view.subjects_error {
        return html! {
            <div class="container mx-auto max-w-2xl px-4 py-8">
                <ErrorAlert message={error.clone()} />
            </div>
        };
    }

    let on_subject = {
        let dispatcher = state.dispatcher();
        Callback::from(move |code: String| {
            dispatcher.dispatch(PredictorAction::SelectSubject(code))
        })
    };
    let on_course = {
        let dispatcher = state.dispatcher();
        Callback::from(move |number: String| {
            dispatcher.dispatch(PredictorAction::SelectCourse(number))
        })
    };
    let on_year = {
        let dispatcher = state.dispatcher();
        Callback::from(move |year: String| dispatcher.dispatch(PredictorAction::SelectYear(year)))
    };
    let on_submit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatcher.dispatch(PredictorAction::Submit);
        })
    };

    let courses_alert = view
        .courses_error
        .clone()
        .map(|message| html! { <ErrorAlert message={message} class="mt-2" /> })
        .unwrap_or_default();

    html! {
        <div class="container mx-auto max-w-2xl px-4 py-8">
            <div class="card bg-base-100 shadow-xl">
                <form onsubmit={on_submit}>
                    <div class="card-body gap-6">
                        <div>
                            <h2 class="card-title text-2xl">{TITLE}</h2>
                            <p class="text-sm text-gray-500">{DESCRIPTION}</p>
                        </div>

                        <Combobox
                            label={SUBJECT_LABEL}
                            description={SUBJECT_DESCRIPTION}
                            button_text={view.subject_text.clone()}
                            options={state.form.subject_options("")}
                            search_placeholder={SUBJECT_SEARCH_PLACEHOLDER}
                            empty_text={view.subject_empty_text}
                            on_select={on_subject}
                            error={view.field_errors.get(&Field::Subject).cloned()}
                        />

                        <Combobox
                            label={COURSE_LABEL}
                            description={COURSE_DESCRIPTION}
                            button_text={view.course_text.clone()}
                            options={state.form.course_options("")}
                            search_placeholder={COURSE_SEARCH_PLACEHOLDER}
                            empty_text={COURSE_EMPTY}
                            on_select={on_course}
                            disabled={!view.course_enabled}
                            error={view.field_errors.get(&Field::Course).cloned()}
                        >
                            {courses_alert}
                        </Combobox>

                        <YearSelect
                            options={view.year_options.clone()}
                            value={view.year_value.clone()}
                            on_change={on_year}
                            error={view.field_errors.get(&Field::Year).cloned()}
                        />

                        <Disclaimer />

                        if let Some(error) = &view.submit_error {
                            <ErrorAlert message={error.clone()} />
                        }

                        <button type="submit" class="btn btn-primary w-full" disabled={!view.submit_enabled}>
                            if view.pending {
                                <span class="loading loading-spinner loading-sm"></span>
                            }
                            {view.submit_label}
                        </button>
                    </div>
                </form>

                if let Some(result) = view.result.clone() {
                    <PredictionResult {result} />
                }
            </div>
        </div>
    }
}
