use crate::{
    DisplayOrderCache, Locale, OptionState, QuestionSet, QuizQuestion, QuizResult, QuizSession,
    demo_questions, encode,
};
use gloo_net::http::Request;
use leptos::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;

/// Dataset fetched next to `index.html`; the built-in set is used when it is missing.
const DATASET_URL: &str = "questions.json";

struct ShuffleState {
    rng: StdRng,
    orders: DisplayOrderCache,
}

async fn fetch_questions() -> Result<Vec<QuizQuestion>, String> {
    let body = Request::get(DATASET_URL)
        .send()
        .await
        .map_err(|error| error.to_string())?
        .text()
        .await
        .map_err(|error| error.to_string())?;

    QuestionSet::from_json_str(&body)
        .map(QuestionSet::into_questions)
        .map_err(|error| error.to_string())
}

#[component]
fn ManaCost(cost: String) -> impl IntoView {
    view! {
        <div class="mana-cost">
            {encode(&cost)
                .into_iter()
                .map(|symbol| view! { <span class=symbol.style.class_name()>{symbol.symbol}</span> })
                .collect_view()}
        </div>
    }
}

#[component]
fn QuestionCard(
    question: QuizQuestion,
    number: usize,
    total: usize,
    order: Vec<usize>,
    states: Vec<OptionState>,
    is_last: bool,
    locale: Locale,
    on_answer: Callback<usize>,
    on_next: Callback<()>,
) -> impl IntoView {
    let text = locale.text();
    let answered = states.iter().any(|state| !state.is_selectable());
    let next_label = if is_last {
        text.see_results
    } else {
        text.next_question
    };

    let options = order
        .into_iter()
        .map(|original| {
            let state = states[original];
            let label = question.options[original].clone();

            view! {
                <button
                    class=state.css_class()
                    disabled=answered
                    on:click=move |_| on_answer.call(original)
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    let reveal = answered.then(|| {
        view! {
            <div class="reveal">
                <div class="explanation">
                    <h4>{text.explanation_heading}</h4>
                    <p>{question.explanation.clone()}</p>
                    <hr />
                    <h5>{text.ruling_heading}</h5>
                    <p class="ruling">{format!("« {} »", question.card.ruling)}</p>
                </div>
                <button class="primary" on:click=move |_| on_next.call(())>
                    {next_label}
                </button>
            </div>
        }
    });

    view! {
        <section class="quiz-card">
            <div class="card-header">
                <h3 class="card-name">{question.card.name.clone()}</h3>
                <div class="card-meta">
                    <ManaCost cost=question.card.mana_cost.clone() />
                    <p class="progress">{format!("{number} / {total}")}</p>
                </div>
            </div>
            <div class="card-text">
                <p>{question.card.text.clone()}</p>
            </div>
            <p class="question">{question.question.clone()}</p>
            <div class="options-grid">{options}</div>
            {reveal}
        </section>
    }
}

#[component]
fn ResultCard(result: QuizResult, locale: Locale, on_restart: Callback<()>) -> impl IntoView {
    let text = locale.text();

    view! {
        <section class=format!("result-card {}", result.feedback.tier.css_class())>
            <h3>{text.finished_heading}</h3>
            <p class="lede">{text.your_score}</p>
            <div class="score">
                {result.score.to_string()}
                <span class="score-total">{format!(" / {}", result.total)}</span>
            </div>
            <p class="percentage">{format!("({}%)", result.feedback.percentage)}</p>
            <p class="feedback">{result.feedback.tier.message(locale)}</p>
            <button class="primary" on:click=move |_| on_restart.call(())>
                {text.restart}
            </button>
        </section>
    }
}

#[component]
fn App() -> impl IntoView {
    let (locale, set_locale) = create_signal(Locale::default());
    let (session, set_session) = create_signal::<Option<QuizSession>>(None);
    let (load_error, set_load_error) = create_signal::<Option<String>>(None);
    let shuffle = store_value(ShuffleState {
        rng: StdRng::from_entropy(),
        orders: DisplayOrderCache::new(),
    });

    wasm_bindgen_futures::spawn_local(async move {
        let questions = match fetch_questions().await {
            Ok(questions) => questions,
            Err(message) => {
                log::warn!("falling back to built-in questions: {message}");
                demo_questions()
            }
        };

        match QuizSession::new(questions) {
            Ok(created) => set_session.set(Some(created)),
            Err(error) => set_load_error.set(Some(error.to_string())),
        }
    });

    let on_answer = Callback::new(move |index: usize| {
        set_session.update(|current| {
            if let Some(session) = current {
                if let Err(error) = session.submit_answer(index) {
                    log::error!("rejected answer: {error}");
                }
            }
        });
    });

    let on_next = Callback::new(move |_: ()| {
        set_session.update(|current| {
            if let Some(session) = current {
                session.advance();
            }
        });
    });

    let on_restart = Callback::new(move |_: ()| {
        set_session.update(|current| {
            if let Some(session) = current {
                session.restart();
            }
        });
    });

    let toggle_locale = move |_| {
        let next = match locale.get() {
            Locale::Ja => Locale::En,
            Locale::En => Locale::Ja,
        };
        set_locale.set(next);
    };

    let content = move || {
        let locale = locale.get();

        if let Some(message) = load_error.get() {
            return view! {
                <section class="error-card">
                    <p class="error-body">{message}</p>
                </section>
            }
            .into_view();
        }

        session.with(|current| match current {
            None => view! { <section class="placeholder-card"><p class="lede">"…"</p></section> }
                .into_view(),
            Some(session) => match session.result() {
                Some(result) => view! {
                    <ResultCard result=result locale=locale on_restart=on_restart />
                }
                .into_view(),
                None => {
                    let question = session.current_question().clone();
                    let option_count = question.options.len();
                    let order = shuffle
                        .try_update_value(|state| {
                            state
                                .orders
                                .order_for(&mut state.rng, session.question_key(), option_count)
                                .to_vec()
                        })
                        .unwrap_or_else(|| (0..option_count).collect());
                    let states = (0..option_count)
                        .map(|index| session.option_state(index))
                        .collect::<Vec<_>>();

                    view! {
                        <QuestionCard
                            question=question
                            number=session.current_index() + 1
                            total=session.total()
                            order=order
                            states=states
                            is_last=session.is_last_question()
                            locale=locale
                            on_answer=on_answer
                            on_next=on_next
                        />
                    }
                    .into_view()
                }
            },
        })
    };

    view! {
        <main class="page">
            <header class="page-header">
                <h1 class="headline">{move || locale.get().text().title}</h1>
                <h2 class="subheadline">{move || locale.get().text().subtitle}</h2>
                <button class="pill" on:click=toggle_locale>
                    {move || match locale.get() {
                        Locale::Ja => "English",
                        Locale::En => "日本語",
                    }}
                </button>
            </header>
            {content}
            <footer class="page-footer">
                <p>{move || locale.get().text().footer}</p>
            </footer>
        </main>
    }
}

/// Mounts the quiz into `<body>`; also exported for host pages as `startQuiz`.
#[wasm_bindgen(js_name = startQuiz)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("rule quiz starting");
    mount_to_body(|| view! { <App /> });
}
