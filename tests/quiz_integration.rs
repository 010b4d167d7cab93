use rulequiz::{
    Advance, AnswerOutcome, CardInfo, DisplayOrderCache, Phase, QuizQuestion, QuizSession, Tier,
    shuffle_options,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn question(name: &str, correct: usize) -> QuizQuestion {
    QuizQuestion {
        card: CardInfo {
            name: name.to_string(),
            mana_cost: "{2}{R}".to_string(),
            text: "First strike".to_string(),
            ruling: "First strike damage is dealt in its own combat damage step.".to_string(),
        },
        question: format!("Which ruling applies to {name}?"),
        options: vec![
            "option zero".to_string(),
            "option one".to_string(),
            "option two".to_string(),
        ],
        correct_answer_index: correct,
        explanation: "See the ruling.".to_string(),
    }
}

fn three_question_session() -> QuizSession {
    QuizSession::new(vec![
        question("Alpha", 1),
        question("Beta", 0),
        question("Gamma", 2),
    ])
    .expect("questions are valid")
}

fn play(session: &mut QuizSession, answers: &[usize]) {
    for &answer in answers {
        session.submit_answer(answer).expect("answer in range");
        session.advance();
    }
}

#[test]
fn all_correct_answers_give_a_perfect_result() {
    let mut session = three_question_session();
    play(&mut session, &[1, 0, 2]);

    let result = session.result().expect("quiz should be finished");
    assert_eq!(result.score, 3);
    assert_eq!(result.feedback.percentage, 100);
    assert_eq!(result.feedback.tier, Tier::Perfect);
}

#[test]
fn one_correct_answer_needs_improvement() {
    let mut session = three_question_session();
    play(&mut session, &[0, 0, 0]);

    let result = session.result().expect("quiz should be finished");
    assert_eq!(result.score, 1);
    assert_eq!(result.feedback.percentage, 33);
    assert_eq!(result.feedback.tier, Tier::NeedsImprovement);
}

#[test]
fn finishes_exactly_on_the_last_advance() {
    let mut session = three_question_session();
    let mut finished_at = Vec::new();

    for call in 1..=session.total() {
        if session.advance() == Advance::Finished {
            finished_at.push(call);
        }
    }

    assert_eq!(finished_at, vec![3]);
    assert_eq!(session.phase(), Phase::Finished);
}

#[test]
fn score_always_matches_recorded_answers() {
    let mut rng = StdRng::seed_from_u64(31);

    for _ in 0..50 {
        let mut session = three_question_session();

        while !session.is_finished() {
            for _ in 0..3 {
                let pick = rand::Rng::gen_range(&mut rng, 0..3);
                session.submit_answer(pick).expect("answer in range");
            }

            let expected = session
                .questions()
                .iter()
                .zip(session.answers())
                .filter(|(question, answer)| {
                    answer.is_some_and(|answer| question.is_correct(answer))
                })
                .count();
            assert_eq!(session.score(), expected);
            assert!(session.score() <= session.total());

            session.advance();
        }
    }
}

#[test]
fn repeated_submission_keeps_first_answer() {
    let mut session = three_question_session();

    assert_eq!(
        session.submit_answer(2),
        Ok(AnswerOutcome::Recorded { correct: false })
    );
    assert_eq!(session.submit_answer(1), Ok(AnswerOutcome::Ignored));
    assert_eq!(session.answer_for(0), Some(2));
    assert_eq!(session.score(), 0);
}

#[test]
fn restart_from_finished_state_clears_everything() {
    let mut session = three_question_session();
    play(&mut session, &[1, 0, 2]);
    session.restart();

    assert_eq!(session.phase(), Phase::Ongoing);
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.score(), 0);
    assert!(session.answers().iter().all(Option::is_none));
    assert_eq!(session.result(), None);
}

#[test]
fn display_order_is_stable_until_question_changes() {
    let mut session = three_question_session();
    let mut rng = StdRng::seed_from_u64(4);
    let mut cache = DisplayOrderCache::new();

    let first = cache
        .order_for(&mut rng, session.question_key(), 3)
        .to_vec();
    session.submit_answer(first[0]).expect("answer in range");
    assert_eq!(cache.order_for(&mut rng, session.question_key(), 3), first.as_slice());

    session.advance();
    cache.order_for(&mut rng, session.question_key(), 3);
    assert_eq!(cache.key(), Some(session.question_key()));

    session.restart();
    assert_ne!(cache.key(), Some(session.question_key()));
}

#[test]
fn shuffled_options_map_back_to_canonical_answers() {
    let question = question("Delta", 2);
    let mut rng = StdRng::seed_from_u64(12);

    let shuffled = shuffle_options(&mut rng, question.options.iter());
    let correct = shuffled
        .iter()
        .find(|option| question.is_correct(option.original_index))
        .expect("correct option is present");

    assert_eq!(correct.value.as_str(), "option two");
    let mut indices: Vec<usize> = shuffled.iter().map(|option| option.original_index).collect();
    indices.sort_unstable();
    assert_eq!(indices, vec![0, 1, 2]);
}
