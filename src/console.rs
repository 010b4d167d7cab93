//! Line-oriented front end for terminals.

use std::io::{self, BufRead, Write};

use rand::Rng;

use crate::engine::{AnswerOutcome, OptionState, QuizResult, QuizSession};
use crate::locale::Locale;
use crate::mana::encode;
use crate::shuffle::DisplayOrderCache;

/// Plays `session` over `input`/`output` until the user declines a restart
/// or input runs out.
///
/// Returns the most recent finished result, or `None` if input ended
/// before the quiz was completed.
pub fn run<R, I, O>(
    session: &mut QuizSession,
    rng: &mut R,
    input: &mut I,
    output: &mut O,
    locale: Locale,
) -> io::Result<Option<QuizResult>>
where
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    let text = locale.text();
    let mut orders = DisplayOrderCache::new();
    let mut line = String::new();

    writeln!(output, "{} - {}", text.title, text.subtitle)?;

    loop {
        if let Some(result) = session.result() {
            write_result(output, &result, locale)?;
            write!(output, "{} [y/N] ", text.restart)?;
            output.flush()?;

            if !read_line(input, &mut line)? || !line.trim().eq_ignore_ascii_case("y") {
                return Ok(Some(result));
            }

            session.restart();
            continue;
        }

        let key = session.question_key();
        let order = orders
            .order_for(rng, key, session.current_question().options.len())
            .to_vec();

        write_question(output, session, &order)?;

        let answer = loop {
            write!(output, "{} (1-{}): ", text.answer_prompt, order.len())?;
            output.flush()?;

            if !read_line(input, &mut line)? {
                return Ok(None);
            }

            match line.trim().parse::<usize>() {
                Ok(choice) if (1..=order.len()).contains(&choice) => break order[choice - 1],
                _ => writeln!(output, "{}", text.invalid_choice)?,
            }
        };

        match session.submit_answer(answer) {
            Ok(AnswerOutcome::Recorded { correct }) => {
                let verdict = if correct { text.correct } else { text.incorrect };
                writeln!(output, "{verdict}")?;
            }
            Ok(AnswerOutcome::Ignored) => {}
            Err(error) => {
                return Err(io::Error::new(io::ErrorKind::InvalidInput, error));
            }
        }

        write_reveal(output, session, &order, locale)?;

        let next_label = if session.is_last_question() {
            text.see_results
        } else {
            text.next_question
        };
        write!(output, "[Enter] {next_label} ")?;
        output.flush()?;

        if !read_line(input, &mut line)? {
            return Ok(None);
        }

        session.advance();
    }
}

fn read_line<I: BufRead>(input: &mut I, line: &mut String) -> io::Result<bool> {
    line.clear();
    Ok(input.read_line(line)? > 0)
}

fn write_question<O: Write>(
    output: &mut O,
    session: &QuizSession,
    order: &[usize],
) -> io::Result<()> {
    let question = session.current_question();
    let cost: String = encode(&question.card.mana_cost)
        .iter()
        .map(|symbol| format!("({})", symbol.symbol))
        .collect();

    writeln!(output)?;
    writeln!(
        output,
        "[{}/{}] {} {}",
        session.current_index() + 1,
        session.total(),
        question.card.name,
        cost
    )?;
    for line in question.card.text.lines() {
        writeln!(output, "  | {line}")?;
    }
    writeln!(output)?;
    writeln!(output, "{}", question.question)?;

    for (position, &original) in order.iter().enumerate() {
        writeln!(output, "  {}. {}", position + 1, question.options[original])?;
    }

    Ok(())
}

fn write_reveal<O: Write>(
    output: &mut O,
    session: &QuizSession,
    order: &[usize],
    locale: Locale,
) -> io::Result<()> {
    let text = locale.text();
    let question = session.current_question();

    for (position, &original) in order.iter().enumerate() {
        let marker = match session.option_state(original) {
            OptionState::Correct => "o",
            OptionState::Incorrect => "x",
            OptionState::Selectable | OptionState::Dimmed => " ",
        };
        writeln!(
            output,
            "  [{marker}] {}. {}",
            position + 1,
            question.options[original]
        )?;
    }

    writeln!(output)?;
    writeln!(output, "{}: {}", text.explanation_heading, question.explanation)?;
    writeln!(output, "{}: << {} >>", text.ruling_heading, question.card.ruling)?;

    Ok(())
}

fn write_result<O: Write>(output: &mut O, result: &QuizResult, locale: Locale) -> io::Result<()> {
    let text = locale.text();

    writeln!(output)?;
    writeln!(output, "{}", text.finished_heading)?;
    writeln!(
        output,
        "{} {} / {} ({}%)",
        text.your_score, result.score, result.total, result.feedback.percentage
    )?;
    writeln!(output, "{}", result.feedback.tier.message(locale))?;

    Ok(())
}
