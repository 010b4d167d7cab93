#[cfg(target_arch = "wasm32")]
fn main() {
    rulequiz::wasm::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use rulequiz::{LOCALE_ENV, QuizConfig, QuizSession, console};
    use std::process::ExitCode;

    pretty_env_logger::init();

    let env_locale = std::env::var(LOCALE_ENV).ok();
    let config = match QuizConfig::from_env_and_args(env_locale.as_deref(), std::env::args().skip(1))
    {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            eprintln!("usage: rulequiz [--locale ja|en] [QUESTIONS.json]");
            return ExitCode::from(2);
        }
    };

    let mut session = match config
        .dataset
        .load()
        .map_err(rulequiz::QuizError::from)
        .and_then(QuizSession::new)
    {
        Ok(session) => session,
        Err(error) => {
            log::error!("could not start quiz: {error}");
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };

    let mut rng = rand::thread_rng();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    match console::run(
        &mut session,
        &mut rng,
        &mut stdin.lock(),
        &mut stdout.lock(),
        config.locale,
    ) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("quiz aborted: {error}");
            ExitCode::FAILURE
        }
    }
}
