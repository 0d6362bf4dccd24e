use clap::Parser;
use keyprompt_cli::arguments::{format_answer, resolve_prompt, Provider};
use keyprompt_cli::cli_args::Args;
use keyprompt_core::choice::Choice;
use keyprompt_core::config;
use keyprompt_core::error::Result;
use keyprompt_core::prompt::Prompt;
use log::debug;
use std::io::{stderr, stdin, stdout, Write};
use std::process::ExitCode;

fn execute() -> Result<()> {
    let args = Args::parse();
    let config_path = config::get_prompts_path(&args.config_path);

    let resolved = resolve_prompt(
        args.get_source()?,
        &config_path,
        args.default.as_deref(),
        args.first_is_default,
    )?;

    let prompt = Prompt::new(&resolved.question, &resolved.choices)
        .with_default(resolved.default.as_ref());

    // The prompt goes to stderr so stdout only carries the answer
    let answer = prompt.interact(&mut stdin().lock(), &mut stderr())?;
    debug!("Chose `{}`", answer.name);

    print_answer(&args, &answer, &resolved.choices)
}

fn print_answer(args: &Args, answer: &Choice, choices: &[Choice]) -> Result<()> {
    let mut stdout = stdout();
    writeln!(stdout, "{}", format_answer(answer, choices, args.print))?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
