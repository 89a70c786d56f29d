use std::process::ExitCode;
use std::sync::{Mutex, PoisonError};

use clap::{Arg, ArgAction, Command};
use tokio_util::sync::CancellationToken;

use wordrelay::catalog::{find_language, language_name, LANGUAGES, WORD_COUNT_CHOICES};
use wordrelay::client::{ClientFetcher, FetchOutcome, RequestState};

const DEFAULT_RELAY_URL: &str = "http://127.0.0.1:2345/api/words";

fn cli() -> Command {
    Command::new("wordgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Random text generator backed by the word relay")
        .arg(
            Arg::new("relay-url")
                .long("relay-url")
                .num_args(1)
                .default_value(DEFAULT_RELAY_URL)
                .help("Words endpoint of the relay"),
        )
        .arg(
            Arg::new("lang")
                .long("lang")
                .num_args(1)
                .default_value("")
                .help("Language code (empty for English, see --list-langs)"),
        )
        .arg(
            Arg::new("count")
                .long("count")
                .num_args(1)
                .value_parser(clap::value_parser!(u32).range(3..=6))
                .default_value("3")
                .help("Number of words (3-6)"),
        )
        .arg(
            Arg::new("list-langs")
                .long("list-langs")
                .action(ArgAction::SetTrue)
                .help("Print the available languages and exit"),
        )
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let matches = cli().get_matches();

    if matches.get_flag("list-langs") {
        for lang in LANGUAGES.iter() {
            let code = if lang.code.is_empty() { "(default)" } else { lang.code };
            println!("{:<10} {}", code, lang.name);
        }
        return ExitCode::SUCCESS;
    }

    let lang = matches.get_one::<String>("lang").cloned().unwrap_or_default();
    if find_language(&lang).is_none() {
        eprintln!("Unknown language '{}', see --list-langs", lang);
        return ExitCode::FAILURE;
    }
    let count = matches
        .get_one::<u32>("count")
        .copied()
        .unwrap_or(WORD_COUNT_CHOICES[0]);
    let relay_url = matches
        .get_one::<String>("relay-url")
        .cloned()
        .unwrap_or_else(|| DEFAULT_RELAY_URL.to_string());

    let state = Mutex::new(RequestState::new());
    {
        let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
        state.set_language(lang.as_str());
        state.set_word_count(count);
    }

    let fetcher = ClientFetcher::new(relay_url);
    eprintln!(
        "Generating {} words in {} via {}...",
        count,
        language_name(&lang),
        fetcher.relay_url()
    );
    let cancel = CancellationToken::new();

    match fetcher.run_cycle(&state, &cancel).await {
        FetchOutcome::Success(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        FetchOutcome::Failure(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
        FetchOutcome::Idle | FetchOutcome::Loading => ExitCode::FAILURE,
    }
}
