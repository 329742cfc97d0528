use clap::Parser;
use dicepass::{
    secrecy::ExposeSecret, Generator, GeneratorOptions, WordList,
    WordListKind,
};
use std::{io::Write, path::PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod error;

use error::Error;

type Result<T> = std::result::Result<T, Error>;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Dicepass {
    /// Number of words in each passphrase.
    #[clap(short, long, env = "DICEPASS_WORDS", default_value = "6")]
    words: usize,

    /// Built-in word list (eff-large, eff-small or original).
    ///
    /// Ignored when a word list file is given.
    #[clap(short, long, env = "DICEPASS_LIST")]
    list: Option<WordListKind>,

    /// Word list file in diceware format.
    #[clap(short, long)]
    file: Option<PathBuf>,

    /// Separator placed between words.
    #[clap(short, long, default_value = " ")]
    separator: String,

    /// Number of passphrases to generate.
    #[clap(short = 'n', long, default_value = "1")]
    count: usize,

    /// Print each passphrase as a JSON array of words.
    #[clap(long)]
    json: bool,

    /// Print the built-in word lists and exit.
    #[clap(long)]
    lists: bool,
}

/// Word list file if given, otherwise the selected built-in list.
fn load_word_list(args: &Dicepass) -> Result<WordList> {
    let Some(path) = &args.file else {
        return Ok(args.list.unwrap_or_default().word_list());
    };
    let text = std::fs::read_to_string(path)?;
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let list = WordList::parse(name, &text)?;
    tracing::debug!(
        path = %path.display(),
        len = list.len(),
        digits = list.digits(),
        "word_list::load"
    );
    Ok(list)
}

fn print_lists(out: &mut impl Write) -> Result<()> {
    for kind in enum_iterator::all::<WordListKind>() {
        let list = kind.word_list();
        writeln!(out, "{}\t{} words\t{} dice", kind, list.len(), list.digits())?;
    }
    Ok(())
}

fn print_passphrases(
    args: &Dicepass,
    generator: &Generator,
    out: &mut impl Write,
) -> Result<()> {
    for _ in 0..args.count {
        if args.json {
            let words = generator.generate(args.words)?;
            writeln!(out, "{}", serde_json::to_string(&words)?)?;
        } else {
            let passphrase = generator.passphrase(args.words, &args.separator)?;
            writeln!(out, "{}", passphrase.expose_secret())?;
        }
    }
    Ok(())
}

fn run() -> Result<()> {
    let args = Dicepass::parse();
    let mut stdout = std::io::stdout().lock();

    if args.lists {
        return print_lists(&mut stdout);
    }

    let word_list = load_word_list(&args)?;
    let generator = Generator::new(Some(
        GeneratorOptions::default().with_word_list(word_list),
    ))?;
    print_passphrases(&args, &generator, &mut stdout)
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "dicepass=info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = run() {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
