use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use fixed_map::Set;
use katsuyou::inflection::{BASE_RULES, VARIANTS};
use katsuyou::quiz::Question;
use katsuyou::{Config, Dictionary, Dirs, Form, Lemma, Sense, Verb};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Args {
    /// Configuration file to use. Defaults to `config.toml` in the user
    /// configuration directory.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Word list to look verbs up in. Overrides the configuration.
    #[arg(long)]
    dictionary: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct LemmaArgs {
    /// Reading, spelling or english gloss of the verb to look up. A random
    /// verb is picked if omitted.
    word: Option<String>,
    /// Class tag of an inline lemma, such as `v1` or `v5k`. Skips the lookup
    /// and uses the word as its reading.
    #[arg(long)]
    pos: Option<String>,
    /// Kanji spelling of an inline lemma.
    #[arg(long = "spelling")]
    spellings: Vec<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the conjugation table of a verb.
    Table {
        #[command(flatten)]
        lemma: LemmaArgs,
        /// Only include the specified forms.
        #[arg(long = "form")]
        forms: Vec<String>,
        /// Only include polite forms.
        #[arg(long, conflicts_with = "plain")]
        polite: bool,
        /// Only include plain forms.
        #[arg(long)]
        plain: bool,
        /// Show how each form is built out of the bases.
        #[arg(long)]
        rules: bool,
    },
    /// Print a single conjugated form of a verb.
    Form {
        #[command(flatten)]
        lemma: LemmaArgs,
        /// The form to conjugate into.
        #[arg(long)]
        form: String,
        /// Use the negative polarity.
        #[arg(long)]
        negative: bool,
        /// Use the polite register.
        #[arg(long)]
        polite: bool,
    },
    /// Ask for a random form of a verb and grade the answer read from stdin.
    Ask {
        #[command(flatten)]
        lemma: LemmaArgs,
    },
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder().from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .try_init()?;

    let args = Args::try_parse()?;

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => Dirs::open()?.config_path(),
    };

    let mut config = Config::load(&config_path)?;

    if args.dictionary.is_some() {
        config.dictionary = args.dictionary.clone();
    }

    match &args.command {
        Command::Table {
            lemma,
            forms,
            polite,
            plain,
            rules,
        } => {
            let mut filter = Set::new();

            for form in forms {
                filter.insert(form.parse::<Form>()?);
            }

            if *polite {
                config.polite = Some(true);
            } else if *plain {
                config.polite = Some(false);
            }

            for lemma in resolve(&config, lemma)? {
                print_table(&config, &lemma, &filter, *rules)?;
            }
        }
        Command::Form {
            lemma,
            form,
            negative,
            polite,
        } => {
            let form = form.parse::<Form>()?;

            for lemma in resolve(&config, lemma)? {
                let verb = Verb::new(&lemma)?;
                println!("{}", verb.conjugate(form, !*negative, *polite)?);
            }
        }
        Command::Ask { lemma } => {
            let lemmas = resolve(&config, lemma)?;

            let Some(lemma) = lemmas.first() else {
                bail!("No verb to ask about");
            };

            ask(lemma)?;
        }
    }

    Ok(())
}

/// Resolve lemmas either inline or through the dictionary.
fn resolve(config: &Config, args: &LemmaArgs) -> Result<Vec<Lemma>> {
    if let Some(pos) = &args.pos {
        let Some(word) = &args.word else {
            bail!("An inline lemma with `--pos {pos}` needs a reading");
        };

        let mut lemma =
            Lemma::new(word.as_str()).with_sense(Sense::new([pos.as_str()], Vec::<String>::new()));

        for spelling in &args.spellings {
            lemma = lemma.with_spelling(spelling.as_str());
        }

        return Ok(vec![lemma]);
    }

    let path = match &config.dictionary {
        Some(path) => path.clone(),
        None => Dirs::open()?.dictionary_path(),
    };

    let dictionary = Dictionary::open(&path)?;

    let Some(word) = &args.word else {
        let lemma = dictionary
            .random_verb(&mut rand::thread_rng())
            .with_context(|| format!("No verbs in {}", path.display()))?;
        return Ok(vec![lemma.clone()]);
    };

    let lemmas = dictionary
        .lookup(word)
        .filter(|lemma| lemma.is_verb())
        .cloned()
        .collect::<Vec<_>>();

    if lemmas.is_empty() {
        bail!("Could not find verb `{word}`");
    }

    Ok(lemmas)
}

fn print_table(config: &Config, lemma: &Lemma, filter: &Set<Form>, rules: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut o = stdout.lock();

    match lemma.spelling() {
        Some(..) => writeln!(o, "{} ({})", lemma.reading, lemma.spellings.join(", "))?,
        None => writeln!(o, "{}", lemma.reading)?,
    }

    for sense in &lemma.senses {
        writeln!(o, "  {sense}")?;
    }

    let verb = match Verb::new(lemma) {
        Ok(verb) => verb,
        Err(error) => {
            writeln!(o, "  cannot conjugate: {error}")?;
            return Ok(());
        }
    };

    let mut current = None;

    for cell in verb.table() {
        if !filter.is_empty() && !filter.contains(cell.form) {
            continue;
        }

        if !config.is_shown(cell.formal) {
            continue;
        }

        if current != Some(cell.form) {
            writeln!(o, "{}: {}", cell.name(), cell.form.title())?;
            current = Some(cell.form);
        }

        let variant = variant(cell.positive, cell.formal);

        match &cell.result {
            Ok(form) => write!(o, "  {variant}: {form}")?,
            Err(error) => write!(o, "  {variant}: ? ({error})")?,
        }

        if rules {
            write!(o, " [{}]", cell.form.rule(verb.class(), cell.positive, cell.formal))?;
        }

        writeln!(o)?;
    }

    if rules {
        writeln!(o)?;
        writeln!(o, "{BASE_RULES}")?;
    }

    o.flush()?;
    Ok(())
}

fn ask(lemma: &Lemma) -> Result<()> {
    let verb = Verb::new(lemma)?;
    let question = Question::random(&mut rand::thread_rng());

    println!("{question}");
    println!();

    match lemma.spelling() {
        Some(..) => println!("{} ({})", lemma.reading, lemma.spellings.join(", ")),
        None => println!("{}", lemma.reading),
    }

    print!("Answer: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let answer = question.grade(&verb, &input)?;

    if answer.correct {
        println!("Correct: {}", answer.expected);
    } else {
        println!("Wrong, entered: {}", input.trim());
        println!("Correct: {}", answer.expected);
        println!();
        println!("{} ({}):", question.form, question.form.title());

        for (positive, formal) in VARIANTS {
            let rule = question.form.rule(verb.class(), positive, formal);
            println!("  {}: {rule}", variant(positive, formal));
        }

        println!();
        println!("{BASE_RULES}");
    }

    Ok(())
}

fn variant(positive: bool, formal: bool) -> &'static str {
    match (positive, formal) {
        (true, false) => "positive plain",
        (true, true) => "positive polite",
        (false, false) => "negative plain",
        (false, true) => "negative polite",
    }
}
