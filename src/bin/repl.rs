use clap::Parser;
use dicemath::{
    tokenize, Binding, Context, Evaluator, MarkdownStringifier, Roll, SimpleStringifier,
    DEFAULT_MAX_ROLLS,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::io::{self, BufRead, Write};

/// Evaluates dice expressions such as `3 d 6 + str`, one per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Binds a variable, e.g. `--var str=3`. May be repeated.
    #[arg(short, long = "var", value_name = "NAME=VALUE")]
    vars: Vec<Binding>,

    /// Seeds the dice for reproducible rolls.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Most dice a single expression may roll.
    #[arg(long, default_value_t = DEFAULT_MAX_ROLLS, conflicts_with = "unbounded")]
    max_rolls: usize,

    /// Lifts the limit on dice per expression.
    #[arg(long)]
    unbounded: bool,

    /// Prints results as Markdown.
    #[arg(short, long)]
    markdown: bool,

    /// Prints the token stream instead of evaluating.
    #[arg(long)]
    tokens: bool,

    /// An expression to evaluate; stdin is read when omitted.
    expression: Vec<String>,
}

impl Args {
    fn max_rolls(&self) -> Option<usize> {
        if self.unbounded {
            None
        } else {
            Some(self.max_rolls)
        }
    }

    fn render(&self, roll: &Roll) -> String {
        if self.markdown {
            roll.result::<MarkdownStringifier>()
        } else {
            roll.result::<SimpleStringifier>()
        }
    }
}

fn run_line<R: Rng>(args: &Args, context: &Context, rng: &mut R, line: &str) {
    if args.tokens {
        match tokenize(line) {
            Ok(tokens) => {
                for token in tokens {
                    let span = format!("{}..{}", token.span.start, token.span.end);
                    println!("{:<10} {:<16} {:?}", span, token.kind, token.slice);
                }
            }
            Err(why) => eprintln!("Error: {}", why),
        }
        return;
    }

    let result = dicemath::parse(line).and_then(|ast| {
        Evaluator::new(context, &mut *rng)
            .with_max_rolls(args.max_rolls())
            .eval(ast)
            .map_err(Into::into)
    });
    match result {
        Ok(roll) => {
            for dice in roll.dice() {
                log::info!("{}", dice);
            }
            println!("{}", args.render(&roll));
        }
        Err(why) => eprintln!("Error: {}", why),
    }
}

fn run<R: Rng>(args: &Args, context: &Context, rng: &mut R) -> io::Result<()> {
    if !args.expression.is_empty() {
        run_line(args, context, rng, &args.expression.join(" "));
        return Ok(());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    print!("> ");
    io::stdout().flush()?;
    while let Some(line) = lines.next() {
        let line = line?;
        if !line.trim().is_empty() {
            run_line(args, context, rng, &line);
        }
        print!("> ");
        io::stdout().flush()?;
    }
    println!();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let context: Context = args.vars.iter().cloned().collect();
    log::debug!("starting with {} variable(s)", context.len());

    match args.seed {
        Some(seed) => run(&args, &context, &mut StdRng::seed_from_u64(seed))?,
        None => run(&args, &context, &mut rand::thread_rng())?,
    }
    Ok(())
}
