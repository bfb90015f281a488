use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, Result};
use colored::Colorize;
use itertools::Itertools;
use log::info;
use logic::{
    check_equivalence, compute_truth_table, explanation::Explanation, parse, restrict_explained,
    tokenize_lossy, Basis, Evaluate, Interpretation, TokenKind,
};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[derive(Parser, Debug)]
#[command(version, about = "Parse, evaluate and rewrite propositional formulas")]
struct Cli {
    /// Increase logging verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the tokens of a formula.
    Tokens { formula: String },

    /// Show the syntax tree of a formula.
    Tree {
        formula: String,

        /// Print the tree as JSON (kind, label, children).
        #[arg(long)]
        json: bool,
    },

    /// List the atoms of a formula.
    Atoms {
        formula: String,

        #[arg(long)]
        explain: bool,
    },

    /// Evaluate a formula, e.g. `eval "a -> b" --set a=T,b=F`.
    Eval {
        formula: String,

        /// Comma separated assignments `name=value` (T/F, true/false, 1/0).
        #[arg(long, value_delimiter = ',')]
        set: Vec<String>,
    },

    /// Rewrite a formula so it only uses the connectives of a basis.
    Restrict {
        formula: String,

        /// One of: all, no-equiv, no-impl, no-or, no-and, nor, scheffer.
        #[arg(short, long, default_value = "all")]
        basis: String,

        /// Print every law that was applied.
        #[arg(long)]
        explain: bool,

        /// Verify the result against the input with a truth table.
        #[arg(long)]
        check: bool,
    },

    /// Print the truth table of a formula as markdown.
    Table {
        formula: String,

        #[arg(long)]
        attributes: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    TermLogger::init(
        match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        },
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    match cli.command {
        Command::Tokens { formula } => print_tokens(&formula),
        Command::Tree { formula, json } => print_tree(&formula, json)?,
        Command::Atoms { formula, explain } => print_atoms(&formula, explain)?,
        Command::Eval { formula, set } => evaluate(&formula, &set)?,
        Command::Restrict {
            formula,
            basis,
            explain,
            check,
        } => restrict(&formula, &basis, explain, check)?,
        Command::Table {
            formula,
            attributes,
        } => print_truth_table(&formula, attributes)?,
    }

    Ok(())
}

fn print_tokens(formula: &str) {
    for token in tokenize_lossy(formula) {
        let line = token.to_string();

        if token.kind == TokenKind::Unknown {
            println!("{}", line.red());
        } else {
            println!("{line}");
        }
    }
}

fn print_tree(formula: &str, json: bool) -> Result<()> {
    let node = parse(formula)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&node.view())?);
    } else {
        print!("{}", node.get_tree());
        println!(
            "{} nodes, depth {}",
            node.size().to_string().cyan(),
            node.depth().to_string().cyan()
        );
    }

    Ok(())
}

fn print_atoms(formula: &str, explain: bool) -> Result<()> {
    let node = parse(formula)?;
    let variables = node.get_variables();

    if explain {
        for step in &variables.steps {
            println!("{step}");
        }
    } else {
        println!("{}", variables.value);
    }

    Ok(())
}

fn evaluate(formula: &str, assignments: &[String]) -> Result<()> {
    let node = parse(formula)?;
    let interpretation = assignments
        .iter()
        .map(|assignment| parse_assignment(assignment))
        .collect::<Result<Interpretation>>()?;

    info!("Let I ≔ {interpretation}");

    let value = node.evaluate(&interpretation)?;
    println!(
        "{} under {} is {}",
        node.to_string().blue(),
        interpretation.to_string().blue(),
        if value { "T".green() } else { "F".red() }
    );

    Ok(())
}

fn parse_assignment(assignment: &str) -> Result<(String, bool)> {
    let (name, value) = assignment
        .split_once('=')
        .ok_or_else(|| eyre!("Expected `name=value`, got \"{assignment}\""))?;

    let value = match value.trim() {
        "T" | "t" | "true" | "1" => true,
        "F" | "f" | "false" | "0" => false,
        other => return Err(eyre!("Expected a truth value for {name}, got \"{other}\"")),
    };

    Ok((name.trim().to_owned(), value))
}

fn restrict(formula: &str, basis: &str, explain: bool, check: bool) -> Result<()> {
    let node = parse(formula)?;
    let basis = basis.parse::<Basis>()?;

    let mut explanation = Explanation::new(format!("Basis {}", basis.to_string().magenta()));
    let restricted = restrict_explained(&node, basis, &mut explanation);

    if explain {
        print!("{explanation}");
    }

    println!("{restricted}");

    if check {
        let equivalent = check_equivalence(&node, &restricted)?;
        let connectives = basis.connectives().join(", ");

        if equivalent {
            println!("{} (connectives: {connectives})", "equivalent".green());
        } else {
            return Err(eyre!("{restricted} is not equivalent to {node}"));
        }
    }

    Ok(())
}

fn print_truth_table(formula: &str, attributes: bool) -> Result<()> {
    let node = parse(formula)?;
    let table = compute_truth_table(&node)?;

    print!("{table}");

    if attributes {
        let attributes = table.attributes();
        println!(
            "\nvalid: {}, satisfiable: {}",
            attributes.valid, attributes.satisfiable
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_assignment;

    #[test]
    fn assignment_spellings() {
        for (text, expected) in [
            ("a=T", true),
            ("a=t", true),
            ("a=true", true),
            ("a=1", true),
            ("a=F", false),
            ("a=f", false),
            ("a=false", false),
            ("a=0", false),
        ] {
            assert_eq!(
                parse_assignment(text).unwrap(),
                ("a".to_owned(), expected),
                "{text}"
            );
        }

        assert_eq!(
            parse_assignment(" rain = T ").unwrap(),
            ("rain".to_owned(), true)
        );
    }

    #[test]
    fn malformed_assignments() {
        let error = parse_assignment("a").unwrap_err();
        assert_eq!(error.to_string(), "Expected `name=value`, got \"a\"");

        let error = parse_assignment("a=yes").unwrap_err();
        assert_eq!(error.to_string(), "Expected a truth value for a, got \"yes\"");
    }
}
