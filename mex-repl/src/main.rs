use ariadne::Source;
use mex_compute::numerical::{eval, Ctxt, Value};
use mex_compute::rewrite::{factor, fold, rebalance, FoldStep};
use mex_error::Error;
use mex_parser::parser::Parser;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs::File, io::{self, BufReader, IsTerminal, Read}};

/// Report an error to stderr.
///
/// The `ariadne` crate's [`Report`](ariadne::Report) type actually does not have a `Display`
/// implementation, so we can only use its `eprint` method to print to stderr.
fn report_to_stderr(err: &Error, input: &str) {
    let report = err.build_report("input");
    report.eprint(("input", Source::from(input))).unwrap();
}

/// Parses the given program, prints the parsed tree and the result of each rewrite pass on its
/// own copy, then evaluates the program in the given context.
fn run(input: &str, ctxt: &mut Ctxt) -> Result<(), Error> {
    let mut ast = Parser::new(input)?.parse()?;
    println!("parsed tree:\n{}", ast.display(ast.root));

    let balanced = ast.deep_copy(ast.root);
    let balanced = rebalance(&mut ast, balanced);
    println!("rebalanced tree:\n{}", ast.display(balanced));

    let factored = ast.deep_copy(ast.root);
    factor(&mut ast, factored, &mut ());
    println!("factored tree:\n{}", ast.display(factored));

    // factoring the rebalanced copy stacks both rewrites
    factor(&mut ast, balanced, &mut ());
    println!("rebalanced + factored tree:\n{}", ast.display(balanced));

    let folded = ast.deep_copy(ast.root);
    ast.link_parents(folded);
    let mut steps: Vec<FoldStep> = Vec::new();
    fold(&mut ast, folded, &mut steps)?;
    if !steps.is_empty() {
        println!("folded {} constant pair(s):\n{}", steps.len(), ast.display(folded));
    }

    match eval(&ast, ast.root, ctxt)? {
        Value::Unit => (), // intentionally print nothing
        value => println!("value: {value}"),
    }
    Ok(())
}

/// Runs the given program, printing the success or failure.
fn process(input: &str, ctxt: &mut Ctxt) {
    if let Err(err) = run(input, ctxt) {
        report_to_stderr(&err, input);
    }
}

fn main() {
    let mut args = std::env::args();
    args.next();

    let mut ctxt = Ctxt::new();

    if let Some(filename) = args.next() {
        // run source file
        let mut file = BufReader::new(File::open(filename).unwrap());
        let mut input = String::new();
        file.read_to_string(&mut input).unwrap();

        process(&input, &mut ctxt);
    } else if !io::stdin().is_terminal() {
        // read source from stdin
        let mut input = String::new();
        io::stdin().read_to_string(&mut input).unwrap();

        process(&input, &mut ctxt);
    } else {
        // run the repl / interactive mode
        let mut rl = DefaultEditor::new().unwrap();

        fn process_line(rl: &mut DefaultEditor, ctxt: &mut Ctxt) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            process(&input, ctxt);
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl, &mut ctxt) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }
}
