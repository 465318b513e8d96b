use clap::Parser;
use env_logger::Env;
use log::debug;

use ecuaciones::{EquationKind, EquationSession, History, View};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Show decimal approximations instead of exact roots
    #[arg(short, long)]
    decimal: bool,
    /// Equation kind: lin2, lin3, quad or cubic. Starts a REPL when missing
    kind: Option<String>,
    /// Coefficients row by row, highest power first, eg: 1 -3 2 or 1/2
    #[arg(allow_hyphen_values = true)]
    coeffs: Vec<String>,
}

const HELP: &str = "\
<kind> <coeffs..>  solve, kind is one of lin2 lin3 quad cubic
:toggle            switch between exact and decimal roots
:history           list previous solves
:recall N          show solve N from the history again
:help              this message";

fn session_for(kind: &str, coeffs: &[&str]) -> Result<EquationSession, String> {
    let kind = kind.parse::<EquationKind>().map_err(|e| e.to_string())?;
    if coeffs.len() > kind.arity() {
        return Err(format!(
            "{} takes {} coefficients ({}), got {}",
            kind,
            kind.arity(),
            kind.cell_labels().join(" "),
            coeffs.len()
        ));
    }
    let mut session = EquationSession::new(kind);
    for (idx, c) in coeffs.iter().enumerate() {
        session.set_cell(idx, c).map_err(|e| e.to_string())?;
    }
    Ok(session)
}

struct Repl {
    session: Option<EquationSession>,
    history: History,
    decimal: bool,
}

impl Repl {
    fn show(&self) -> String {
        match &self.session {
            Some(session) => session.render(),
            None => "nothing solved yet".to_string(),
        }
    }

    fn eval(&mut self, line: &str) -> Result<String, String> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => Ok(String::new()),
            [":help"] => Ok(HELP.to_string()),
            [":toggle"] => {
                if let Some(session) = self.session.as_mut() {
                    session.toggle_view();
                }
                Ok(self.show())
            }
            [":history"] => Ok(self
                .history
                .iter()
                .enumerate()
                .map(|(i, h)| format!("{}: {} => {}", i, h.expression, h.result))
                .collect::<Vec<_>>()
                .join("\n")),
            [":recall", n] => {
                let n: usize = n.parse().map_err(|_| format!("bad history index {:?}", n))?;
                let item = self
                    .history
                    .get(n)
                    .ok_or_else(|| format!("no history entry {}", n))?;
                self.session = Some(item.restore());
                Ok(self.show())
            }
            [cmd, ..] if cmd.starts_with(':') => Err(format!("unknown command {}", cmd)),
            [kind, coeffs @ ..] => {
                let mut session = session_for(kind, coeffs)?;
                let item = session.solve().map_err(|e| e.to_string())?;
                if self.decimal && session.view() == View::Exact {
                    session.toggle_view();
                }
                self.history.push(item);
                self.session = Some(session);
                Ok(self.show())
            }
        }
    }
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if let Some(kind) = cli.kind {
        let coeffs: Vec<&str> = cli.coeffs.iter().map(String::as_str).collect();
        let mut session = session_for(&kind, &coeffs)?;
        session.solve().map_err(|e| e.to_string())?;
        if cli.decimal {
            session.toggle_view();
        }
        if let Some(results) = session.results() {
            println!("{}", results.render(session.view()));
        }
        return Ok(());
    }

    let mut repl = Repl {
        session: None,
        history: History::default(),
        decimal: cli.decimal,
    };
    debug!("starting repl, decimal={}", repl.decimal);

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    loop {
        match rl.readline("eqn> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => match repl.eval(&line) {
                Err(e) => println!("Err: {}", e),
                Ok(out) => {
                    let _ = rl.add_history_entry(&line);
                    if !out.is_empty() {
                        println!("{}", out);
                    }
                }
            },
        }
    }
}
