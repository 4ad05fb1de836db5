mod repl {
    use tenpuzzle::deal::deal_playable;
    use tenpuzzle::{check, decode, validate, Hand, Postfix, ShuntingParser, Verdict};

    pub fn decodeexpr(input: &str) {
        if !validate(input).is_valid() {
            println!("{}", Verdict::Invalid);
            return;
        }
        match decode(&Postfix::from(input)) {
            Err(e) => println!("Decode error: {:?}", e),
            Ok(infix) => println!("{}", infix),
        }
    }

    pub struct Session {
        pub hand: Option<Hand>,
    }

    impl Session {
        pub fn new() -> Session {
            Session { hand: None }
        }

        pub fn statement(&mut self, input: &str) {
            let input = input.trim();
            if input == ":deal" {
                let hand = deal_playable(&mut rand::rng());
                println!("{}", hand);
                self.hand = Some(hand);
            } else if let Some(expr) = input.strip_prefix(":decode") {
                decodeexpr(expr.trim());
            } else if let Some(expr) = input.strip_prefix(":infix") {
                match ShuntingParser::parse_str(expr) {
                    Err(e) => println!("Parse error: {:?}", e),
                    Ok(rpn) => self.answer(&rpn.to_string()),
                }
            } else if !input.is_empty() {
                self.answer(input);
            }
        }

        fn answer(&self, rpn: &str) {
            if let Some(hand) = self.hand {
                if !hand.uses(&Postfix::from(rpn)) {
                    println!("{} does not use the digits {}", rpn, hand);
                    return;
                }
            }
            let verdict = check(rpn);
            match verdict {
                Verdict::Invalid => println!("{}", verdict),
                _ => match decode(&Postfix::from(rpn)) {
                    Err(e) => println!("Decode error: {:?}", e),
                    Ok(infix) => println!("{}    {}", verdict, infix),
                },
            }
        }
    }
}

fn main() -> Result<(), String> {
    let args = std::env::args().skip(1).collect::<Vec<String>>();
    if let Some(first) = args.first() {
        if first == "--decode" {
            args[1..].iter().for_each(|input| repl::decodeexpr(input));
        } else {
            for input in args.iter() {
                println!("{}", tenpuzzle::check(input));
            }
        }
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    let histpath = dirs::home_dir().map(|h| h.join(".tenpuzzle_history"));
    if let Some(ref path) = histpath {
        if rl.load_history(path).is_err() {
            println!("No history yet");
        }
    }
    let mut session = repl::Session::new();
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                session.statement(&line);
            }
        }
    }
    if let Some(ref path) = histpath {
        rl.save_history(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}
