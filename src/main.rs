use std::{env, fs::read_to_string, process::exit, time::Instant};

use lexer::{
    display_error,
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::Tokenizer, tokens::TokenCategory},
    Position,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains("/") {
        file_path.split("/").last().unwrap()
    } else {
        file_path
    };

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(io_error) => {
            let error = Error::new(
                ErrorImpl::ReadSource {
                    path: file_path.to_string(),
                    message: io_error.to_string(),
                },
                Position::null(),
            );
            eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
            exit(1);
        }
    };

    let start = Instant::now();
    let tokens: Vec<_> = Tokenizer::new(source.clone()).collect();

    println!("Tokenized in {:?}", start.elapsed());

    for token in &tokens {
        token.debug();
    }

    let mut illegal_count = 0;

    for token in &tokens {
        if token.category != TokenCategory::Illegal {
            continue;
        }

        illegal_count += 1;

        if let Some(error) = Error::from_illegal_token(token) {
            display_error(error, &source, file_name);
        }
    }

    if illegal_count > 0 {
        println!("Found {} illegal character(s)", illegal_count);
        exit(1);
    }
}
