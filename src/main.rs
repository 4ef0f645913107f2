use std::{env, fs::read_to_string, path::PathBuf, process::exit, time::Instant};

use interpreter::{
    display_error, interpreter::interpreter::interpret, lexer::lexer::tokenize,
    parser::parser::parse, semantic::analyzer::analyze,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut file_path: Option<&str> = None;
    let mut print_scopes = false;

    for arg in args.iter().skip(1) {
        if arg == "--scopes" {
            print_scopes = true;
        } else if file_path.is_none() {
            file_path = Some(arg);
        } else {
            eprintln!("Usage: interpreter <file> [--scopes]");
            exit(1);
        }
    }

    let Some(file_path) = file_path else {
        eprintln!("Usage: interpreter <file> [--scopes]");
        exit(1);
    };

    let file_name = if file_path.contains('/') {
        file_path.split('/').last().unwrap()
    } else {
        file_path
    };

    let start = Instant::now();

    let mut path_buf_string = env::current_dir().unwrap().into_os_string();
    path_buf_string.push("/");
    path_buf_string.push(file_path);
    let file_contents = read_to_string(path_buf_string.clone()).expect("Failed to read file!");

    let tokens = match tokenize(file_contents, Some(String::from(file_name))) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(error, PathBuf::from(path_buf_string));
            exit(1);
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let program = match parse(tokens) {
        Ok(program) => program,
        Err(error) => {
            display_error(error, PathBuf::from(path_buf_string));
            exit(1);
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());

    let analyze_start = Instant::now();
    let (analyzer, semantic_error) = analyze(&program);

    println!("Analyzed in {:?}", analyze_start.elapsed());

    if print_scopes {
        for scope in &analyzer.scope_log {
            println!("{}", scope);
        }
    }

    if let Some(error) = semantic_error {
        display_error(error, PathBuf::from(path_buf_string));
        exit(1);
    }

    let run_start = Instant::now();
    let memory = match interpret(&program) {
        Ok(memory) => memory,
        Err(error) => {
            display_error(error, PathBuf::from(path_buf_string));
            exit(1);
        }
    };

    println!("Executed in {:?}", run_start.elapsed());
    println!("Total time: {:?}", start.elapsed());

    let mut names: Vec<&String> = memory.keys().collect();
    names.sort();

    println!();
    for name in names {
        println!("{} = {}", name, memory[name]);
    }
}
