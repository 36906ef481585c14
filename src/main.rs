use std::env;
use std::process::ExitCode;

use fridge_chef::generate_recipe;
use log::error;

const USAGE: &str = "Usage: fridge-chef <ingredients> [--query TEXT] [--allergy NAME]... [--diet NAME]... [--json]";

#[derive(Debug, Default)]
struct Args {
    ingredients: String,
    query: String,
    allergies: Vec<String>,
    diet_preferences: Vec<String>,
    json: bool,
}

fn parse_args(raw: &[String]) -> Result<Args, String> {
    let mut args = Args::default();
    let mut positional = Vec::new();
    let mut iter = raw.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--query" | "-q" => args.query = value_for(arg, iter.next())?,
            "--allergy" | "-a" => args.allergies.push(value_for(arg, iter.next())?),
            "--diet" | "-d" => args.diet_preferences.push(value_for(arg, iter.next())?),
            "--json" => args.json = true,
            flag if flag.starts_with('-') => return Err(format!("Unknown option: {flag}")),
            _ => positional.push(arg.clone()),
        }
    }

    if positional.is_empty() {
        return Err("Please provide the available ingredients".to_string());
    }
    args.ingredients = positional.join(", ");

    Ok(args)
}

fn value_for(flag: &str, value: Option<&String>) -> Result<String, String> {
    value
        .cloned()
        .ok_or_else(|| format!("Missing value for {flag}"))
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let raw: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&raw) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let recipe = match generate_recipe(
        &args.ingredients,
        &args.query,
        &args.allergies,
        &args.diet_preferences,
    )
    .await
    {
        Ok(recipe) => recipe,
        Err(e) => {
            error!("Recipe generation failed: {e:?}");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&recipe) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", recipe.to_text());
    }

    ExitCode::SUCCESS
}
