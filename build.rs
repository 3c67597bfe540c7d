// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: database path
fn db_path_arg() -> Arg {
    Arg::new("db_path")
        .short('d')
        .long("db-path")
        .value_name("PATH")
        .help("Database path (default: $RECIPEBOOK_DB or the user data directory)")
}

/// Common argument: recipe ID
fn recipe_id_arg(name: &'static str) -> Arg {
    Arg::new(name).required(true).help("Recipe ID")
}

/// Ingredient line arguments: name, amount, unit
fn ingredient_args(cmd: Command) -> Command {
    cmd.arg(recipe_id_arg("recipe_id"))
        .arg(Arg::new("name").required(true).help("Ingredient name"))
        .arg(Arg::new("amount").required(true).help("Amount, in unit"))
        .arg(Arg::new("unit").required(true).help("Unit of the amount"))
        .arg(db_path_arg())
}

fn build_cli() -> Command {
    Command::new("recipebook")
        .version(env!("CARGO_PKG_VERSION"))
        .author("RecipeBook Contributors")
        .about("Keep recipes with validated ingredients and ordered steps")
        .subcommand_required(false)
        .subcommand(
            Command::new("init")
                .about("Initialize the recipe database")
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("list")
                .about("List recipes")
                .arg(
                    Arg::new("name")
                        .long("name")
                        .help("Only show recipes whose name contains this text"),
                )
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("show")
                .about("Show a recipe with its ingredients and steps")
                .arg(recipe_id_arg("id"))
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("import")
                .about("Import a recipe card (.toml or .json)")
                .arg(Arg::new("path").required(true).help("Path to the recipe card"))
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("export")
                .about("Export a recipe as a card")
                .arg(recipe_id_arg("id"))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["toml", "json"])
                        .default_value("toml")
                        .help("Card format"),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Write to this file instead of stdout"),
                )
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a recipe")
                .arg(recipe_id_arg("id"))
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("ingredient")
                .about("Edit the ingredients of a recipe")
                .subcommand(ingredient_args(
                    Command::new("add").about("Add an ingredient to a recipe"),
                ))
                .subcommand(ingredient_args(
                    Command::new("remove").about("Remove an ingredient from a recipe"),
                )),
        )
        .subcommand(
            Command::new("instruction")
                .about("Edit the instructions of a recipe")
                .subcommand(
                    Command::new("add")
                        .about("Append a step to a recipe")
                        .arg(recipe_id_arg("recipe_id"))
                        .arg(Arg::new("text").required(true).help("Text of the step"))
                        .arg(db_path_arg()),
                )
                .subcommand(
                    Command::new("sort")
                        .about("Reorder a recipe's steps by the order they were first stored")
                        .arg(recipe_id_arg("recipe_id"))
                        .arg(db_path_arg()),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Create man directory - use CARGO_MANIFEST_DIR which is always set by cargo
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("recipebook.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
