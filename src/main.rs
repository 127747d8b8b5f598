use std::path::PathBuf;

use clap::{command, Arg, ArgAction};
use config::Config;
use generator::generate;

mod config;
mod frontmatter;
mod generator;
mod metadata;
mod output;
mod renderer;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .args(&[
            Arg::new("article_dir")
                .help("Directory path of markdown articles")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("posts"),
            Arg::new("out_path")
                .help("Path of the JSON output. Its directory is created if absent.")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("out/posts.json"),
            Arg::new("strict")
                .long("strict")
                .help("Abort when a single article fails to parse, instead of skipping it")
                .action(ArgAction::SetTrue),
            Arg::new("drafts")
                .long("drafts")
                .help("Include articles marked `draft: true`")
                .action(ArgAction::SetTrue),
        ])
        .get_matches();

    let mut config = Config::new(
        matches
            .get_one::<PathBuf>("article_dir")
            .cloned()
            .unwrap_or_else(|| PathBuf::from("posts")),
        matches
            .get_one::<PathBuf>("out_path")
            .cloned()
            .unwrap_or_else(|| PathBuf::from("out/posts.json")),
    );
    config.strict = matches.get_flag("strict");
    config.include_drafts = matches.get_flag("drafts");
    config.validate()?;

    generate(&config)?;

    Ok(())
}
