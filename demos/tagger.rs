use argspec::{Arity, ArgumentParser, Kind, Optional, Positional, WrapWidth};

fn main() -> Result<(), argspec::Error> {
    let mut parser = ArgumentParser::from_env()
        .about("Attach tags to a file, and show what was understood.")
        .wrap_width(WrapWidth::Terminal);
    parser
        .add_option(
            Optional::switch(["-v", "--verbose"], "verbose")
                .help("Dump the parser status before tagging."),
        )?
        .add_option(
            Optional::new(["-r", "--ratio"], "ratio", Kind::Float)
                .help("How strongly the tags apply, between 0 and 1."),
        )?
        .add_option(
            Optional::new("--tags", "tags", Kind::String)
                .arity(Arity::Variable)
                .help("The tags to attach, up until the next option."),
        )?
        .add_argument(Positional::new("file", Kind::String).help("The file to tag."))?;

    parser.parse()?;

    if parser.get_or("verbose", false) {
        parser.display_status();
    }

    let file: String = parser.get("file")?;
    let ratio: f64 = parser.get_or("ratio", 1.0);
    for tag in parser.get_all_or("tags", "untagged".to_string()) {
        println!("{file}: {tag} ({ratio:.2})");
    }

    Ok(())
}
