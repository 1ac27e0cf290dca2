use argspec::{Arity, ArgumentParser, Kind, Positional};

fn main() -> Result<(), argspec::Error> {
    let mut parser = ArgumentParser::from_env().about("Sum up some numbers.");
    parser.add_argument(
        Positional::new("item", Kind::Integer)
            .arity(Arity::Variable)
            .help("The items to sum."),
    )?;

    parser.parse()?;
    let items: Vec<i64> = parser.get_all("item")?;
    let sum: i64 = items.iter().sum();
    println!("Sum: {sum}");
    Ok(())
}
