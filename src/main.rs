use std::error::Error;
use std::io::{self, Read};

use eiddec::eid;

fn main() -> Result<(), Box<dyn Error>> {
    let mut data = String::new();
    let mut stdin = io::stdin();
    stdin.read_to_string(&mut data)?;

    // EIDs are conventionally printed in groups of four digits.
    let digits: String = data.split_whitespace().collect();

    let record = eid::decode_and_verify(&digits)?;
    print!("{}", record);

    Ok(())
}
