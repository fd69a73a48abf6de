use steno_numbers::{roman, words};

pub fn words_cmd(digits: &str) {
    let spelled = die!(words::encode(digits), "Error: {}");
    println!("{spelled}");
}

pub fn roman_cmd(value: u64, lower: bool) {
    let mut numeral = die!(roman::encode(value), "Error: {}");
    if lower {
        numeral.make_ascii_lowercase();
    }
    println!("{numeral}");
}
