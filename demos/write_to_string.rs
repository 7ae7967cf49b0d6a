use asciimath_unicode::{parse, push_unicode, RenderConfig};

static ASCIIMATH: &str = "AA epsilon > 0, EE delta > 0, AA x in RR quad abs(x - c) < delta => abs(f(x) - L) < epsilon";

fn main() {
    let expression = match parse(ASCIIMATH) {
        Ok(expression) => expression,
        Err(e) => {
            eprintln!("Error while parsing: {}", e);
            return;
        }
    };

    let mut output = String::new();
    push_unicode(&mut output, &expression, RenderConfig::default());
    println!("{}", output);
}
