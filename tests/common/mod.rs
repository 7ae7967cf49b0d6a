use std::{
    fs::File,
    io::{self, Write},
    path::Path,
    sync::Mutex,
};

use asciimath_unicode::{convert, RenderConfig};
use heck::ToTitleCase;
use inventory::collect;
use libtest_mimic::{Arguments, Conclusion, Failed, Trial};

pub const OUTPUT_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/target/test-output");

type Rows = Vec<(&'static str, String)>;

static RENDERED: Mutex<Vec<(&'static str, Rows)>> = Mutex::new(Vec::new());

pub struct TestCase {
    pub name: &'static str,
    pub test: fn() -> Result<(), Failed>,
}
collect!(TestCase);

pub fn test() -> Conclusion {
    let args = Arguments::from_args();
    let tests = inventory::iter::<TestCase>
        .into_iter()
        .map(|TestCase { name, test }| Trial::test(*name, *test))
        .collect::<Vec<_>>();
    libtest_mimic::run(&args, tests)
}

pub fn round_trip(
    fn_name: &'static str,
    config: RenderConfig,
    cases: &[(&'static str, &'static str)],
) -> Result<(), Failed> {
    let rendered = cases
        .iter()
        .map(|&(input, expected)| -> Result<_, Failed> {
            let output = convert(input, config)?;
            if output != expected {
                return Err(format!(
                    "input:    {input:?}\nexpected: {expected:?}\nfound:    {output:?}"
                )
                .into());
            }
            Ok((input, output))
        })
        .collect::<Result<_, Failed>>()?;

    RENDERED.lock().unwrap().push((fn_name, rendered));
    Ok(())
}

/// Write every rendered table to `OUTPUT_DIR/file_name` as an HTML page.
pub fn output(file_name: &str) -> io::Result<()> {
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let mut file = File::create(Path::new(OUTPUT_DIR).join(file_name))?;
    let title = file_name
        .split_once('.')
        .map_or(file_name, |(stem, _)| stem)
        .to_title_case();

    write!(
        file,
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<table style="max-width: 60vw; margin: auto;">"#
    )?;

    let mut rendered = RENDERED.lock().unwrap();
    rendered.sort();
    for (table_name, rows) in rendered.iter() {
        write!(
            file,
            r#"<tr><th colspan="2">{}</th></tr>"#,
            table_name.to_title_case()
        )?;
        for (input, output) in rows {
            write!(
                file,
                "<tr><td><code>{}</code></td><td>{}</td></tr>",
                escape(input),
                escape(output)
            )?;
        }
    }

    write!(file, "</table>\n</body>\n</html>\n")
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Register a test converting each input and comparing it with the expected output.
///
/// Fields of the [`RenderConfig`] can be overridden in brackets after the test name.
#[macro_export]
macro_rules! round_trip {
    ($name:ident, [$($field:ident = $value:expr),* $(,)?], $($input:literal => $output:literal),+ $(,)?) => {
        pub fn $name() -> Result<(), libtest_mimic::Failed> {
            #[allow(unused_mut)]
            let mut config = asciimath_unicode::RenderConfig::default();
            $(config.$field = $value;)*
            $crate::common::round_trip(stringify!($name), config, &[$(($input, $output)),+])
        }

        inventory::submit! {
            $crate::common::TestCase {
                name: stringify!($name),
                test: $name
            }
        }
    };
    ($name:ident, $($input:literal => $output:literal),+ $(,)?) => {
        $crate::round_trip!($name, [], $($input => $output),+);
    };
}
