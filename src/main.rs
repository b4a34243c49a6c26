use std::io::{self, BufRead, Write};

use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use utmgrid::{GeoPoint, ParseCoord};

const USAGE: &str = "usage: utmgrid <latitude> <longitude>
       utmgrid < pairs.txt

Converts WGS84 decimal degrees to UTM. Without arguments, reads one
'<latitude> <longitude>' or '<latitude>;<longitude>' pair per line from
stdin. Either ',' or '.' may be used as the decimal separator.";

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let ok = match args.first().map(String::as_str) {
        Some("-h" | "--help") => {
            println!("{USAGE}");
            true
        }
        Some(_) => convert_args(&args),
        None => convert_lines(io::stdin().lock()),
    };

    if !ok {
        std::process::exit(1);
    }
}

fn convert_args(args: &[String]) -> bool {
    match GeoPoint::parse_coord(&args.join(" ")) {
        Ok(point) => {
            println!("{}", point.to_grid());
            true
        }
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            false
        }
    }
}

fn convert_lines(input: impl BufRead) -> bool {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failures = 0_usize;

    for (idx, line) in input.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!("stopped reading stdin: {err}");
                failures += 1;
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match GeoPoint::parse_coord(&line) {
            Ok(point) => {
                debug!(line = idx + 1, %point, "converting");
                if writeln!(out, "{}", point.to_grid()).is_err() {
                    // Closed pipe, nothing left to write to
                    return failures == 0;
                }
            }
            Err(err) => {
                eprintln!("line {}: {err}", idx + 1);
                failures += 1;
            }
        }
    }

    failures == 0
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::convert_lines;

    #[test]
    fn blank_lines_are_skipped() {
        assert!(convert_lines(Cursor::new("-23,561414;-46,655881\n\n40.748333 -73.985278\n")));
    }

    #[test]
    fn bad_line_fails_but_keeps_going() {
        assert!(!convert_lines(Cursor::new("-23.5\n0 0\n")));
        assert!(!convert_lines(Cursor::new("95 0\n")));
    }
}
