//! `version` command.

use std::io::{self, Write};

use console::Term;

const BANNER: [&str; 6] = [
    r"  __       _                                     _____ _      _____ ",
    r" / _|     | |                                   / ____| |    |_   _|",
    r"| |_ _   _| |_ _   _ _ __ __ _ _ __ ___   __ _ | |    | |      | |  ",
    r"|  _| | | | __| | | | '__/ _` | '_ ` _ \ / _` || |    | |      | |  ",
    r"| | | |_| | |_| |_| | | | (_| | | | | | | (_| || |____| |____ _| |_ ",
    r"|_|  \__,_|\__|\__,_|_|  \__,_|_| |_| |_|\__,_| \_____|______|_____|",
];

const MIN_BANNER_COLS: u16 = 79;
const MIN_BANNER_ROWS: u16 = 7;

pub fn cmd_version() -> anyhow::Result<()> {
    let term = Term::stdout();
    let size = if term.is_term() {
        term.size_checked()
    } else {
        None
    };

    let mut out = io::stdout().lock();
    render_version(&mut out, size)?;
    Ok(())
}

/// Write the version line, preceded by the banner when `size` (rows, cols)
/// leaves room for it.
pub fn render_version<W: Write>(out: &mut W, size: Option<(u16, u16)>) -> io::Result<()> {
    let fits = matches!(size, Some((rows, cols)) if rows >= MIN_BANNER_ROWS && cols >= MIN_BANNER_COLS);
    if fits {
        for line in BANNER {
            writeln!(out, "{}", line)?;
        }
    }
    writeln!(out, "futurama cli v{}", env!("CARGO_PKG_VERSION"))
}
