//! `get characters` command.

use std::io::{self, Write};

use crate::catalog::SUPPORTED_CHARACTERS;

pub fn cmd_characters() -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    render_characters(&mut out)?;
    Ok(())
}

pub fn render_characters<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    for name in SUPPORTED_CHARACTERS {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}
