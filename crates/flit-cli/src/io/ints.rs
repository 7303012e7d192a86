// crates/flit-cli/src/io/ints.rs
//
// Text integer lists: whitespace separated, decimal or 0x-prefixed hex,
// `#` starts a comment that runs to end of line.

use anyhow::Context;

pub fn read_ints_file(path: &str) -> anyhow::Result<Vec<u64>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read ints: {path}"))?;
    parse_ints(&text).with_context(|| format!("parse ints: {path}"))
}

pub fn parse_ints(text: &str) -> anyhow::Result<Vec<u64>> {
    let mut out = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = match line.find('#') {
            Some(i) => &line[..i],
            None => line,
        };
        for tok in line.split_whitespace() {
            let v = parse_u64(tok)
                .with_context(|| format!("line {}: bad integer {:?}", lineno + 1, tok))?;
            out.push(v);
        }
    }
    Ok(out)
}

fn parse_u64(tok: &str) -> anyhow::Result<u64> {
    let tok = tok.replace('_', "");
    let v = match tok.strip_prefix("0x").or_else(|| tok.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16)?,
        None => tok.parse::<u64>()?,
    };
    Ok(v)
}

/// One decimal value per line.
pub fn write_ints_file(path: &str, values: &[u64]) -> anyhow::Result<()> {
    let mut s = String::with_capacity(values.len() * 8);
    for v in values {
        s.push_str(&v.to_string());
        s.push('\n');
    }
    std::fs::write(path, s).with_context(|| format!("write ints: {path}"))?;
    Ok(())
}
