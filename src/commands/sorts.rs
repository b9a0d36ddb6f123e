use crate::sort::Sort;
use anyhow::Result;
use std::io::Write;

pub fn write_sorts<W: Write>(writer: &mut W) -> Result<()> {
    for sort in Sort::ALL {
        writeln!(writer, "{:<22} {}", sort.name(), sort.description())?;
    }
    Ok(())
}

pub fn list_sorts() -> Result<()> {
    write_sorts(&mut std::io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_sorts_lists_every_sort() {
        let mut buffer = Vec::new();
        write_sorts(&mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(output.lines().count(), Sort::ALL.len());
        assert!(output.lines().any(|line| {
            line.starts_with("type-variable-bridge") && line.ends_with("isTypeVariableBridge()")
        }));
    }
}
