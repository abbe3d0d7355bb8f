use std::io::{self, Read};

/// Reads a whole export from a file path, or from stdin when `path` is `-`.
pub fn read_source(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    let bytes = std::fs::read(path)?;
    // exports saved by spreadsheet tools often start with a BOM
    let text = String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(text.strip_prefix('\u{feff}').map(str::to_string).unwrap_or(text))
}
