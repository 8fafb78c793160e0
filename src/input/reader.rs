//! Line-oriented CIDR list parsing.
//!
//! One `address/prefix` per line. Blank lines and lines starting with `#`
//! are skipped.

use super::ListKind;
use crate::error::{Error, NetworkError, Result};
use crate::models::{Network, NetworkSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse every network in `reader`. The first bad line aborts the read.
///
/// # Arguments
/// * `reader` - The list text
/// * `list` - Which list is being read, used in error messages
///
/// # Returns
/// * `Ok(NetworkSet)` - The de-duplicated networks
/// * `Err(Error::Parse)` - Naming the bad line
pub fn read_networks<R: BufRead>(mut reader: R, list: ListKind) -> Result<NetworkSet> {
    let mut nets = NetworkSet::new();
    let mut buf = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf).map_err(|source| Error::Io {
            list,
            path: "<input>".to_string(),
            source,
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;
        let line = std::str::from_utf8(&buf).map_err(|_| {
            let text = String::from_utf8_lossy(&buf).trim().to_string();
            Error::Parse {
                list,
                line_no,
                line: text.clone(),
                source: NetworkError::NotUtf8(text),
            }
        })?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let net: Network = line.parse().map_err(|source| Error::Parse {
            list,
            line_no,
            line: line.to_string(),
            source,
        })?;
        if !nets.insert(net) {
            log::debug!("{list} list: duplicate {net} on line {line_no}");
        }
    }
    log::info!("Read {} {list} networks", nets.len());
    Ok(nets)
}

/// Open `path` and parse it with [`read_networks`].
pub fn read_network_file<P: AsRef<Path>>(path: P, list: ListKind) -> Result<NetworkSet> {
    let path = path.as_ref();
    let io_err = |source| Error::Io {
        list,
        path: path.display().to_string(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    log::info!("Reading {list} list from {}", path.display());
    match read_networks(BufReader::new(file), list) {
        Err(Error::Io { source, .. }) => Err(io_err(source)),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_skips_blank_and_comment_lines() {
        let text = "# header\n\n10.0.0.0/8\n   \n  # indented comment\n192.168.0.0/16\n";
        let nets = read_networks(Cursor::new(text), ListKind::Include).unwrap();
        let v: Vec<String> = nets.iter().map(|n| n.to_string()).collect();
        assert_eq!(v, vec!["10.0.0.0/8", "192.168.0.0/16"]);
    }

    #[test]
    fn test_trims_and_dedups() {
        let text = "  10.0.0.0/8  \n10.0.0.0/8\r\n2001:db8::/32\n";
        let nets = read_networks(Cursor::new(text), ListKind::Include).unwrap();
        assert_eq!(nets.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let nets = read_networks(Cursor::new(""), ListKind::Exclude).unwrap();
        assert!(nets.is_empty());
    }

    #[test]
    fn test_bad_line_names_list_and_line() {
        let text = "10.0.0.0/8\n# ok\n10.0.0.1/24\n11.0.0.0/8\n";
        let err = read_networks(Cursor::new(text), ListKind::Exclude).unwrap_err();
        match err {
            Error::Parse {
                list,
                line_no,
                line,
                source,
            } => {
                assert_eq!(list, ListKind::Exclude);
                assert_eq!(line_no, 3);
                assert_eq!(line, "10.0.0.1/24");
                assert_eq!(source, NetworkError::HostBitsSet("10.0.0.1/24".into()));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_missing_prefix_is_error() {
        let err = read_networks(Cursor::new("1.2.3.4\n"), ListKind::Include).unwrap_err();
        assert!(matches!(
            err,
            Error::Parse {
                source: NetworkError::MissingPrefix(_),
                ..
            }
        ));
    }

    #[test]
    fn test_non_utf8_line_names_line() {
        let text: &[u8] = b"10.0.0.0/8\n# comment\n10.\xff.0.0/16\n11.0.0.0/8\n";
        let err = read_networks(Cursor::new(text), ListKind::Include).unwrap_err();
        match err {
            Error::Parse {
                list,
                line_no,
                line,
                source,
            } => {
                assert_eq!(list, ListKind::Include);
                assert_eq!(line_no, 3);
                assert_eq!(line, "10.\u{FFFD}.0.0/16");
                assert!(matches!(source, NetworkError::NotUtf8(_)));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_last_line_without_newline() {
        let text = "10.0.0.0/8\n192.168.0.0/16";
        let nets = read_networks(Cursor::new(text), ListKind::Include).unwrap();
        assert_eq!(nets.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let err = read_network_file("does/not/exist.txt", ListKind::Include).unwrap_err();
        match err {
            Error::Io { list, path, .. } => {
                assert_eq!(list, ListKind::Include);
                assert_eq!(path, "does/not/exist.txt");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
