use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::FileReadError;

/// Read a whole file as text. Invalid UTF-8 sequences are replaced rather
/// than rejected.
///
/// With `max_bytes` set, at most `max_bytes + 1` bytes are ever read, so
/// pipes, `/proc` entries and files that grow mid-read are capped too. The
/// metadata length only serves to refuse obviously large files early.
pub fn read_content(path: &Path, max_bytes: Option<u64>) -> Result<String, FileReadError> {
    let io_err = |source| FileReadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let too_large = |size, limit| FileReadError::TooLarge {
        path: path.to_path_buf(),
        size,
        limit,
    };

    let mut file = File::open(path).map_err(io_err)?;
    let mut bytes = Vec::new();

    match max_bytes {
        Some(limit) => {
            let size = file.metadata().map_err(io_err)?.len();
            if size > limit {
                return Err(too_large(size, limit));
            }
            file.by_ref()
                .take(limit.saturating_add(1))
                .read_to_end(&mut bytes)
                .map_err(io_err)?;
            if bytes.len() as u64 > limit {
                return Err(too_large(bytes.len() as u64, limit));
            }
        }
        None => {
            file.read_to_end(&mut bytes).map_err(io_err)?;
        }
    }
    debug!(path = %path.display(), bytes = bytes.len(), "read input file");

    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}
