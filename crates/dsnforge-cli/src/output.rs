use std::fs::{File, OpenOptions, create_dir_all};
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Write `path` through a sibling `<name>.tmp` file renamed into place.
///
/// `write` receives the temp file and hands it back once done. On error the
/// temp file is removed and any existing file at `path` is left untouched.
pub fn write_atomic<T, E>(
    path: &Path,
    write: impl FnOnce(File) -> Result<(T, File), E>,
) -> Result<T, E>
where
    E: From<io::Error>,
{
    let parent = parent_dir(path);
    if let Some(parent) = parent {
        create_dir_all(parent)?;
    }

    let tmp_path = temp_path(path)?;
    let file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&tmp_path)?;

    let value = match write(file).and_then(|(value, file)| {
        file.sync_all()?;
        Ok(value)
    }) {
        Ok(value) => value,
        Err(err) => {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(err);
        }
    };

    if let Err(err) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(err.into());
    }
    if let Some(parent) = parent {
        sync_dir(parent)?;
    }
    Ok(value)
}

pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), io::Error> {
    let data = serde_json::to_vec_pretty(value)?;
    write_atomic(path, |mut file| {
        io::Write::write_all(&mut file, &data)?;
        Ok(((), file))
    })
}

fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|parent| !parent.as_os_str().is_empty())
}

fn temp_path(path: &Path) -> io::Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid output path '{}'", path.display()),
        )
    })?;
    let tmp_name = format!("{}.tmp", file_name.to_string_lossy());
    Ok(path.with_file_name(tmp_name))
}

fn sync_dir(path: &Path) -> io::Result<()> {
    let dir = OpenOptions::new().read(true).open(path)?;
    dir.sync_all()
}
