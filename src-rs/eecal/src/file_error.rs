use std::{io, path::Path};

use eecal_shared::error::{AsEecalError, Context};

/// A script that could not be read
#[derive(Debug)]
pub struct FileError<'a> {
    path: &'a Path,
    error: io::Error,
}

impl<'a> FileError<'a> {
    pub const fn new(path: &'a Path, error: io::Error) -> Self {
        Self { path, error }
    }
}

impl AsEecalError for FileError<'_> {
    fn message(&self) -> String {
        format!("couldn't read `{}` - {}", self.path.display(), self.error)
    }

    fn context(&self) -> Vec<Context> {
        let kind = self.error.kind();

        if kind == io::ErrorKind::NotFound {
            vec![Context::Help(
                "scripts are read relative to the current directory".to_string(),
            )]
        } else if kind == io::ErrorKind::InvalidData {
            vec![Context::Note("scripts must be valid UTF-8".to_string())]
        } else {
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_message() {
        let path = Path::new("divider.ee");
        let error = FileError::new(path, io::Error::from(io::ErrorKind::NotFound));

        assert!(error.message().starts_with("couldn't read `divider.ee` - "));
        assert_eq!(error.context().len(), 1);
    }
}
