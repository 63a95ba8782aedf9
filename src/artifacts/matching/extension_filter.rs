use std::path::Path;

/// Case-insensitive file extension filter applied while scanning folders.
///
/// An empty filter accepts every file. Raw user input is normalized once
/// at construction: lowercased and prefixed with a dot when missing, so
/// `-e txt .LOG` filters for `.txt` and `.log`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter {
    suffixes: Vec<String>,
}

impl ExtensionFilter {
    pub fn new(raw: &[String]) -> Self {
        let suffixes = raw
            .iter()
            .map(|ext| {
                let ext = ext.to_lowercase();
                if ext.starts_with('.') {
                    ext
                } else {
                    format!(".{ext}")
                }
            })
            .collect();

        ExtensionFilter { suffixes }
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    pub fn accepts(&self, path: &Path) -> bool {
        if self.suffixes.is_empty() {
            return true;
        }

        match path.extension() {
            Some(ext) => {
                let suffix = format!(".{}", ext.to_string_lossy().to_lowercase());
                self.suffixes.contains(&suffix)
            }
            None => false,
        }
    }
}
