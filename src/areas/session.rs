use crate::areas::workspace::Workspace;
use crate::artifacts::core::ConfigError;
use crate::artifacts::diff::diff_result::DiffResult;
use crate::artifacts::matching::extension_filter::ExtensionFilter;
use crate::artifacts::render::hex_dump::DumpMode;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    File,
    Directory,
}

/// One side of a comparison: an absolute path known to be a plain file
/// or a folder.
#[derive(Debug, Clone)]
pub struct Target {
    path: PathBuf,
    kind: TargetKind,
}

impl Target {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let path = path
            .canonicalize()
            .map_err(|_| ConfigError::new(format!("path does not exist: {}", path.display())))?;

        let kind = if path.is_dir() {
            TargetKind::Directory
        } else if path.is_file() {
            TargetKind::File
        } else {
            return Err(ConfigError::new(format!(
                "path is neither a file nor a folder: {}",
                path.display()
            ))
            .into());
        };

        Ok(Target { path, kind })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> TargetKind {
        self.kind
    }
}

#[derive(Debug, Clone)]
pub struct CompareOptions {
    pub extensions: ExtensionFilter,
    pub recursive: bool,
    pub max_display_bytes: usize,
    pub side_by_side: bool,
    pub generate_html: bool,
    pub html_output: PathBuf,
    pub template_path: PathBuf,
    pub dump_mode: DumpMode,
}

impl Default for CompareOptions {
    fn default() -> Self {
        CompareOptions {
            extensions: ExtensionFilter::default(),
            recursive: true,
            max_display_bytes: 512,
            side_by_side: false,
            generate_html: false,
            html_output: PathBuf::from("comparison_report.html"),
            template_path: PathBuf::from("template_report.html"),
            dump_mode: DumpMode::Plain,
        }
    }
}

/// An in-flight comparison run.
///
/// Owns the two targets, the options, a workspace per root, the output
/// writer and the ordered result sequence. Results are appended in the
/// order pairs are compared, which is lexicographic by relative path.
pub struct Session {
    target_a: Target,
    target_b: Target,
    options: CompareOptions,
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace_a: Workspace,
    workspace_b: Workspace,
    results: Vec<DiffResult>,
}

impl Session {
    /// Fails with [`ConfigError`] when one target is a file and the
    /// other a folder; nothing is scanned in that case.
    pub fn new(
        target_a: Target,
        target_b: Target,
        options: CompareOptions,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        if target_a.kind() != target_b.kind() {
            return Err(ConfigError::new(
                "cannot compare a file with a folder; both paths must be the same kind",
            )
            .into());
        }

        let workspace_a = Workspace::new(target_a.path().to_path_buf().into_boxed_path());
        let workspace_b = Workspace::new(target_b.path().to_path_buf().into_boxed_path());

        Ok(Session {
            target_a,
            target_b,
            options,
            writer: RefCell::new(writer),
            workspace_a,
            workspace_b,
            results: Vec::new(),
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn target_a(&self) -> &Target {
        &self.target_a
    }

    pub fn target_b(&self) -> &Target {
        &self.target_b
    }

    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    pub fn workspace_a(&self) -> &Workspace {
        &self.workspace_a
    }

    pub fn workspace_b(&self) -> &Workspace {
        &self.workspace_b
    }

    pub fn is_file_comparison(&self) -> bool {
        self.target_a.kind() == TargetKind::File
    }

    pub fn results(&self) -> &[DiffResult] {
        &self.results
    }

    pub fn push_result(&mut self, result: DiffResult) {
        self.results.push(result);
    }
}
