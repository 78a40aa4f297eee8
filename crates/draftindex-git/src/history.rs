//! Last-authored timestamp lookup.

use std::fs;
use std::path::{Path, PathBuf};

use git2::{Commit, ErrorCode, Repository, Sort};
use tracing::debug;

use crate::error::{HistoryError, HistoryResult};

/// Source of last-authorship timestamps for files under version control.
///
/// The registry asks one question: when was this path last authored.
/// `None` means the path has no recorded history.
pub trait AuthoredTimestamps {
    /// Unix author time of the most recent authorship event for `path`.
    fn last_authored(&self, path: &Path) -> HistoryResult<Option<i64>>;
}

/// git2-backed provider querying the repository enclosing the scan root.
///
/// Assumes a full-history checkout; shallow clones are out of scope.
pub struct GitHistory {
    repo: Repository,
    workdir: PathBuf,
}

impl GitHistory {
    /// Discover the repository enclosing `path`.
    pub fn discover(path: impl AsRef<Path>) -> HistoryResult<Self> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|e| {
            if e.code() == ErrorCode::NotFound {
                HistoryError::NotARepo {
                    path: path.to_path_buf(),
                }
            } else {
                HistoryError::Git(e)
            }
        })?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| HistoryError::BareRepo {
                path: path.to_path_buf(),
            })?
            .to_path_buf();
        let workdir = fs::canonicalize(workdir)?;
        Ok(Self { repo, workdir })
    }

    /// Whether `commit` changed `path` relative to its first parent.
    fn touches_path(&self, commit: &Commit<'_>, path: &Path) -> HistoryResult<bool> {
        let entry = commit.tree()?.get_path(path).map(|e| e.id()).ok();
        match commit.parents().next() {
            // Initial commit: the path was touched iff it exists there.
            None => Ok(entry.is_some()),
            Some(parent) => {
                let parent_entry = parent.tree()?.get_path(path).map(|e| e.id()).ok();
                Ok(entry != parent_entry)
            }
        }
    }
}

impl AuthoredTimestamps for GitHistory {
    fn last_authored(&self, path: &Path) -> HistoryResult<Option<i64>> {
        // Aliases must dereference to the real file before the history is
        // consulted, otherwise the link itself is what gets dated.
        let resolved = fs::canonicalize(path)?;
        let relative = resolved
            .strip_prefix(&self.workdir)
            .map_err(|_| HistoryError::OutsideWorkTree {
                path: resolved.clone(),
            })?
            .to_path_buf();

        let mut revwalk = self.repo.revwalk()?;
        match revwalk.push_head() {
            Ok(()) => {}
            // An unborn branch has no history at all.
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        }
        revwalk.set_sorting(Sort::TIME)?;

        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            if self.touches_path(&commit, &relative)? {
                debug!(
                    path = %relative.display(),
                    oid = %commit.id(),
                    "found last authorship commit"
                );
                return Ok(Some(commit.author().when().seconds()));
            }
        }

        Ok(None)
    }
}
