//! Filesystem aliases for level-independent spec names.

use std::io;
use std::path::Path;

use tracing::{debug, warn};

use crate::registry::Registry;

/// Outcome of one alias creation attempt.
#[derive(Debug)]
pub enum AliasOutcome {
    /// The alias was created.
    Created,
    /// Something already lives at the alias path; left untouched.
    AlreadyExists,
    /// Creation failed for another reason.
    Failed(io::Error),
}

/// Create a relative symlink `<root>/<shortname>` pointing at `spec_dir`.
///
/// An existing entry at the alias path is left as-is, whatever it points
/// at, so repeated runs are idempotent.
pub fn create_alias(root: &Path, shortname: &str, spec_dir: &str) -> AliasOutcome {
    let link = root.join(shortname);
    match symlink_dir(spec_dir, &link) {
        Ok(()) => AliasOutcome::Created,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => AliasOutcome::AlreadyExists,
        Err(e) => AliasOutcome::Failed(e),
    }
}

/// Reconcile every family whose canonical name differs from its chosen
/// directory: mirror the directory's timestamp entry under the shortname
/// key, then create the alias.
///
/// Alias failures are warnings, never fatal; the registry build must not
/// abort over a single link.
pub fn reconcile_aliases(root: &Path, registry: &mut Registry) {
    let Registry { groups, timestamps } = registry;

    for (shortname, members) in groups.iter() {
        let Some(current) = members.iter().find(|record| record.current_work) else {
            continue;
        };
        if *shortname == current.dir {
            continue;
        }

        if let Some(&timestamp) = timestamps.get(&current.dir) {
            timestamps.insert(shortname.clone(), timestamp);
        }

        match create_alias(root, shortname, &current.dir) {
            AliasOutcome::Created => {
                debug!(alias = %shortname, target = %current.dir, "created alias");
            }
            AliasOutcome::AlreadyExists => {}
            AliasOutcome::Failed(e) => {
                warn!(
                    alias = %shortname,
                    target = %current.dir,
                    error = %e,
                    "failed to create alias"
                );
            }
        }
    }
}

#[cfg(unix)]
fn symlink_dir(target: &str, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink_dir(target: &str, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}
