//! Module for generating synthetic policy documents and managing the on-disk
//! fixture slot they are written to.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::RoleCount;
use crate::error::{Error, fixture_error};


/// Fixed header section: one default role with minimal rights.
const POLICY_PREAMBLE: &str = "
role default
subject /
\t\t/\t\t\th
\t\t-CAP_ALL";

/// Object/permission catalog replicated into every role section. The paths
/// approximate a realistic policy shape; no filesystem state is consulted.
const POLICY_OBJECTS: &str = "
\t\t/\t\t\t\th
\t\t/bin\t\t\t\tx
\t\t/dev\t\t\t\th
\t\t/dev/null\t\t\tw
\t\t/dev/tty\t\t\trw
\t\t/etc\t\t\t\tr
\t\t/etc/grsec\t\t\th
\t\t/etc/shadow\t\t\th
\t\t/etc/ssh\t\t\th
\t\t/home\t\t\t\t
\t\t/lib\t\t\t\trx
\t\t/lib/modules\t\t\th
\t\t/proc/meminfo\t\t\tr
\t\t/usr\t\t\t\th
\t\t/usr/bin\t\t\t
\t\t/usr/lib\t\t\trx
\t\t/usr/share\t\t\th
\t\t/usr/share/terminfo\t\tr
\t\t-CAP_ALL";

/// Renders the complete policy document for the given role count: the fixed
/// preamble followed by `roles` role sections, each tagged with a unique
/// `tmpuser<index>` label so that no two sections are textually identical.
///
/// Rendering is deterministic: the same role count always produces
/// byte-identical output.
pub fn render_policy(roles: RoleCount) -> String {
    let count = u32::from(roles);
    let mut document = String::from(POLICY_PREAMBLE);
    for index in 0..count {
        document.push_str(&format!(
            "\nrole tmpuser{index} u\nsubject /\n{POLICY_OBJECTS}\n"
        ));
    }
    document
}

/// Owned handle over the single reusable fixture slot on disk.
///
/// The slot is overwritten in place at every sweep step, so at most one
/// fixture file exists at any time. The file is removed when the handle is
/// dropped, on success and error paths alike.
#[derive(Debug)]
pub struct FixtureFile {
    path: PathBuf,
}

impl FixtureFile {
    /// Claims the fixture slot at `path`. No file is created until the first
    /// [`write_policy`](Self::write_policy) call.
    pub fn acquire(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renders the policy document for `roles` and overwrites the slot with
    /// it, truncating any previous content.
    pub fn write_policy(&self, roles: RoleCount) -> Result<(), Error> {
        let document = render_policy(roles);
        fs::write(&self.path, document).map_err(|e| fixture_error(&self.path, e))
    }
}

impl Drop for FixtureFile {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            // The slot was never written
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("failed to remove fixture {}: {e}", self.path.display()),
        }
    }
}
