//! Request-scoped file housekeeping.
//!
//! Each upload request owns a fresh scope: a directory for the uploaded
//! file and one for rendered gauges, both keyed by a generated identifier.
//! The upload directory is removed when the scope drops at request
//! completion. Plot directories must outlive the response — the browser
//! fetches the PNGs afterwards — so they are reclaimed by age at the start
//! of later requests instead.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, warn};
use uuid::Uuid;

use atriarisk_common::Result;

use crate::state::AppState;

/// Scope directories older than this are reclaimed by the sweep.
const SCOPE_TTL: Duration = Duration::from_secs(60 * 60);

pub struct RequestScope {
    id: String,
    upload_dir: PathBuf,
    plot_dir: PathBuf,
}

impl RequestScope {
    /// Open a scope with gauges under `plot_root`, sweeping expired scopes
    /// left by earlier (or crashed) requests first.
    pub fn open(state: &AppState, plot_root: &Path) -> Result<RequestScope> {
        sweep_expired(plot_root);
        sweep_expired(&state.upload_root);

        let id = Uuid::new_v4().to_string();
        let upload_dir = state.upload_root.join(&id);
        let plot_dir = plot_root.join(&id);
        fs::create_dir_all(&upload_dir)?;
        fs::create_dir_all(&plot_dir)?;
        debug!(scope = %id, "request scope opened");
        Ok(RequestScope { id, upload_dir, plot_dir })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    pub fn plot_dir(&self) -> &Path {
        &self.plot_dir
    }
}

impl Drop for RequestScope {
    fn drop(&mut self) {
        if self.upload_dir.exists() {
            if let Err(err) = fs::remove_dir_all(&self.upload_dir) {
                warn!(scope = %self.id, %err, "could not remove upload directory");
            }
        }
    }
}

/// Best-effort removal of scope directories past their TTL.
fn sweep_expired(root: &Path) {
    let Ok(entries) = fs::read_dir(root) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let expired = entry
            .metadata()
            .and_then(|m| m.modified())
            .ok()
            .and_then(|t| t.elapsed().ok())
            .map(|age| age > SCOPE_TTL)
            .unwrap_or(false);
        if expired {
            if let Err(err) = fs::remove_dir_all(&path) {
                warn!(path = %path.display(), %err, "could not sweep expired scope");
            }
        }
    }
}
