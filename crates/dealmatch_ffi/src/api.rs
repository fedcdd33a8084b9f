//! FFI use-case API for UI-facing picker calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to the render adapter via FRB.
//! - Keep session state behind an opaque id; hosts never hold Rust objects.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every response carries `ok` plus a human-readable message.
//! - One session id maps to exactly one mounted picker form.

use dealmatch_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    PickerSession, SelectionFlag, TaxonomyNode,
};
use log::info;
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

static SESSIONS: OnceLock<Mutex<HashMap<String, PickerSession>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope for picker command flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl PickerActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Response envelope for session creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOpenResponse {
    /// Whether the session was created.
    pub ok: bool,
    /// Opaque session id for subsequent calls.
    pub session_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

/// Response envelope for serialized path output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerPathsResponse {
    /// Whether the session was found.
    pub ok: bool,
    /// Flat path strings in taxonomy document order.
    pub paths: Vec<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

/// Response envelope for hydration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerHydrateResponse {
    /// Whether the session was found.
    pub ok: bool,
    /// How many supplied strings resolved against the taxonomy.
    pub applied: u32,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

/// Response envelope for filtered tree views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerFilterResponse {
    /// Whether the session was found and the view serialized.
    pub ok: bool,
    /// Filtered taxonomy as a JSON array of nodes.
    pub tree_json: String,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

/// Opens one picker session over provider taxonomy JSON.
///
/// `kind` selects the shipped configuration:
/// `geography | geography_single | industry | industry_single`.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics.
/// - Returns an opaque session id on success.
#[flutter_rust_bridge::frb(sync)]
pub fn picker_open(kind: String, taxonomy_json: String) -> PickerOpenResponse {
    let roots: Vec<TaxonomyNode> = match serde_json::from_str(&taxonomy_json) {
        Ok(roots) => roots,
        Err(err) => {
            return PickerOpenResponse {
                ok: false,
                session_id: None,
                message: format!("picker_open failed: malformed taxonomy JSON: {err}"),
            };
        }
    };

    let session = match kind.trim() {
        "geography" => PickerSession::geography(roots),
        "geography_single" => PickerSession::geography_single(roots),
        "industry" => PickerSession::industry(roots),
        "industry_single" => PickerSession::industry_single(roots),
        other => {
            return PickerOpenResponse {
                ok: false,
                session_id: None,
                message: format!("picker_open failed: unknown picker kind `{other}`"),
            };
        }
    };

    match session {
        Ok(session) => {
            let session_id = session.session_id().to_string();
            match sessions().lock() {
                Ok(mut registry) => {
                    registry.insert(session_id.clone(), session);
                    info!(
                        "event=picker_open module=ffi status=ok session={session_id} kind={}",
                        kind.trim()
                    );
                    PickerOpenResponse {
                        ok: true,
                        session_id: Some(session_id),
                        message: "Picker session opened.".to_string(),
                    }
                }
                Err(_) => PickerOpenResponse {
                    ok: false,
                    session_id: None,
                    message: "picker_open failed: session registry unavailable".to_string(),
                },
            }
        }
        Err(err) => PickerOpenResponse {
            ok: false,
            session_id: None,
            message: format!("picker_open failed: {err}"),
        },
    }
}

/// Applies one checkbox toggle at a named tier.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics; unknown tiers/nodes are silent no-ops inside the engine.
#[flutter_rust_bridge::frb(sync)]
pub fn picker_toggle(session_id: String, tier: String, node_id: String) -> PickerActionResponse {
    match with_session(&session_id, |session| {
        session.toggle(tier.trim(), node_id.trim());
    }) {
        Ok(()) => PickerActionResponse::success("Toggle applied."),
        Err(err) => PickerActionResponse::failure(format!("picker_toggle failed: {err}")),
    }
}

/// Selects every node in the session's taxonomy.
///
/// # FFI contract
/// - Sync call, in-memory execution; no-op for single-select sessions.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn picker_select_all(session_id: String) -> PickerActionResponse {
    match with_session(&session_id, |session| session.select_all()) {
        Ok(()) => PickerActionResponse::success("All nodes selected."),
        Err(err) => PickerActionResponse::failure(format!("picker_select_all failed: {err}")),
    }
}

/// Clears every node in the session's taxonomy.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn picker_clear_all(session_id: String) -> PickerActionResponse {
    match with_session(&session_id, |session| session.clear_all()) {
        Ok(()) => PickerActionResponse::success("All nodes cleared."),
        Err(err) => PickerActionResponse::failure(format!("picker_clear_all failed: {err}")),
    }
}

/// Serializes current selection into backend path strings.
///
/// # FFI contract
/// - Sync call, in-memory execution; output is deterministic per state.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn picker_paths(session_id: String) -> PickerPathsResponse {
    match with_session(&session_id, |session| session.selected_paths()) {
        Ok(paths) => PickerPathsResponse {
            ok: true,
            paths,
            message: "Paths serialized.".to_string(),
        },
        Err(err) => PickerPathsResponse {
            ok: false,
            paths: Vec::new(),
            message: format!("picker_paths failed: {err}"),
        },
    }
}

/// Loads previously persisted path strings into a session.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Stale strings are skipped, never an error.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn picker_hydrate(session_id: String, paths: Vec<String>) -> PickerHydrateResponse {
    match with_session(&session_id, |session| session.hydrate(&paths)) {
        Ok(applied) => PickerHydrateResponse {
            ok: true,
            applied: applied as u32,
            message: format!("Hydrated {applied} of {} path(s).", paths.len()),
        },
        Err(err) => PickerHydrateResponse {
            ok: false,
            applied: 0,
            message: format!("picker_hydrate failed: {err}"),
        },
    }
}

/// Deselects the node behind one previously-emitted path string.
///
/// # FFI contract
/// - Sync call, in-memory execution; unresolvable paths are no-ops.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn picker_remove_path(session_id: String, path: String) -> PickerActionResponse {
    match with_session(&session_id, |session| session.remove_path(path.trim())) {
        Ok(()) => PickerActionResponse::success("Path removed."),
        Err(err) => PickerActionResponse::failure(format!("picker_remove_path failed: {err}")),
    }
}

/// Returns one node's derived checkbox condition.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Returns `selected|mixed|unselected` in the message on success.
#[flutter_rust_bridge::frb(sync)]
pub fn picker_flag(session_id: String, node_id: String) -> PickerActionResponse {
    match with_session(&session_id, |session| session.flag(node_id.trim())) {
        Ok(flag) => PickerActionResponse::success(flag_label(flag)),
        Err(err) => PickerActionResponse::failure(format!("picker_flag failed: {err}")),
    }
}

/// Returns a filtered taxonomy view for a search term as JSON.
///
/// # FFI contract
/// - Sync call, in-memory execution; selection state is untouched.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn picker_filter(session_id: String, term: String) -> PickerFilterResponse {
    let filtered = match with_session(&session_id, |session| session.filtered_tree(&term)) {
        Ok(filtered) => filtered,
        Err(err) => {
            return PickerFilterResponse {
                ok: false,
                tree_json: String::new(),
                message: format!("picker_filter failed: {err}"),
            };
        }
    };

    match serde_json::to_string(&filtered) {
        Ok(tree_json) => PickerFilterResponse {
            ok: true,
            tree_json,
            message: "Filtered view serialized.".to_string(),
        },
        Err(err) => PickerFilterResponse {
            ok: false,
            tree_json: String::new(),
            message: format!("picker_filter failed: {err}"),
        },
    }
}

/// Closes one picker session and drops its state.
///
/// # FFI contract
/// - Sync call; closing an unknown session id reports failure, not panic.
#[flutter_rust_bridge::frb(sync)]
pub fn picker_close(session_id: String) -> PickerActionResponse {
    let mut registry = match sessions().lock() {
        Ok(registry) => registry,
        Err(_) => {
            return PickerActionResponse::failure(
                "picker_close failed: session registry unavailable",
            );
        }
    };
    match registry.remove(session_id.trim()) {
        Some(_) => {
            info!(
                "event=picker_close module=ffi status=ok session={}",
                session_id.trim()
            );
            PickerActionResponse::success("Picker session closed.")
        }
        None => PickerActionResponse::failure(format!(
            "picker_close failed: unknown session `{session_id}`"
        )),
    }
}

fn sessions() -> &'static Mutex<HashMap<String, PickerSession>> {
    SESSIONS.get_or_init(|| Mutex::new(HashMap::new()))
}

fn with_session<T>(
    session_id: &str,
    f: impl FnOnce(&mut PickerSession) -> T,
) -> Result<T, String> {
    let mut registry = sessions()
        .lock()
        .map_err(|_| "session registry unavailable".to_string())?;
    let session = registry
        .get_mut(session_id.trim())
        .ok_or_else(|| format!("unknown session `{session_id}`"))?;
    Ok(f(session))
}

fn flag_label(flag: SelectionFlag) -> &'static str {
    match flag {
        SelectionFlag::Selected => "selected",
        SelectionFlag::Mixed => "mixed",
        SelectionFlag::Unselected => "unselected",
    }
}
