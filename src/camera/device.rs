//! Camera device enumeration.

use nokhwa::query;
use nokhwa::utils::ApiBackend;

use super::types::{CameraError, CameraInfo};

/// List all available camera devices, ordered by index.
///
/// No cameras is an empty list, not an error.
pub fn list_devices() -> Result<Vec<CameraInfo>, CameraError> {
    let devices = query(ApiBackend::Auto).map_err(|e| CameraError::QueryFailed(e.to_string()))?;

    let mut infos: Vec<CameraInfo> = devices
        .into_iter()
        .map(|d| CameraInfo {
            index: d.index().as_index().unwrap_or(0),
            name: d.human_name(),
            description: d.description().to_string(),
        })
        .collect();
    infos.sort_by_key(|info| info.index);
    Ok(infos)
}
