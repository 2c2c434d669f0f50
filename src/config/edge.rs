use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct EdgeToolConfig {
    pub input: FrameSource,
    pub output: EdgeOutputConfig,
}

/// Where the NV21 frame comes from.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FrameSource {
    /// Still image (PNG/JPEG) encoded to NV21 before filtering.
    Image { path: PathBuf },
    /// Raw NV21 dump as captured from the camera.
    Nv21 {
        path: PathBuf,
        width: u32,
        height: u32,
    },
}

#[derive(Debug, Deserialize)]
pub struct EdgeOutputConfig {
    #[serde(rename = "edge_image")]
    pub edge_image: PathBuf,
    #[serde(default)]
    pub summary_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<EdgeToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn parse_config(data: &str) -> Result<EdgeToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}
