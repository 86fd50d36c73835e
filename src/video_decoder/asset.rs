use std::path::{Path, PathBuf};

/// Files backing one numbered clip: `shapes_<index>.mp4` and its per-frame
/// labels in `shapes_<index>.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoAsset {
    pub index: usize,
    pub video_path: PathBuf,
    pub label_path: PathBuf,
}

impl VideoAsset {
    pub fn resolve(folder: &Path, index: usize) -> Self {
        Self {
            index,
            video_path: folder.join(format!("shapes_{}.mp4", index)),
            label_path: folder.join(format!("shapes_{}.txt", index)),
        }
    }
}
