use std::path::PathBuf;

use nb_scrappers::DigestPipeline;

/// Shared state for the viewer: the one pipeline instance both surfaces
/// use, plus the configured heatmap image paths.
pub struct AppState {
    pub pipeline: DigestPipeline,
    pub heatmap_images: Vec<PathBuf>,
}

impl AppState {
    pub fn new(pipeline: DigestPipeline, heatmap_images: Vec<PathBuf>) -> Self {
        Self {
            pipeline,
            heatmap_images,
        }
    }
}
