use crate::error::DecodeError;
use crate::frame_classifier::label::ShapeLabel;
use std::path::Path;

pub fn read_labels(path: &Path) -> Result<Vec<ShapeLabel>, DecodeError> {
    if !path.exists() {
        return Err(DecodeError::MissingFile(path.to_path_buf()));
    }

    let text =
        std::fs::read_to_string(path).map_err(|e| DecodeError::Io(path.to_path_buf(), e))?;

    parse_labels(&text)
}

/// One row per frame; the first comma separated field is the class index.
pub fn parse_labels(text: &str) -> Result<Vec<ShapeLabel>, DecodeError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(number, line)| {
            let field = line.split(',').next().unwrap_or_default().trim();

            let index = field.parse::<usize>().map_err(|e| DecodeError::Label {
                line: number + 1,
                reason: format!("{:?}: {}", field, e),
            })?;

            ShapeLabel::from_index(index).ok_or_else(|| DecodeError::Label {
                line: number + 1,
                reason: format!("unknown class {}", index),
            })
        })
        .collect()
}
