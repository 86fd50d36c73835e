use crate::error::DecodeError;
use crate::frame_classifier::label::ShapeLabel;
use crate::video_decoder::asset::VideoAsset;
use crate::video_decoder::label_file::read_labels;
use crate::video_decoder::video_clip::VideoClip;

#[derive(Debug, Clone, PartialEq)]
pub struct DecodedVideo {
    pub clip: VideoClip,
    pub ground_truth: Option<Vec<ShapeLabel>>,
}

pub trait VideoDecoder {
    fn decode(&self, asset: &VideoAsset) -> Result<VideoClip, DecodeError>;

    fn read_labels(&self, asset: &VideoAsset) -> Result<Vec<ShapeLabel>, DecodeError> {
        read_labels(&asset.label_path)
    }
}
