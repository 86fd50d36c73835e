pub mod asset;
#[cfg(test)]
pub mod impl_fake;
pub mod impl_ffmpeg;
pub mod interface;
pub mod label_file;
pub mod video_clip;
