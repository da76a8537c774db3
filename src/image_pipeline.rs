use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbaImage};

use crate::camera::Frame;
use crate::model::ImagePayload;

const JPEG_QUALITY: u8 = 90;
const JPEG_MIME: &str = "image/jpeg";

pub struct FramePipeline;

impl FramePipeline {
    /// Encodes a captured RGBA frame as the JPEG payload sent for analysis.
    pub fn encode_jpeg(frame: Frame) -> Result<ImagePayload, String> {
        let Frame {
            width,
            height,
            rgba,
        } = frame;

        if width == 0 || height == 0 {
            return Err(format!("Captured frame has no pixels ({width}x{height})"));
        }

        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(format!(
                "RGBA buffer length {} does not match {width}x{height} frame ({expected} bytes)",
                rgba.len()
            ));
        }

        let image = RgbaImage::from_raw(width, height, rgba)
            .ok_or_else(|| String::from("RGBA buffer could not be wrapped as an image"))?;
        let rgb = DynamicImage::ImageRgba8(image).to_rgb8();

        let mut jpeg = Vec::new();
        JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY)
            .encode_image(&rgb)
            .map_err(|err| format!("Failed to encode captured frame: {err}"))?;

        Ok(ImagePayload::new(jpeg, JPEG_MIME))
    }
}
