//! Header-only image decoding
//!
//! Each supported encoding is a [`HeaderDecoder`] registered in a
//! [`DecoderRegistry`]. The registry sniffs the leading bytes of a stream and
//! hands it to the matching decoder, which reads only as far as the header
//! needed to report pixel dimensions.

use image::codecs::bmp::BmpDecoder;
use image::codecs::gif::GifDecoder;
use image::codecs::jpeg::JpegDecoder;
use image::codecs::png::PngDecoder;
use image::{ImageDecoder, ImageError, ImageFormat, ImageResult};
use std::io::{BufRead, Seek};
use thiserror::Error;

/// A readable, seekable byte stream positioned at the start of an image.
pub trait ImageSource: BufRead + Seek {}

impl<T: BufRead + Seek> ImageSource for T {}

/// Format identifier and declared pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHeader {
    pub format: &'static str,
    pub width: u32,
    pub height: u32,
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("unknown image format")]
    UnknownFormat,
    #[error("invalid {format} header: {source}")]
    Header {
        format: &'static str,
        #[source]
        source: ImageError,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// One image encoding the registry can recognise.
pub trait HeaderDecoder {
    /// Short identifier shown to users, e.g. "png".
    fn name(&self) -> &'static str;

    /// The signature this decoder answers to.
    fn format(&self) -> ImageFormat;

    /// Parses the header and returns `(width, height)` without touching pixel data.
    fn read_dimensions(&self, source: &mut dyn ImageSource) -> ImageResult<(u32, u32)>;
}

pub struct PngHeader;

impl HeaderDecoder for PngHeader {
    fn name(&self) -> &'static str {
        "png"
    }

    fn format(&self) -> ImageFormat {
        ImageFormat::Png
    }

    fn read_dimensions(&self, source: &mut dyn ImageSource) -> ImageResult<(u32, u32)> {
        Ok(PngDecoder::new(source)?.dimensions())
    }
}

pub struct GifHeader;

impl HeaderDecoder for GifHeader {
    fn name(&self) -> &'static str {
        "gif"
    }

    fn format(&self) -> ImageFormat {
        ImageFormat::Gif
    }

    fn read_dimensions(&self, source: &mut dyn ImageSource) -> ImageResult<(u32, u32)> {
        Ok(GifDecoder::new(source)?.dimensions())
    }
}

pub struct JpegHeader;

impl HeaderDecoder for JpegHeader {
    fn name(&self) -> &'static str {
        "jpeg"
    }

    fn format(&self) -> ImageFormat {
        ImageFormat::Jpeg
    }

    fn read_dimensions(&self, source: &mut dyn ImageSource) -> ImageResult<(u32, u32)> {
        Ok(JpegDecoder::new(source)?.dimensions())
    }
}

pub struct BmpHeader;

impl HeaderDecoder for BmpHeader {
    fn name(&self) -> &'static str {
        "bmp"
    }

    fn format(&self) -> ImageFormat {
        ImageFormat::Bmp
    }

    fn read_dimensions(&self, source: &mut dyn ImageSource) -> ImageResult<(u32, u32)> {
        Ok(BmpDecoder::new(source)?.dimensions())
    }
}

/// Dispatches a stream to the decoder registered for its signature.
pub struct DecoderRegistry {
    decoders: Vec<Box<dyn HeaderDecoder>>,
}

impl DecoderRegistry {
    /// A registry that recognises nothing until decoders are registered.
    pub fn empty() -> Self {
        Self {
            decoders: Vec::new(),
        }
    }

    /// Adds a decoder. A later registration for the same format wins.
    pub fn register(&mut self, decoder: Box<dyn HeaderDecoder>) -> &mut Self {
        self.decoders.retain(|d| d.format() != decoder.format());
        self.decoders.push(decoder);
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.decoders.iter().map(|d| d.name()).collect()
    }

    pub fn decode(&self, source: &mut dyn ImageSource) -> Result<ImageHeader, DecodeError> {
        // fill_buf peeks without consuming, so the decoder still starts at offset 0
        let format =
            image::guess_format(source.fill_buf()?).map_err(|_| DecodeError::UnknownFormat)?;

        let decoder = self
            .decoders
            .iter()
            .find(|d| d.format() == format)
            .ok_or(DecodeError::UnknownFormat)?;

        let (width, height) =
            decoder
                .read_dimensions(source)
                .map_err(|source| DecodeError::Header {
                    format: decoder.name(),
                    source,
                })?;

        Ok(ImageHeader {
            format: decoder.name(),
            width,
            height,
        })
    }
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register(Box::new(PngHeader))
            .register(Box::new(GifHeader))
            .register(Box::new(JpegHeader))
            .register(Box::new(BmpHeader));
        registry
    }
}
