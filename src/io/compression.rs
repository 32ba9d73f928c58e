//! Transparent decompression for the text table readers.
//!
//! Detection checks the file extension first (`.gz`, `.zst`) and falls back
//! to the stream's magic bytes. Codecs are compiled in by feature flag
//! (`compression-gzip`, `compression-zstd`); with none enabled every stream
//! passes through untouched.

use anyhow::{Context, Result};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// A supported compression format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Gzip,
    Zstd,
}

impl Codec {
    /// Codecs enabled in this build.
    const ENABLED: &'static [Codec] = &[
        #[cfg(feature = "compression-gzip")]
        Codec::Gzip,
        #[cfg(feature = "compression-zstd")]
        Codec::Zstd,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Gzip => "gzip",
            Self::Zstd => "zstd",
        }
    }

    fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Gzip => &[".gz", ".gzip"],
            Self::Zstd => &[".zst", ".zstd"],
        }
    }

    fn magic(self) -> &'static [u8] {
        match self {
            Self::Gzip => &[0x1f, 0x8b],
            Self::Zstd => &[0x28, 0xb5, 0x2f, 0xfd],
        }
    }

    /// Codec implied by the path's final extension, if enabled.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.to_string_lossy().to_lowercase();
        Self::ENABLED
            .iter()
            .copied()
            .find(|c| c.extensions().iter().any(|ext| name.ends_with(ext)))
    }

    fn from_magic(buf: &[u8]) -> Option<Self> {
        Self::ENABLED
            .iter()
            .copied()
            .find(|c| buf.starts_with(c.magic()))
    }

    fn wrap(self, reader: Box<dyn Read>) -> std::io::Result<Box<dyn Read>> {
        match self {
            #[cfg(feature = "compression-gzip")]
            Self::Gzip => Ok(Box::new(flate2::read::MultiGzDecoder::new(reader))),
            #[cfg(feature = "compression-zstd")]
            Self::Zstd => Ok(Box::new(zstd::stream::read::Decoder::new(reader)?)),
            #[allow(unreachable_patterns)]
            other => Err(std::io::Error::other(format!(
                "{} support is not compiled in",
                other.name()
            ))),
        }
    }
}

/// File name with any known compression suffix removed, lowercased.
///
/// `entities.jsonl.gz` becomes `entities.jsonl`, which lets callers pick the
/// table format from the inner extension.
#[must_use]
pub fn strip_compression_suffix(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    [Codec::Gzip, Codec::Zstd]
        .iter()
        .flat_map(|c| c.extensions())
        .find_map(|ext| name.strip_suffix(ext))
        .map_or_else(|| name.clone(), str::to_string)
}

/// Wrap `reader` with a decompressor when the path or content calls for one.
///
/// # Errors
/// Returns an error if the decompressor cannot be initialized.
pub fn auto_detect_reader<R: Read + 'static>(
    reader: R,
    path_hint: impl AsRef<Path>,
) -> Result<Box<dyn Read>> {
    if let Some(codec) = Codec::from_path(path_hint.as_ref()) {
        return codec
            .wrap(Box::new(reader))
            .with_context(|| format!("wrap reader with {} codec", codec.name()));
    }
    let mut buffered = BufReader::new(reader);
    let sniffed = buffered.fill_buf().ok().and_then(Codec::from_magic);
    match sniffed {
        Some(codec) => codec
            .wrap(Box::new(buffered))
            .with_context(|| format!("wrap reader with {} codec", codec.name())),
        None => Ok(Box::new(buffered)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_is_stripped() {
        assert_eq!(strip_compression_suffix(Path::new("a/b/X.JSONL.gz")), "x.jsonl");
        assert_eq!(strip_compression_suffix(Path::new("x.csv.zst")), "x.csv");
        assert_eq!(strip_compression_suffix(Path::new("x.parquet")), "x.parquet");
    }

    #[test]
    fn plain_stream_passes_through() -> Result<()> {
        let mut out = String::new();
        auto_detect_reader(std::io::Cursor::new(b"plain text".to_vec()), "x.txt")?
            .read_to_string(&mut out)?;
        assert_eq!(out, "plain text");
        Ok(())
    }

    #[cfg(feature = "compression-gzip")]
    #[test]
    fn gzip_is_sniffed_without_extension() -> Result<()> {
        use flate2::Compression;
        use flate2::write::GzEncoder;
        use std::io::Write;

        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(b"hello")?;
        let bytes = enc.finish()?;

        let mut out = String::new();
        auto_detect_reader(std::io::Cursor::new(bytes), "no_extension")?.read_to_string(&mut out)?;
        assert_eq!(out, "hello");
        Ok(())
    }
}
