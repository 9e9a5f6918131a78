//! Reader for the IDX file format used by the handwritten-digit dataset.
//!
//! Label files carry magic `2049` followed by a count and one byte per label.
//! Image files carry magic `2051`, a count, rows and columns, then
//! `count * rows * cols` pixel bytes. All header fields are big-endian `u32`.
//! Files ending in `.gz` are decompressed transparently.

use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf}
};

use byteorder::{BigEndian, ReadBytesExt};
use flate2::read::GzDecoder;
use tracing::debug;

use crate::error::{Error, Result};

const LABEL_MAGIC: u32 = 2049;
const IMAGE_MAGIC: u32 = 2051;

/// Upper bound on buffer space reserved from header counts before any
/// payload has been read.
const PREALLOC_LIMIT: usize = 1 << 16;

/// # Overview
///
/// Decoded image file: one flattened row-major pixel vector per image,
/// scaled from `0..=255` to `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Images {
    pub rows:   usize,
    pub cols:   usize,
    pub pixels: Vec<Vec<f64>>
}

impl Images {
    #[must_use]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

/// Which half of the digit dataset to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    Train,
    Test
}

impl Split {
    fn prefix(self) -> &'static str {
        match self {
            Self::Train => "train",
            Self::Test => "t10k"
        }
    }
}

fn read_header<R: Read>(reader: &mut R, expected: u32) -> Result<usize> {
    let magic = reader.read_u32::<BigEndian>()?;
    if magic != expected {
        return Err(Error::InvalidIdx {
            reason: format!("magic {magic}, expected {expected}")
        });
    }
    Ok(reader.read_u32::<BigEndian>()? as usize)
}

/// Reads exactly `len` bytes, growing the buffer only as data arrives.
fn read_payload<R: Read>(reader: &mut R, len: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(len.min(PREALLOC_LIMIT));
    reader.by_ref().take(len as u64).read_to_end(&mut buf)?;
    if buf.len() != len {
        return Err(Error::Io {
            message: format!("unexpected end of file: expected {len} bytes, got {}", buf.len())
        });
    }
    Ok(buf)
}

/// # Overview
///
/// Reads an IDX label file.
pub fn read_labels<R: Read>(mut reader: R) -> Result<Vec<u8>> {
    let count = read_header(&mut reader, LABEL_MAGIC)?;
    read_payload(&mut reader, count)
}

/// # Overview
///
/// Reads an IDX image file.
pub fn read_images<R: Read>(mut reader: R) -> Result<Images> {
    let count = read_header(&mut reader, IMAGE_MAGIC)?;
    let rows = reader.read_u32::<BigEndian>()? as usize;
    let cols = reader.read_u32::<BigEndian>()? as usize;
    let size = rows.checked_mul(cols).ok_or_else(|| Error::InvalidIdx {
        reason: format!("image size {rows}x{cols} overflows")
    })?;
    if size == 0 && count > 0 {
        return Err(Error::InvalidIdx {
            reason: format!("{count} images of size {rows}x{cols}")
        });
    }

    let mut pixels = Vec::with_capacity(count.min(PREALLOC_LIMIT));
    for _ in 0..count {
        let buf = read_payload(&mut reader, size)?;
        pixels.push(buf.iter().map(|&b| f64::from(b) / 255.0).collect());
    }
    Ok(Images {
        rows,
        cols,
        pixels
    })
}

/// # Overview
///
/// Opens a file for reading, gunzipping it when the name ends in `.gz`.
pub fn open(path: &Path) -> Result<Box<dyn Read>> {
    let file = BufReader::new(File::open(path).map_err(|e| Error::Io {
        message: format!("{}: {e}", path.display())
    })?);
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(GzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}

/// # Overview
///
/// Pairs every image with its raw class label.
pub fn load_digits(images: &Path, labels: &Path) -> Result<Vec<(Vec<f64>, u8)>> {
    let images = read_images(open(images)?)?;
    let labels = read_labels(open(labels)?)?;
    if images.len() != labels.len() {
        return Err(Error::InvalidIdx {
            reason: format!("{} images but {} labels", images.len(), labels.len())
        });
    }
    debug!(count = labels.len(), rows = images.rows, cols = images.cols, "loaded digits");
    Ok(images.pixels.into_iter().zip(labels).collect())
}

/// # Overview
///
/// Loads one split from `dir` using the standard file names
/// (`train-images-idx3-ubyte`, `t10k-labels-idx1-ubyte`, ...), preferring the
/// `.gz` variant when present.
pub fn load_split(dir: &Path, split: Split) -> Result<Vec<(Vec<f64>, u8)>> {
    let images = locate(dir, &format!("{}-images-idx3-ubyte", split.prefix()));
    let labels = locate(dir, &format!("{}-labels-idx1-ubyte", split.prefix()));
    load_digits(&images, &labels)
}

fn locate(dir: &Path, stem: &str) -> PathBuf {
    let gz = dir.join(format!("{stem}.gz"));
    if gz.exists() { gz } else { dir.join(stem) }
}
