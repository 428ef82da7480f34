//! Batch output of generated values.

use std::io::{self, Write};

use zeroize::{Zeroize, Zeroizing};

use super::words::WordSource;
use super::{GenerationConfig, generate_with};
use crate::Result;
use crate::rand::RandomSource;

const BUF_CAPACITY: usize = 8 * 1024;

/// Buffered writer that wipes its buffer after every flush and on drop.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(BUF_CAPACITY),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            let res = self.inner.write_all(&self.buf);
            self.buf.zeroize();
            res?;
        }
        Ok(())
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > BUF_CAPACITY {
            self.flush_buf()?;
        }
        if data.len() >= BUF_CAPACITY {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
        self.buf.zeroize();
    }
}

/// Generate `count` values, one per line, into `out`.
pub fn write_batch<O, R, S>(
    config: &GenerationConfig,
    count: usize,
    rng: &mut R,
    words: &S,
    out: &mut O,
) -> Result<()>
where
    O: Write,
    R: RandomSource + ?Sized,
    S: WordSource + ?Sized,
{
    let mut line: Vec<u8> = Vec::new();
    for _ in 0..count {
        let value = generate_with(config, rng, words)?;
        line.extend_from_slice(value.as_str().as_bytes());
        line.push(b'\n');
        let res = out.write_all(&line);
        line.zeroize();
        res?;
    }
    out.flush()?;
    Ok(())
}

/// Generate `count` values joined by newlines, for the clipboard.
pub fn batch_to_string<R, S>(
    config: &GenerationConfig,
    count: usize,
    rng: &mut R,
    words: &S,
) -> Result<Zeroizing<String>>
where
    R: RandomSource + ?Sized,
    S: WordSource + ?Sized,
{
    let mut joined = Zeroizing::new(String::new());
    for i in 0..count {
        if i > 0 {
            joined.push('\n');
        }
        let value = generate_with(config, rng, words)?;
        joined.push_str(value.as_str());
    }
    Ok(joined)
}
